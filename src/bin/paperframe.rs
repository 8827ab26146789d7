use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "paperframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the captioned frame and export it as webp/jpeg/png.
    Export(ExportArgs),
    /// Write the normalized 4:3 photo as a PNG preview.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input photo path.
    #[arg(long)]
    photo: PathBuf,

    /// Caption font (.ttf/.otf). Defaults to a discovered system font.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Load all frame parameters from a JSON file instead of the flags
    /// below.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Center caption line.
    #[arg(long, default_value = "우리집 도서관")]
    title: String,

    /// Upper caption line.
    #[arg(long, default_value = "Reading Together, Growing Together")]
    subtitle: String,

    /// Title color: orange, brown, navy, pink, or black.
    #[arg(long, default_value = "pink")]
    color: String,

    /// Output side in pixels: 400, 800, or 1200.
    #[arg(long, default_value_t = 1200)]
    size: u32,

    /// Output format: webp, jpeg, or png.
    #[arg(long, default_value = "webp")]
    format: String,

    /// Override the title-derived file name (without extension).
    #[arg(long)]
    name: Option<String>,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input photo path.
    #[arg(long)]
    photo: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let params = match &args.params {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read params '{}'", path.display()))?;
            paperframe::FrameParams::from_json(&json)?
        }
        None => {
            let mut params = paperframe::FrameParams {
                title: args.title.clone(),
                subtitle: args.subtitle.clone(),
                title_color: paperframe::TitleColor::parse(&args.color)?,
                output_size: paperframe::OutputSize::try_from(args.size)?,
                output_format: paperframe::OutputFormat::parse(&args.format)?,
                file_name: paperframe::FileNameField::Derived,
            };
            if let Some(name) = &args.name {
                params.set_file_name(name.clone());
            }
            params
        }
    };

    let photo_bytes = std::fs::read(&args.photo)
        .with_context(|| format!("read photo '{}'", args.photo.display()))?;

    let font = match &args.font {
        Some(path) => paperframe::PreparedFont::from_path(path)?,
        None => {
            let path = paperframe::find_system_font()
                .context("no usable system font found; pass --font")?;
            paperframe::PreparedFont::from_path(&path)?
        }
    };

    let export = paperframe::render_export(&photo_bytes, &params, &font, &args.out_dir)?;
    eprintln!("wrote {}", export.path.display());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let photo_bytes = std::fs::read(&args.photo)
        .with_context(|| format!("read photo '{}'", args.photo.display()))?;
    let photo = paperframe::render_preview(&photo_bytes)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let rgba = photo.into_rgba();
    image::save_buffer_with_format(
        &args.out,
        rgba.as_raw(),
        rgba.width(),
        rgba.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
