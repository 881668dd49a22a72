use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use storyboard::ResizeFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "storyboard", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a storyboard described by a layout JSON file.
    Render(RenderArgs),
    /// Render the built-in example tree `Row[A, Column[Row[A, B], C], B]`.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input layout JSON. Image paths are resolved relative to its directory.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path; format follows the extension.
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels; overrides the layout's `width`.
    #[arg(long)]
    width: Option<u32>,

    /// Resampling filter; overrides the layout's `settings.filter`.
    #[arg(long, value_enum)]
    filter: Option<ResizeFilter>,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Exactly three source images: A, B and C.
    #[arg(long, num_args = 3, required = true)]
    images: Vec<PathBuf>,

    /// Output image path; format follows the extension.
    #[arg(long, default_value = "result.jpeg")]
    out: PathBuf,

    /// Output width in pixels.
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Resampling filter.
    #[arg(long, value_enum, default_value_t = ResizeFilter::CatmullRom)]
    filter: ResizeFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = storyboard::LayoutDocument::from_path(&args.in_path)?;
    let width = args
        .width
        .or(doc.width)
        .context("no output width: pass --width or set `width` in the layout")?;

    let mut settings = doc.settings.clone();
    if let Some(filter) = args.filter {
        settings.filter = filter;
    }

    let assets_root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let root = storyboard::build_root(&doc, assets_root)
        .with_context(|| format!("build tree from '{}'", args.in_path.display()))?;

    let out = storyboard::render_storyboard(&root, width, &settings)?;
    write_output(&args.out, &out)
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let [a, b, c] = <[PathBuf; 3]>::try_from(args.images)
        .map_err(|v| anyhow::anyhow!("expected 3 images, got {}", v.len()))?;
    let a = Arc::new(storyboard::load_image(&a)?);
    let b = Arc::new(storyboard::load_image(&b)?);
    let c = Arc::new(storyboard::load_image(&c)?);

    let root = storyboard::Row::new()
        .add(Arc::clone(&a))
        .add(
            storyboard::Column::new()
                .add(storyboard::Row::new().add(Arc::clone(&a)).add(Arc::clone(&b)))
                .add(c),
        )
        .add(b);

    let settings = storyboard::RenderSettings {
        filter: args.filter,
        ..storyboard::RenderSettings::default()
    };
    let out = storyboard::render_storyboard(&root, args.width, &settings)?;
    write_output(&args.out, &out)
}

fn write_output(path: &Path, img: &image::RgbaImage) -> anyhow::Result<()> {
    storyboard::save_image(path, img)
        .with_context(|| format!("save storyboard '{}'", path.display()))?;
    eprintln!("wrote {} ({}x{})", path.display(), img.width(), img.height());
    Ok(())
}
