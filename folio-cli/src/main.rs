use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Only log errors.
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the portfolio page into an output directory.
    Build(BuildArgs),
    /// Print or write the timeline data (grouped series and frames) as JSON.
    Timeline(TimelineArgs),
    /// Render the static chart or a single playback frame as a PNG.
    Frame(FrameArgs),
    /// Render every playback frame as a numbered PNG.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Site configuration JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Directory holding the profile image and resume (defaults to the config's directory).
    #[arg(long)]
    root: Option<PathBuf>,

    /// Footer year; defaults to `footer.year`, then the current year.
    #[arg(long)]
    year: Option<i32>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Site configuration JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RasterArgs {
    /// Raster scale factor.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Keep a transparent background instead of the theme background.
    #[arg(long, default_value_t = false)]
    transparent: bool,

    /// Extra font directory (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Site configuration JSON.
    #[arg(long)]
    config: PathBuf,

    /// Frame number (1-based); 0 renders the static view.
    #[arg(long)]
    index: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    raster: RasterArgs,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Site configuration JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output directory for `frame-NNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    raster: RasterArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.quiet);
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn setup_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> anyhow::Result<folio::SiteConfig> {
    let cfg = folio::SiteConfig::from_path(path)
        .with_context(|| format!("load site config '{}'", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate site config '{}'", path.display()))?;
    Ok(cfg)
}

fn config_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let root = args
        .root
        .clone()
        .unwrap_or_else(|| config_dir(&args.config).to_path_buf());

    let report = folio::build_site(
        &cfg,
        &root,
        &args.out,
        &folio::BuildOptions { year: args.year },
    )
    .with_context(|| format!("build site into '{}'", args.out.display()))?;

    if report.resume_missing {
        tracing::warn!("page shows the missing-resume notice");
    }
    if report.profile_placeholder {
        tracing::warn!("page shows the profile placeholder");
    }
    eprintln!("wrote {}", report.index_html.display());
    eprintln!("wrote {}", report.timeline_json.display());
    for path in &report.copied {
        eprintln!("copied {}", path.display());
    }
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let timeline = cfg.build_timeline()?;
    let json = serde_json::to_string_pretty(&timeline).context("serialize timeline")?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn rasterizer(args: &RasterArgs) -> folio::ChartRasterizer {
    let dirs: Vec<&Path> = args.font_dirs.iter().map(PathBuf::as_path).collect();
    folio::ChartRasterizer::with_font_dirs(&dirs)
}

fn raster_opts(args: &RasterArgs, cfg: &folio::SiteConfig) -> folio::RasterOptions {
    folio::RasterOptions {
        scale: args.scale,
        background: if args.transparent {
            None
        } else {
            Some(cfg.timeline.chart.background.unwrap_or(cfg.theme.bg))
        },
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let timeline = cfg.build_timeline()?;
    let chart = folio::ChartRenderer::new(&timeline, &cfg.timeline.chart, &cfg.timeline.title)?;

    let svg = match args.index {
        0 => chart.render_static(),
        k => {
            let frame = timeline.frames().get(k - 1).with_context(|| {
                format!(
                    "frame {k} out of range (timeline has {} frames)",
                    timeline.frames().len()
                )
            })?;
            chart.render_frame(frame)?
        }
    };

    rasterizer(&args.raster).write_png(&svg, &args.out, raster_opts(&args.raster, &cfg))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let timeline = cfg.build_timeline()?;
    let chart = folio::ChartRenderer::new(&timeline, &cfg.timeline.chart, &cfg.timeline.title)?;
    let svgs = chart.render_frames()?;
    if svgs.is_empty() {
        eprintln!("timeline has no frames; nothing written");
        return Ok(());
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let raster = rasterizer(&args.raster);
    let opts = raster_opts(&args.raster, &cfg);

    let mut pool = rayon::ThreadPoolBuilder::new();
    if let Some(n) = args.threads {
        pool = pool.num_threads(n);
    }
    let pool = pool.build().context("build rayon thread pool")?;

    let written: Vec<PathBuf> = pool.install(|| {
        svgs.par_iter()
            .enumerate()
            .map(|(i, svg)| -> anyhow::Result<PathBuf> {
                let path = args.out_dir.join(format!("frame-{:03}.png", i + 1));
                raster.write_png(svg, &path, opts)?;
                Ok(path)
            })
            .collect::<anyhow::Result<Vec<_>>>()
    })?;

    for path in &written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
