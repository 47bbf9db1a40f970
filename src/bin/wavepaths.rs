use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use wavepaths::{
    BackgroundConfig, BackgroundMount, FixedViewport, Fps, FrameLoop, PngSequenceSink, Preset,
    RenderSettings, Strategy, SvgFrameOpts, SvgScene, Viewport, create_renderer,
};

#[derive(Parser, Debug)]
#[command(name = "wavepaths", version)]
struct Cli {
    /// Emit tracing output on stderr (filter with RUST_LOG).
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the SVG document for one point in time.
    Svg(SvgArgs),
    /// Write the static backdrop mount markup (HTML fragment with CSS float animations).
    Markup(MarkupArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Drive the frame loop and write a PNG sequence.
    Frames(FramesArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetArg {
    Paths,
    GradientPaths,
    Canvas,
}

impl From<PresetArg> for Preset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Paths => Preset::Paths,
            PresetArg::GradientPaths => Preset::GradientPaths,
            PresetArg::Canvas => Preset::Canvas,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Svg,
    Surface,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Svg => Strategy::Svg,
            StrategyArg::Surface => Strategy::Surface,
        }
    }
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Built-in configuration.
    #[arg(long, value_enum, default_value = "paths")]
    preset: PresetArg,

    /// JSON configuration file; overrides `--preset`.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    fn load(&self) -> anyhow::Result<BackgroundConfig> {
        match &self.config {
            Some(path) => BackgroundConfig::from_json_path(path)
                .with_context(|| format!("load config '{}'", path.display())),
            None => Ok(Preset::from(self.preset).config()),
        }
    }
}

#[derive(Args, Debug)]
struct SurfaceArgs {
    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Drawing strategy.
    #[arg(long, value_enum, default_value = "surface")]
    strategy: StrategyArg,

    /// Clear color as `#rrggbb`; transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

impl SurfaceArgs {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height).with_device_pixel_ratio(self.dpr)
    }

    fn settings(&self) -> anyhow::Result<RenderSettings> {
        let mut settings = RenderSettings::default();
        if let Some(hex) = &self.background {
            settings.clear = parse_hex(hex)?;
        }
        Ok(settings)
    }
}

#[derive(Args, Debug)]
struct SvgArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Elapsed animation seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Fixed pixel size `WxH`; the document is fluid (100%) when omitted.
    #[arg(long)]
    size: Option<String>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct MarkupArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output HTML path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    surface: SurfaceArgs,

    /// Elapsed animation seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(flatten)]
    surface: SurfaceArgs,

    /// Frames per second of the synthetic clock.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Number of frames to write.
    #[arg(long, default_value_t = 60)]
    count: u64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.log {
        init_tracing();
    }
    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Markup(args) => cmd_markup(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wavepaths=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let cfg = args.config.load()?;
    let size = args.size.as_deref().map(parse_size).transpose()?;
    let doc = SvgScene::new(cfg).document(
        args.time,
        SvgFrameOpts {
            size,
            bake_float: size.is_some(),
        },
    );
    write_text(&args.out, &doc)
}

fn cmd_markup(args: MarkupArgs) -> anyhow::Result<()> {
    let cfg = args.config.load()?;
    write_text(&args.out, &SvgScene::new(cfg).backdrop_markup())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = args.config.load()?;
    let mut renderer = create_renderer(
        args.surface.strategy.into(),
        &cfg,
        args.surface.settings()?,
    )?;
    renderer
        .configure(args.surface.viewport())
        .context("configure drawing surface")?;
    renderer.draw(args.time)?;
    let frame = renderer.snapshot()?;

    create_parent_dir(&args.out)?;
    wavepaths::write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = args.config.load()?;
    let fps = Fps::new(args.fps, 1)?;
    let renderer = create_renderer(
        args.surface.strategy.into(),
        &cfg,
        args.surface.settings()?,
    )?;

    let frame_loop = FrameLoop::new(fps, args.count);
    let mut mount = BackgroundMount::new(
        renderer,
        frame_loop.scheduler(),
        FixedViewport::new(args.surface.viewport()),
    );
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = frame_loop
        .run(&mut mount, &mut sink)
        .context("render frame sequence")?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_pushed,
        args.out_dir.display()
    );
    Ok(())
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    create_parent_dir(path)?;
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn parse_size(s: &str) -> anyhow::Result<wavepaths::Size> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("size '{s}' is not WxH"))?;
    let w: f64 = w.trim().parse().with_context(|| format!("bad width in '{s}'"))?;
    let h: f64 = h.trim().parse().with_context(|| format!("bad height in '{s}'"))?;
    anyhow::ensure!(w > 0.0 && h > 0.0, "size '{s}' must be positive");
    Ok(wavepaths::Size::new(w, h))
}

fn parse_hex(s: &str) -> anyhow::Result<wavepaths::Rgba8> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    anyhow::ensure!(
        hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        "color '{s}' is not #rrggbb"
    );
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    Ok(wavepaths::Rgba8::rgb(byte(0)?, byte(2)?, byte(4)?))
}
