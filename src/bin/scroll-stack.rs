use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scroll-stack", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay scroll positions against a simulated container and print every write.
    Simulate(SimulateArgs),
    /// Print boundaries, phase and transform of every item at one scroll offset.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Stack configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated container layout JSON.
    #[arg(long)]
    layout: PathBuf,

    /// Override the configured axis.
    #[arg(long, value_enum)]
    axis: Option<AxisChoice>,

    /// Scroll offsets to visit, in order.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    scroll: Vec<f64>,

    /// Scroll events delivered per offset before the frame fires.
    #[arg(long, default_value_t = 1)]
    burst: u32,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Stack configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport size along the scroll axis, in pixels.
    #[arg(long)]
    viewport: f64,

    /// Leading-edge offset of the item along the scroll axis.
    #[arg(long, allow_negative_numbers = true)]
    offset: f64,

    /// Stacking index of the item.
    #[arg(long)]
    index: usize,

    /// End sentinel offset. Reads as 0 when omitted, like a missing sentinel.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    end: f64,

    /// Scroll offset to inspect.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    scroll: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AxisChoice {
    Block,
    Inline,
}

impl From<AxisChoice> for scroll_stack::Axis {
    fn from(c: AxisChoice) -> Self {
        match c {
            AxisChoice::Block => Self::Block,
            AxisChoice::Inline => Self::Inline,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<scroll_stack::StackConfig> {
    let Some(path) = path else {
        return Ok(scroll_stack::StackConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = scroll_stack::StackConfig::from_json(&s)
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(cfg)
}

fn read_layout(path: &Path) -> anyhow::Result<scroll_stack::SimLayout> {
    let f = File::open(path).with_context(|| format!("open layout '{}'", path.display()))?;
    let layout: scroll_stack::SimLayout =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse layout JSON")?;
    layout.validate()?;
    Ok(layout)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut config = read_config(args.config.as_deref())?;
    if let Some(axis) = args.axis {
        config.axis = axis.into();
    }
    let layout = read_layout(&args.layout)?;

    let mut host = scroll_stack::SimHost::new(config.axis, layout);
    let items = host.items();
    let mut stack = scroll_stack::ScrollStack::attach(&mut host, items, config);

    let mut out = std::io::stdout().lock();
    let mut frames = 0usize;

    for write in host.take_writes() {
        serde_json::to_writer(&mut out, &write)?;
        writeln!(out)?;
    }

    for &pos in &args.scroll {
        host.scroll_to(pos);
        for _ in 0..args.burst.max(1) {
            stack.on_scroll(&mut host);
        }
        while let Some(token) = host.pump_frame() {
            if let Some(stats) = stack.on_frame(&mut host, token) {
                frames += 1;
                tracing::info!(
                    scroll = pos,
                    applied = stats.applied,
                    suppressed = stats.suppressed
                );
            }
        }
        for write in host.take_writes() {
            serde_json::to_writer(&mut out, &write)?;
            writeln!(out)?;
        }
    }

    stack.detach(&mut host);
    tracing::info!(frames, "simulation finished");
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let frame = scroll_stack::FrameGeometry::new(args.scroll, args.viewport, args.end);
    let boundaries = scroll_stack::resolve_boundaries(args.offset, args.index, &frame, &config);
    let report = scroll_stack::ItemReport {
        index: args.index,
        boundaries,
        phase: scroll_stack::phase_at(&boundaries, frame.scroll_pos),
        transform: scroll_stack::compute_transform(
            args.index,
            &boundaries,
            frame.scroll_pos,
            &config,
        ),
    };

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    Ok(())
}
