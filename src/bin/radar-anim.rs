use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "radar-anim", version, subcommand_negates_reqs = true)]
struct Cli {
    /// Input config JSON.
    #[arg(short, long, required = true)]
    config: Option<PathBuf>,

    /// Output PNG path; animated configs write `<stem>_<NNNN>.png` per frame.
    /// Without it the resolved config is printed to stdout.
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Canvas side in pixels.
    #[arg(long, default_value_t = 640)]
    size: u32,

    /// Log resolution decisions.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a demo config.
    Preset {
        #[command(subcommand)]
        kind: PresetKind,
    },
}

#[derive(Subcommand, Debug)]
enum PresetKind {
    /// Rotating rotor animation.
    Helicopter(HelicopterArgs),
    /// One group per axis on the 8-color `Accent` colormap.
    ColormapProbe(ProbeArgs),
}

#[derive(Parser, Debug)]
struct HelicopterArgs {
    /// Number of axes (and frames).
    #[arg(long, default_value_t = 20)]
    angles: usize,

    /// Number of blades.
    #[arg(long, default_value_t = 4)]
    blades: usize,

    /// Radial value of a blade.
    #[arg(long, default_value_t = 8)]
    blade_length: u32,

    /// Blades cover one axis instead of two.
    #[arg(long, default_value_t = false)]
    thin: bool,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Number of axes (and distinct group names).
    #[arg(long, default_value_t = 9)]
    angles: usize,

    /// Radial value of a spike.
    #[arg(long, default_value_t = 8)]
    blade_length: u32,

    /// Spikes cover one axis instead of two.
    #[arg(long, default_value_t = false)]
    thin: bool,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.cmd {
        Some(Command::Preset { kind }) => cmd_preset(kind),
        None => {
            let config = cli.config.context("missing --config")?;
            cmd_resolve(&config, cli.save.as_deref(), cli.size)
        }
    }
}

fn cmd_resolve(config: &Path, save: Option<&Path>, size: u32) -> anyhow::Result<()> {
    let plan = radar_anim::RenderPlan::from_path(config)
        .with_context(|| format!("resolve config '{}'", config.display()))?;

    let Some(out) = save else {
        let stdout = std::io::stdout();
        serde_json::to_writer_pretty(stdout.lock(), &plan).context("write resolved config")?;
        println!();
        return Ok(());
    };

    let opts = radar_anim::RenderOpts {
        size_px: size,
        ..radar_anim::RenderOpts::default()
    };
    let written = radar_anim::save_plan(&plan, out, &opts)
        .with_context(|| format!("save chart '{}'", out.display()))?;
    match written.as_slice() {
        [one] => eprintln!("wrote {}", one.display()),
        many => eprintln!(
            "wrote {} frames ({} ms each) next to {}",
            many.len(),
            plan.config().frame_length,
            out.display()
        ),
    }
    Ok(())
}

fn cmd_preset(kind: PresetKind) -> anyhow::Result<()> {
    let (value, out) = match kind {
        PresetKind::Helicopter(a) => (
            radar_anim::presets::helicopter_value(a.angles, a.blades, a.blade_length, !a.thin),
            a.out,
        ),
        PresetKind::ColormapProbe(a) => (
            radar_anim::presets::colormap_probe_value(a.angles, a.blade_length, !a.thin),
            a.out,
        ),
    };

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = std::fs::File::create(&out)
        .with_context(|| format!("create preset '{}'", out.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(f), &value)
        .with_context(|| format!("write preset '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
