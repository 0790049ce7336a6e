use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use backdrop_engine::anim::{AnimatorConfig, GradientAnimator};
use backdrop_engine::logging::{LoggingConfig, init_logging};
use backdrop_engine::paint::Color;
use backdrop_engine::prefs::{FileStore, Theme, ThemePreference};
use backdrop_engine::runtime::{BackdropLoop, IntervalScheduler, LoopExit, ScriptedScheduler};
use backdrop_engine::surface::{Surface, SurfaceTargets, WriterSurface};

#[derive(Parser, Debug)]
#[command(name = "backdrop-studio")]
#[command(about = "Preview the animated hero background and manage the theme preference")]
struct Cli {
    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, global = true)]
    log: Option<String>,

    /// Debug-level logging when no filter is given
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stream the background style values to stdout, one rule per surface per frame
    Animate(AnimateArgs),
    /// Show or toggle the persisted light/dark theme
    Theme(ThemeArgs),
}

#[derive(clap::Args, Debug)]
struct AnimateArgs {
    /// Stop after this many frames (runs until killed when omitted)
    #[arg(long)]
    frames: Option<u64>,

    /// Frame rate of the preview scheduler
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Length of one blend window in milliseconds
    #[arg(long, default_value_t = 6000)]
    duration_ms: u64,

    /// Seed for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Start this far into the first blend window (fraction of a window)
    #[arg(long, default_value_t = 0.0)]
    phase: f64,

    /// Emit frames back to back with synthetic timestamps instead of pacing
    /// them in real time
    #[arg(long, requires = "frames")]
    offline: bool,

    /// Palette colors as `rgba(r,g,b,a)`; replaces the default palette
    #[arg(long = "color", value_name = "RGBA")]
    palette: Vec<Color>,

    /// Leave out the hero surface
    #[arg(long)]
    no_hero: bool,

    /// Leave out the navigation bar surface
    #[arg(long)]
    no_nav: bool,
}

#[derive(clap::Args, Debug)]
struct ThemeArgs {
    /// Preference file
    #[arg(long, default_value = ".backdrop-prefs.json")]
    file: PathBuf,

    /// Flip the theme before printing it
    #[arg(long, conflicts_with = "set")]
    toggle: bool,

    /// Set the theme explicitly (`light` or `dark`)
    #[arg(long)]
    set: Option<Theme>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        verbose: cli.verbose,
        ..LoggingConfig::default()
    });

    match cli.command {
        Command::Animate(args) => animate(args),
        Command::Theme(args) => theme(args),
    }
}

fn animate(args: AnimateArgs) -> Result<()> {
    let mut config = AnimatorConfig::default().duration(Duration::from_millis(args.duration_ms));
    if let Some(seed) = args.seed {
        config = config.seed(seed);
    }
    if !args.palette.is_empty() {
        config = config.palette(args.palette);
    }

    let hero: Option<Box<dyn Surface>> = (!args.no_hero)
        .then(|| Box::new(WriterSurface::new(".hero", io::stdout())) as Box<dyn Surface>);
    let nav: Option<Box<dyn Surface>> = (!args.no_nav)
        .then(|| Box::new(WriterSurface::new("nav", io::stdout())) as Box<dyn Surface>);

    let mut animator = GradientAnimator::new(config, 0.0).context("invalid animation settings")?;
    animator.seek(args.phase);

    eprintln!();
    eprintln!("  backdrop studio · {} ms window · {} fps", args.duration_ms, args.fps);
    eprintln!();

    let mut lp = BackdropLoop::new(animator, SurfaceTargets::new(hero, nav));
    let exit = match args.frames {
        Some(frames) if args.offline => {
            let step_ms = 1000.0 / args.fps.max(1.0);
            lp.run(ScriptedScheduler::uniform(frames as usize, step_ms))
        }
        frames => {
            let mut scheduler = IntervalScheduler::new(args.fps);
            if let Some(frames) = frames {
                scheduler = scheduler.with_frame_limit(frames);
            }
            log::debug!("pacing frames every {:?}", scheduler.interval());
            lp.run(scheduler)
        }
    };

    match exit {
        LoopExit::NoTargets => log::warn!("both surfaces disabled; nothing to animate"),
        LoopExit::Stopped | LoopExit::HostClosed => {
            log::info!("rendered {} frames", lp.frames());
        }
    }
    Ok(())
}

fn theme(args: ThemeArgs) -> Result<()> {
    let store = FileStore::open(&args.file)?;
    log::debug!("theme preference file: {}", store.path().display());
    let mut pref = ThemePreference::load(store);

    if args.toggle {
        pref.toggle()?;
    } else if let Some(theme) = args.set {
        pref.set(theme)?;
    }

    println!("{}", pref.theme());
    Ok(())
}
