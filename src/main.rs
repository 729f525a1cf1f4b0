//! Ball Bouncer entry point
//!
//! Runs the simulation headless: frames are summarized to the log and escape
//! sounds are logged instead of played.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ball_bouncer::audio::LogAudio;
use ball_bouncer::platform::{FrameClock, StopFlag, TickLimit};
use ball_bouncer::renderer::LogRenderer;
use ball_bouncer::{Game, GameConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON config file; missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks (runs forever otherwise)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Target ticks per second
    #[arg(long)]
    fps: Option<u32>,

    /// Log a frame summary every N frames
    #[arg(long, default_value_t = 30)]
    log_every: u64,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.width.is_some() || args.height.is_some() {
        config.fit_rings_to_viewport();
    }
    if let Some(fps) = args.fps {
        config.tick_rate = fps;
    }
    config.validate().context("invalid configuration")?;

    if args.dump_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    log::info!("Ball Bouncer (headless) starting...");
    let clock = FrameClock::new(config.tick_rate);
    let stop = StopFlag::new();
    stop_on_ctrl_c(stop.clone()).context("installing Ctrl-C handler")?;
    let input = TickLimit::new(args.ticks, stop);
    let mut game = Game::new(
        config,
        LogRenderer::new(args.log_every),
        LogAudio::new(),
        input,
        clock,
    )
    .context("starting game")?;

    let stats = game.run();
    println!(
        "ticks={} escapes={} bounces={} resets={} max_depth={}",
        stats.ticks, stats.escapes, stats.bounces, stats.resets, stats.max_depth
    );
    Ok(())
}

/// Set `flag` when Ctrl-C arrives, so the loop finishes its frame and exits
fn stop_on_ctrl_c(flag: StopFlag) -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    std::thread::spawn(move || {
        runtime.block_on(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("Ctrl-C received, stopping");
                flag.stop();
            }
        });
    });
    Ok(())
}
