//! Classic Pong entry point
//!
//! Headless runner: plays a scripted session against the bot and prints the
//! final frame as JSON. Drawing and real keyboard input belong to a harness.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{JoinHandle, spawn};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use classic_pong::consts::TICK_RATE;
use classic_pong::{App, GameConfig, GameEvent, Key, SharedIntent, Side};

#[derive(Debug, Parser)]
#[command(about = "Play a scripted headless session against the bot")]
struct Args {
    /// JSON config file (missing keys take defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Ticks to simulate [default: one minute]
    #[arg(long)]
    ticks: Option<u64>,
    /// Serve RNG seed [default: from the clock]
    #[arg(long)]
    seed: Option<u64>,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Scripted player on its own thread: holds W and S alternately, one second
/// each. It is told the upcoming tick and acknowledges once its keys are set.
fn spawn_script(intent: SharedIntent) -> (Sender<u64>, Receiver<()>, JoinHandle<()>) {
    let (tick_tx, tick_rx) = channel::<u64>();
    let (ack_tx, ack_rx) = channel();
    let handle = spawn(move || {
        let second = u64::from(TICK_RATE);
        for t in tick_rx {
            if t % second == 0 {
                intent.release();
                if (t / second) % 2 == 0 {
                    intent.press_up();
                } else {
                    intent.press_down();
                }
            }
            if ack_tx.send(()).is_err() {
                break;
            }
        }
    });
    (tick_tx, ack_rx, handle)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path),
        None => GameConfig::default(),
    };
    config.warn_if_degenerate();

    let seed = args.seed.unwrap_or_else(clock_seed);
    let ticks = args.ticks.unwrap_or(u64::from(TICK_RATE) * 60);
    log::info!("Classic Pong (headless) starting: {} ticks, seed {}", ticks, seed);

    let mut app = App::new(config, seed);
    app.key_press(Key::Space);

    let intent = SharedIntent::new();
    let (tick_tx, ack_rx, script) = spawn_script(intent.clone());

    for t in 0..ticks {
        if tick_tx.send(t).is_err() || ack_rx.recv().is_err() {
            log::error!("Input script stopped at tick {}", t);
            return ExitCode::FAILURE;
        }
        app.apply_intent(&intent);
        for event in app.update() {
            if let GameEvent::Scored { side } = event {
                let who = match side {
                    Side::Left => "player",
                    Side::Right => "bot",
                };
                log::info!("Tick {}: point to {}", t + 1, who);
            }
        }
    }
    drop(tick_tx);
    if script.join().is_err() {
        log::warn!("Input script panicked");
    }

    let Some(game) = app.screen().game() else {
        log::error!("No session running");
        return ExitCode::FAILURE;
    };
    let (left, right) = game.score();
    log::info!("Final score {} - {}", left, right);

    match serde_json::to_string_pretty(&game.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Cannot encode snapshot: {}", e);
            ExitCode::FAILURE
        }
    }
}
