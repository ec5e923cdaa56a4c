//! Unfold Demo
//!
//! Headless walkthrough of the unfold button:
//! - unfolding and picking an item by tap
//! - commands posted from a worker thread
//! - the frame clock driving the spring animation
//!
//! Run with: cargo run -p unfold --example unfold_demo
//!
//! Set `RUST_LOG=unfold=trace` to watch the layout and animation logs.

use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;
use unfold::prelude::*;

/// Camera timer choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ButtonContent)]
enum Timer {
    Off,
    ThreeSeconds,
    TenSeconds,
}

const FRAME: Duration = Duration::from_micros(16_667);

const CONFIG: &str = r##"
button_size = 48

[palette]
highlight = "#FFCC00"
overlay = "#333333CC"
"##;

/// Drive the frame clock until the animation settles.
fn run_frames(button: &mut UnfoldButton<Timer>, clock: &mut Instant) {
    let mut frames = 0;
    while button.tick(*clock) {
        *clock += FRAME;
        frames += 1;
    }
    println!(
        "  settled after {frames} frames: state={:?} frame={:?}",
        button.state(),
        button.frame()
    );
    for visual in button.buttons() {
        println!(
            "    {:?}: x={:.1} width={:.1} tint={}",
            visual.item(),
            visual.frame().left(),
            visual.frame().width(),
            visual.tint()
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = UnfoldConfig::from_toml_str(CONFIG)?;
    let mut button = UnfoldButton::<Timer>::with_backdrop(config, |frame: Rect| {
        tracing::trace!(?frame, "backdrop moved");
    })?;
    button.set_safe_inset(8.0);
    button.finish_animation();

    button.selection_changed.connect(|picked| match picked {
        Some(timer) => println!("  -> picked {timer:?}"),
        None => println!("  -> choosing..."),
    });

    let mut clock = Instant::now();

    println!("Tap the folded button:");
    button.tap(button.selected().index());
    run_frames(&mut button, &mut clock);

    println!("Tap {:?}:", Timer::TenSeconds);
    button.tap(Timer::TenSeconds.index());
    run_frames(&mut button, &mut clock);

    println!("Worker restricts the choices and unfolds:");
    let sender = button.command_sender();
    std::thread::spawn(move || -> Result<()> {
        sender.post(UnfoldCommand::SetUsableItems(vec![
            Timer::Off,
            Timer::ThreeSeconds,
        ]))?;
        sender.post(UnfoldCommand::Tap(Timer::Off.index()))
    })
    .join()
    .expect("worker thread panicked")?;
    let handled = button.process_pending();
    println!("  handled {handled} commands");
    run_frames(&mut button, &mut clock);

    println!("Force close:");
    button.force_close();
    run_frames(&mut button, &mut clock);

    Ok(())
}
