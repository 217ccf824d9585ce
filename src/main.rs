//! Headless replay driver for the King's Trial movement core.
//!
//! Spawns a session, charges a single jump for `--charge` seconds and then
//! simulates `--frames` fixed steps, logging every event the core emits.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use kings_trial::numeric::floor_to_u16;
use kings_trial::{
    init_logging, InputSnapshot, LevelRules, LevelSet, PhysicsConfig, Rect, Session, World,
    FRAMES_PER_SECOND,
};
use log::info;

/// A charge-jump platformer, run without a window
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON level pack; a single flat floor is used when omitted
    #[arg(long)]
    levels: Option<PathBuf>,
    /// Number of fixed steps to simulate
    #[arg(long, default_value_t = 240)]
    frames: u32,
    /// Seconds to hold the jump before releasing
    #[arg(long, default_value_t = 0.5)]
    charge: f64,
    /// Level to start on
    #[arg(long, default_value_t = 0)]
    level: usize,
    /// Steer the jump to the right instead of straight up
    #[arg(long)]
    right: bool,
    /// Write a save file here when the replay ends
    #[arg(long)]
    save: Option<PathBuf>,
}

fn load_levels(path: Option<&Path>) -> Result<LevelSet> {
    let Some(path) = path else {
        return Ok(LevelSet::with_levels(1)
            .with_platforms(0, vec![Rect::new(0.0, 780.0, 800.0, 20.0)]));
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading level pack {}", path.display()))?;
    LevelSet::from_json(&json).with_context(|| format!("parsing level pack {}", path.display()))
}

fn scripted_input(frame: u32, release_frame: u32, right: bool) -> InputSnapshot {
    let mut input = InputSnapshot::idle();
    if right && frame <= release_frame {
        input = input.right();
    }
    if frame == 1 {
        input = input.press_jump();
    }
    if frame == release_frame {
        input = input.release_jump();
    }
    input
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let levels = load_levels(args.levels.as_deref())?;
    let rules = LevelRules::original();
    let config = PhysicsConfig::default();
    let world = World::new(&levels, &rules, &config);

    let mut session = Session::new_game(&config);
    session.level = args.level.min(world.level_count().saturating_sub(1));

    let dt = 1.0 / FRAMES_PER_SECOND;
    // Charge starts on frame 1; release lands on the first frame past the hold.
    let hold_frames = floor_to_u16((args.charge.max(0.0) * FRAMES_PER_SECOND).ceil());
    let release_frame = 1 + u32::from(hold_frames.unwrap_or(u16::MAX));

    let mut now = 0.0;
    for frame in 0..args.frames {
        let input = scripted_input(frame, release_frame, args.right);
        let outcome = session.step(&input, world, now);
        for event in &outcome.events {
            info!("frame {frame}: {event:?}");
        }
        if session.is_over() {
            info!("player died on frame {frame}");
            break;
        }
        now += dt;
    }

    info!(
        "finished on level {} at ({:.1}, {:.1}), health {}, jumps {}, falls {}",
        session.level,
        session.player.position.x,
        session.player.position.y,
        session.player.health.current,
        session.player.jump_count,
        session.player.fall_counter,
    );

    if let Some(path) = args.save.as_deref() {
        session.save(now).store(path).context("writing save file")?;
    }
    Ok(())
}
