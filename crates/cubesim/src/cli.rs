use std::path::PathBuf;
use std::time::Duration;

use cubeprefs::Preferences;
use cubepuzzle::Command;
use cubeview::PuzzleSimulation;
use eyre::{Result, WrapErr, ensure};
use itertools::Itertools;
use serde::Serialize;

use crate::report::Report;

/// Headless 3x3x3 cube simulator
///
/// Executes commands on a simulated cube, advancing the animation with a
/// fixed time step, and prints the resulting state as JSON.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Args, Debug, Clone)]
pub(crate) struct PuzzleOpts {
    /// Seed for the scramble RNG.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Preferences file to merge over the defaults.
    #[arg(long)]
    pub prefs: Option<PathBuf>,
}
impl PuzzleOpts {
    fn load_prefs(&self) -> Preferences {
        let mut prefs = Preferences::load(self.prefs.as_deref());
        if let Some(seed) = self.seed {
            prefs.scramble.seed = Some(seed);
        }
        prefs
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Execute commands one per frame, then run until all animations finish.
    Play {
        /// Commands to execute, such as `R U R' U'`, `x`, `scramble`, or
        /// `reset`.
        #[arg(required = true)]
        moves: Vec<String>,
        /// Frames per second.
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
        /// Maximum simulated time, in seconds.
        #[arg(long, default_value_t = 10.0)]
        seconds: f32,
        #[command(flatten)]
        opts: PuzzleOpts,
    },
    /// Scramble a solved puzzle and print the result.
    Scramble {
        #[command(flatten)]
        opts: PuzzleOpts,
    },
    /// Print the active key bindings.
    Keys {
        /// Preferences file to merge over the defaults.
        #[arg(long)]
        prefs: Option<PathBuf>,
    },
    /// Write the active preferences to a file.
    SavePrefs {
        /// File to write.
        output: PathBuf,
        /// Preferences file to merge over the defaults.
        #[arg(long)]
        prefs: Option<PathBuf>,
    },
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Play {
            moves,
            fps,
            seconds,
            opts,
        } => {
            let commands = cubepuzzle::parse_sequence(&moves.join(" "))
                .wrap_err("error parsing commands")?;
            ensure!(fps > 0.0 && fps.is_finite(), "frame rate must be positive");
            ensure!(seconds >= 0.0 && seconds.is_finite(), "time limit must be non-negative");

            let mut sim = PuzzleSimulation::new(&opts.load_prefs());
            let frames = play(&mut sim, &commands, fps, seconds);
            write_json_output(&Report::new(&sim, frames))
        }

        Subcommand::Scramble { opts } => {
            let mut sim = PuzzleSimulation::new(&opts.load_prefs());
            sim.execute(Command::Scramble);
            sim.catch_up();
            if let Some(moves) = sim.scramble() {
                eprintln!("seed {}: {}", sim.puzzle().seed(), moves.iter().join(" "));
            }
            write_json_output(&Report::new(&sim, 0))
        }

        Subcommand::Keys { prefs } => {
            let prefs = Preferences::load(prefs.as_deref());
            for bind in &prefs.keybinds {
                println!("{}\t{}", bind.key, bind.command);
            }
            Ok(())
        }

        Subcommand::SavePrefs { output, prefs } => {
            Preferences::load(prefs.as_deref())
                .save(&output)
                .wrap_err_with(|| format!("error saving preferences to {}", output.display()))
        }
    }
}

/// Executes `commands` one per frame, then advances until no animation
/// remains or `seconds` of simulated time have passed. Returns the number of
/// frames simulated.
fn play(sim: &mut PuzzleSimulation, commands: &[Command], fps: f32, seconds: f32) -> usize {
    let frame = Duration::from_secs_f32(1.0 / fps);
    let max_frames = (seconds * fps).ceil() as usize;

    let mut frames = 0;
    let mut needs_redraw = false;
    for &command in commands {
        sim.execute(command);
        needs_redraw = sim.advance(frame);
        frames += 1;
    }
    while needs_redraw && frames < max_frames {
        needs_redraw = sim.advance(frame);
        frames += 1;
    }
    if needs_redraw {
        log::warn!("animation still in progress after {frames} frames");
    }
    frames
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .wrap_err("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
