use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use sweeper_core::{GameConfig, GameSession, Preset};
use web_time::Instant;

use command::{Command, HELP};

mod command;
mod render;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PresetArg {
    Beginner,
    Intermediate,
    Expert,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Beginner => Preset::Beginner,
            PresetArg::Intermediate => Preset::Intermediate,
            PresetArg::Expert => Preset::Expert,
        }
    }
}

/// Play the mine-clearing puzzle in a terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Board preset, individual dimensions below override it
    #[arg(short, long, value_enum, default_value_t = PresetArg::Expert)]
    preset: PresetArg,

    #[arg(long)]
    width: Option<u8>,

    #[arg(long)]
    height: Option<u8>,

    #[arg(long)]
    mines: Option<u16>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds between clock ticks
    #[arg(long, default_value_t = 50)]
    frame_ms: u64,
}

impl Args {
    fn game_config(&self) -> sweeper_core::Result<GameConfig> {
        let preset = Preset::from(self.preset).config();
        let size = (
            self.width.unwrap_or(preset.size.0),
            self.height.unwrap_or(preset.size.1),
        );
        GameConfig::new(size, self.mines.unwrap_or(preset.mines))
    }
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if sender.send(line).is_err() {
                break;
            }
        }
    });
    receiver
}

fn print_board(session: &GameSession) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}> ", render::render(&session.snapshot()))?;
    stdout.flush()?;
    Ok(())
}

/// Applies one command, returns `false` when the player quits.
fn apply(session: &mut GameSession, command: Command) -> Result<bool> {
    match command {
        Command::Open(coords) => {
            let outcome = session.open(coords)?;
            log::debug!(
                "open {:?}: {} revealed, status {:?}",
                coords,
                outcome.revealed.len(),
                outcome.status
            );
        }
        Command::Flag(coords) => {
            let outcome = session.toggle_flag(coords)?;
            log::debug!("flag {:?}: {:?}", coords, outcome);
        }
        Command::Press(coords) => {
            session.press(coords)?;
        }
        Command::Release => {
            session.release();
        }
        Command::Restart => session.restart()?,
        Command::Dump => println!("{}", serde_json::to_string_pretty(&session.snapshot())?),
        Command::Help => println!("{HELP}"),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.game_config()?;
    log::debug!("config: {:?}, seed: {:?}", config, args.seed);

    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(config, seed)?,
        None => GameSession::new(config)?,
    };
    session.start()?;

    let frame = Duration::from_millis(args.frame_ms.max(1));
    let lines = spawn_stdin_reader();
    let mut last_frame = Instant::now();

    println!("{HELP}");
    print_board(&session)?;

    loop {
        let received = lines.recv_timeout(frame);

        let now = Instant::now();
        let tick = session.tick(now.duration_since(last_frame));
        last_frame = now;
        if tick.advanced {
            log::trace!("clock at {}s", tick.elapsed_secs);
        }

        let line = match received {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        if line.trim().is_empty() {
            print_board(&session)?;
            continue;
        }

        let keep_going = match Command::parse(&line) {
            Ok(command) => match apply(&mut session, command) {
                Ok(keep_going) => keep_going,
                Err(err) => {
                    println!("{err}");
                    true
                }
            },
            Err(err) => {
                println!("{err:#}");
                true
            }
        };
        if !keep_going {
            break;
        }
        print_board(&session)?;
    }

    Ok(())
}
