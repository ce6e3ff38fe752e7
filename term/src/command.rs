use anyhow::{Context, Result, bail};
use sweeper_core::{Coord, Coord2};

pub const HELP: &str = "\
commands:
  o X Y    open a cell
  f X Y    toggle a flag
  p X Y    hold the pointer on a cell
  u        lift the pointer without opening
  r        restart with a new board
  d        dump the board as JSON
  h        show this help
  q        quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(Coord2),
    Flag(Coord2),
    Press(Coord2),
    Release,
    Restart,
    Dump,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb {
            "o" | "open" => Self::Open(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "p" | "press" => Self::Press(parse_coords(&mut words)?),
            "u" | "release" => Self::Release,
            "r" | "restart" => Self::Restart,
            "d" | "dump" => Self::Dump,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}, try h"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument {extra:?}");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2> {
    let mut axis = |name: &str| -> Result<Coord> {
        let word = words.next().with_context(|| format!("missing {name}"))?;
        word.parse()
            .with_context(|| format!("{name} must be a number from 0 to {}", Coord::MAX))
    };
    let x = axis("x")?;
    let y = axis("y")?;
    Ok((x, y))
}
