//! Console blackjack against the dealer.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use blackjack21::{Console, Decision, Game, GameOptions, Hand, RoundResult};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;

/// Play one round of blackjack against a dealer who draws to 17.
#[derive(Parser, Debug)]
#[command(name = "blackjack", version)]
struct Args {
    /// Seed for a reproducible deck. Uses OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of shuffle passes applied to the fresh deck.
    #[arg(long, default_value_t = 10)]
    shuffles: u32,

    /// Total the dealer stands on.
    #[arg(long, default_value_t = 17)]
    dealer_stands_on: u8,

    /// Log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    const fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    fn options(&self) -> GameOptions {
        GameOptions::default()
            .with_shuffle_iterations(self.shuffles)
            .with_dealer_stands_on(self.dealer_stands_on)
    }
}

/// Console on the process's stdin and stdout.
struct Terminal<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Terminal<I, O> {
    fn read_decision(&mut self) -> io::Result<Decision> {
        write!(self.output, "Hit or stand? [h/s]: ")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(parse_decision(&line))
    }
}

impl<I: BufRead, O: Write> Console for Terminal<I, O> {
    fn show_player_value(&mut self, value: u8) {
        if let Err(err) = writeln!(self.output, "PLAYER: {value}") {
            warn!(%err, "failed to write player value");
        }
    }

    fn decide(&mut self, _hand: &Hand) -> Decision {
        self.read_decision().unwrap_or_else(|err| {
            warn!(%err, "failed to read decision, standing");
            Decision::Stand
        })
    }

    fn announce(&mut self, result: &RoundResult) {
        if let Err(err) = writeln!(self.output, "{result}") {
            warn!(%err, "failed to write result");
        }
    }
}

/// First non-blank character decides; empty input stands.
fn parse_decision(line: &str) -> Decision {
    line.trim()
        .chars()
        .next()
        .map_or(Decision::Stand, Decision::from_input)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.level())
        .with_writer(io::stderr)
        .init();

    let options = args.options();
    let mut game = args
        .seed
        .map_or_else(|| Game::from_os_rng(options), |seed| Game::new(options, seed));

    let stdin = io::stdin();
    let mut terminal = Terminal {
        input: stdin.lock(),
        output: io::stdout(),
    };

    game.play_round(&mut terminal).context("round aborted")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_fields() {
        let args = Args::parse_from([
            "blackjack",
            "--seed",
            "7",
            "--shuffles",
            "1",
            "--dealer-stands-on",
            "16",
            "-vv",
        ]);

        assert_eq!(args.seed, Some(7));
        assert_eq!(args.level(), LevelFilter::TRACE);
        assert_eq!(
            args.options(),
            GameOptions::default()
                .with_shuffle_iterations(1)
                .with_dealer_stands_on(16)
        );
    }

    #[test]
    fn defaults_match_game_options() {
        let args = Args::parse_from(["blackjack"]);
        assert_eq!(args.seed, None);
        assert_eq!(args.level(), LevelFilter::WARN);
        assert_eq!(args.options(), GameOptions::default());
    }

    #[test]
    fn anything_but_h_stands() {
        assert_eq!(parse_decision("h\n"), Decision::Hit);
        assert_eq!(parse_decision("  H"), Decision::Hit);
        assert_eq!(parse_decision("hit"), Decision::Hit);
        assert_eq!(parse_decision("s\n"), Decision::Stand);
        assert_eq!(parse_decision("x"), Decision::Stand);
        assert_eq!(parse_decision("\n"), Decision::Stand);
    }

    #[test]
    fn terminal_plays_scripted_round() {
        let mut terminal = Terminal {
            input: "s\n".as_bytes(),
            output: Vec::new(),
        };
        let mut game = Game::new(GameOptions::default(), 3);

        let result = game.play_round(&mut terminal).unwrap();
        let transcript = String::from_utf8(terminal.output).unwrap();

        assert!(transcript.ends_with(&format!("{result}\n")));
    }
}
