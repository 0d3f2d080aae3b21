//! Interactive play
//!
//! Two modes: the player breaks a random code, or the player sets a code and
//! the solver breaks it. Input is re-prompted in a loop until valid; end of
//! input ends the session quietly.

use super::solve::{SolveResult, solve_code_with};
use crate::core::Code;
use crate::game::{Game, MAX_ROUNDS};
use crate::output::formatters::{feedback_pegs, format_code, format_round};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use log::info;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Who guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayMode {
    /// You guess a random secret
    Codebreaker,
    /// You set the secret, the solver guesses
    Codemaker,
}

/// Line-based console over any reader and writer
pub struct Console<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    /// Writer for direct output
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Give back the writer, e.g. to inspect captured output
    pub fn into_output(self) -> W {
        self.out
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Keep prompting until a valid code is entered
    ///
    /// # Errors
    /// Returns an I/O error if reading or writing fails.
    pub fn read_code(&mut self, prompt: &str) -> io::Result<Option<Code>> {
        loop {
            let Some(input) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match Code::parse(&input) {
                Ok(code) => return Ok(Some(code)),
                Err(e) => writeln!(self.out, "Invalid input: {e}. Please try again.")?,
            }
        }
    }

    /// Keep prompting until a play mode is chosen
    ///
    /// # Errors
    /// Returns an I/O error if reading or writing fails.
    pub fn read_mode(&mut self) -> io::Result<Option<PlayMode>> {
        loop {
            let Some(input) = self.read_line("Play as 'codebreaker' or 'codemaker'?")? else {
                return Ok(None);
            };
            match PlayMode::from_str(&input, true) {
                Ok(mode) => return Ok(Some(mode)),
                Err(_) => writeln!(self.out, "Invalid input: choose codebreaker or codemaker.")?,
            }
        }
    }

    /// Keep prompting until yes or no
    ///
    /// # Errors
    /// Returns an I/O error if reading or writing fails.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(input) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match input.to_lowercase().as_str() {
                "yes" | "y" => return Ok(Some(true)),
                "no" | "n" => return Ok(Some(false)),
                _ => writeln!(self.out, "Invalid input: answer yes or no.")?,
            }
        }
    }
}

/// The player guesses a random secret
///
/// Returns the finished game, or `None` if input ended first.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn play_codebreaker<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<Option<Game>> {
    writeln!(
        console.out(),
        "Colours: red, yellow, orange, green, blue, purple (initials work too).\n\
         A code has {} different colours. Feedback (exact, colour only) follows each guess:\n\
         ● right colour in the right place, ○ right colour in the wrong place.",
        crate::core::CODE_LENGTH
    )?;

    let mut game = Game::new(Code::random(rng));

    while !game.is_over() {
        let prompt = format!(
            "Guess {} of {}: enter four colours separated by spaces",
            game.current_round(),
            game.max_rounds()
        );
        let Some(guess) = console.read_code(&prompt)? else {
            return Ok(None);
        };
        game.submit(guess).context("scoring guess")?;

        writeln!(console.out(), "\nGuesses so far:")?;
        for round in game.rounds() {
            writeln!(console.out(), "  {}", format_round(round))?;
        }
        writeln!(console.out())?;
    }

    if game.is_won() {
        let rounds = game.rounds().len();
        writeln!(
            console.out(),
            "{} You cracked the code in {rounds} {}.",
            "Well done!".green().bold(),
            if rounds == 1 { "guess" } else { "guesses" }
        )?;
    } else {
        writeln!(
            console.out(),
            "{} You ran out of guesses.",
            "Out of luck.".red().bold()
        )?;
    }
    writeln!(console.out(), "The secret was {}.", format_code(&game.secret()))?;
    info!("codebreaker game finished, won: {}", game.is_won());

    Ok(Some(game))
}

/// The player sets a secret and the solver breaks it
///
/// Returns the solver's game, or `None` if input ended first.
///
/// # Errors
/// Returns an error on I/O failure or if the solver runs out of candidates.
pub fn play_codemaker<R: BufRead, W: Write, S: Strategy>(
    console: &mut Console<R, W>,
    solver: &mut Solver<S>,
) -> Result<Option<SolveResult>> {
    let Some(secret) =
        console.read_code("Enter your secret code: four different colours separated by spaces")?
    else {
        return Ok(None);
    };

    let mut round = 0;
    let mut written = Ok(());
    let result = solve_code_with(secret, solver, MAX_ROUNDS, |step| {
        round += 1;
        if written.is_ok() {
            written = writeln!(
                console.out(),
                "Round {round:<2} the computer guesses {} {} {}  ({} codes left)",
                format_code(&step.guess),
                feedback_pegs(step.feedback),
                step.feedback,
                step.candidates_after
            );
        }
    })
    .context("solver game")?;
    written?;

    if result.success {
        writeln!(
            console.out(),
            "The computer found your code in {} rounds.",
            result.rounds()
        )?;
    } else {
        writeln!(
            console.out(),
            "The computer failed to find {} in {MAX_ROUNDS} rounds.",
            format_code(&secret)
        )?;
    }

    Ok(Some(result))
}

/// Play games until the player declines another or input ends
///
/// `mode` fixes the mode for every game; `None` asks each time.
/// `make_strategy` builds a fresh strategy for every codemaker game.
///
/// # Errors
/// Returns an error on I/O failure or a solver failure.
pub fn run_session<R, W, S, F, G>(
    console: &mut Console<R, W>,
    mode: Option<PlayMode>,
    mut make_strategy: F,
    rng: &mut G,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    S: Strategy,
    F: FnMut() -> S,
    G: Rng + ?Sized,
{
    let mut games = 0;

    loop {
        let mode = match mode {
            Some(mode) => mode,
            None => match console.read_mode()? {
                Some(mode) => mode,
                None => break,
            },
        };

        let finished = match mode {
            PlayMode::Codebreaker => play_codebreaker(console, rng)?.is_some(),
            PlayMode::Codemaker => {
                let mut solver = Solver::new(make_strategy());
                play_codemaker(console, &mut solver)?.is_some()
            }
        };
        if !finished {
            break;
        }
        games += 1;

        if console.confirm("Play again? (yes/no)")? != Some(true) {
            break;
        }
    }

    writeln!(console.out(), "Thanks for playing!")?;
    Ok(games)
}
