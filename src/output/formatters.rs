//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Code, Colour, Feedback};
use crate::game::Round;
use colored::{ColoredString, Colorize};

/// Colour name painted in its own colour
#[must_use]
pub fn paint_colour(colour: Colour) -> ColoredString {
    let name = colour.name();
    match colour {
        Colour::Red => name.red(),
        Colour::Yellow => name.yellow(),
        Colour::Orange => name.truecolor(255, 165, 0),
        Colour::Green => name.green(),
        Colour::Blue => name.blue(),
        Colour::Purple => name.magenta(),
    }
}

/// Code as space-separated painted colour names
#[must_use]
pub fn format_code(code: &Code) -> String {
    code.colours()
        .iter()
        .map(|&c| paint_colour(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feedback as key pegs: ● exact, ○ colour only, · nothing
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let exact = usize::from(feedback.exact());
    let colour_only = usize::from(feedback.colour_only());
    let mut pegs = String::with_capacity(CODE_LENGTH * 3);
    pegs.push_str(&"●".repeat(exact));
    pegs.push_str(&"○".repeat(colour_only));
    pegs.push_str(&"·".repeat(CODE_LENGTH.saturating_sub(exact + colour_only)));
    pegs
}

/// One history line, e.g. `Guess #3 red blue green purple ●○○· (1, 2)`
#[must_use]
pub fn format_round(round: &Round) -> String {
    format!(
        "Guess #{:<2} {} {} {}",
        round.number,
        format_code(&round.guess),
        feedback_pegs(round.feedback),
        round.feedback
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_for_mixed_feedback() {
        assert_eq!(feedback_pegs(Feedback::new(1, 2).unwrap()), "●○○·");
    }

    #[test]
    fn pegs_for_win() {
        assert_eq!(feedback_pegs(Feedback::WIN), "●●●●");
    }

    #[test]
    fn pegs_for_colour_only() {
        assert_eq!(feedback_pegs(Feedback::new(0, 4).unwrap()), "○○○○");
    }

    #[test]
    fn format_code_mentions_every_colour() {
        let code: Code = "red yellow orange green".parse().unwrap();
        let text = format_code(&code);
        for name in ["red", "yellow", "orange", "green"] {
            assert!(text.contains(name));
        }
    }

    #[test]
    fn format_round_includes_number_and_feedback() {
        let round = Round {
            number: 3,
            guess: "blue purple red yellow".parse().unwrap(),
            feedback: Feedback::new(0, 2).unwrap(),
        };
        let line = format_round(&round);
        assert!(line.starts_with("Guess #3"));
        assert!(line.ends_with("○○·· (0, 2)"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
