use crate::dictionary::Difficulty;
use crate::quiz::{EndReason, Feedback, Phase, Session};

#[derive(Clone, Copy, PartialEq, Eq)]
struct Rgb
{
    r: u8,
    g: u8,
    b: u8,
}

const GREEN: Rgb = Rgb { r: 0, g: 200, b: 80 };
const RED: Rgb = Rgb { r: 230, g: 60, b: 60 };
const GOLD: Rgb = Rgb { r: 255, g: 215, b: 0 };

const TITLE: &str = "CapitalGuessr";
const RULE_WIDTH: usize = 40;

/// Screen contents for the session's current phase, one entry per line.
pub fn render(session: &Session) -> Vec<String>
{
    match session.phase() {
        Phase::NotStarted => render_menu(session),
        Phase::InProgress => render_round(session),
        Phase::GameOver => render_summary(session),
    }
}

fn render_menu(session: &Session) -> Vec<String>
{
    let dictionary = session.dictionary();
    let mut lines = Vec::new();
    lines.push(paint(TITLE, GOLD));
    lines.push("Guess the capital correctly".to_string());
    lines.push(String::new());
    lines.push("Choose a difficulty:".to_string());
    for (idx, tier) in Difficulty::ALL.iter().enumerate() {
        lines.push(format!(
            "  {}. {:<8} ({} countries)",
            idx + 1,
            tier.to_string(),
            dictionary.countries_for(*tier).len()
        ));
    }
    lines.push(format!(
        "  4. {:<8} ({} countries)",
        "All",
        dictionary.country_count()
    ));
    lines.push(String::new());
    lines.push("Press 1-4 to start (A also picks All), Esc to quit.".to_string());
    lines
}

fn render_round(session: &Session) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push(format!("{} - {}", paint(TITLE, GOLD), pool_label(session.difficulty())));
    lines.push(format!("Time Remaining: {} seconds", session.time_remaining()));
    lines.push(format!("Score: {} / {}", session.score(), session.attempts()));
    lines.push(format!(
        "Countries left: {}",
        session.pool_size().saturating_sub(session.used_countries().len())
    ));
    lines.push("-".repeat(RULE_WIDTH));
    if let Some(country) = session.current_country() {
        lines.push(format!("What is the capital of {}?", country));
    }
    lines.push(format!("Answer: {}_", session.answer()));
    lines.push(String::new());
    lines.push(session.feedback().map(render_feedback).unwrap_or_default());
    lines.push("Enter submit  Tab skip  Ctrl-R restart  Esc quit".to_string());
    lines
}

fn render_summary(session: &Session) -> Vec<String>
{
    let mut lines = Vec::new();
    lines.push(paint("Game Over!", GOLD));
    lines.push(
        match session.end_reason() {
            Some(EndReason::Exhausted) => "You went through every country!",
            _ => "Time's up!",
        }
        .to_string(),
    );
    lines.push(String::new());
    lines.push(format!("Final Score: {} / {}", session.score(), session.attempts()));
    lines.push(format!("Accuracy: {}%", session.accuracy()));
    if let Some(feedback) = session.feedback() {
        lines.push(format!("Last round: {}", render_feedback(feedback)));
    }
    lines.push(String::new());
    lines.push("Press Enter or R to play again, Esc to quit.".to_string());
    lines
}

fn render_feedback(feedback: &Feedback) -> String
{
    let color = if feedback.is_correct() { GREEN } else { RED };
    paint(&feedback.to_string(), color)
}

fn pool_label(difficulty: Option<Difficulty>) -> String
{
    match difficulty {
        Some(tier) => tier.to_string(),
        None => "All countries".to_string(),
    }
}

fn paint(text: &str, color: Rgb) -> String
{
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", color.r, color.g, color.b, text)
}
