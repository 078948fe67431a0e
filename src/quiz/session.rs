use crate::dictionary::{Capital, Dictionary, Difficulty};
use crate::quiz::answer;
use crate::quiz::selector::{Selection, pick_country};
use crate::quiz::timer::{Countdown, TICK_PERIOD, TickId};
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

pub const DEFAULT_DURATION_SECS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings
{
    pub duration_secs: u32,
    pub seed: Option<u64>,
}

impl Default for Settings
{
    fn default() -> Self
    {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase
{
    NotStarted,
    InProgress,
    GameOver,
}

impl fmt::Display for Phase
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Phase::NotStarted => write!(f, "not started"),
            Phase::InProgress => write!(f, "in progress"),
            Phase::GameOver => write!(f, "game over"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason
{
    TimeUp,
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback
{
    Correct,
    Incorrect
    {
        answer: String,
    },
    Skipped
    {
        answer: String,
    },
}

impl Feedback
{
    pub fn is_correct(&self) -> bool
    {
        matches!(self, Feedback::Correct)
    }
}

impl fmt::Display for Feedback
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Feedback::Correct => write!(f, "Correct!"),
            Feedback::Incorrect { answer } => write!(f, "Incorrect! The answer is {answer}"),
            Feedback::Skipped { answer } => write!(f, "Skipped! The answer is {answer}"),
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum QuizError
{
    #[display("cannot {action} while the game is {phase}")]
    InvalidPhase
    {
        action: &'static str,
        phase: Phase,
    },
}

/// Rounded percentage of correct answers; zero when nothing was attempted.
pub fn accuracy(score: u32, attempts: u32) -> u32
{
    if attempts == 0 {
        return 0;
    }
    (score as f64 / attempts as f64 * 100.0).round() as u32
}

fn display_capital(capital: Option<&Capital>) -> String
{
    capital.map_or_else(|| "unknown".to_string(), |capital| capital.to_string())
}

/// One player's quiz session: NotStarted -> InProgress -> GameOver.
///
/// Every transition out of InProgress cancels the countdown, and ticks from
/// a cancelled or re-armed countdown are dropped.
pub struct Session
{
    dictionary: Dictionary,
    settings: Settings,
    rng: StdRng,
    timer: Countdown,
    phase: Phase,
    difficulty: Option<Difficulty>,
    pool: Vec<String>,
    used: HashSet<String>,
    current: Option<String>,
    score: u32,
    attempts: u32,
    time_remaining: u32,
    answer: String,
    feedback: Option<Feedback>,
    end_reason: Option<EndReason>,
}

impl Session
{
    pub fn new(dictionary: Dictionary, settings: Settings) -> Self
    {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            dictionary,
            settings,
            rng,
            timer: Countdown::new(TICK_PERIOD),
            phase: Phase::NotStarted,
            difficulty: None,
            pool: Vec::new(),
            used: HashSet::new(),
            current: None,
            score: 0,
            attempts: 0,
            time_remaining: settings.duration_secs,
            answer: String::new(),
            feedback: None,
            end_reason: None,
        }
    }

    fn reset(&mut self)
    {
        self.timer.cancel();
        self.used.clear();
        self.current = None;
        self.score = 0;
        self.attempts = 0;
        self.time_remaining = self.settings.duration_secs;
        self.answer.clear();
        self.feedback = None;
        self.end_reason = None;
    }

    fn ensure_phase(&self, expected: Phase, action: &'static str) -> Result<(), QuizError>
    {
        if self.phase == expected {
            Ok(())
        } else {
            Err(QuizError::InvalidPhase {
                action,
                phase: self.phase,
            })
        }
    }

    /// `None` plays over every country in the dictionary.
    pub fn start(&mut self, difficulty: Option<Difficulty>, now: Instant) -> Result<(), QuizError>
    {
        self.ensure_phase(Phase::NotStarted, "start")?;
        self.reset();
        self.difficulty = difficulty;
        self.pool = self.dictionary.pool(difficulty);
        self.phase = Phase::InProgress;
        self.timer.start(now);
        info!(
            difficulty = ?difficulty,
            pool = self.pool.len(),
            duration = self.settings.duration_secs,
            "game started"
        );
        self.next_country();
        Ok(())
    }

    fn next_country(&mut self)
    {
        let next = match pick_country(&mut self.rng, &self.used, &self.pool) {
            Selection::Country(country) => Some(country.to_string()),
            Selection::Exhausted => None,
        };
        self.answer.clear();
        match next {
            Some(country) => {
                debug!(country = %country, "next country");
                self.current = Some(country);
            }
            None => self.finish(EndReason::Exhausted),
        }
    }

    fn finish(&mut self, reason: EndReason)
    {
        self.timer.cancel();
        self.phase = Phase::GameOver;
        self.current = None;
        self.answer.clear();
        self.end_reason = Some(reason);
        info!(
            reason = ?reason,
            score = self.score,
            attempts = self.attempts,
            "game over"
        );
    }

    /// Applies one countdown tick. Returns `false` for a stale tick.
    pub fn tick(&mut self, id: TickId) -> bool
    {
        if self.phase != Phase::InProgress || !self.timer.accepts(id) {
            debug!(?id, phase = %self.phase, "ignoring stale tick");
            return false;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.finish(EndReason::TimeUp);
        }
        true
    }

    /// Fires every tick that has come due by `now`.
    pub fn advance_clock(&mut self, now: Instant)
    {
        for id in self.timer.due(now) {
            self.tick(id);
        }
    }

    pub fn submit(&mut self, raw_answer: &str) -> Result<Feedback, QuizError>
    {
        let country = self.take_current("submit")?;
        let capital = self.dictionary.capitals_of(&country);
        let feedback = if answer::is_correct(raw_answer, capital) {
            Feedback::Correct
        } else {
            Feedback::Incorrect {
                answer: display_capital(capital),
            }
        };
        Ok(self.record(country, feedback))
    }

    fn take_current(&mut self, action: &'static str) -> Result<String, QuizError>
    {
        self.ensure_phase(Phase::InProgress, action)?;
        match self.current.take() {
            Some(country) => Ok(country),
            None => unreachable!("a game in progress always has a current country"),
        }
    }

    /// Submits whatever is currently typed into the answer field.
    pub fn submit_input(&mut self) -> Result<Feedback, QuizError>
    {
        self.ensure_phase(Phase::InProgress, "submit")?;
        let raw_answer = std::mem::take(&mut self.answer);
        self.submit(&raw_answer)
    }

    /// Counts as an attempt but never as a point.
    pub fn skip(&mut self) -> Result<Feedback, QuizError>
    {
        let country = self.take_current("skip")?;
        let feedback = Feedback::Skipped {
            answer: display_capital(self.dictionary.capitals_of(&country)),
        };
        Ok(self.record(country, feedback))
    }

    fn record(&mut self, country: String, feedback: Feedback) -> Feedback
    {
        if feedback.is_correct() {
            self.score += 1;
        }
        self.attempts += 1;
        info!(
            country = %country,
            result = %feedback,
            score = self.score,
            attempts = self.attempts,
            "round finished"
        );
        self.used.insert(country);
        self.feedback = Some(feedback.clone());
        self.next_country();
        feedback
    }

    /// Valid from any phase; always lands on NotStarted.
    pub fn restart(&mut self)
    {
        self.reset();
        self.phase = Phase::NotStarted;
        self.difficulty = None;
        self.pool.clear();
        info!("session restarted");
    }

    pub fn push_char(&mut self, ch: char)
    {
        if self.phase == Phase::InProgress {
            self.answer.push(ch);
        }
    }

    pub fn backspace(&mut self)
    {
        self.answer.pop();
    }

    pub fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }

    pub fn phase(&self) -> Phase
    {
        self.phase
    }

    pub fn difficulty(&self) -> Option<Difficulty>
    {
        self.difficulty
    }

    pub fn current_country(&self) -> Option<&str>
    {
        self.current.as_deref()
    }

    pub fn used_countries(&self) -> &HashSet<String>
    {
        &self.used
    }

    pub fn pool_size(&self) -> usize
    {
        self.pool.len()
    }

    pub fn score(&self) -> u32
    {
        self.score
    }

    pub fn attempts(&self) -> u32
    {
        self.attempts
    }

    pub fn accuracy(&self) -> u32
    {
        accuracy(self.score, self.attempts)
    }

    pub fn time_remaining(&self) -> u32
    {
        self.time_remaining
    }

    pub fn answer(&self) -> &str
    {
        &self.answer
    }

    pub fn feedback(&self) -> Option<&Feedback>
    {
        self.feedback.as_ref()
    }

    pub fn end_reason(&self) -> Option<EndReason>
    {
        self.end_reason
    }

    #[cfg(test)]
    pub fn tick_id(&self) -> Option<TickId>
    {
        self.timer.current()
    }

    #[cfg(test)]
    pub fn timer_running(&self) -> bool
    {
        self.timer.is_running()
    }
}
