//! Session state tracking
//!
//! Maintains:
//! - Selected difficulty and display language
//! - Cumulative score, correct and error counts
//! - Phase (menu, playing, finished)

use super::queue::Difficulty;
use super::round::Outcome;

/// Display language
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Spanish => Language::English,
            Language::English => Language::Spanish,
        }
    }
}

/// Top-level session phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    Finished,
}

/// Final tuple shown on the results screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionResults {
    pub score: u32,
    pub correct_count: u32,
    pub error_count: u32,
}

/// Complete session state
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Mode picked from the menu (None until a session starts)
    pub mode: Option<Difficulty>,
    pub language: Language,
    /// Total points; never decreases within a session
    pub score: u32,
    pub correct_count: u32,
    pub error_count: u32,
    pub phase: Phase,
    /// Rounds in the session's queue when it was built
    pub total_rounds: usize,
}

impl SessionState {
    pub fn new(language: Language) -> Self {
        SessionState {
            language,
            ..Default::default()
        }
    }

    /// Start a fresh session, keeping only the language
    pub fn begin(&mut self, mode: Difficulty, total_rounds: usize) {
        *self = SessionState {
            mode: Some(mode),
            phase: Phase::Playing,
            total_rounds,
            ..SessionState::new(self.language)
        };
    }

    /// Back to the menu with fresh counters
    pub fn reset(&mut self) {
        *self = SessionState::new(self.language);
    }

    /// Record a finished round
    pub fn record_outcome(&mut self, outcome: Outcome, points: u32) {
        match outcome {
            Outcome::Success => {
                self.score += points;
                self.correct_count += 1;
            }
            Outcome::Error | Outcome::Timeout => self.error_count += 1,
        }
    }

    pub fn finish(&mut self) {
        self.phase = Phase::Finished;
    }

    /// Rounds answered or timed out so far
    pub fn rounds_completed(&self) -> u32 {
        self.correct_count + self.error_count
    }

    /// Final results, only once the session is finished
    pub fn results(&self) -> Option<SessionResults> {
        (self.phase == Phase::Finished).then_some(SessionResults {
            score: self.score,
            correct_count: self.correct_count,
            error_count: self.error_count,
        })
    }
}
