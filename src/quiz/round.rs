//! Per-round state: the country on screen, the clock, and any feedback

use super::dataset::CountryRecord;
use super::scorer::INITIAL_TIME_SECS;

/// How a round ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
    Timeout,
}

/// Result shown during the feedback window
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub outcome: Outcome,
    /// Country name in the display language at the moment of judgement
    pub revealed_name: String,
}

/// The live round. Exactly one exists while playing.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub country: CountryRecord,
    pub seconds_remaining: u32,
    pub paused: bool,
    pub feedback: Option<Feedback>,
    /// Text typed so far
    pub input: String,
}

impl RoundState {
    /// Fresh round: full clock, no feedback, empty input, unpaused
    pub fn new(country: CountryRecord) -> Self {
        RoundState {
            country,
            seconds_remaining: INITIAL_TIME_SECS,
            paused: false,
            feedback: None,
            input: String::new(),
        }
    }

    /// Timer running and input accepted
    pub fn is_counting(&self) -> bool {
        self.feedback.is_none() && !self.paused
    }

    pub fn has_feedback(&self) -> bool {
        self.feedback.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_is_counting() {
        let round = RoundState::new(CountryRecord::new("cl", "Chile", "Chile"));
        assert_eq!(round.seconds_remaining, INITIAL_TIME_SECS);
        assert!(round.is_counting());
        assert!(round.input.is_empty());
    }

    #[test]
    fn test_paused_or_feedback_stops_counting() {
        let mut round = RoundState::new(CountryRecord::new("cl", "Chile", "Chile"));
        round.paused = true;
        assert!(!round.is_counting());

        round.paused = false;
        round.feedback = Some(Feedback {
            outcome: Outcome::Timeout,
            revealed_name: "Chile".to_string(),
        });
        assert!(!round.is_counting());
        assert!(round.has_feedback());
    }
}
