//! Round state machine
//!
//! `Game::handle` is the single transition function: it takes the current
//! state by `&mut self` plus one `Event`, and returns the timer `Effect`s the
//! host must carry out. Timer events come back in through `handle` carrying
//! the epoch they were scheduled under; a stale epoch means the timer was
//! cancelled and the event is dropped.
//!
//! States:
//! - `Idle`: menu, no round
//! - `Countdown`: round live, no feedback (possibly paused)
//! - `AwaitingFeedbackDisplay`: answer judged, clock frozen
//! - `Finished`: queue exhausted

use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, trace};

use super::dataset::DatasetProvider;
use super::errors::QuizError;
use super::matcher::{self, AcceptedNames};
use super::queue::{Difficulty, RoundQueue};
use super::round::{Feedback, Outcome, RoundState};
use super::scorer::{self, FEEDBACK_DURATION, TICK_INTERVAL};
use super::session::{Language, Phase, SessionState};

/// Observable machine state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachineState {
    Idle,
    Countdown,
    AwaitingFeedbackDisplay,
    Finished,
}

/// Timers the machine can ask for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// One countdown second
    Tick,
    /// End of the feedback window
    FeedbackExpire,
}

/// A one-shot timer request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledEffect {
    pub kind: TimerKind,
    pub delay: Duration,
    /// Epoch to echo back in `Event::TimerFired`
    pub epoch: u64,
}

/// Side effects for the host runtime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Schedule(ScheduledEffect),
    /// Drop every pending timer
    CancelAll,
}

/// Inputs to the machine: player actions and fired timers
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    SelectMode(Difficulty),
    /// Append a character to the answer
    Type(char),
    /// Delete the last character of the answer
    Erase,
    /// Judge the current answer
    Submit,
    TogglePause,
    ToggleLanguage,
    TimerFired { kind: TimerKind, epoch: u64 },
    /// Manual restart mid-game
    Abort,
    /// Back to the menu from the results screen
    Restart,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::SelectMode(_) => "select_mode",
            Event::Type(_) => "type",
            Event::Erase => "erase",
            Event::Submit => "submit",
            Event::TogglePause => "toggle_pause",
            Event::ToggleLanguage => "toggle_language",
            Event::TimerFired {
                kind: TimerKind::Tick,
                ..
            } => "tick",
            Event::TimerFired {
                kind: TimerKind::FeedbackExpire,
                ..
            } => "feedback_expire",
            Event::Abort => "abort",
            Event::Restart => "restart",
        }
    }
}

/// The quiz: session, queue and live round behind one transition function
pub struct Game<D, R> {
    dataset: D,
    rng: R,
    session: SessionState,
    queue: RoundQueue,
    round: Option<RoundState>,
    /// Bumped whenever pending timers are invalidated
    epoch: u64,
}

impl<D: DatasetProvider, R: Rng> Game<D, R> {
    pub fn new(dataset: D, rng: R, language: Language) -> Self {
        Game {
            dataset,
            rng,
            session: SessionState::new(language),
            queue: RoundQueue::default(),
            round: None,
            epoch: 0,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Rounds still waiting in the queue (excluding the live one)
    pub fn rounds_left(&self) -> usize {
        self.queue.len()
    }

    #[cfg(test)]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }

    pub fn state(&self) -> MachineState {
        match self.session.phase {
            Phase::Menu => MachineState::Idle,
            Phase::Finished => MachineState::Finished,
            Phase::Playing => match &self.round {
                Some(round) if round.has_feedback() => MachineState::AwaitingFeedbackDisplay,
                _ => MachineState::Countdown,
            },
        }
    }

    fn paused(&self) -> bool {
        self.round.as_ref().is_some_and(|round| round.paused)
    }

    /// Apply one event. Forbidden events leave the state untouched and
    /// return `QuizError::InvalidTransition`.
    pub fn handle(&mut self, event: Event) -> Result<Vec<Effect>, QuizError> {
        let state = self.state();
        trace!(event = event.name(), ?state, epoch = self.epoch, "handle");

        match (state, event) {
            (_, Event::ToggleLanguage) => {
                self.session.language = self.session.language.toggled();
                debug!(language = ?self.session.language, "language toggled");
                Ok(Vec::new())
            }
            (_, Event::TimerFired { kind, epoch }) if epoch != self.epoch => {
                trace!(?kind, epoch, current = self.epoch, "stale timer dropped");
                Ok(Vec::new())
            }
            (MachineState::Idle, Event::SelectMode(mode)) => Ok(self.select_mode(mode)),
            (
                MachineState::Countdown,
                Event::TimerFired {
                    kind: TimerKind::Tick,
                    ..
                },
            ) if !self.paused() => Ok(self.tick()),
            (
                MachineState::AwaitingFeedbackDisplay,
                Event::TimerFired {
                    kind: TimerKind::FeedbackExpire,
                    ..
                },
            ) => {
                self.round = None;
                Ok(self.next_round())
            }
            (MachineState::Countdown, Event::TogglePause) => Ok(self.flip_pause()),
            (MachineState::Countdown, Event::Type(c)) if !self.paused() => {
                if let Some(round) = self.round.as_mut() {
                    round.input.push(c);
                }
                Ok(Vec::new())
            }
            (MachineState::Countdown, Event::Erase) if !self.paused() => {
                if let Some(round) = self.round.as_mut() {
                    round.input.pop();
                }
                Ok(Vec::new())
            }
            (MachineState::Countdown, Event::Submit) if !self.paused() => Ok(self.evaluate()),
            (MachineState::Countdown | MachineState::AwaitingFeedbackDisplay, Event::Abort) => {
                info!(score = self.session.score, "session aborted");
                Ok(self.return_to_menu())
            }
            (MachineState::Finished, Event::Restart) => Ok(self.return_to_menu()),
            (state, event) => {
                debug!(event = event.name(), ?state, "event ignored");
                Err(QuizError::InvalidTransition {
                    event: event.name(),
                    state,
                })
            }
        }
    }

    /// Replace the answer buffer with `text` and submit it
    #[allow(dead_code)]
    pub fn submit_answer(&mut self, text: &str) -> Result<Vec<Effect>, QuizError> {
        if self.state() == MachineState::Countdown {
            if let Some(round) = self.round.as_mut().filter(|round| !round.paused) {
                round.input = text.to_string();
            }
        }
        self.handle(Event::Submit)
    }

    fn select_mode(&mut self, mode: Difficulty) -> Vec<Effect> {
        let requested = mode.requested_count(self.dataset.len());
        self.queue = RoundQueue::build(self.dataset.get_all(), requested, &mut self.rng);
        self.session.begin(mode, self.queue.len());
        info!(?mode, rounds = self.queue.len(), "session started");

        let mut effects = self.invalidate_timers();
        effects.extend(self.next_round());
        effects
    }

    /// Pop the next record and start it, or finish on an empty queue
    fn next_round(&mut self) -> Vec<Effect> {
        if self.round.as_ref().is_some_and(RoundState::has_feedback) {
            debug!("round start ignored while feedback is showing");
            return Vec::new();
        }

        match self.queue.pop() {
            Some(country) => {
                debug!(code = %country.code, left = self.queue.len(), "round started");
                self.round = Some(RoundState::new(country));
                let mut effects = self.invalidate_timers();
                effects.push(self.schedule(TimerKind::Tick, TICK_INTERVAL));
                effects
            }
            None => self.finish(),
        }
    }

    fn tick(&mut self) -> Vec<Effect> {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };
        if !round.is_counting() {
            return Vec::new();
        }

        round.seconds_remaining = round.seconds_remaining.saturating_sub(1);
        let remaining = round.seconds_remaining;
        trace!(remaining, "tick");

        if remaining == 0 {
            self.conclude(Outcome::Timeout, 0)
        } else {
            vec![self.schedule(TimerKind::Tick, TICK_INTERVAL)]
        }
    }

    fn flip_pause(&mut self) -> Vec<Effect> {
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };
        round.paused = !round.paused;
        let paused = round.paused;
        debug!(paused, remaining = round.seconds_remaining, "pause toggled");

        let mut effects = self.invalidate_timers();
        if !paused {
            effects.push(self.schedule(TimerKind::Tick, TICK_INTERVAL));
        }
        effects
    }

    fn evaluate(&mut self) -> Vec<Effect> {
        let language = self.session.language;
        let Some(round) = self.round.as_ref() else {
            return Vec::new();
        };

        let accepted = AcceptedNames::new(
            round.country.name_in(language),
            round.country.name_in(language.toggled()),
        );
        if matcher::is_correct(&round.input, accepted) {
            let points = scorer::points(round.seconds_remaining);
            self.conclude(Outcome::Success, points)
        } else {
            self.conclude(Outcome::Error, 0)
        }
    }

    /// Record the outcome, reveal the name and open the feedback window
    fn conclude(&mut self, outcome: Outcome, points: u32) -> Vec<Effect> {
        let language = self.session.language;
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };

        let revealed_name = round.country.name_in(language).to_string();
        debug!(?outcome, points, answer = %revealed_name, "round judged");
        round.feedback = Some(Feedback {
            outcome,
            revealed_name,
        });
        self.session.record_outcome(outcome, points);

        let mut effects = self.invalidate_timers();
        effects.push(self.schedule(TimerKind::FeedbackExpire, FEEDBACK_DURATION));
        effects
    }

    fn finish(&mut self) -> Vec<Effect> {
        self.round = None;
        self.session.finish();
        info!(
            score = self.session.score,
            correct = self.session.correct_count,
            errors = self.session.error_count,
            "session finished"
        );
        self.invalidate_timers()
    }

    fn return_to_menu(&mut self) -> Vec<Effect> {
        self.round = None;
        self.queue.clear();
        self.session.reset();
        self.invalidate_timers()
    }

    fn invalidate_timers(&mut self) -> Vec<Effect> {
        self.epoch += 1;
        vec![Effect::CancelAll]
    }

    fn schedule(&self, kind: TimerKind, delay: Duration) -> Effect {
        Effect::Schedule(ScheduledEffect {
            kind,
            delay,
            epoch: self.epoch,
        })
    }
}
