//! Host-side timer queue
//!
//! Turns `Effect`s into absolute deadlines and hands fired timers back as
//! `Event`s. The event loop polls input no longer than `next_deadline()`.
//! Each fired event comes with its own deadline; re-arming a timer from that
//! deadline instead of the current time keeps the countdown from drifting.

use std::time::Instant;

use super::machine::{Effect, Event, TimerKind};

#[derive(Clone, Copy, Debug)]
struct Pending {
    deadline: Instant,
    kind: TimerKind,
    epoch: u64,
}

/// Pending one-shot timers
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler {
            pending: Vec::new(),
        }
    }

    /// Carry out effects in order, relative to `now`
    pub fn apply(&mut self, effects: impl IntoIterator<Item = Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::CancelAll => self.pending.clear(),
                Effect::Schedule(scheduled) => self.pending.push(Pending {
                    deadline: now + scheduled.delay,
                    kind: scheduled.kind,
                    epoch: scheduled.epoch,
                }),
            }
        }
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.deadline).min()
    }

    /// Remove and return every timer due at `now` with its deadline,
    /// earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<(Instant, Event)> {
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.deadline <= now);
        self.pending = rest;

        due.sort_by_key(|p| p.deadline);
        due.into_iter()
            .map(|p| {
                (
                    p.deadline,
                    Event::TimerFired {
                        kind: p.kind,
                        epoch: p.epoch,
                    },
                )
            })
            .collect()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
