//! Quiz core: queue, round state machine, matching and scoring
//!
//! # Components
//! - `dataset.rs`: Country records and the catalog loader
//! - `queue.rs`: Difficulty modes and the shuffled round queue
//! - `matcher.rs`: Typo-tolerant answer matching
//! - `scorer.rs`: Time-decayed points and timing constants
//! - `round.rs`: Live round state and feedback
//! - `session.rs`: Score and counters across rounds
//! - `machine.rs`: The transition function tying it together
//! - `scheduler.rs`: Cancellable timers for the host loop

pub mod dataset;
pub mod errors;
pub mod machine;
pub mod matcher;
pub mod queue;
pub mod round;
pub mod scheduler;
pub mod scorer;
pub mod session;

pub use dataset::{CountryCatalog, DatasetProvider};
pub use errors::QuizError;
pub use machine::{Event, Game, MachineState};
pub use queue::Difficulty;
pub use round::Outcome;
pub use scheduler::Scheduler;
pub use session::Language;
