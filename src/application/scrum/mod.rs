//! Scrum use case - one full daily run
//!
//! The run is a fixed sequence: post the prompt, build the channel roster,
//! locate the prompt's thread, then poll a bounded number of rounds,
//! scanning thread replies and nudging whoever has not posted the
//! three-line update yet.

pub mod notifier;
pub mod prompt;
pub mod roster;
pub mod runner;
pub mod scanner;
pub mod thread;

pub use runner::{PollSettings, ScrumRunner};
