//! Domain entities - Core business objects with no external dependencies

pub mod member;
pub mod message;
pub mod roster;

pub use member::Member;
pub use message::ChannelMessage;
pub use roster::{ReplyStatus, Roster, StatusTable};
