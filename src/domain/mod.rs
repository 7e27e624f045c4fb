//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (Member, ChannelMessage, Roster, StatusTable)
//! - Traits: Abstractions for infrastructure (ChatTransport)

pub mod entities;
pub mod traits;
