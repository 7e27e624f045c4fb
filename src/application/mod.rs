//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Scrum: prompt formatting, roster building, thread location,
//!   reply scanning, follow-ups, and the bounded poll loop
//! - Errors: Domain-specific errors

pub mod errors;
pub mod scrum;
