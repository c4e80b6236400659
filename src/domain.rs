//! Domain logic
//!
//! This module contains the countdown-specific business vocabulary:
//! - Session phases and the completion message
//! - Duration choice rules
//! - Motivational quotes and the random-pick capability

pub mod quotes;
pub mod session;
