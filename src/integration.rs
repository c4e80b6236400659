//! Integration layer
//!
//! This module wires the pure core to the infrastructure:
//! - Runtime: the message pump (raw → domain → update → commands)
//! - AppRunner: the interactive TUI loop

pub mod app_runner;
pub mod runtime;
