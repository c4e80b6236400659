//! # Cheerdown - a countdown timer that cheers you on
//!
//! A terminal countdown timer, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (ticker control, persistence, randomness)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use cheerdown::{core::msg::session::SessionMsg, update, AppState, Config, Msg};
//!
//! // Initialize state from configuration
//! let state = AppState::new(Config::default());
//!
//! // Process messages
//! let (state, _cmds) = update(Msg::Session(SessionMsg::NameChanged("Ada".into())), state);
//! let (state, _cmds) = update(Msg::Session(SessionMsg::Start), state);
//!
//! // State is now updated and commands contain side effects to execute
//! assert_eq!(state.session.remaining_secs, Some(10));
//! ```
//!
//! ## Key Features
//!
//! - **Predictable State Management**: All state changes go through the update function
//! - **Testable**: Pure functions make testing straightforward; ticks are
//!   messages, so tests never wait on a wall clock
//! - **Separation of Concerns**: Side effects are clearly separated from state logic
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update logic and command execution
//! - [`domain`] - Session phases, durations and quotes
//! - [`infrastructure`] - Terminal, ticker, config, CLI and name store
//! - [`integration`] - Runtime message pump and the TUI app runner
//! - [`presentation`] - UI components and widgets

#![deny(warnings)]
#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;
pub use infrastructure::config::Config;
pub use integration::runtime::Runtime;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
