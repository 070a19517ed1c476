//! Core types and functionality for the switchboard argument model.
//!
//! This crate turns a raw command line into a validated, typed options
//! struct: the tokenizer splits the input into tokens, [`Parameters`]
//! stores them with switch-prefix awareness and typed accessors, the
//! binder maps a store onto any [`Bindable`] options type, and the command
//! layer dispatches bound commands into process exit codes.

mod binder;
mod command;
mod error;
mod params;
mod tokenizer;

// Re-export core types
pub use binder::{bind, Bindable, Member, ValueKind};
pub use command::{BoundCommand, Command, Dispatcher, ExitCode};
pub use error::{Error, Result};
pub use params::{Parameters, DEFAULT_SWITCHES};
pub use tokenizer::tokenize;

/// Re-export common types used in options structs
pub use chrono::{DateTime, Utc};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{
        bind, tokenize, Bindable, BoundCommand, Command, Dispatcher, Error, ExitCode, Member,
        Parameters, Result, ValueKind,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
