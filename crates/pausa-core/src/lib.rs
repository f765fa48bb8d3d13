//! # Pausa Core Library
//!
//! Core logic for the Pausa interval timer: a work/break session state
//! machine driven by a fixed one-second cadence. Hosts (the CLI binary,
//! tests) supply the prompt, display, and notification capabilities; this
//! library owns every phase transition.
//!
//! ## Architecture
//!
//! - **Session**: a countdown state machine that requires its driver to
//!   invoke `tick()` once per elapsed second
//! - **TickDriver**: the cadence task translating wall-clock time into ticks
//! - **SessionController**: the start/stop/break command surface over one
//!   owned session and its driver
//! - **Storage**: TOML-based configuration for prompt defaults
//!
//! ## Key Components
//!
//! - [`Session`]: phase and remaining-time state machine
//! - [`TickDriver`]: one-second cadence driver
//! - [`SessionController`]: command surface handed to host command handlers
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod prompt;
pub mod sinks;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, InputError, TimerError};
pub use events::Event;
pub use sinks::{DisplaySink, NotificationSink};
pub use storage::Config;
pub use timer::{Phase, Session, SessionConfig, SessionController, TickDriver, TickSignal};
