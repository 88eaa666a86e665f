//! `planes` - Keep a small list of airplane flights in a JSON file
//!
//! This library provides the record store, JSON persistence, table rendering
//! and command dispatch behind the `planes` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod logging;
pub mod plane;
pub mod storage;

pub use config::Config;
pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use logging::Logger;
pub use plane::{Plane, PlaneList};
