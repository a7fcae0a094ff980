//! Purrfect interaction engine library.
//!
//! Exposes the pure-logic modules for integration testing and for the
//! presentation layer.  All host I/O (clock, config file, logging) lives
//! behind the port traits in [`app::ports`] with adapters in [`adapters`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod metrics;
pub mod notifications;
pub mod rotation;
pub mod scheduler;
pub mod selection;
