//! Application core: pure engine logic, zero I/O.
//!
//! This module contains the interaction rules for the page: which action
//! moves which gauge, which notifications appear, and how scheduled ticks
//! are dispatched.  All interaction with the host happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without a real event loop.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
