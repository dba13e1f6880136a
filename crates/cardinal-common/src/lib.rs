//! Common utilities for the Cardinal style engine.
//!
//! This crate provides shared infrastructure used by the engine components:
//! - **Warning System** - colored terminal output for rejected declarations

pub mod warning;
