//! Common constants for the pkgstub crates.
//!
//! This crate provides values shared by the symbol table, the stub emitter and
//! the driver:
//! - Layout limits for rendered declarations (`limits`)
//! - Well-known symbol and member names produced by the front end (`names`)

// Centralized layout limits
pub mod limits;

// Names the front end synthesizes and the emitter special-cases
pub mod names;
