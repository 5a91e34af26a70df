//! Primitive filesystem checks composed by the verifier.
//!
//! # Responsibility
//! - Path existence probing with report emission.
//! - Script bracket-balance scanning with read-failure tolerance.
//!
//! # Invariants
//! - A failed check is a reported result, never a process fault.

pub mod balance;
pub mod exists;
