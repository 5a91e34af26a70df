//! Manifest data model for packaged extension bundles.
//!
//! # Responsibility
//! - Define the deserialized shape of `manifest.json`.
//! - Provide ordered handler-path collection for verification.
//!
//! # Invariants
//! - Handler order is `bot`, then `commands` in array order, then `widget`.
//! - Unknown manifest fields are ignored, never rejected.

pub mod manifest;
