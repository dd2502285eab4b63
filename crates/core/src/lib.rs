//! Domain types and the change-detection engine for collaborative route
//! editing.
//!
//! This crate has zero internal deps and no I/O so that the API/repository
//! layer and any future worker or CLI tooling can share the same comparison
//! logic, action vocabulary, and commit record types.

pub mod actions;
pub mod commit;
pub mod compare;
pub mod error;
pub mod history;
pub mod models;
pub mod types;
