//! Domain logic for the spendlog expense tracker.
//!
//! This crate is pure: no I/O, no SQL, no HTTP. The `db` crate supplies
//! stored rows and the `api` crate supplies request context; everything
//! here is a deterministic function of its arguments.

pub mod budget;
pub mod category;
pub mod error;
pub mod limits;
pub mod ownership;
pub mod picture;
pub mod types;
