//! Roster API Library
//!
//! This library provides the core functionality for the roster search API:
//! the member/team domain model, typed query composition, the SQLite
//! repositories and the HTTP adapters.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod query;
