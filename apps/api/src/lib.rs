//! Roster API Library
//!
//! This library provides the core functionality for the Roster API: the
//! user domain and its validation rules, repository implementations and the
//! HTTP adapters that expose them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
