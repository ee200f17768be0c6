//! quire - single-admin article manager
//!
//! Stores short articles and one admin account in a local `.quire/`
//! workspace, with a published feed, backup/restore and a command-line
//! front end.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuireError;
