//! pgpeek CLI - Command-line inspection of a PostgreSQL database.
//!
//! This crate provides the `pgpeek` binary: connection metadata, table,
//! tenant, role and user listings, and a dump of the loaded configuration.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod output;
