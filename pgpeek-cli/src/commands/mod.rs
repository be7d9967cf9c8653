//! CLI command implementations.

pub mod config;
pub mod db;
pub mod roles;
pub mod tenants;
pub mod users;
pub mod version;

#[cfg(test)]
pub(crate) mod fake;
