//! Configuration models shared across the admin.

pub mod config;
