//! Background jobs spawned alongside the HTTP server.

pub mod retention;

pub use retention::spawn_retention_purge;
