//! # filestat-probe
//!
//! A point-in-time file status probe: given a configured list of file paths,
//! report whether each file exists, its size, its permission mode, and
//! optionally an MD5 checksum of its content.
//!
//! ## Overview
//!
//! The probe is a data-collection building block. An external runtime owns
//! scheduling, metric buffering, and transport; this crate owns the gathering
//! routine itself. Each invocation iterates the configured paths in order,
//! probes filesystem metadata for each, and emits one observation per path to
//! an injected [`sink::Sink`]. Per-file failures are accumulated and reported
//! once at the end without aborting the batch.
//!
//! ## Usage
//!
//! ```no_run
//! use filestat_probe::collectors::filestat::FileStat;
//! use filestat_probe::sink::MemorySink;
//!
//! # fn main() -> anyhow::Result<()> {
//! let probe = FileStat::new(
//!     vec!["/etc/hostname".to_string(), "/var/log/syslog".to_string()],
//!     false,
//! );
//!
//! let mut sink = MemorySink::new();
//! probe.gather(&mut sink)?;
//!
//! println!("Recorded {} observations", sink.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Observation and typed field/tag maps
//! - [`collectors`]: The gathering routine
//! - [`sink`]: The accumulator seam consumed by the gatherer
//! - [`config`]: Serde config surface and gatherer factory
//! - [`utils`]: Checksum streaming and permission mode rendering
//! - [`constants`]: Measurement and tag names, buffer sizes
//!
//! ## Error Model
//!
//! A missing file is an expected state, not an error. Metadata or open
//! failures are non-fatal: they accumulate into a single combined
//! [`collectors::filestat::GatherError::Partial`] returned after all targets
//! are attempted. A read failure while streaming a checksum is fatal and
//! aborts the whole invocation.

/// Core data models: observations, field values, tag maps
pub mod models;

/// File status collectors
pub mod collectors;

/// Accumulator seam receiving observations
pub mod sink;

/// Configuration surface and gatherer factory
pub mod config;

/// Utility functions for hashing and mode rendering
pub mod utils;

/// Application-wide constants
pub mod constants;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
