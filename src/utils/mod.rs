//! Utility functions for the filestat probe.
//!
//! - **Hashing**: streaming MD5 digest of file content
//! - **Mode**: canonical string rendering of permission/type bits

/// Content checksum calculation
pub mod hash;

/// Permission mode string rendering
pub mod mode;
