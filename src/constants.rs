//! Global constants for the filestat probe.

/// Measurement name reported with every observation
pub const MEASUREMENT: &str = "filestat";

/// Tag key carrying the probed path
pub const FILE_TAG: &str = "file";

/// Buffer size for checksum streaming (1MB)
pub const HASH_BUFFER_SIZE: usize = 1024 * 1024;
