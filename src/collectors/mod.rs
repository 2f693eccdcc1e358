// Re-export the filestat collector surface
pub mod filestat;

pub use filestat::{FileStat, GatherError};
