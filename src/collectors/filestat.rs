//! The file status gatherer.
//!
//! One invocation probes every configured path in order and emits one
//! observation per path to the injected sink. The whole routine is
//! sequential and blocking; no state survives between invocations.

use std::fs::{self, File};
use std::io;

use log::{debug, warn};
use thiserror::Error;

use crate::constants::MEASUREMENT;
use crate::models::Observation;
use crate::sink::Sink;
use crate::utils::{hash, mode};

/// Error returned by a gather invocation.
///
/// The two variants are never combined: a fatal read failure aborts the
/// batch and discards any accumulated per-target failures.
#[derive(Debug, Error)]
pub enum GatherError {
    /// Non-fatal per-target failures, in probe order. The batch ran to
    /// completion; every target after a failed one was still attempted.
    #[error("{}", .errors.join("; "))]
    Partial { errors: Vec<String> },

    /// The content stream failed mid-checksum after a successful open.
    #[error("failed reading {path} while hashing: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Probes a configured set of file paths for status metrics.
#[derive(Debug, Clone, Default)]
pub struct FileStat {
    /// Paths to gather stats about, pre-expanded by the host runtime
    pub files: Vec<String>,
    /// Read each file's entire content and report an MD5 checksum
    pub checksum: bool,
}

impl FileStat {
    pub fn new(files: Vec<String>, checksum: bool) -> Self {
        FileStat { files, checksum }
    }

    /// One-line description of what this collector reports
    pub fn description(&self) -> &'static str {
        "Read stats about given file(s)"
    }

    /// Sample configuration snippet for this collector
    pub fn sample_config(&self) -> &'static str {
        crate::config::SAMPLE_CONFIG
    }

    /// Probe every configured path and emit one observation per path.
    ///
    /// A missing file is not an error: it yields a normal `exists=0`
    /// observation. A metadata or open failure is recorded and the batch
    /// continues; the recorded failures come back as a single
    /// [`GatherError::Partial`] once all targets were attempted. A read
    /// failure while streaming a checksum is fatal and returns
    /// immediately as [`GatherError::Read`].
    pub fn gather(&self, sink: &mut dyn Sink) -> Result<(), GatherError> {
        let mut soft_errors: Vec<String> = Vec::new();

        for file in &self.files {
            let mut obs = Observation::absent(file);

            let metadata = match fs::metadata(file) {
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // Expected terminal state, report and move on
                    debug!("{} does not exist", file);
                    sink.add_fields(MEASUREMENT, obs.fields(), obs.tags());
                    continue;
                }
                Err(e) => {
                    warn!("Failed to stat {}: {}", file, e);
                    soft_errors.push(format!("failed to stat {}: {}", file, e));
                    continue;
                }
                Ok(metadata) => metadata,
            };

            obs.exists = true;
            obs.size_bytes = Some(metadata.len());
            obs.mode = Some(mode::format_mode(&metadata));

            if self.checksum {
                match File::open(file) {
                    Err(e) => {
                        // Stat succeeded but the open did not; the
                        // observation still goes out, just without a
                        // checksum field.
                        warn!("Failed to open {} for hashing: {}", file, e);
                        soft_errors.push(format!("failed to open {}: {}", file, e));
                    }
                    Ok(handle) => {
                        // The handle drops on every path out of this call.
                        let digest =
                            hash::digest_reader(handle).map_err(|source| GatherError::Read {
                                path: file.clone(),
                                source,
                            })?;
                        obs.checksum = Some(digest);
                    }
                }
            }

            sink.add_fields(MEASUREMENT, obs.fields(), obs.tags());
        }

        if soft_errors.is_empty() {
            Ok(())
        } else {
            Err(GatherError::Partial {
                errors: soft_errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::test_utils::create_temp_file;

    #[test]
    fn test_empty_target_list_is_a_noop() {
        let probe = FileStat::default();
        let mut sink = MemorySink::new();

        probe.gather(&mut sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_file_emits_bare_observation() {
        let probe = FileStat::new(vec!["/no/such/path/anywhere".to_string()], false);
        let mut sink = MemorySink::new();

        probe.gather(&mut sink).unwrap();

        assert_eq!(sink.len(), 1);
        let metric = &sink.metrics()[0];
        assert_eq!(metric.measurement, MEASUREMENT);
        assert_eq!(metric.fields["exists"].as_int(), Some(0));
        assert_eq!(metric.fields.len(), 1);
    }

    #[test]
    fn test_checksum_field_matches_content() {
        let file = create_temp_file(b"hello").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let probe = FileStat::new(vec![path.clone()], true);
        let mut sink = MemorySink::new();
        probe.gather(&mut sink).unwrap();

        let metric = sink.find_by_tag("file", &path).unwrap();
        assert_eq!(metric.fields["size_bytes"].as_int(), Some(5));
        assert_eq!(
            metric.fields["checksum"].as_text(),
            Some("5d41402abc4b2a76b9719d911017c592")
        );
    }

    #[test]
    fn test_partial_error_preserves_order() {
        // A regular file used as a directory component makes the stat fail
        // with something other than NotFound.
        let file = create_temp_file(b"plain file").unwrap();
        let bad_a = format!("{}/child_a", file.path().display());
        let bad_b = format!("{}/child_b", file.path().display());

        let probe = FileStat::new(vec![bad_a, bad_b], false);
        let mut sink = MemorySink::new();

        match probe.gather(&mut sink) {
            Err(GatherError::Partial { errors }) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("child_a"), "first entry was {}", errors[0]);
                assert!(errors[1].contains("child_b"), "second entry was {}", errors[1]);
                let joined = format!("{}", GatherError::Partial { errors });
                assert!(joined.contains("; "));
            }
            other => panic!("expected partial error, got {:?}", other),
        }

        // Targets that fail the stat non-fatally do not emit observations
        assert!(sink.is_empty());
    }
}
