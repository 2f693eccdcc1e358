//! Canonical string rendering of file permission and type bits.
//!
//! Produces the classic `ls -l` form: one file-type character followed by
//! three rwx triples, with setuid/setgid/sticky folded into the execute
//! positions (`-rwsr-xr-x`, `drwxrwxrwt`, ...).

use std::fs::Metadata;

#[cfg(unix)]
const S_IFMT: u32 = 0o170000;

/// Render the permission mode of a file as a canonical string.
#[cfg(unix)]
pub fn format_mode(metadata: &Metadata) -> String {
    use std::os::unix::fs::MetadataExt;

    let mode = metadata.mode();
    let mut out = String::with_capacity(10);

    out.push(file_type_char(mode));

    // Owner triple, setuid folds into the execute slot
    out.push(if mode & 0o400 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o200 != 0 { 'w' } else { '-' });
    out.push(exec_char(mode & 0o100 != 0, mode & 0o4000 != 0, 's'));

    // Group triple, setgid
    out.push(if mode & 0o040 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o020 != 0 { 'w' } else { '-' });
    out.push(exec_char(mode & 0o010 != 0, mode & 0o2000 != 0, 's'));

    // Other triple, sticky
    out.push(if mode & 0o004 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o002 != 0 { 'w' } else { '-' });
    out.push(exec_char(mode & 0o001 != 0, mode & 0o1000 != 0, 't'));

    out
}

/// Render the permission mode of a file as a canonical string.
///
/// Platforms without POSIX permission bits report only the read-only flag,
/// so the rendering degrades to `rw-rw-rw-` or `r--r--r--` plus the
/// directory bit.
#[cfg(not(unix))]
pub fn format_mode(metadata: &Metadata) -> String {
    let mut out = String::with_capacity(10);
    out.push(if metadata.is_dir() { 'd' } else { '-' });
    out.push_str(if metadata.permissions().readonly() {
        "r--r--r--"
    } else {
        "rw-rw-rw-"
    });
    out
}

#[cfg(unix)]
fn file_type_char(mode: u32) -> char {
    match mode & S_IFMT {
        0o140000 => 's', // socket
        0o120000 => 'l', // symlink
        0o060000 => 'b', // block device
        0o040000 => 'd', // directory
        0o020000 => 'c', // character device
        0o010000 => 'p', // fifo
        _ => '-',
    }
}

#[cfg(unix)]
fn exec_char(execute: bool, special: bool, special_char: char) -> char {
    match (execute, special) {
        (true, false) => 'x',
        (false, false) => '-',
        (true, true) => special_char,
        (false, true) => special_char.to_ascii_uppercase(),
    }
}
