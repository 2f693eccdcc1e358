use std::io::{self, Read};

use md5::{Digest, Md5};

use crate::constants::HASH_BUFFER_SIZE;

/// Stream a reader through an MD5 digest.
///
/// Reads the content in fixed-size chunks so that arbitrarily large files
/// never need to fit in memory. Returns the lowercase hexadecimal digest of
/// the exact bytes read, or the first I/O error the reader reports.
pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Md5::new();
    let mut buffer = [0; HASH_BUFFER_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    let hash = hasher.finalize();
    Ok(format!("{:x}", hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_digest_known_vectors() {
        // RFC 1321 test vectors
        assert_eq!(
            digest_reader(Cursor::new(b"")).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            digest_reader(Cursor::new(b"abc")).unwrap(),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            digest_reader(Cursor::new(b"hello")).unwrap(),
            "5d41402abc4b2a76b9719d911017c592"
        );
    }

    #[test]
    fn test_digest_spans_buffer_boundary() {
        // Content larger than one read buffer must hash identically to a
        // single-shot digest of the same bytes.
        let content = vec![0xabu8; HASH_BUFFER_SIZE + 17];
        let streamed = digest_reader(Cursor::new(&content)).unwrap();

        let mut hasher = Md5::new();
        hasher.update(&content);
        let single = format!("{:x}", hasher.finalize());

        assert_eq!(streamed, single);
    }

    #[test]
    fn test_digest_propagates_read_error() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "device gone"))
            }
        }

        let err = digest_reader(FailingReader).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
