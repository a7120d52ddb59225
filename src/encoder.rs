//! Encoder: turn a string or a file into base64 text

use log::debug;

use crate::error::{Error, Result};
use crate::input::Payload;
use crate::utils::{encode_base64, read_regular_file};

/// Encode the payload as standard, padded base64
pub fn encode(payload: &Payload) -> Result<String> {
    let bytes = match payload {
        Payload::Text(text) => {
            if text.is_empty() {
                return Err(Error::InvalidArgument(
                    "The string to encode is empty".to_string(),
                ));
            }
            text.as_bytes().to_vec()
        }
        Payload::File(path) => read_regular_file(path)?,
    };

    debug!("Encoding {} bytes", bytes.len());
    Ok(encode_bytes(&bytes))
}

/// Encode an in-memory buffer
pub fn encode_bytes(data: &[u8]) -> String {
    encode_base64(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_encode_string() {
        let encoded = encode(&Payload::Text("hello world".into())).unwrap();
        assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_encode_utf8_string() {
        let encoded = encode(&Payload::Text("Lorenzo😊".into())).unwrap();
        assert_eq!(encoded, encode_base64("Lorenzo😊".as_bytes()));
    }

    #[test]
    fn test_encode_empty_string() {
        let result = encode(&Payload::Text(String::new()));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_encode_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(&[0x00, 0x01, 0x02, 0x03]).unwrap();

        let encoded = encode(&Payload::File(tmp.path().to_path_buf())).unwrap();
        assert_eq!(encoded, "AAECAw==");
    }

    #[test]
    fn test_encode_empty_file() {
        let tmp = NamedTempFile::new().unwrap();
        let encoded = encode(&Payload::File(tmp.path().to_path_buf())).unwrap();
        assert_eq!(encoded, "");
    }

    #[test]
    fn test_encode_missing_file() {
        let dir = tempdir().unwrap();
        let result = encode(&Payload::File(dir.path().join("missing.bin")));
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
