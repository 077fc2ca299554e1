use thiserror::Error;

/// Errors produced while decoding a compressed stream.
///
/// Encoding accepts any byte sequence and cannot fail; every variant here
/// describes a malformed or inconsistent input handed to a decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A Huffman stream ended before the magic tag and the full
    /// 256-entry frequency block could be read.
    #[error("truncated input: header requires at least {required} bytes, got {actual}")]
    TruncatedInput { required: usize, actual: usize },

    /// An LZW code referenced a dictionary slot that has not been
    /// defined yet.
    #[error("invalid code: {code} exceeds dictionary size {dict_size}")]
    InvalidCode { code: usize, dict_size: usize },

    /// The compressed stream is internally inconsistent, e.g. an LZW
    /// stream whose length is not a whole number of codewords.
    #[error("corrupt compressed stream")]
    CorruptStream,
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_input_display() {
        let err = CodecError::TruncatedInput {
            required: 1032,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "truncated input: header requires at least 1032 bytes, got 10"
        );
    }

    #[test]
    fn test_invalid_code_display() {
        let err = CodecError::InvalidCode {
            code: 70000,
            dict_size: 256,
        };
        assert_eq!(
            err.to_string(),
            "invalid code: 70000 exceeds dictionary size 256"
        );
    }

    #[test]
    fn test_corrupt_stream_display() {
        let err = CodecError::CorruptStream;
        assert_eq!(err.to_string(), "corrupt compressed stream");
    }

    #[test]
    fn test_error_clone_eq() {
        let err = CodecError::CorruptStream;
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: &E) {}
        accepts_error(&CodecError::CorruptStream);
    }

    #[test]
    fn test_result_alias() {
        let ok: Result<u8> = Ok(7);
        let err: Result<u8> = Err(CodecError::CorruptStream);
        assert!(ok.is_ok());
        assert!(err.is_err());
    }
}
