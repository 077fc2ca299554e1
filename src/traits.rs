use crate::error::Result;

/// Trait for compression algorithms.
pub trait Compressor {
    /// Compresses the input bytes and returns the encoded stream.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the input cannot be encoded; the codecs in
    /// this crate accept arbitrary bytes and only fail on internal
    /// inconsistency.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Returns the name of this compression algorithm.
    fn name(&self) -> &'static str;
}

/// Trait for decompression algorithms.
pub trait Decompressor {
    /// Decompresses an encoded stream back into the original bytes.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the stream is truncated, carries an
    /// undefined code, or is otherwise malformed.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Returns the name of this decompression algorithm.
    fn name(&self) -> &'static str;
}

/// Trait combining both compression and decompression capabilities.
pub trait Codec: Compressor + Decompressor {}

impl<T: Compressor + Decompressor> Codec for T {}
