//! Lossless single-stream byte compression.
//!
//! This library provides two independent codecs:
//! - Huffman coding: a static entropy coder with a deterministic,
//!   tie-broken tree construction and a bit-packed payload behind a
//!   frequency-table header
//! - LZW: an adaptive dictionary coder emitting fixed-width 16-bit codes,
//!   with a full dictionary reset once every code value is in use
//!
//! # Example
//!
//! ```
//! use bytepress::{Compressor, Decompressor, HuffmanCodec};
//!
//! let codec = HuffmanCodec::new();
//! let data = b"abracadabra";
//! let compressed = codec.compress(data).unwrap();
//! let decompressed = codec.decompress(&compressed).unwrap();
//! assert_eq!(decompressed, data);
//! ```

mod error;
mod heap;
mod huffman;
mod lzw;
mod traits;

pub use error::{CodecError, Result};
pub use huffman::HuffmanCodec;
pub use lzw::LzwCodec;
pub use traits::{Codec, Compressor, Decompressor};
