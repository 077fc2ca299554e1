use std::collections::HashMap;

use crate::error::{CodecError, Result};
use crate::traits::{Compressor, Decompressor};

/// Codes are fixed-width `u16`, so the dictionary holds at most one entry
/// per representable code. Reaching this size triggers a full reset back
/// to the 256 single-byte entries; there is no incremental eviction.
const MAX_DICT_SIZE: usize = 1 << 16;

/// Bytes per codeword on the wire (little-endian `u16`).
const CODE_WIDTH: usize = 2;

fn reset_encode_dictionary(dictionary: &mut HashMap<Vec<u8>, u16>) {
    dictionary.clear();
    for byte in 0u8..=255 {
        dictionary.insert(vec![byte], u16::from(byte));
    }
}

fn reset_decode_dictionary(dictionary: &mut Vec<Vec<u8>>) {
    dictionary.clear();
    for byte in 0u8..=255 {
        dictionary.push(vec![byte]);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LzwCodec;

impl LzwCodec {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Compressor for LzwCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut dictionary = HashMap::new();
        reset_encode_dictionary(&mut dictionary);

        let mut output = Vec::new();
        let mut pending: Vec<u8> = Vec::new();

        for &byte in input {
            // The capacity check runs before the byte is consumed, so at
            // reset time `pending` is a single byte the fresh dictionary
            // already knows.
            if dictionary.len() == MAX_DICT_SIZE {
                reset_encode_dictionary(&mut dictionary);
            }

            pending.push(byte);

            if !dictionary.contains_key(&pending) {
                // The reset above keeps the dictionary strictly below
                // capacity here, so the next code always fits in a u16.
                let next_code =
                    u16::try_from(dictionary.len()).map_err(|_| CodecError::CorruptStream)?;
                dictionary.insert(pending.clone(), next_code);
                pending.pop();

                let code = dictionary
                    .get(&pending)
                    .copied()
                    .ok_or(CodecError::CorruptStream)?;
                output.extend_from_slice(&code.to_le_bytes());
                pending = vec![byte];
            }
        }

        if !pending.is_empty() {
            let code = dictionary
                .get(&pending)
                .copied()
                .ok_or(CodecError::CorruptStream)?;
            output.extend_from_slice(&code.to_le_bytes());
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "LZW"
    }
}

impl Decompressor for LzwCodec {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if !input.len().is_multiple_of(CODE_WIDTH) {
            return Err(CodecError::CorruptStream);
        }

        let mut dictionary: Vec<Vec<u8>> = Vec::new();
        reset_decode_dictionary(&mut dictionary);

        let mut output = Vec::new();
        let mut previous: Vec<u8> = Vec::new();

        for chunk in input.chunks_exact(CODE_WIDTH) {
            // Mirrors the encoder: same reset point, same growth, so the
            // reconstructed dictionary stays in lockstep.
            if dictionary.len() == MAX_DICT_SIZE {
                reset_decode_dictionary(&mut dictionary);
            }

            let code = usize::from(u16::from_le_bytes([chunk[0], chunk[1]]));

            if code > dictionary.len() {
                return Err(CodecError::InvalidCode {
                    code,
                    dict_size: dictionary.len(),
                });
            }

            if code == dictionary.len() {
                // The code refers to the entry currently being defined:
                // it must be the previous string plus its own first byte.
                let first = *previous.first().ok_or(CodecError::InvalidCode {
                    code,
                    dict_size: dictionary.len(),
                })?;
                let mut entry = previous.clone();
                entry.push(first);
                dictionary.push(entry);
            } else if !previous.is_empty() {
                let first = dictionary[code][0];
                let mut entry = previous.clone();
                entry.push(first);
                dictionary.push(entry);
            }

            output.extend_from_slice(&dictionary[code]);
            previous.clone_from(&dictionary[code]);
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "LZW"
    }
}
