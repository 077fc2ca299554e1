use std::cmp::Ordering;
use std::collections::HashMap;

use bitvec::prelude::*;

use crate::error::{CodecError, Result};
use crate::heap::MinHeap;
use crate::traits::{Compressor, Decompressor};

/// Tag written at the start of every compressed stream. Decoding skips
/// over it without checking its contents; only the header length is
/// structurally validated.
pub const MAGIC: [u8; 8] = *b"HUFFMA3\0";

/// Magic tag plus 256 little-endian `u32` frequency counts.
const HEADER_LEN: usize = MAGIC.len() + 256 * 4;

/// A prefix code: bit 0 for a left edge, bit 1 for a right edge. `Lsb0`
/// ordering so that packing the payload fills each output byte from its
/// least significant bit upward.
type CodeBits = BitVec<u8, Lsb0>;

#[derive(Debug, Clone, Eq, PartialEq)]
struct HuffmanNode {
    frequency: u32,
    /// Minimum byte value reachable in this subtree; breaks frequency
    /// ties so that tree construction is fully deterministic.
    min_symbol: u8,
    data: NodeData,
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum NodeData {
    Leaf(u8),
    Internal {
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl Ord for HuffmanNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.min_symbol.cmp(&other.min_symbol))
    }
}

impl PartialOrd for HuffmanNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl HuffmanNode {
    const fn new_leaf(symbol: u8, frequency: u32) -> Self {
        Self {
            frequency,
            min_symbol: symbol,
            data: NodeData::Leaf(symbol),
        }
    }

    /// Merges the two smallest heap nodes. The first-popped node becomes
    /// the right child and the second-popped the left child; the derived
    /// codebook depends on this orientation, so it must not change.
    fn new_internal(first: Self, second: Self) -> Self {
        Self {
            // Counts read from a header are not bounded by any real
            // input length; saturate rather than overflow.
            frequency: first.frequency.saturating_add(second.frequency),
            min_symbol: first.min_symbol.min(second.min_symbol),
            data: NodeData::Internal {
                left: Box::new(second),
                right: Box::new(first),
            },
        }
    }

    fn fill_codes(&self, prefix: CodeBits, codes: &mut HashMap<u8, CodeBits>) {
        match &self.data {
            NodeData::Leaf(symbol) => {
                if prefix.is_empty() {
                    // Lone-leaf tree: the only symbol gets the one-bit
                    // code 0 so its occurrences are countable on decode.
                    codes.insert(*symbol, bitvec![u8, Lsb0; 0]);
                } else {
                    codes.insert(*symbol, prefix);
                }
            }
            NodeData::Internal { left, right } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(false);
                left.fill_codes(left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push(true);
                right.fill_codes(right_prefix, codes);
            }
        }
    }
}

fn count_frequencies(input: &[u8]) -> [u32; 256] {
    let mut frequencies = [0u32; 256];
    for &byte in input {
        frequencies[usize::from(byte)] += 1;
    }
    frequencies
}

/// Builds the canonical tree for a frequency table, or `None` when no
/// symbol occurs. Leaves are pushed in ascending byte-value order and the
/// two smallest nodes merged repeatedly; together with the
/// `(frequency, min_symbol)` ordering this pins down a single tree among
/// the many equally optimal ones.
fn build_tree(frequencies: &[u32; 256]) -> Option<HuffmanNode> {
    let mut heap = MinHeap::new();
    for (symbol, &frequency) in (0u8..=255).zip(frequencies.iter()) {
        if frequency > 0 {
            heap.push(HuffmanNode::new_leaf(symbol, frequency));
        }
    }

    while heap.len() > 1 {
        let first = heap.pop()?;
        let second = heap.pop()?;
        heap.push(HuffmanNode::new_internal(first, second));
    }

    heap.pop()
}

fn build_codebook(root: &HuffmanNode) -> HashMap<u8, CodeBits> {
    let mut codes = HashMap::new();
    root.fill_codes(CodeBits::new(), &mut codes);
    codes
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Compressor for HuffmanCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let frequencies = count_frequencies(input);

        let mut output = Vec::with_capacity(HEADER_LEN);
        output.extend_from_slice(&MAGIC);
        for frequency in &frequencies {
            output.extend_from_slice(&frequency.to_le_bytes());
        }

        // Empty input still gets a full header; there is just no tree
        // and no payload behind it.
        if let Some(root) = build_tree(&frequencies) {
            let codes = build_codebook(&root);
            let mut payload = CodeBits::new();
            for &byte in input {
                let code = codes.get(&byte).ok_or(CodecError::CorruptStream)?;
                payload.extend_from_bitslice(code);
            }
            // Unused trailing bits of the last byte stay zero.
            output.extend_from_slice(&payload.into_vec());
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "Huffman"
    }
}

impl Decompressor for HuffmanCodec {
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.len() < HEADER_LEN {
            return Err(CodecError::TruncatedInput {
                required: HEADER_LEN,
                actual: input.len(),
            });
        }

        let mut frequencies = [0u32; 256];
        let counts = input[MAGIC.len()..HEADER_LEN].chunks_exact(4);
        for (slot, chunk) in frequencies.iter_mut().zip(counts) {
            *slot = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        // The header fully determines the tree; rebuild it exactly as
        // the encoder did instead of transmitting the codebook.
        let Some(root) = build_tree(&frequencies) else {
            return Ok(Vec::new());
        };
        let decode_table: HashMap<CodeBits, u8> = build_codebook(&root)
            .into_iter()
            .map(|(symbol, code)| (code, symbol))
            .collect();

        let mut remaining = frequencies;
        let mut output = Vec::new();
        let mut cursor = CodeBits::new();

        for bit in input[HEADER_LEN..].view_bits::<Lsb0>().iter().by_vals() {
            cursor.push(bit);
            if let Some(&symbol) = decode_table.get(&cursor) {
                if remaining[usize::from(symbol)] == 0 {
                    // All counted occurrences produced; what is left is
                    // padding in the final byte.
                    break;
                }
                output.push(symbol);
                remaining[usize::from(symbol)] -= 1;
                cursor.clear();
            }
        }

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "Huffman"
    }
}
