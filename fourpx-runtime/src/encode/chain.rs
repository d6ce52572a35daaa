use std::iter;

use super::{Full, PackingBuffer, BUFFER_CAPACITY, GROUPS};
use crate::graphics::{glyph::GlyphEncoding, Intensity};

/// Buffers in a chain: the carried-in buffer, the next one, and an overflow spare
pub const CHAIN_LENGTH: usize = 3;

/// Slots available to a glyph when the chain starts out empty
pub const CHAIN_CAPACITY: usize = BUFFER_CAPACITY * CHAIN_LENGTH;

/// How a glyph's rows are laid out across the chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Packing {
    /// One continuous bit-stream; every row spills into whatever slot comes next
    #[default]
    Sequential,

    /// Row `n` only ever goes into channel group `n` of each buffer,
    /// so glyph rows line up with pixel rows and overflow sideways
    RowAligned,
}

/// The glyph needs more slots than the chain has left.
/// Only a malformed catalog entry can cause this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("glyph needs {bits} slots but the chain only has {available} free")]
pub struct EncoderOverflow {
    pub bits: usize,
    pub available: usize,
}

/// How many buffers a packed glyph wrote into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touched {
    /// The carried-in buffer and the next one
    Two,
    /// All three; the spare has to be carried forward
    Three,
}
impl Touched {
    pub fn count(self) -> usize {
        match self {
            Touched::Two => 2,
            Touched::Three => 3,
        }
    }
}

/// The outcome of packing one glyph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packed {
    pub first: PackingBuffer,
    pub second: PackingBuffer,
    pub spare: PackingBuffer,
    pub touched: Touched,
}

/// Packing buffers joined end to end.
///
/// Writes go to the target buffer until it reports [`Full`], at which point the target moves
/// one buffer down the chain and the same bit is retried. The target never moves backwards
/// within a row, and never skips a buffer.
pub struct Chain {
    buffers: [PackingBuffer; CHAIN_LENGTH],
    target: usize,

    /// Furthest buffer any write landed in
    reached: usize,
}
impl Chain {
    /// Starts a chain from the buffer carried over from the previous glyph,
    /// followed by two fresh ones.
    pub fn seeded(carry: PackingBuffer) -> Self {
        Self {
            buffers: [carry, PackingBuffer::new(), PackingBuffer::new()],
            target: 0,
            reached: 0,
        }
    }

    fn free(&self) -> usize {
        CHAIN_CAPACITY - self.buffers.iter().map(PackingBuffer::written).sum::<usize>()
    }

    fn push_with(
        &mut self,
        mut write: impl FnMut(&mut PackingBuffer) -> Result<(), Full>,
    ) -> Result<(), Full> {
        loop {
            match write(&mut self.buffers[self.target]) {
                Ok(()) => {
                    self.reached = self.reached.max(self.target);
                    return Ok(());
                }
                Err(Full) if self.target + 1 < CHAIN_LENGTH => self.target += 1,
                Err(Full) => return Err(Full),
            }
        }
    }

    /// Writes the whole glyph: each row's dots followed by a single off bit separating it from
    /// the next row.
    ///
    /// On failure the chain is left partially written and should be dropped.
    pub fn pack(
        &mut self,
        glyph: &GlyphEncoding,
        packing: Packing,
    ) -> Result<(), EncoderOverflow> {
        let overflow = EncoderOverflow {
            bits: glyph.bit_count(),
            available: self.free(),
        };

        for (index, row) in glyph.rows().iter().enumerate() {
            let bits = row.iter().copied().chain(iter::once(Intensity::Off));

            match packing {
                Packing::Sequential => {
                    for bit in bits {
                        self.push_with(|buffer| buffer.write_bit(bit))
                            .map_err(|Full| overflow)?;
                    }
                }
                Packing::RowAligned => {
                    if index >= GROUPS {
                        return Err(overflow);
                    }
                    self.target = 0;
                    for bit in bits {
                        self.push_with(|buffer| buffer.write_bit_in_group(index, bit))
                            .map_err(|Full| overflow)?;
                    }
                }
            }
        }

        Ok(())
    }

    pub fn finish(self) -> Packed {
        let [first, second, spare] = self.buffers;
        let touched = match self.reached {
            0 | 1 => Touched::Two,
            _ => Touched::Three,
        };

        Packed {
            first,
            second,
            spare,
            touched,
        }
    }
}

/// Packs `glyph` on top of `carry`.
/// `carry` itself is never modified, so a failed glyph leaves the caller's state as it was.
pub fn pack_glyph(
    carry: &PackingBuffer,
    glyph: &GlyphEncoding,
    packing: Packing,
) -> Result<Packed, EncoderOverflow> {
    let mut chain = Chain::seeded(carry.clone());
    chain.pack(glyph, packing)?;
    let packed = chain.finish();

    log::trace!(
        "packed {} bits into {} buffers ({packing:?})",
        glyph.bit_count(),
        packed.touched.count()
    );
    Ok(packed)
}
