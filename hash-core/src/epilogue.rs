use crate::Error;
use log::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Encoding of the message bit length at the end of the padded message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LengthField {
    /// 64-bit big-endian bit count (SHA-1, SHA-256).
    Be64,
    /// 64-bit little-endian bit count (RIPEMD).
    Le64,
    /// 128-bit big-endian bit count (SHA-384, SHA-512).
    Be128,
}

impl LengthField {
    /// Size of the encoded field in bytes.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            Self::Be64 | Self::Le64 => 8,
            Self::Be128 => 16,
        }
    }

    fn encode(self, processed_bytes: u64, out: &mut [u8]) {
        match self {
            Self::Be64 => out.copy_from_slice(&processed_bytes.wrapping_mul(8).to_be_bytes()),
            Self::Le64 => out.copy_from_slice(&processed_bytes.wrapping_mul(8).to_le_bytes()),
            Self::Be128 => {
                let hi = processed_bytes >> 61;
                let lo = processed_bytes << 3;
                out[..8].copy_from_slice(&hi.to_be_bytes());
                out[8..].copy_from_slice(&lo.to_be_bytes());
            }
        }
    }
}

/// Final padded block(s) of a message.
///
/// Holds the trailing message bytes, the `0x80` marker, zero fill and the
/// encoded bit length, laid out over one or two blocks of `BS` bytes. The
/// buffer is wiped when the epilogue is dropped, including during unwinding.
pub struct Epilogue<const BS: usize> {
    blocks: [[u8; BS]; 2],
    len: usize,
}

impl<const BS: usize> Epilogue<BS> {
    /// Largest tail accepted for the given length field.
    #[inline]
    pub const fn max_tail(field: LengthField) -> usize {
        2 * BS - field.size() - 1
    }

    /// Build the epilogue for `tail`, the last bytes of a message of
    /// `processed_bytes` bytes in total.
    pub fn try_new(tail: &[u8], field: LengthField, processed_bytes: u64) -> Result<Self, Error> {
        let max = Self::max_tail(field);
        if tail.len() > max {
            return Err(Error::TailTooLong {
                len: tail.len(),
                max,
            });
        }

        let mut epilogue = Self {
            blocks: [[0u8; BS]; 2],
            len: if tail.len() >= BS - field.size() { 2 } else { 1 },
        };

        let (first, second) = tail.split_at(tail.len().min(BS));
        epilogue.blocks[0][..first.len()].copy_from_slice(first);
        epilogue.blocks[1][..second.len()].copy_from_slice(second);

        let pos = tail.len();
        epilogue.blocks[pos / BS][pos % BS] = 0x80;

        let last = &mut epilogue.blocks[epilogue.len - 1];
        field.encode(processed_bytes, &mut last[BS - field.size()..]);

        trace!(
            "epilogue: {} tail bytes over {} block(s)",
            tail.len(),
            epilogue.len
        );
        Ok(epilogue)
    }

    /// Build the epilogue, panicking if `tail` does not fit.
    ///
    /// # Panics
    ///
    /// If `tail` is longer than [`Epilogue::max_tail`].
    #[inline]
    pub fn new(tail: &[u8], field: LengthField, processed_bytes: u64) -> Self {
        match Self::try_new(tail, field, processed_bytes) {
            Ok(epilogue) => epilogue,
            Err(err) => panic!("{}", err),
        }
    }

    /// The padded blocks to feed to the compression function.
    #[inline]
    pub fn blocks(&self) -> &[[u8; BS]] {
        &self.blocks[..self.len]
    }
}

impl<const BS: usize> Drop for Epilogue<BS> {
    fn drop(&mut self) {
        self.blocks.zeroize();
    }
}

impl<const BS: usize> ZeroizeOnDrop for Epilogue<BS> {}
