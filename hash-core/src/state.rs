use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Byte order used when serializing state words.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte first (SHA family).
    Big,
    /// Least significant byte first (MD4/RIPEMD family).
    Little,
}

/// Unsigned word a hash state is made of.
pub trait Word: Copy + Zeroize {
    /// Width of the word in bytes.
    const BYTES: usize;

    /// Write the word into `out` using big-endian byte order.
    fn write_be(self, out: &mut [u8]);

    /// Write the word into `out` using little-endian byte order.
    fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BYTES: usize = core::mem::size_of::<$t>();

                #[inline(always)]
                fn write_be(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_be_bytes());
                }

                #[inline(always)]
                fn write_le(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_word!(u32, u64);

/// Chaining value of a Merkle–Damgård hash.
///
/// The words are overwritten with zeros when the state is dropped, so a
/// state can never outlive its compressor in readable form. Cloning yields
/// an independent state that is wiped on its own drop.
#[derive(Clone)]
pub struct HashState<W: Word, const N: usize> {
    words: [W; N],
}

impl<W: Word, const N: usize> HashState<W, N> {
    /// Create a state from the algorithm's initial values.
    #[inline]
    pub const fn new(iv: [W; N]) -> Self {
        Self { words: iv }
    }

    /// Write the leading words of the state into `out`.
    ///
    /// Only `out.len() / W::BYTES` words are written, which is how
    /// truncated digests such as SHA-384 expose a prefix of the state.
    ///
    /// # Panics
    ///
    /// If `out` is longer than the state.
    pub fn serialize(&self, order: ByteOrder, out: &mut [u8]) {
        assert!(
            out.len() <= N * W::BYTES,
            "digest buffer longer than hash state"
        );
        for (chunk, w) in out.chunks_exact_mut(W::BYTES).zip(self.words.iter()) {
            match order {
                ByteOrder::Big => w.write_be(chunk),
                ByteOrder::Little => w.write_le(chunk),
            }
        }
    }
}

impl<W: Word, const N: usize> Deref for HashState<W, N> {
    type Target = [W; N];

    #[inline(always)]
    fn deref(&self) -> &[W; N] {
        &self.words
    }
}

impl<W: Word, const N: usize> DerefMut for HashState<W, N> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [W; N] {
        &mut self.words
    }
}

impl<W: Word, const N: usize> Zeroize for HashState<W, N> {
    fn zeroize(&mut self) {
        self.words.zeroize();
    }
}

impl<W: Word, const N: usize> Drop for HashState<W, N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<W: Word, const N: usize> ZeroizeOnDrop for HashState<W, N> {}
