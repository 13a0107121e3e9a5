//! An implementation of the [RIPEMD-256][1] cryptographic hash.
//!
//! RIPEMD-256 runs two RIPEMD-128 style lanes side by side and swaps one
//! register between them after every round. The digest is the raw
//! little-endian serialization of both lanes.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use ripemd256::{Ripemd256, Digest};
//!
//! // create a RIPEMD-256 hasher instance
//! let mut hasher = Ripemd256::new();
//!
//! // process input message
//! hasher.update(b"abc");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 32]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("
//!     afbd6e228b9d8cbbcef5ca2d03e6dba1
//!     0ac0bc7dcbe4680e1e42d2e975459b65
//! ")[..]);
//! ```
//!
//! The compression core can also be driven directly through
//! [`Compressor`]:
//!
//! ```rust
//! use ripemd256::{Compressor, Ripemd256Compressor};
//!
//! let mut core = Ripemd256Compressor::default();
//! core.finish(b"abc", 3);
//! assert_eq!(core.digest()[..4], [0xaf, 0xbd, 0x6e, 0x22]);
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://homes.esat.kuleuven.be/~bosselae/ripemd160.html
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};
pub use hash_core::Compressor;

use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{Unsigned, U32, U64},
    HashMarker, Output,
};
use hash_core::{zeroize::Zeroizing, ByteOrder, Epilogue, HashState, LengthField};

mod block;
use block::{compress, BLOCK_LEN, DIGEST_BUF_LEN, H0, WORDS_PER_BLOCK};

/// RIPEMD-256 compression function with its chaining state.
#[derive(Clone)]
pub struct Ripemd256Compressor {
    h: HashState<u32, DIGEST_BUF_LEN>,
}

impl Default for Ripemd256Compressor {
    #[inline]
    fn default() -> Self {
        Self {
            h: HashState::new(H0),
        }
    }
}

impl Compressor for Ripemd256Compressor {
    const BLOCK_SIZE: usize = BLOCK_LEN;
    const DIGEST_SIZE: usize = 32;

    type Block = [u8; BLOCK_LEN];
    type Digest = [u8; 32];

    #[inline]
    fn cycle(&mut self, blocks: &[Self::Block]) {
        let mut x = Zeroizing::new([0u32; WORDS_PER_BLOCK]);
        for block in blocks {
            compress(&mut self.h, block, &mut x);
        }
    }

    fn finish(&mut self, tail: &[u8], processed_bytes: u64) {
        let epilogue = Epilogue::<BLOCK_LEN>::new(tail, LengthField::Le64, processed_bytes);
        self.cycle(epilogue.blocks());
    }

    #[inline]
    fn digest(&self) -> Self::Digest {
        let mut out = [0u8; 32];
        self.h.serialize(ByteOrder::Little, &mut out);
        out
    }
}

opaque_debug::implement!(Ripemd256Compressor);

/// Core RIPEMD-256 hasher state.
#[derive(Clone, Default)]
pub struct Ripemd256Core {
    alg: Ripemd256Compressor,
    block_len: u64,
}

impl HashMarker for Ripemd256Core {}

impl BlockSizeUser for Ripemd256Core {
    type BlockSize = U64;
}

impl BufferKindUser for Ripemd256Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Ripemd256Core {
    type OutputSize = U32;
}

impl UpdateCore for Ripemd256Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        self.alg.cycle(convert(blocks));
    }
}

impl FixedOutputCore for Ripemd256Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bs = Self::BlockSize::U64;
        let processed = self
            .block_len
            .wrapping_mul(bs)
            .wrapping_add(buffer.get_pos() as u64);
        self.alg.finish(buffer.get_data(), processed);
        out.copy_from_slice(&self.alg.digest());
    }
}

impl Reset for Ripemd256Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Ripemd256Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ripemd256")
    }
}

impl fmt::Debug for Ripemd256Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ripemd256Core { ... }")
    }
}

/// RIPEMD-256 hasher state.
pub type Ripemd256 = CoreWrapper<Ripemd256Core>;

#[inline(always)]
fn convert(blocks: &[Block<Ripemd256Core>]) -> &[[u8; BLOCK_LEN]] {
    // SAFETY: GenericArray<u8, U64> and [u8; 64] have
    // exactly the same memory layout
    #[allow(unsafe_code)]
    unsafe {
        &*(blocks as *const _ as *const [[u8; BLOCK_LEN]])
    }
}
