//! Pure Rust implementation of the [SHA-1][1] cryptographic hash algorithm.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use sha1::{Sha1, Digest};
//!
//! // create a Sha1 object
//! let mut hasher = Sha1::new();
//!
//! // process input message
//! hasher.update(b"hello world");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 20]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"));
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-1
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
    typenum::{Unsigned, U20, U64},
    HashMarker, Output,
};
use hash_core::{zeroize::Zeroizing, ByteOrder, Epilogue, HashState, LengthField};

mod compress;
mod consts;

use compress::compress;
use consts::{BLOCK_LEN, H0, STATE_LEN};

/// SHA-1 compression function with its chaining state.
#[derive(Clone)]
pub struct Sha1Compressor {
    h: HashState<u32, STATE_LEN>,
}

impl Default for Sha1Compressor {
    #[inline]
    fn default() -> Self {
        Self {
            h: HashState::new(H0),
        }
    }
}

impl Compressor for Sha1Compressor {
    const BLOCK_SIZE: usize = BLOCK_LEN;
    const DIGEST_SIZE: usize = 20;

    type Block = [u8; BLOCK_LEN];
    type Digest = [u8; 20];

    #[inline]
    fn cycle(&mut self, blocks: &[Self::Block]) {
        let mut w = Zeroizing::new([0u32; 80]);
        for block in blocks {
            compress(&mut self.h, block, &mut w);
        }
    }

    fn finish(&mut self, tail: &[u8], processed_bytes: u64) {
        let epilogue = Epilogue::<BLOCK_LEN>::new(tail, LengthField::Be64, processed_bytes);
        self.cycle(epilogue.blocks());
    }

    #[inline]
    fn digest(&self) -> Self::Digest {
        let mut out = [0u8; 20];
        self.h.serialize(ByteOrder::Big, &mut out);
        out
    }
}

impl fmt::Debug for Sha1Compressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sha1Compressor { ... }")
    }
}

/// Core SHA-1 hasher state.
#[derive(Clone, Default)]
pub struct Sha1Core {
    alg: Sha1Compressor,
    block_len: u64,
}

impl HashMarker for Sha1Core {}

impl BlockSizeUser for Sha1Core {
    type BlockSize = U64;
}

impl BufferKindUser for Sha1Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Sha1Core {
    type OutputSize = U20;
}

impl UpdateCore for Sha1Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        // SAFETY: GenericArray<u8, U64> and [u8; 64] have
        // exactly the same memory layout
        #[allow(unsafe_code)]
        let blocks: &[[u8; BLOCK_LEN]] = unsafe { &*(blocks as *const _ as *const [[u8; BLOCK_LEN]]) };
        self.alg.cycle(blocks);
    }
}

impl FixedOutputCore for Sha1Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let processed = self
            .block_len
            .wrapping_mul(Self::BlockSize::U64)
            .wrapping_add(buffer.get_pos() as u64);
        self.alg.finish(buffer.get_data(), processed);
        out.copy_from_slice(&self.alg.digest());
    }
}

impl Reset for Sha1Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Sha1Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sha1")
    }
}

impl fmt::Debug for Sha1Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sha1Core { ... }")
    }
}

/// SHA-1 hasher state.
pub type Sha1 = CoreWrapper<Sha1Core>;
