use crate::consts::{BLOCK_LEN_256, H256, K32, STATE_LEN};
use hash_core::{zeroize::Zeroizing, ByteOrder, Compressor, Epilogue, HashState, LengthField};

/// Expanded message schedule of one SHA-256 block.
pub(crate) type Schedule = [u32; 64];

#[inline(always)]
fn sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

pub(crate) fn compress(state: &mut [u32; STATE_LEN], block: &[u8; BLOCK_LEN_256], w: &mut Schedule) {
    for (v, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *v = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for j in 16..64 {
        w[j] = sigma1(w[j - 2])
            .wrapping_add(w[j - 7])
            .wrapping_add(sigma0(w[j - 15]))
            .wrapping_add(w[j - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for j in 0..64 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add((e & f) ^ (!e & g))
            .wrapping_add(K32[j])
            .wrapping_add(w[j]);
        let t2 = big_sigma0(a).wrapping_add((a & b) ^ (a & c) ^ (b & c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (v, r) in state.iter_mut().zip([a, b, c, d, e, f, g, h].iter()) {
        *v = v.wrapping_add(*r);
    }
}

/// SHA-256 compression function.
///
/// Processes `blocks` into `state` without any padding.
#[cfg(feature = "compress")]
pub fn compress256(state: &mut [u32; 8], blocks: &[[u8; 64]]) {
    let mut w = Zeroizing::new([0u32; 64]);
    for block in blocks {
        compress(state, block, &mut w);
    }
}

/// SHA-256 compression function with its chaining state.
#[derive(Clone)]
pub struct Sha256Compressor {
    h: HashState<u32, STATE_LEN>,
}

impl Default for Sha256Compressor {
    #[inline]
    fn default() -> Self {
        Self {
            h: HashState::new(H256),
        }
    }
}

impl Compressor for Sha256Compressor {
    const BLOCK_SIZE: usize = BLOCK_LEN_256;
    const DIGEST_SIZE: usize = 32;

    type Block = [u8; BLOCK_LEN_256];
    type Digest = [u8; 32];

    #[inline]
    fn cycle(&mut self, blocks: &[Self::Block]) {
        let mut w = Zeroizing::new([0u32; 64]);
        for block in blocks {
            compress(&mut self.h, block, &mut w);
        }
    }

    fn finish(&mut self, tail: &[u8], processed_bytes: u64) {
        let epilogue = Epilogue::<BLOCK_LEN_256>::new(tail, LengthField::Be64, processed_bytes);
        self.cycle(epilogue.blocks());
    }

    #[inline]
    fn digest(&self) -> Self::Digest {
        let mut out = [0u8; 32];
        self.h.serialize(ByteOrder::Big, &mut out);
        out
    }
}

impl core::fmt::Debug for Sha256Compressor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Sha256Compressor { ... }")
    }
}
