use crate::consts::{BLOCK_LEN_512, H384, K64, STATE_LEN};
use hash_core::{zeroize::Zeroizing, ByteOrder, Compressor, Epilogue, HashState, LengthField};

/// Expanded message schedule of one SHA-512 family block.
pub(crate) type Schedule = [u64; 80];

#[inline(always)]
fn sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

pub(crate) fn compress(state: &mut [u64; STATE_LEN], block: &[u8; BLOCK_LEN_512], w: &mut Schedule) {
    for (v, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *v = u64::from_be_bytes(buf);
    }
    for j in 16..80 {
        w[j] = sigma1(w[j - 2])
            .wrapping_add(w[j - 7])
            .wrapping_add(sigma0(w[j - 15]))
            .wrapping_add(w[j - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for j in 0..80 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add((e & f) ^ (!e & g))
            .wrapping_add(K64[j])
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

/// SHA-512 compression function, shared by SHA-384.
///
/// Processes `blocks` into `state` without any padding.
#[cfg(feature = "compress")]
pub fn compress512(state: &mut [u64; 8], blocks: &[[u8; 128]]) {
    let mut w = Zeroizing::new([0u64; 80]);
    for block in blocks {
        compress(state, block, &mut w);
    }
}

/// SHA-384 compression function with its chaining state.
///
/// The state has the full eight words of SHA-512; only the first six end
/// up in the digest.
#[derive(Clone)]
pub struct Sha384Compressor {
    h: HashState<u64, STATE_LEN>,
}

impl Default for Sha384Compressor {
    #[inline]
    fn default() -> Self {
        Self {
            h: HashState::new(H384),
        }
    }
}

impl Compressor for Sha384Compressor {
    const BLOCK_SIZE: usize = BLOCK_LEN_512;
    const DIGEST_SIZE: usize = 48;

    type Block = [u8; BLOCK_LEN_512];
    type Digest = [u8; 48];

    #[inline]
    fn cycle(&mut self, blocks: &[Self::Block]) {
        let mut w = Zeroizing::new([0u64; 80]);
        for block in blocks {
            compress(&mut self.h, block, &mut w);
        }
    }

    fn finish(&mut self, tail: &[u8], processed_bytes: u64) {
        let epilogue = Epilogue::<BLOCK_LEN_512>::new(tail, LengthField::Be128, processed_bytes);
        self.cycle(epilogue.blocks());
    }

    #[inline]
    fn digest(&self) -> Self::Digest {
        let mut out = [0u8; 48];
        self.h.serialize(ByteOrder::Big, &mut out);
        out
    }
}

impl core::fmt::Debug for Sha384Compressor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Sha384Compressor { ... }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigma_functions() {
        assert_eq!(sigma0(1), 0x8100_0000_0000_0000);
        assert_eq!(sigma1(1), 0x0000_2000_0000_0008);
        assert_eq!(big_sigma0(1), 0x0000_0010_4200_0000);
        assert_eq!(big_sigma1(1), 0x0004_4000_0080_0000);
    }

    #[test]
    fn digest_exposes_six_words() {
        let mut core = Sha384Compressor::default();
        core.h[6] = 0xffff_ffff_ffff_ffff;
        core.h[7] = 0xffff_ffff_ffff_ffff;
        let digest = core.digest();
        assert_eq!(digest[..8], H384[0].to_be_bytes());
        assert_eq!(digest[40..], H384[5].to_be_bytes());
    }
}
