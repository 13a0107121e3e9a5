pub(crate) const DIGEST_BUF_LEN: usize = 8;
pub(crate) const BLOCK_LEN: usize = 64;
pub(crate) const WORDS_PER_BLOCK: usize = 16;

pub(crate) type Block = [u8; BLOCK_LEN];

pub(crate) const H0: [u32; DIGEST_BUF_LEN] = [
    0x6745_2301,
    0xefcd_ab89,
    0x98ba_dcfe,
    0x1032_5476,
    0x7654_3210,
    0xfedc_ba98,
    0x89ab_cdef,
    0x0123_4567,
];

const K: [u32; 4] = [0x0000_0000, 0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc];
const KK: [u32; 4] = [0x50a2_8be6, 0x5c4d_d124, 0x6d70_3ef3, 0x0000_0000];

#[rustfmt::skip]
const R: [usize; 64] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
    3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
    1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
];

#[rustfmt::skip]
const RR: [usize; 64] = [
    5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
    6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
    15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
    8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
];

#[rustfmt::skip]
const S: [u32; 64] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
    7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
    11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
    11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
];

#[rustfmt::skip]
const SS: [u32; 64] = [
    8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
    9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
    9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
    15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
];

/// Nonlinear function of round `j`; the right lane calls it with `63 - j`.
#[inline(always)]
fn f(j: usize, x: u32, y: u32, z: u32) -> u32 {
    match j / 16 {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        _ => (x & z) | (y & !z),
    }
}

/// Working registers: `[A, B, C, D]` and `[AA, BB, CC, DD]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Lanes {
    pub(crate) left: [u32; 4],
    pub(crate) right: [u32; 4],
}

impl Lanes {
    #[inline(always)]
    fn from_state(h: &[u32; DIGEST_BUF_LEN]) -> Self {
        Self {
            left: [h[0], h[1], h[2], h[3]],
            right: [h[4], h[5], h[6], h[7]],
        }
    }

    /// One step of both lanes, without the cross-lane exchange.
    #[inline(always)]
    pub(crate) fn step(&mut self, j: usize, x: &[u32; WORDS_PER_BLOCK]) {
        let [a, b, c, d] = self.left;
        let t = a
            .wrapping_add(f(j, b, c, d))
            .wrapping_add(x[R[j]])
            .wrapping_add(K[j / 16])
            .rotate_left(S[j]);
        self.left = [d, t, b, c];

        let [a, b, c, d] = self.right;
        let t = a
            .wrapping_add(f(63 - j, b, c, d))
            .wrapping_add(x[RR[j]])
            .wrapping_add(KK[j / 16])
            .rotate_left(SS[j]);
        self.right = [d, t, b, c];
    }

    /// Swap one register between the lanes at the end of each 16-step round:
    /// A after step 15, B after 31, C after 47 and D after 63.
    #[inline(always)]
    pub(crate) fn exchange(&mut self, j: usize) {
        if j % 16 == 15 {
            let i = j / 16;
            core::mem::swap(&mut self.left[i], &mut self.right[i]);
        }
    }
}

pub(crate) fn compress(
    h: &mut [u32; DIGEST_BUF_LEN],
    block: &Block,
    x: &mut [u32; WORDS_PER_BLOCK],
) {
    for (w, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut lanes = Lanes::from_state(h);
    for j in 0..64 {
        lanes.step(j, x);
        lanes.exchange(j);
    }

    let regs = lanes.left.iter().chain(lanes.right.iter());
    for (v, r) in h.iter_mut().zip(regs) {
        *v = v.wrapping_add(*r);
    }
}
