use crate::consts::{BLOCK_LEN, K, STATE_LEN};

/// Expanded message schedule of one block.
pub(crate) type Schedule = [u32; 80];

#[inline(always)]
fn round(s: &mut [u32; STATE_LEN], f: u32, k: u32, w: u32) {
    let [a, b, c, d, e] = *s;
    let t = a
        .rotate_left(5)
        .wrapping_add(f)
        .wrapping_add(e)
        .wrapping_add(k)
        .wrapping_add(w);
    *s = [t, a, b.rotate_left(30), c, d];
}

pub(crate) fn compress(state: &mut [u32; STATE_LEN], block: &[u8; BLOCK_LEN], w: &mut Schedule) {
    for (v, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *v = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for j in 16..80 {
        w[j] = (w[j - 3] ^ w[j - 8] ^ w[j - 14] ^ w[j - 16]).rotate_left(1);
    }

    let mut s = *state;
    for j in 0..20 {
        let [_, b, c, d, _] = s;
        round(&mut s, (b & c) ^ (!b & d), K[0], w[j]);
    }
    for j in 20..40 {
        let [_, b, c, d, _] = s;
        round(&mut s, b ^ c ^ d, K[1], w[j]);
    }
    for j in 40..60 {
        let [_, b, c, d, _] = s;
        round(&mut s, (b & c) ^ (b & d) ^ (c & d), K[2], w[j]);
    }
    for j in 60..80 {
        let [_, b, c, d, _] = s;
        round(&mut s, b ^ c ^ d, K[3], w[j]);
    }

    for (v, r) in state.iter_mut().zip(s.iter()) {
        *v = v.wrapping_add(*r);
    }
}
