use digest::dev::fixed_reset_test;
use hex_literal::hex;
use proptest::prelude::*;
use sha1::{Compressor, Digest, Sha1, Sha1Compressor};

const VECTORS: &[(&[u8], [u8; 20])] = &[
    (b"", hex!("da39a3ee5e6b4b0d3255bfef95601890afd80709")),
    (b"abc", hex!("a9993e364706816aba3e25717850c26c9cd0d89d")),
    (
        b"The quick brown fox jumps over the lazy dog",
        hex!("2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"),
    ),
    (
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        hex!("84983e441c3bd26ebaae4aa1f95129e5e54670f1"),
    ),
];

fn blocks(data: &[u8]) -> Vec<[u8; 64]> {
    data.chunks_exact(64)
        .map(|c| <[u8; 64]>::try_from(c).unwrap())
        .collect()
}

#[test]
fn sha1_vectors() {
    for (input, output) in VECTORS {
        assert_eq!(Sha1::digest(input)[..], output[..]);
        if let Some(err) = fixed_reset_test::<Sha1>(input, output) {
            panic!("fixed_reset_test failed: {}", err);
        }
    }
}

#[test]
fn sha1_1million_a() {
    let mut hasher = Sha1::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk[..]);
    }
    assert_eq!(
        hasher.finalize()[..],
        hex!("34aa973cd4c4daa4f61eeb2bdbad27316534016f")[..]
    );
}

#[test]
fn epilogue_boundary() {
    // 55 bytes fit into one epilogue block, 56 need a second one.
    let mut padded = [0u8; 64];
    padded[..55].copy_from_slice(&[b'a'; 55]);
    padded[55] = 0x80;
    padded[56..].copy_from_slice(&(55u64 * 8).to_be_bytes());
    let mut manual = Sha1Compressor::default();
    manual.cycle(&[padded]);

    let mut core = Sha1Compressor::default();
    core.finish(&[b'a'; 55], 55);
    assert_eq!(core.digest(), manual.digest());
    assert_eq!(core.digest()[..], Sha1::digest([b'a'; 55])[..]);

    let (input, output) = VECTORS[3];
    assert_eq!(input.len(), 56);
    let mut core = Sha1Compressor::default();
    core.finish(input, 56);
    assert_eq!(core.digest(), output);
}

#[test]
fn digest_is_repeatable() {
    let mut core = Sha1Compressor::default();
    core.finish(b"abc", 3);
    let first = core.digest();
    assert_eq!(first, core.digest());
    assert_eq!(first, VECTORS[1].1);
}

#[test]
fn reset_restores_initial_state() {
    let mut hasher = Sha1::new();
    hasher.update(b"garbage");
    Digest::reset(&mut hasher);
    hasher.update(b"abc");
    assert_eq!(hasher.finalize()[..], VECTORS[1].1[..]);
}

proptest! {
    #[test]
    fn cycle_then_finish_matches_single_finish(
        data in proptest::collection::vec(any::<u8>(), 64..120),
    ) {
        let mut whole = Sha1Compressor::default();
        whole.finish(&data, data.len() as u64);

        let mut split = Sha1Compressor::default();
        split.cycle(&blocks(&data[..64]));
        split.finish(&data[64..], data.len() as u64);

        prop_assert_eq!(whole.digest(), split.digest());
    }

    #[test]
    fn streaming_matches_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..300),
        step in 1usize..100,
    ) {
        let mut hasher = Sha1::new();
        for chunk in data.chunks(step) {
            hasher.update(chunk);
        }
        prop_assert_eq!(hasher.finalize(), Sha1::digest(&data));
    }
}
