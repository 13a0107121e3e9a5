use digest::dev::fixed_reset_test;
use hex_literal::hex;
use proptest::prelude::*;
use sha2::{Compressor, Digest, Sha256, Sha256Compressor, Sha384, Sha384Compressor};

const TWO_BLOCK_256: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const TWO_BLOCK_512: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

const SHA256_VECTORS: &[(&[u8], [u8; 32])] = &[
    (
        b"",
        hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
    ),
    (
        b"abc",
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
    ),
    (
        TWO_BLOCK_256,
        hex!("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"),
    ),
    (
        b"The quick brown fox jumps over the lazy dog",
        hex!("d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"),
    ),
];

const SHA384_VECTORS: &[(&[u8], [u8; 48])] = &[
    (
        b"",
        hex!("
            38b060a751ac96384cd9327eb1b1e36a21fdb71114be0743
            4c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b
        "),
    ),
    (
        b"abc",
        hex!("
            cb00753f45a35e8bb5a03d699ac65007272c32ab0eded163
            1a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7
        "),
    ),
    (
        TWO_BLOCK_512,
        hex!("
            09330c33f71147e83d192fc782cd1b4753111b173b3b05d2
            2fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039
        "),
    ),
];

fn blocks<const N: usize>(data: &[u8]) -> Vec<[u8; N]> {
    data.chunks_exact(N)
        .map(|c| <[u8; N]>::try_from(c).unwrap())
        .collect()
}

#[test]
fn sha256_vectors() {
    for (input, output) in SHA256_VECTORS {
        assert_eq!(Sha256::digest(input)[..], output[..]);
        if let Some(err) = fixed_reset_test::<Sha256>(input, output) {
            panic!("fixed_reset_test failed: {}", err);
        }
    }
}

#[test]
fn sha384_vectors() {
    for (input, output) in SHA384_VECTORS {
        assert_eq!(Sha384::digest(input)[..], output[..]);
        if let Some(err) = fixed_reset_test::<Sha384>(input, output) {
            panic!("fixed_reset_test failed: {}", err);
        }
    }
}

#[test]
fn sha256_1million_a() {
    let mut hasher = Sha256::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk[..]);
    }
    assert_eq!(
        hasher.finalize()[..],
        hex!("cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0")[..]
    );
}

#[test]
fn sha384_1million_a() {
    let mut hasher = Sha384::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk[..]);
    }
    assert_eq!(
        hasher.finalize()[..],
        hex!("
            9d0e1809716474cb086e834e310a4a1ced149e9c00f24852
            7972cec5704c2a5b07b8b3dc38ecc4ebae97ddd87f3d8985
        ")[..]
    );
}

#[test]
fn sha256_epilogue_boundary() {
    assert_eq!(TWO_BLOCK_256.len(), 56);
    let mut core = Sha256Compressor::default();
    core.finish(TWO_BLOCK_256, 56);
    assert_eq!(core.digest(), SHA256_VECTORS[2].1);

    let mut padded = [0u8; 64];
    padded[..55].copy_from_slice(&TWO_BLOCK_256[..55]);
    padded[55] = 0x80;
    padded[56..].copy_from_slice(&(55u64 * 8).to_be_bytes());
    let mut manual = Sha256Compressor::default();
    manual.cycle(&[padded]);

    let mut core = Sha256Compressor::default();
    core.finish(&TWO_BLOCK_256[..55], 55);
    assert_eq!(core.digest(), manual.digest());
}

#[test]
fn sha384_epilogue_boundary() {
    assert_eq!(TWO_BLOCK_512.len(), 112);
    let mut core = Sha384Compressor::default();
    core.finish(TWO_BLOCK_512, 112);
    assert_eq!(core.digest(), SHA384_VECTORS[2].1);

    let mut padded = [0u8; 128];
    padded[..111].copy_from_slice(&TWO_BLOCK_512[..111]);
    padded[111] = 0x80;
    padded[120..].copy_from_slice(&(111u64 * 8).to_be_bytes());
    let mut manual = Sha384Compressor::default();
    manual.cycle(&[padded]);

    let mut core = Sha384Compressor::default();
    core.finish(&TWO_BLOCK_512[..111], 111);
    assert_eq!(core.digest(), manual.digest());
}

#[test]
fn sha384_length_field_high_word() {
    // A byte count with its top three bits set spills into the upper half
    // of the 128-bit length field.
    let processed = (1u64 << 61) | 3;
    let mut padded = [0u8; 128];
    padded[..3].copy_from_slice(b"abc");
    padded[3] = 0x80;
    padded[112..120].copy_from_slice(&1u64.to_be_bytes());
    padded[120..].copy_from_slice(&24u64.to_be_bytes());
    let mut manual = Sha384Compressor::default();
    manual.cycle(&[padded]);

    let mut core = Sha384Compressor::default();
    core.finish(b"abc", processed);
    assert_eq!(core.digest(), manual.digest());
    assert_ne!(core.digest(), SHA384_VECTORS[1].1);
}

#[test]
fn digest_is_repeatable() {
    let mut core = Sha256Compressor::default();
    core.finish(b"abc", 3);
    assert_eq!(core.digest(), core.digest());

    let mut core = Sha384Compressor::default();
    core.finish(b"abc", 3);
    assert_eq!(core.digest(), core.digest());
}

#[test]
fn debug_hides_state() {
    assert_eq!(
        format!("{:?}", Sha256Compressor::default()),
        "Sha256Compressor { ... }"
    );
    assert_eq!(
        format!("{:?}", sha2::Sha384Core::default()),
        "Sha384Core { ... }"
    );
}

#[cfg(feature = "compress")]
#[test]
fn compress_functions_match_compressors() {
    let block = [0x5au8; 64];
    let mut state = [
        0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
        0x5be0cd19,
    ];
    sha2::compress256(&mut state, &[block, block]);

    let mut core = Sha256Compressor::default();
    core.cycle(&[block, block]);
    let mut expected = [0u8; 32];
    for (chunk, v) in expected.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&v.to_be_bytes());
    }
    assert_eq!(core.digest(), expected);
}

proptest! {
    #[test]
    fn sha256_cycle_then_finish_matches_single_finish(
        data in proptest::collection::vec(any::<u8>(), 64..120),
    ) {
        let mut whole = Sha256Compressor::default();
        whole.finish(&data, data.len() as u64);

        let mut split = Sha256Compressor::default();
        split.cycle(&blocks::<64>(&data[..64]));
        split.finish(&data[64..], data.len() as u64);

        prop_assert_eq!(whole.digest(), split.digest());
    }

    #[test]
    fn sha384_cycle_then_finish_matches_single_finish(
        data in proptest::collection::vec(any::<u8>(), 128..240),
    ) {
        let mut whole = Sha384Compressor::default();
        whole.finish(&data, data.len() as u64);

        let mut split = Sha384Compressor::default();
        split.cycle(&blocks::<128>(&data[..128]));
        split.finish(&data[128..], data.len() as u64);

        prop_assert_eq!(&whole.digest()[..], &split.digest()[..]);
    }

    #[test]
    fn streaming_matches_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        step in 1usize..200,
    ) {
        let mut h256 = Sha256::new();
        let mut h384 = Sha384::new();
        for chunk in data.chunks(step) {
            h256.update(chunk);
            h384.update(chunk);
        }
        prop_assert_eq!(h256.finalize(), Sha256::digest(&data));
        prop_assert_eq!(h384.finalize(), Sha384::digest(&data));
    }
}
