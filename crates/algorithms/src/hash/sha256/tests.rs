use super::*;
use crate::hash::HashFunction;

// NIST FIPS 180-4 example vectors
const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const ABC_DIGEST: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const TWO_BLOCK_MSG: &str = "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const TWO_BLOCK_DIGEST: &str = "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1";

fn digest_hex(data: &[u8]) -> String {
    Sha256::<Portable>::digest(data).unwrap().to_hex()
}

#[test]
fn empty_message() {
    assert_eq!(digest_hex(b""), EMPTY_DIGEST);
}

#[test]
fn abc_message() {
    assert_eq!(digest_hex(b"abc"), ABC_DIGEST);
}

#[test]
fn two_block_message() {
    assert_eq!(digest_hex(TWO_BLOCK_MSG.as_bytes()), TWO_BLOCK_DIGEST);
}

#[test]
fn million_a_message() {
    let mut hasher = Sha256::<Portable>::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk).unwrap();
    }
    let digest = hasher.finalize().unwrap();
    assert_eq!(
        digest.to_hex(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn chunking_is_invariant() {
    let message = TWO_BLOCK_MSG.as_bytes();
    let expected = Sha256::<Portable>::digest(message).unwrap();

    for split in [1, 3, 7, 17, 55, 56] {
        let mut hasher = Sha256::<Portable>::new();
        for chunk in message.chunks(split) {
            hasher.update(chunk).unwrap();
        }
        assert_eq!(hasher.finalize().unwrap(), expected, "split {}", split);
    }
}

#[test]
fn update_chains() {
    let mut hasher = Sha256::<Portable>::new();
    let digest = hasher
        .update(b"ab")
        .unwrap()
        .update(b"c")
        .unwrap()
        .finalize()
        .unwrap();
    assert_eq!(digest.to_hex(), ABC_DIGEST);
}

#[test]
fn padding_boundary_lengths() {
    // lengths straddling the 56-byte length-field boundary
    for len in [55usize, 56, 57, 63, 64, 65] {
        let data = vec![0x5Au8; len];
        let mut hasher = Sha256::<Portable>::new();
        hasher.update(&data).unwrap();
        let incremental = hasher.finalize().unwrap();
        let oneshot = Sha256::<Portable>::digest(&data).unwrap();
        assert_eq!(incremental, oneshot, "length {}", len);
    }
}

#[test]
fn state_wiped_after_finalize() {
    let mut hasher = Sha256::<Portable>::new();
    hasher.update(b"sensitive input").unwrap();
    let _ = hasher.finalize().unwrap();

    assert_eq!(hasher.state, [0u32; SHA256_STATE_WORDS]);
    assert_eq!(hasher.buffer, [0u8; SHA256_BLOCK_SIZE]);
    assert_eq!(hasher.buffer_idx, 0);
    assert_eq!(hasher.total_bytes, 0);
}

#[test]
fn trait_constants() {
    assert_eq!(Sha256::<Portable>::output_size(), 32);
    assert_eq!(Sha256::<Portable>::block_size(), 64);
    assert_eq!(Sha256::<Portable>::name(), "SHA-256");
}
