//! Integration tests exercising the public facade

use xcrypt::prelude::*;

#[test]
fn aes_round_trip_through_facade() {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);

    let key = Aes128::<Portable>::generate_key(&mut rng);
    let cipher = Aes128::<Portable>::new(&key).unwrap();

    let mut block = *b"sixteen byte msg";
    let original = block;
    cipher.encrypt_block(&mut block).unwrap();
    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, original);
}

#[test]
fn sha256_known_answer_through_facade() {
    let digest = Sha256::<Portable>::digest(b"abc").unwrap();
    assert_eq!(
        digest.to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn drbg_keys_a_cipher() {
    let mut drbg =
        CtrDrbg::instantiate(XorShiftSampler::new(7), b"integration entropy", b"").unwrap();

    let mut key_bytes = [0u8; 16];
    drbg.generate(b"", &mut key_bytes).unwrap();
    let key = SecretBytes::new(key_bytes);

    let cipher = Aes128::<Portable>::new(&key).unwrap();
    let mut block = [0u8; 16];
    drbg.generate(b"", &mut block).unwrap();
    let original = block;

    cipher.encrypt_block(&mut block).unwrap();
    assert_ne!(block, original);
    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, original);

    drbg.uninstantiate();
}

#[test]
fn digest_constant_time_equality() {
    let a = Sha256::<Portable>::digest(b"same input").unwrap();
    let b = Sha256::<Portable>::digest(b"same input").unwrap();
    let c = Sha256::<Portable>::digest(b"other input").unwrap();

    assert!(a.ct_eq(&b));
    assert!(!a.ct_eq(&c));
}
