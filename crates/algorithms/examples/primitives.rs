//! Walkthrough of the three primitive engines

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use xcrypt_algorithms::accel::{Portable, XorShiftSampler};
use xcrypt_algorithms::block::{Aes128, BlockCipher};
use xcrypt_algorithms::drbg::CtrDrbg;
use xcrypt_algorithms::hash::{HashFunction, Sha256};
use xcrypt_algorithms::Result;

fn main() -> Result<()> {
    // Hash a message incrementally
    let mut hasher = Sha256::<Portable>::new();
    hasher.update(b"hello ")?.update(b"world")?;
    let digest = hasher.finalize()?;
    println!("SHA-256: {}", digest);

    // Encrypt and decrypt a block
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let key = Aes128::<Portable>::generate_key(&mut rng);
    let cipher = Aes128::<Portable>::new(&key)?;

    let mut block = *b"sixteen byte msg";
    cipher.encrypt_block(&mut block)?;
    println!("ciphertext: {}", hex::encode(block));
    cipher.decrypt_block(&mut block)?;
    assert_eq!(&block, b"sixteen byte msg");

    // Draw bytes from the DRBG
    let mut drbg = CtrDrbg::instantiate(XorShiftSampler::new(7), b"example entropy", b"")?;
    let mut out = [0u8; 32];
    drbg.generate(b"", &mut out)?;
    println!("drbg output: {}", hex::encode(out));
    drbg.uninstantiate();

    Ok(())
}
