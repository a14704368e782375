use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIALS: &[u8] = b"!@#$%^&*()-_=+[]{}<>?";

/// Random printable password from the OS CSPRNG. Lowercase and digits are
/// always in play; uppercase and specials join on request. One character of
/// each enabled class is guaranteed, the rest is drawn from the full pool,
/// then everything is shuffled so the class picks don't sit at the front.
///
/// `length` must be greater than zero.
pub fn generate_password(length: usize, include_special_chars: bool, upper_case: bool) -> String {
    assert!(length > 0, "password length must be greater than zero");

    let mut classes: Vec<&[u8]> = vec![LOWERCASE, DIGITS];
    if upper_case {
        classes.push(UPPERCASE);
    }
    if include_special_chars {
        classes.push(SPECIALS);
    }
    let pool: Vec<u8> = classes.concat();

    let mut rng = OsRng;
    let mut out: Vec<u8> = Vec::with_capacity(length);
    for class in classes.iter().take(length) {
        out.push(class[rng.gen_range(0..class.len())]);
    }
    while out.len() < length {
        out.push(pool[rng.gen_range(0..pool.len())]);
    }
    out.shuffle(&mut rng);

    // The pool is ASCII only, so this cannot fail.
    String::from_utf8(out).unwrap_or_default()
}

pub fn hash_password(plaintext: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = rand_core::OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(plaintext.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(hash: &str, plaintext: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}
