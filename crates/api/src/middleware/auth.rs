//! # Authentication Module
//!
//! Password hashing for student accounts. The Argon2 hash is produced
//! before the password ever reaches the store; verification happens in the
//! roster layer against the stored hash, so plaintext never persists.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use eyre::Result;

/// Hashes a password using the Argon2 algorithm.
///
/// Generates a fresh random salt per password and returns the PHC string
/// format (algorithm, version, parameters, salt, and hash).
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}
