//! Admin credential tools.

use std::io::Read;

use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use argon2::Argon2;

/// Read a password from stdin and print its argon2 hash.
///
/// The output is the value for `ADMIN_PASSWORD_HASH`. Reading from stdin
/// keeps the password out of shell history and process listings.
///
/// # Errors
///
/// Returns an error if stdin cannot be read, the password is empty, or
/// hashing fails.
pub fn hash_password() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let password = input.trim_end_matches(['\n', '\r']);

    if password.is_empty() {
        return Err("password must not be empty".into());
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("failed to hash password: {e}"))?
        .to_string();

    #[allow(clippy::print_stdout)]
    {
        println!("{hash}");
    }

    Ok(())
}
