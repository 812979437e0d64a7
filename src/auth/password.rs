// Password hashing and verification

use crate::auth::error::AuthError;
use argon2::Argon2;
use rand::RngCore;
use subtle::ConstantTimeEq;

/// Salt length in bytes (hex-encoded in the stored credential)
const SALT_LEN: usize = 16;
/// Derived key length in bytes
const KEY_LEN: usize = 64;
/// Separator between the hex salt and the hex derived key
const SEPARATOR: char = ':';

/// Password service for hashing and verification
///
/// Credentials are stored as a single string: `hex(salt):hex(key)`, where
/// the key is derived from the password with Argon2id. Verification
/// re-derives the key from the embedded salt and compares in constant time.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password into a stored credential string
    pub fn hash_password(password: &str) -> Result<String, AuthError> {
        let mut salt = [0u8; SALT_LEN];
        rand::rngs::OsRng.fill_bytes(&mut salt);

        let key = Self::derive_key(password, &salt)?;

        Ok(format!("{}{}{}", hex::encode(salt), SEPARATOR, hex::encode(key)))
    }

    /// Verify a password against a stored credential
    ///
    /// A malformed credential (missing separator, bad hex) fails
    /// verification rather than raising an error.
    pub fn verify_password(password: &str, credential: &str) -> Result<bool, AuthError> {
        let Some((salt_hex, key_hex)) = credential.split_once(SEPARATOR) else {
            return Ok(false);
        };

        let Ok(salt) = hex::decode(salt_hex) else {
            return Ok(false);
        };
        let Ok(expected) = hex::decode(key_hex) else {
            return Ok(false);
        };

        let derived = Self::derive_key(password, &salt)?;

        // ct_eq treats length mismatch as inequality, so a truncated
        // stored key simply fails verification
        Ok(derived.ct_eq(&expected).into())
    }

    /// Derive a fixed-length key from a password and salt
    fn derive_key(password: &str, salt: &[u8]) -> Result<[u8; KEY_LEN], AuthError> {
        let mut key = [0u8; KEY_LEN];
        Argon2::default()
            .hash_password_into(password.as_bytes(), salt, &mut key)
            .map_err(|_| AuthError::PasswordHashError)?;
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hash_then_verify_succeeds() {
        let credential = PasswordService::hash_password("correct horse battery").unwrap();
        assert!(PasswordService::verify_password("correct horse battery", &credential).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let credential = PasswordService::hash_password("password123").unwrap();
        assert!(!PasswordService::verify_password("password124", &credential).unwrap());
    }

    #[test]
    fn test_credential_format() {
        let credential = PasswordService::hash_password("secret").unwrap();
        let (salt_hex, key_hex) = credential.split_once(':').expect("separator missing");

        // 16-byte salt and 64-byte key, both hex-encoded
        assert_eq!(salt_hex.len(), SALT_LEN * 2);
        assert_eq!(key_hex.len(), KEY_LEN * 2);
        assert!(hex::decode(salt_hex).is_ok());
        assert!(hex::decode(key_hex).is_ok());
    }

    #[test]
    fn test_salts_are_unique_per_hash() {
        let a = PasswordService::hash_password("same password").unwrap();
        let b = PasswordService::hash_password("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_credential_fails_without_error() {
        // No separator
        assert!(!PasswordService::verify_password("pw", "deadbeef").unwrap());
        // Non-hex salt
        assert!(!PasswordService::verify_password("pw", "zzzz:deadbeef").unwrap());
        // Non-hex key
        assert!(!PasswordService::verify_password("pw", "deadbeef:not-hex").unwrap());
        // Empty credential
        assert!(!PasswordService::verify_password("pw", "").unwrap());
    }

    #[test]
    fn test_truncated_key_fails_verification() {
        let credential = PasswordService::hash_password("secret").unwrap();
        let (salt_hex, key_hex) = credential.split_once(':').unwrap();
        let truncated = format!("{}:{}", salt_hex, &key_hex[..32]);
        assert!(!PasswordService::verify_password("secret", &truncated).unwrap());
    }

    proptest! {
        // Keep case count low: Argon2 derivation is deliberately slow
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn prop_hash_verify_round_trip(password in "[ -~]{1,40}") {
            let credential = PasswordService::hash_password(&password).unwrap();
            prop_assert!(PasswordService::verify_password(&password, &credential).unwrap());
        }
    }
}
