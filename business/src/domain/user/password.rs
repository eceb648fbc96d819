use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

/// Digest format: `<salt-b64>$<sha256(salt || password)-b64>`.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::random();
    format!(
        "{}${}",
        STANDARD.encode(salt),
        STANDARD.encode(digest(&salt, password))
    )
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_b64, digest_b64)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = STANDARD.decode(salt_b64) else {
        return false;
    };
    let Ok(expected) = STANDARD.decode(digest_b64) else {
        return false;
    };
    digest(&salt, password) == expected
}

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_verify_the_password_it_hashed() {
        let stored = hash_password("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &stored));
    }

    #[test]
    fn should_reject_a_wrong_password() {
        let stored = hash_password("original");
        assert!(!verify_password("guess", &stored));
    }

    #[test]
    fn should_salt_hashes_so_equal_passwords_differ() {
        assert_ne!(hash_password("same"), hash_password("same"));
    }

    #[test]
    fn should_reject_malformed_stored_digests() {
        assert!(!verify_password("anything", "no-dollar-separator"));
        assert!(!verify_password("anything", "!!!$???"));
    }
}
