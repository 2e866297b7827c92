//! API key generation

use rand::Rng;

pub const KEY_PREFIX: &str = "sk-live-";
const KEY_LENGTH: usize = 24;
const KEY_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A fresh `sk-live-` key with 24 random lowercase alphanumerics
pub fn generate_key() -> String {
    generate_key_with(&mut rand::thread_rng())
}

pub fn generate_key_with<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..KEY_LENGTH)
        .map(|_| KEY_CHARSET[rng.gen_range(0..KEY_CHARSET.len())] as char)
        .collect();
    format!("{}{}", KEY_PREFIX, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_key_shape() {
        let key = generate_key();
        assert!(key.starts_with(KEY_PREFIX));
        let suffix = &key[KEY_PREFIX.len()..];
        assert_eq!(suffix.len(), 24);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_seeded_keys_are_reproducible() {
        let a = generate_key_with(&mut StdRng::seed_from_u64(7));
        let b = generate_key_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
