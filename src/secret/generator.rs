//! Access key secret generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{AccessKeyError, Result};

/// Letters a secret may contain.
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digits a secret may contain. Zero is excluded.
pub const DIGITS: &[u8] = b"123456789";
/// Special characters a secret may contain.
pub const SPECIALS: &[u8] = b"!@#_%$";

/// Shortest secret that still holds at least one character of every class.
pub const MIN_SECRET_LENGTH: usize = 4;

/// Number of letters, specials and digits in a secret of `length` characters.
///
/// Letters and digits each get `length / 2 - 1`, specials absorb the rest so
/// the three counts always sum to `length`.
pub fn class_counts(length: usize) -> Result<(usize, usize, usize)> {
    if length < MIN_SECRET_LENGTH {
        return Err(AccessKeyError::invalid_argument(format!(
            "secret length must be at least {MIN_SECRET_LENGTH}, got {length}"
        )));
    }
    let half = length / 2 - 1;
    Ok((half, length - 2 * half, half))
}

/// Generate a random access key secret of exactly `length` characters.
///
/// Uses the thread-local CSPRNG. Lengths below [`MIN_SECRET_LENGTH`] are
/// rejected.
///
/// # Example
///
/// ```rust
/// use accesskey_core::generate_random_string;
///
/// let secret = generate_random_string(10).unwrap();
/// assert_eq!(secret.len(), 10);
/// assert_eq!(secret.chars().filter(|c| c.is_ascii_digit()).count(), 4);
/// ```
pub fn generate_random_string(length: usize) -> Result<String> {
    generate_random_string_with(&mut rand::thread_rng(), length)
}

/// Generate a secret using the given random source.
pub fn generate_random_string_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String> {
    let (letters, specials, digits) = class_counts(length)?;

    let mut chars = Vec::with_capacity(length);
    push_from(rng, &mut chars, LETTERS, letters);
    push_from(rng, &mut chars, SPECIALS, specials);
    push_from(rng, &mut chars, DIGITS, digits);

    // Uniform Fisher-Yates instead of a random-comparator sort.
    chars.shuffle(rng);

    Ok(chars.into_iter().map(char::from).collect())
}

fn push_from<R: Rng + ?Sized>(rng: &mut R, out: &mut Vec<u8>, pool: &[u8], count: usize) {
    out.extend((0..count).map(|_| pool[rng.gen_range(0..pool.len())]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn count_in(secret: &str, pool: &[u8]) -> usize {
        secret.bytes().filter(|b| pool.contains(b)).count()
    }

    #[test]
    fn test_secret_length() {
        for length in MIN_SECRET_LENGTH..64 {
            let secret = generate_random_string(length).unwrap();
            assert_eq!(secret.len(), length, "length {length}");
        }
    }

    #[test]
    fn test_class_distribution_for_ten() {
        let secret = generate_random_string(10).unwrap();
        assert_eq!(count_in(&secret, LETTERS), 4);
        assert_eq!(count_in(&secret, DIGITS), 4);
        assert_eq!(count_in(&secret, SPECIALS), 2);
        assert!(!secret.contains('0'));
    }

    #[test]
    fn test_odd_length_gives_extra_special() {
        assert_eq!(class_counts(5).unwrap(), (1, 3, 1));
        assert_eq!(class_counts(11).unwrap(), (4, 3, 4));
        assert_eq!(class_counts(4).unwrap(), (1, 2, 1));
    }

    #[test]
    fn test_rejects_short_lengths() {
        for length in 0..MIN_SECRET_LENGTH {
            let result = generate_random_string(length);
            assert!(matches!(result, Err(AccessKeyError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_random_string_with(&mut StdRng::seed_from_u64(7), 24).unwrap();
        let b = generate_random_string_with(&mut StdRng::seed_from_u64(7), 24).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_secrets_are_shuffled() {
        // Unshuffled output would always start with the letter block.
        let mut rng = StdRng::seed_from_u64(42);
        let shuffled = (0..50)
            .map(|_| generate_random_string_with(&mut rng, 16).unwrap())
            .any(|s| !s.as_bytes()[0].is_ascii_alphabetic());
        assert!(shuffled);
    }

    #[test]
    fn test_secrets_are_unique() {
        let a = generate_random_string(32).unwrap();
        let b = generate_random_string(32).unwrap();
        assert_ne!(a, b);
    }
}
