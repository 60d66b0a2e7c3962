//! Default base names for fresh windows.

use rand::Rng;

/// Prefix on every generated base name.
pub const NAME_PREFIX: &str = "0x";

/// Minimum number of hex digits after the prefix.
pub const MIN_HEX_DIGITS: usize = 16;

/// Generate a random base name such as `0x9f3c07e1a2b4d5c6`.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate a base name from the given random source.
///
/// Random 32-bit words are appended in lowercase hex (no zero padding)
/// until at least [`MIN_HEX_DIGITS`] digits have accumulated, so the
/// result can run a few digits past the minimum.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = String::with_capacity(MIN_HEX_DIGITS + 8);
    while digits.len() < MIN_HEX_DIGITS {
        digits.push_str(&format!("{:x}", rng.gen::<u32>()));
    }
    format!("{}{}", NAME_PREFIX, digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_generated_name(name: &str) -> bool {
        match name.strip_prefix(NAME_PREFIX) {
            Some(hex) => {
                hex.len() >= MIN_HEX_DIGITS
                    && hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            }
            None => false,
        }
    }

    #[test]
    fn test_generated_shape() {
        for _ in 0..64 {
            let name = generate();
            assert!(is_generated_name(&name), "bad name {}", name);
        }
    }

    #[test]
    fn test_two_windows_differ() {
        assert_ne!(generate(), generate());
    }

    #[test]
    fn test_full_words_give_exact_length() {
        let mut rng = StepRng::new(0xdead_beef, 0);
        assert_eq!(generate_with(&mut rng), "0xdeadbeefdeadbeef");
    }

    #[test]
    fn test_short_words_overshoot() {
        // five digits per word: 5, 10, 15, 20
        let mut rng = StepRng::new(0x12345, 0);
        let name = generate_with(&mut rng);
        assert_eq!(name, "0x12345123451234512345");
        assert!(is_generated_name(&name));
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a = generate_with(&mut StdRng::seed_from_u64(7));
        let b = generate_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(is_generated_name(&a));
    }
}
