//! Code generation

use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;

/// Draw `length` characters uniformly from `alphabet` using the OS CSPRNG
///
/// `alphabet` must not be empty.
pub fn generate_code(length: usize, alphabet: &[char]) -> String {
    let index = Uniform::from(0..alphabet.len());
    (0..length)
        .map(|_| alphabet[index.sample(&mut OsRng)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_shared::config::otp::DEFAULT_OTP_ALLOWED_CHARS;
    use std::collections::HashSet;

    #[test]
    fn test_code_length_and_alphabet() {
        let alphabet: Vec<char> = DEFAULT_OTP_ALLOWED_CHARS.chars().collect();
        for _ in 0..200 {
            let code = generate_code(6, &alphabet);
            assert_eq!(code.chars().count(), 6);
            assert!(code.chars().all(|c| alphabet.contains(&c)));
        }
    }

    #[test]
    fn test_single_symbol_alphabet() {
        assert_eq!(generate_code(4, &['7']), "7777");
    }

    #[test]
    fn test_codes_vary() {
        let alphabet: Vec<char> = DEFAULT_OTP_ALLOWED_CHARS.chars().collect();
        let codes: HashSet<String> = (0..50).map(|_| generate_code(6, &alphabet)).collect();
        assert!(codes.len() > 40);
    }
}
