use rand::Rng;
use zeroize::Zeroizing;

use crate::rng::SecureRng;

/// Number of passwords produced by one call to [`generate_passwords`].
pub const PASSWORD_BATCH: usize = 5;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Which character classes to add on top of the lowercase letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl PasswordPolicy {
    /// The characters a password may be built from, lowercase first.
    pub fn alphabet(&self) -> Vec<char> {
        let mut characters = String::from(LOWERCASE);
        if self.include_uppercase {
            characters.push_str(UPPERCASE);
        }
        if self.include_digits {
            characters.push_str(DIGITS);
        }
        if self.include_symbols {
            characters.push_str(SYMBOLS);
        }
        characters.chars().collect()
    }
}

/// Generates a batch of [`PASSWORD_BATCH`] passwords of `length` characters each.
///
/// Every position is drawn independently from the whole alphabet, so a password isn't guaranteed
/// to contain a character from each enabled class.
pub fn generate_passwords<S: SecureRng + ?Sized>(
    rng: &mut S,
    length: usize,
    policy: &PasswordPolicy,
) -> Vec<Zeroizing<String>> {
    let alphabet = policy.alphabet();

    (0..PASSWORD_BATCH)
        .map(|_| {
            let password: String = (0..length)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            Zeroizing::new(password)
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/password_generator.rs"]
mod password_generator;
