//! Short code generation.
//!
//! Codes are drawn uniformly from a 62-character alphanumeric alphabet. The
//! generator does not check for uniqueness; collisions surface as store
//! errors from the `shortcode` UNIQUE constraint.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Alphabet used for short codes: lowercase, uppercase, digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default short code length.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random code of `length` characters using `rng`.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Fixed-length code generator owning its random source.
///
/// The generator is shared between request tasks; the lock is held only for
/// the duration of a single [`CodeGenerator::generate`] call.
#[derive(Debug)]
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new(length: usize) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
            length,
        }
    }

    /// Creates a deterministic generator, for tests and reproducible runs.
    pub fn with_seed(length: usize, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Produces the next code.
    pub fn generate(&self) -> String {
        // A panic while holding the lock cannot leave the RNG in a broken state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_code(&mut *rng, self.length)
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}
