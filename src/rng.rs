use rand::rngs::{OsRng, StdRng, ThreadRng};

/// A general-purpose pseudorandom source, for values that don't need to stay secret.
pub trait Prng: rand::RngCore {}

impl Prng for ThreadRng {}

impl Prng for StdRng {}

/// A cryptographically secure source, required for passwords and secure numbers.
///
/// Only the operating system generator implements it, seeded generators can't be passed
/// where this is expected:
///
/// ```compile_fail
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// randgen::generator::secure_numbers(&mut rng, 0, 9, 1).unwrap();
/// ```
pub trait SecureRng: rand::RngCore + rand::CryptoRng {}

impl SecureRng for OsRng {}

/// The pseudorandom source used by the session layer.
pub fn prng() -> ThreadRng {
    rand::thread_rng()
}

/// The secure source used by the session layer.
pub fn secure_rng() -> OsRng {
    OsRng
}
