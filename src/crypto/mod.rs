//! Low-level crypto primitives: key stretching, AEAD sealing/opening, and
//! secure randomness. See the crate root for the high-level API.

pub mod cipher;
pub mod kdf;
pub mod rng;
