//! Credential material and per-encryption randomness for the handshake.

pub mod id;
pub mod iv;
pub mod secret;

pub use id::*;
pub use iv::*;
pub use secret::*;
