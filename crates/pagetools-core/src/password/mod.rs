//! Random password generator with optional digit and symbol classes.
//!
//! Passwords are drawn from a general-purpose PRNG. This is a convenience
//! tool; do not treat its output as key material.

pub mod charset;
pub mod clipboard;
pub mod generate;

pub use charset::PasswordSpec;
pub use clipboard::{Clipboard, CopyFeedback, MemoryClipboard};
pub use generate::{generate, generate_password, generate_with_rng, PasswordOutput};
