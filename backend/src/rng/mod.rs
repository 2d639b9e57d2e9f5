//! Deterministic random number generation
//!
//! Uses xorshift64* for start/end node sampling.
//! CRITICAL: All randomness in the simulator MUST go through this module.

mod xorshift;

pub use xorshift::RngManager;
