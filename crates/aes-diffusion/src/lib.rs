//! Statistical diffusion checks for AES-128.
//!
//! Each check encrypts random blocks under a fixed key with [`aes_core`] and
//! summarises how the ciphertext reacts:
//! - avalanche: output bits changed by a single plaintext or key bit flip;
//! - differential: mean distance between ciphertexts of a one-byte difference;
//! - linear bias: parity bias of `P[0] ^ P[5] ^ C[2]`;
//! - entropy: Shannon entropy of the ciphertext bytes.
//!
//! [`analyze_sbox`] separately grades an 8-bit S-box by the worst entries of
//! its difference distribution, linear approximation and boomerang
//! connectivity tables.
//!
//! These are sanity checks on diffusion, not cryptanalysis.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod analyzer;
mod metrics;
mod report;
mod sbox_analysis;

pub use analyzer::{AnalysisConfig, AnalysisError, Analyzer};
pub use metrics::{flip_bit, hamming_distance, shannon_entropy, BLOCK_BITS};
pub use report::{
    AvalancheReport, AvalancheVerdict, DifferentialReport, DiffusionReport, EntropyReport,
    EntropyVerdict, FlipTarget, LinearBiasReport,
};
pub use sbox_analysis::{analyze_sbox, bct, ddt, inverse_sbox, lat, CountTable, Sbox, SboxReport};
