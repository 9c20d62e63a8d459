//! Randomised diffusion checks driven by an injected RNG.

use aes_core::{encrypt_block, expand_key, Aes128, Aes128Key, Block};
use log::debug;
use rand::{Rng, RngCore};
use thiserror::Error;

use crate::metrics::{flip_bit, hamming_distance, shannon_entropy, BLOCK_BITS};
use crate::report::{
    AvalancheReport, AvalancheVerdict, DifferentialReport, DiffusionReport, EntropyReport,
    EntropyVerdict, FlipTarget, LinearBiasReport,
};

/// Mean differential distance below which diffusion is reported as weak.
const WEAK_DIFFERENTIAL_BITS: f64 = 50.0;

/// Bias above which the linear approximation is reported as biased.
const LINEAR_BIAS_THRESHOLD: f64 = 0.01;

/// Errors from misconfigured analyses.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// A check was configured to run zero trials.
    #[error("{test} needs at least one trial")]
    NoTrials {
        /// Name of the check.
        test: &'static str,
    },
    /// The differential byte index is outside the block.
    #[error("differential byte index {index} is outside the 16-byte block")]
    ByteOutOfRange {
        /// Configured index.
        index: usize,
    },
    /// The substitution table is not a bijection, so it has no inverse.
    #[error("S-box is not a permutation: {value:#04x} never appears as an output")]
    NotAPermutation {
        /// Smallest byte missing from the table's outputs.
        value: u8,
    },
}

/// Trial counts and parameters for each check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Trials per avalanche run.
    pub avalanche_trials: usize,
    /// Trials for the differential check.
    pub differential_trials: usize,
    /// Plaintext byte that receives the `0x01` difference.
    pub differential_byte: usize,
    /// Trials for the linear bias check.
    pub linear_trials: usize,
    /// Blocks encrypted for the entropy check.
    pub entropy_trials: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            avalanche_trials: 10,
            differential_trials: 1000,
            differential_byte: 0,
            linear_trials: 10_000,
            entropy_trials: 1000,
        }
    }
}

impl AnalysisConfig {
    /// Uses `trials` for every check.
    pub fn with_trials(trials: usize) -> Self {
        Self {
            avalanche_trials: trials,
            differential_trials: trials,
            differential_byte: 0,
            linear_trials: trials,
            entropy_trials: trials,
        }
    }
}

/// Diffusion analyzer parametrized by an RNG.
pub struct Analyzer<R: RngCore> {
    rng: R,
    config: AnalysisConfig,
}

impl<R: RngCore> Analyzer<R> {
    /// Creates an analyzer with default configuration.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: AnalysisConfig::default(),
        }
    }

    /// Creates an analyzer with explicit configuration.
    pub fn with_config(rng: R, config: AnalysisConfig) -> Self {
        Self { rng, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut AnalysisConfig {
        &mut self.config
    }

    fn random_block(&mut self) -> Block {
        let mut block = [0u8; 16];
        self.rng.fill_bytes(&mut block);
        block
    }

    /// Flips one random bit of the plaintext or key per trial and measures
    /// how many ciphertext bits change.
    pub fn avalanche(
        &mut self,
        key: &Aes128Key,
        target: FlipTarget,
    ) -> Result<AvalancheReport, AnalysisError> {
        let trials = self.config.avalanche_trials;
        if trials == 0 {
            return Err(AnalysisError::NoTrials { test: "avalanche" });
        }
        let base = Aes128::new(key);

        let mut total = 0u64;
        let mut min_bits = u32::MAX;
        let mut max_bits = 0u32;
        for _ in 0..trials {
            let plaintext = self.random_block();
            let bit = self.rng.gen_range(0..BLOCK_BITS);
            let reference = base.encrypt_block(&plaintext);
            let perturbed = match target {
                FlipTarget::Plaintext => base.encrypt_block(&flip_bit(&plaintext, bit)),
                FlipTarget::Key => {
                    let flipped_key = Aes128Key::from(flip_bit(&key.0, bit));
                    encrypt_block(&plaintext, &expand_key(&flipped_key))
                }
            };
            let distance = hamming_distance(&reference, &perturbed);
            total += u64::from(distance);
            min_bits = min_bits.min(distance);
            max_bits = max_bits.max(distance);
        }

        let mean_bits = total as f64 / trials as f64;
        debug!("avalanche ({target}): mean {mean_bits:.2} bits over {trials} trials");
        Ok(AvalancheReport {
            target,
            trials,
            mean_bits,
            min_bits,
            max_bits,
            verdict: AvalancheVerdict::from_mean(mean_bits),
        })
    }

    /// Encrypts plaintext pairs differing by `0x01` in one byte and measures
    /// the mean ciphertext Hamming distance.
    pub fn differential(&mut self, key: &Aes128Key) -> Result<DifferentialReport, AnalysisError> {
        let trials = self.config.differential_trials;
        let byte_index = self.config.differential_byte;
        if trials == 0 {
            return Err(AnalysisError::NoTrials {
                test: "differential",
            });
        }
        if byte_index >= 16 {
            return Err(AnalysisError::ByteOutOfRange { index: byte_index });
        }
        let aes = Aes128::new(key);

        let mut total = 0u64;
        for _ in 0..trials {
            let p1 = self.random_block();
            let mut p2 = p1;
            p2[byte_index] ^= 0x01;
            total += u64::from(hamming_distance(
                &aes.encrypt_block(&p1),
                &aes.encrypt_block(&p2),
            ));
        }

        let mean_distance = total as f64 / trials as f64;
        debug!("differential: mean distance {mean_distance:.2} bits over {trials} trials");
        Ok(DifferentialReport {
            trials,
            byte_index,
            mean_distance,
            weak: mean_distance < WEAK_DIFFERENTIAL_BITS,
        })
    }

    /// Measures the bias of the parity `(P[0] ^ P[5] ^ C[2]) & 1`.
    pub fn linear_bias(&mut self, key: &Aes128Key) -> Result<LinearBiasReport, AnalysisError> {
        let trials = self.config.linear_trials;
        if trials == 0 {
            return Err(AnalysisError::NoTrials { test: "linear bias" });
        }
        let aes = Aes128::new(key);

        let mut even_parity = 0usize;
        for _ in 0..trials {
            let plaintext = self.random_block();
            let ciphertext = aes.encrypt_block(&plaintext);
            if (plaintext[0] ^ plaintext[5] ^ ciphertext[2]) & 1 == 0 {
                even_parity += 1;
            }
        }

        let bias = (even_parity as f64 / trials as f64 - 0.5).abs();
        debug!("linear bias: {bias:.5} over {trials} trials");
        Ok(LinearBiasReport {
            trials,
            even_parity,
            bias,
            biased: bias > LINEAR_BIAS_THRESHOLD,
        })
    }

    /// Shannon entropy of the ciphertext bytes of random plaintexts.
    pub fn entropy(&mut self, key: &Aes128Key) -> Result<EntropyReport, AnalysisError> {
        let trials = self.config.entropy_trials;
        if trials == 0 {
            return Err(AnalysisError::NoTrials { test: "entropy" });
        }
        let aes = Aes128::new(key);

        let mut bytes = Vec::with_capacity(trials * 16);
        for _ in 0..trials {
            let plaintext = self.random_block();
            bytes.extend_from_slice(&aes.encrypt_block(&plaintext));
        }

        let bits_per_byte = shannon_entropy(&bytes);
        debug!(
            "entropy: {bits_per_byte:.4} bits/byte over {} bytes",
            bytes.len()
        );
        Ok(EntropyReport {
            trials,
            total_bytes: bytes.len(),
            bits_per_byte,
            verdict: EntropyVerdict::from_entropy(bits_per_byte),
        })
    }

    /// Runs every check against `key`.
    pub fn run_all(&mut self, key: &Aes128Key) -> Result<DiffusionReport, AnalysisError> {
        Ok(DiffusionReport {
            plaintext_avalanche: self.avalanche(key, FlipTarget::Plaintext)?,
            key_avalanche: self.avalanche(key, FlipTarget::Key)?,
            differential: self.differential(key)?,
            linear: self.linear_bias(key)?,
            entropy: self.entropy(key)?,
        })
    }
}
