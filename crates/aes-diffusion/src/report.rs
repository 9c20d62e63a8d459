//! Result types for each diffusion check.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which input receives the single-bit flip in the avalanche test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipTarget {
    /// Flip one plaintext bit, keep the key.
    Plaintext,
    /// Flip one key bit, keep the plaintext.
    Key,
}

impl fmt::Display for FlipTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipTarget::Plaintext => f.write_str("plaintext"),
            FlipTarget::Key => f.write_str("key"),
        }
    }
}

/// Grading of the mean avalanche distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvalancheVerdict {
    /// Mean of at least 60 flipped bits.
    Strong,
    /// Mean of at least 50 flipped bits.
    Moderate,
    /// Anything lower.
    Weak,
}

impl AvalancheVerdict {
    /// Grades a mean number of flipped output bits.
    pub fn from_mean(mean: f64) -> Self {
        if mean >= 60.0 {
            Self::Strong
        } else if mean >= 50.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// Avalanche test outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvalancheReport {
    /// Input that was perturbed.
    pub target: FlipTarget,
    /// Number of trials run.
    pub trials: usize,
    /// Mean number of differing ciphertext bits.
    pub mean_bits: f64,
    /// Fewest differing bits in any trial.
    pub min_bits: u32,
    /// Most differing bits in any trial.
    pub max_bits: u32,
    /// Grade of `mean_bits`.
    pub verdict: AvalancheVerdict,
}

impl fmt::Display for AvalancheReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avalanche ({} bit flip, {} trials): mean {:.2}/128 bits ({:.2}%), min {}, max {}: {:?}",
            self.target,
            self.trials,
            self.mean_bits,
            self.mean_bits / 128.0 * 100.0,
            self.min_bits,
            self.max_bits,
            self.verdict
        )
    }
}

/// Differential distribution test outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifferentialReport {
    /// Number of trials run.
    pub trials: usize,
    /// Plaintext byte that received the `0x01` difference.
    pub byte_index: usize,
    /// Mean Hamming distance between ciphertext pairs.
    pub mean_distance: f64,
    /// `true` when the mean is below 50 bits.
    pub weak: bool,
}

impl fmt::Display for DifferentialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "differential (byte {}, {} trials): mean distance {:.2} bits (expect ~64): {}",
            self.byte_index,
            self.trials,
            self.mean_distance,
            if self.weak { "weak diffusion" } else { "good diffusion" }
        )
    }
}

/// Linear approximation bias test outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearBiasReport {
    /// Number of trials run.
    pub trials: usize,
    /// Trials where `P[0] ^ P[5] ^ C[2]` had even low-bit parity.
    pub even_parity: usize,
    /// `|even_parity / trials - 0.5|`.
    pub bias: f64,
    /// `true` when `bias` exceeds 0.01.
    pub biased: bool,
}

impl fmt::Display for LinearBiasReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear bias ({} trials): {:.5}: {}",
            self.trials,
            self.bias,
            if self.biased { "bias detected" } else { "no significant bias" }
        )
    }
}

/// Grading of ciphertext byte entropy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntropyVerdict {
    /// At least 7.99 bits per byte.
    High,
    /// At least 7.8 bits per byte.
    SlightlyLow,
    /// Anything lower.
    Low,
}

impl EntropyVerdict {
    /// Grades an entropy value in bits per byte.
    pub fn from_entropy(bits_per_byte: f64) -> Self {
        if bits_per_byte >= 7.99 {
            Self::High
        } else if bits_per_byte >= 7.8 {
            Self::SlightlyLow
        } else {
            Self::Low
        }
    }
}

/// Shannon entropy test outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntropyReport {
    /// Number of blocks encrypted.
    pub trials: usize,
    /// Ciphertext bytes measured.
    pub total_bytes: usize,
    /// Entropy in bits per byte (max 8).
    pub bits_per_byte: f64,
    /// Grade of `bits_per_byte`.
    pub verdict: EntropyVerdict,
}

impl fmt::Display for EntropyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entropy ({} bytes): {:.4}/8 bits per byte: {:?}",
            self.total_bytes, self.bits_per_byte, self.verdict
        )
    }
}

/// All checks for one key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffusionReport {
    /// Avalanche with plaintext bit flips.
    pub plaintext_avalanche: AvalancheReport,
    /// Avalanche with key bit flips.
    pub key_avalanche: AvalancheReport,
    /// Differential distribution.
    pub differential: DifferentialReport,
    /// Linear approximation bias.
    pub linear: LinearBiasReport,
    /// Ciphertext entropy.
    pub entropy: EntropyReport,
}

impl fmt::Display for DiffusionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.plaintext_avalanche)?;
        writeln!(f, "{}", self.key_avalanche)?;
        writeln!(f, "{}", self.differential)?;
        writeln!(f, "{}", self.linear)?;
        write!(f, "{}", self.entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avalanche_thresholds() {
        assert_eq!(AvalancheVerdict::from_mean(64.0), AvalancheVerdict::Strong);
        assert_eq!(AvalancheVerdict::from_mean(60.0), AvalancheVerdict::Strong);
        assert_eq!(AvalancheVerdict::from_mean(55.5), AvalancheVerdict::Moderate);
        assert_eq!(AvalancheVerdict::from_mean(12.0), AvalancheVerdict::Weak);
    }

    #[test]
    fn entropy_thresholds() {
        assert_eq!(EntropyVerdict::from_entropy(7.995), EntropyVerdict::High);
        assert_eq!(EntropyVerdict::from_entropy(7.9), EntropyVerdict::SlightlyLow);
        assert_eq!(EntropyVerdict::from_entropy(3.0), EntropyVerdict::Low);
    }
}
