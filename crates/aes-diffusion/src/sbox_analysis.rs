//! Differential, linear and boomerang tables for 8-bit S-boxes.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analyzer::AnalysisError;

/// An 8-bit substitution table.
pub type Sbox = [u8; 256];

const DIM: usize = 256;

/// A 256x256 table of signed counts indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountTable {
    data: Box<[i16]>,
}

impl CountTable {
    /// Allocates a zeroed table.
    pub fn new_zeroed() -> Self {
        Self {
            data: vec![0i16; DIM * DIM].into_boxed_slice(),
        }
    }

    /// Reads the entry at `(row, col)`.
    #[inline]
    pub fn get(&self, row: u8, col: u8) -> i16 {
        self.data[entry_index(row, col)]
    }

    fn set(&mut self, row: u8, col: u8, value: i16) {
        self.data[entry_index(row, col)] = value;
    }

    fn increment(&mut self, row: u8, col: u8) {
        self.data[entry_index(row, col)] += 1;
    }

    /// Largest `|entry|` over rows `>= min_row` and columns `>= min_col`.
    pub fn max_abs(&self, min_row: u8, min_col: u8) -> u16 {
        let mut max = 0u16;
        for row in min_row..=u8::MAX {
            for col in min_col..=u8::MAX {
                max = max.max(self.get(row, col).unsigned_abs());
            }
        }
        max
    }
}

#[inline]
const fn entry_index(row: u8, col: u8) -> usize {
    ((row as usize) << 8) | col as usize
}

#[inline]
fn parity(x: u8) -> u32 {
    x.count_ones() & 1
}

/// Inverts a bijective S-box.
pub fn inverse_sbox(sbox: &Sbox) -> Result<Sbox, AnalysisError> {
    let mut inv = [0u8; DIM];
    let mut seen = [false; DIM];
    for (x, &y) in sbox.iter().enumerate() {
        inv[y as usize] = x as u8;
        seen[y as usize] = true;
    }
    match seen.iter().position(|&s| !s) {
        Some(missing) => Err(AnalysisError::NotAPermutation {
            value: missing as u8,
        }),
        None => Ok(inv),
    }
}

/// Difference distribution table: entry `(dx, dy)` counts the `x` with
/// `S(x) ^ S(x ^ dx) == dy`.
pub fn ddt(sbox: &Sbox) -> CountTable {
    let mut table = CountTable::new_zeroed();
    for dx in 0..=u8::MAX {
        for x in 0..=u8::MAX {
            let dy = sbox[x as usize] ^ sbox[(x ^ dx) as usize];
            table.increment(dx, dy);
        }
    }
    table
}

/// Linear approximation table, centred: entry `(a, b)` is the number of `x`
/// with `a·x == b·S(x)` minus 128.
pub fn lat(sbox: &Sbox) -> CountTable {
    let mut table = CountTable::new_zeroed();
    for a in 0..=u8::MAX {
        for b in 0..=u8::MAX {
            let matches = (0..=u8::MAX)
                .filter(|&x| parity(a & x) == parity(b & sbox[x as usize]))
                .count() as i16;
            table.set(a, b, matches - 128);
        }
    }
    table
}

/// Boomerang connectivity table: entry `(alpha, beta)` counts the `x` with
/// `S⁻¹(S(x) ^ beta) ^ S⁻¹(S(x ^ alpha) ^ beta) == alpha`.
pub fn bct(sbox: &Sbox, inv: &Sbox) -> CountTable {
    let mut table = CountTable::new_zeroed();
    for alpha in 0..=u8::MAX {
        for beta in 0..=u8::MAX {
            let mut count = 0i16;
            for x in 0..=u8::MAX {
                let y1 = sbox[x as usize];
                let y2 = sbox[(x ^ alpha) as usize];
                if inv[(y1 ^ beta) as usize] ^ inv[(y2 ^ beta) as usize] == alpha {
                    count += 1;
                }
            }
            table.set(alpha, beta, count);
        }
    }
    table
}

/// Worst-case entries of the three tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SboxReport {
    /// Max DDT entry over `dx != 0`.
    pub differential_uniformity: u16,
    /// Max `|LAT|` over `a != 0, b != 0` (centred counts).
    pub linear_uniformity: u16,
    /// Max BCT entry over `alpha != 0, beta != 0`.
    pub boomerang_uniformity: u16,
}

impl SboxReport {
    /// Largest absolute Walsh coefficient, twice the centred LAT bound.
    pub fn max_walsh(&self) -> u32 {
        2 * u32::from(self.linear_uniformity)
    }
}

impl fmt::Display for SboxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "differential uniformity: {}",
            self.differential_uniformity
        )?;
        writeln!(
            f,
            "linear uniformity: {} (max Walsh {})",
            self.linear_uniformity,
            self.max_walsh()
        )?;
        write!(f, "boomerang uniformity: {}", self.boomerang_uniformity)
    }
}

/// Builds all three tables for `sbox` and reports their uniformities.
pub fn analyze_sbox(sbox: &Sbox) -> Result<SboxReport, AnalysisError> {
    let inv = inverse_sbox(sbox)?;
    let report = SboxReport {
        differential_uniformity: ddt(sbox).max_abs(1, 0),
        linear_uniformity: lat(sbox).max_abs(1, 1),
        boomerang_uniformity: bct(sbox, &inv).max_abs(1, 1),
    };
    debug!("sbox analysis: {report:?}");
    Ok(report)
}
