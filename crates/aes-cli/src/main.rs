//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{block_from_slice, encrypt_block, expand_key, Aes128Key, Block, RoundKeys, SBOX};
use aes_diffusion::{analyze_sbox, AnalysisConfig, Analyzer};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 single-block CLI.
#[derive(Parser)]
#[command(name = "aes128", version, author, about = "AES-128 key expansion and block encryption")]
struct Cli {
    /// Log debug output (overrides RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a key and print the 11 round keys.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Also write the serialized schedule to this file.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Encrypt a single 16-byte block.
    Enc {
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// AES-128 key as 32 hex characters.
        #[arg(
            long,
            value_name = "HEX",
            conflicts_with = "schedule",
            required_unless_present = "schedule"
        )]
        key_hex: Option<String>,
        /// Schedule file written by `expand --out`.
        #[arg(long, value_name = "FILE")]
        schedule: Option<PathBuf>,
    },
    /// Print the S-box as a 16x16 hex table.
    Sbox {
        /// Also report differential, linear and boomerang uniformity.
        #[arg(long, default_value_t = false)]
        analyze: bool,
        /// Write the 256 raw table bytes to this file.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Run the avalanche, differential, linear bias and entropy checks.
    Analyze {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Use this many trials for every check instead of the defaults.
        #[arg(long)]
        trials: Option<usize>,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a random block under a random key and self-check against FIPS-197.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Expand { key_hex, out } => cmd_expand(&key_hex, out.as_deref()),
        Commands::Enc {
            block_hex,
            key_hex,
            schedule,
        } => cmd_enc(&block_hex, key_hex.as_deref(), schedule.as_deref()),
        Commands::Sbox { analyze, out } => cmd_sbox(analyze, out.as_deref()),
        Commands::Analyze {
            key_hex,
            trials,
            seed,
        } => cmd_analyze(&key_hex, trials, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn cmd_expand(key_hex: &str, out: Option<&Path>) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let round_keys = expand_key(&key);
    for (round, round_key) in round_keys.0.iter().enumerate() {
        println!("round {round:2}: {}", hex::encode(round_key));
    }
    if let Some(path) = out {
        let bytes = bincode::serialize(&round_keys).context("serialize schedule")?;
        fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        info!("wrote schedule to {}", path.display());
    }
    Ok(())
}

fn cmd_enc(block_hex: &str, key_hex: Option<&str>, schedule: Option<&Path>) -> Result<()> {
    let block = parse_block_hex(block_hex)?;
    let round_keys = match (key_hex, schedule) {
        (Some(key_hex), _) => expand_key(&parse_key_hex(key_hex)?),
        (None, Some(path)) => load_schedule(path)?,
        (None, None) => bail!("either --key-hex or --schedule is required"),
    };
    let ciphertext = encrypt_block(&block, &round_keys);
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_sbox(analyze: bool, out: Option<&Path>) -> Result<()> {
    print!("{}", format_sbox(&SBOX));
    if let Some(path) = out {
        fs::write(path, SBOX).with_context(|| format!("write {}", path.display()))?;
        info!("wrote S-box to {}", path.display());
    }
    if analyze {
        let report = analyze_sbox(&SBOX).context("analyze S-box")?;
        println!("{report}");
    }
    Ok(())
}

/// Renders a table as 16 lines of 16 uppercase hex bytes.
fn format_sbox(table: &[u8; 256]) -> String {
    let mut text = String::with_capacity(16 * 48);
    for row in table.chunks_exact(16) {
        let line: Vec<String> = row.iter().map(|b| format!("{b:02X}")).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text
}

fn cmd_analyze(key_hex: &str, trials: Option<usize>, seed: Option<u64>) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let config = trials.map_or_else(AnalysisConfig::default, AnalysisConfig::with_trials);
    debug!("analysis config: {config:?}");
    let mut analyzer = Analyzer::with_config(seeded_rng(seed), config);
    let report = analyzer.run_all(&key).context("run diffusion analysis")?;
    println!("{report}");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    fips197_self_check()?;

    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let round_keys = expand_key(&Aes128Key::from(key_bytes));
    let ciphertext = encrypt_block(&block, &round_keys);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    Ok(())
}

/// Encrypts the FIPS-197 Appendix C.1 block and compares the result.
fn fips197_self_check() -> Result<()> {
    let round_keys = expand_key(&parse_key_hex("000102030405060708090a0b0c0d0e0f")?);
    let block = parse_block_hex("00112233445566778899aabbccddeeff")?;
    let ciphertext = hex::encode(encrypt_block(&block, &round_keys));
    if ciphertext != "69c4e0d86a7b0430d8cdb78070b4c55a" {
        bail!("FIPS-197 self-check failed: got {ciphertext}");
    }
    debug!("FIPS-197 self-check passed");
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 32 hex characters")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    block_from_slice(&bytes).context("block must be 32 hex characters")
}

fn load_schedule(path: &Path) -> Result<RoundKeys> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    bincode::deserialize(&bytes).context("deserialize schedule")
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
