//! Command-line interface for `aes-prims`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_prims::{
    bits_to_bytes, bytes_to_bits, decode_hex, format_hex_list, gmul, sum_grids, to_grid,
    xor_grids, Bit,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

/// AES byte-primitive CLI.
#[derive(Parser)]
#[command(
    name = "aes-prims",
    version,
    author,
    about = "GF(2^8) arithmetic and hex/bit conversions for AES-style ciphers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiply two bytes in GF(2^8).
    Gmul {
        /// First factor (`0x57` or `87`).
        a: String,
        /// Second factor (`0x83` or `131`).
        b: String,
    },
    /// Decode a hex string and print it as a byte list.
    Decode {
        /// Hex digits with an optional `0x` prefix.
        hex: String,
    },
    /// Print the MSB-first bit string of a hex value.
    Bits {
        /// Hex digits with an optional `0x` prefix.
        hex: String,
    },
    /// Pack a string of 0s and 1s into bytes.
    Pack {
        /// Bit string; whitespace is ignored, length must be a multiple of 8.
        bits: String,
    },
    /// XOR two hex values laid out as rows of `row_len` bytes.
    Xor {
        /// Left operand as hex.
        lhs: String,
        /// Right operand as hex.
        rhs: String,
        /// Bytes per row.
        #[arg(long, default_value_t = 4)]
        row_len: usize,
    },
    /// Add two hex values element-wise, laid out as rows of `row_len` bytes.
    Sum {
        /// Left operand as hex.
        lhs: String,
        /// Right operand as hex.
        rhs: String,
        /// Bytes per row.
        #[arg(long, default_value_t = 4)]
        row_len: usize,
    },
    /// Generate distinct hex test strings.
    Samples {
        /// Number of strings to generate.
        #[arg(long, default_value_t = 10_000)]
        count: usize,
        /// Bytes per string.
        #[arg(long, default_value_t = 32)]
        width: usize,
        /// Write to this file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

/// Shape of the generated sample strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SampleConfig {
    count: usize,
    width: usize,
}

fn main() -> Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Gmul { a, b } => cmd_gmul(&a, &b),
        Commands::Decode { hex } => cmd_decode(&hex),
        Commands::Bits { hex } => cmd_bits(&hex),
        Commands::Pack { bits } => cmd_pack(&bits),
        Commands::Xor { lhs, rhs, row_len } => cmd_xor(&lhs, &rhs, row_len),
        Commands::Sum { lhs, rhs, row_len } => cmd_sum(&lhs, &rhs, row_len),
        Commands::Samples { count, width, out } => {
            cmd_samples(SampleConfig { count, width }, out.as_deref())
        }
    }
}

fn cmd_gmul(a: &str, b: &str) -> Result<()> {
    let a = parse_byte(a)?;
    let b = parse_byte(b)?;
    log::debug!("gmul {a:#04x} * {b:#04x}");
    println!("0x{:02x}", gmul(a, b));
    Ok(())
}

fn cmd_decode(input: &str) -> Result<()> {
    let bytes = decode_hex(input).context("decode hex input")?;
    log::debug!("decoded {} bytes", bytes.len());
    println!("{}", format_hex_list(&bytes));
    Ok(())
}

fn cmd_bits(input: &str) -> Result<()> {
    let bytes = decode_hex(input).context("decode hex input")?;
    println!("{}", render_bits(&bytes_to_bits(&bytes)));
    Ok(())
}

fn cmd_pack(input: &str) -> Result<()> {
    let bits = parse_bits(input)?;
    log::debug!("packing {} bits", bits.len());
    let bytes = bits_to_bytes(&bits).context("pack bits")?;
    println!("{}", format_hex_list(&bytes));
    Ok(())
}

fn cmd_xor(lhs: &str, rhs: &str, row_len: usize) -> Result<()> {
    let (lhs, rhs) = load_grids(lhs, rhs, row_len)?;
    let rows = xor_grids(&lhs, &rhs).context("xor operands")?;
    for row in rows {
        println!("{}", format_hex_list(&row));
    }
    Ok(())
}

fn cmd_sum(lhs: &str, rhs: &str, row_len: usize) -> Result<()> {
    let (lhs, rhs) = load_grids(lhs, rhs, row_len)?;
    let rows = sum_grids(&lhs, &rhs).context("sum operands")?;
    for row in rows {
        println!("{row:?}");
    }
    Ok(())
}

fn cmd_samples(config: SampleConfig, out: Option<&Path>) -> Result<()> {
    if config.width == 0 {
        bail!("sample width must be at least one byte");
    }
    log::debug!("generating {} samples of {} bytes", config.count, config.width);
    let text = generate_samples(config).join("\n");
    match out {
        Some(path) => {
            fs::write(path, text + "\n").with_context(|| format!("write {}", path.display()))?
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Line `i` holds bytes `(i + j) mod 256` for `j` in `0..width`.
fn generate_samples(config: SampleConfig) -> Vec<String> {
    (0..config.count)
        .map(|i| {
            let bytes: Vec<u8> = (0..config.width).map(|j| ((i + j) % 256) as u8).collect();
            format!("0x{}", hex::encode(bytes))
        })
        .collect()
}

fn load_grids(lhs: &str, rhs: &str, row_len: usize) -> Result<(Vec<Vec<u8>>, Vec<Vec<u8>>)> {
    let lhs = decode_hex(lhs).context("decode left operand")?;
    let rhs = decode_hex(rhs).context("decode right operand")?;
    let lhs = to_grid(&lhs, row_len).context("reshape left operand")?;
    let rhs = to_grid(&rhs, row_len).context("reshape right operand")?;
    Ok((lhs, rhs))
}

fn parse_byte(text: &str) -> Result<u8> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x") {
        Some(digits) => u8::from_str_radix(digits, 16),
        None => text.parse::<u8>(),
    };
    parsed.with_context(|| format!("`{text}` is not a byte"))
}

fn parse_bits(text: &str) -> Result<Vec<Bit>> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(idx, c)| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => bail!("invalid bit `{other}` at position {idx}"),
        })
        .collect()
}

fn render_bits(bits: &[Bit]) -> String {
    bits.iter().map(|bit| if *bit == 1 { '1' } else { '0' }).collect()
}
