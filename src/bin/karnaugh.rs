//! Karnaugh Logic Minimizer - Command Line Interface
//!
//! Takes a truth table (as indices or as a sum-of-products expression),
//! minimizes it, and prints the resulting expression.

use clap::Parser;
use karnaugh_logic::{parse_expression, KarnaughError, TruthTable};
use std::collections::BTreeSet;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "karnaugh")]
#[command(about = "Karnaugh-map style Boolean function minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Truth table: comma-separated indices (decimal, 0x.., 0o.., 0b..)
    /// or a sum-of-products expression like "/A/B + AB"
    #[arg(value_name = "TABLE")]
    table: String,

    /// Don't-care entries, in the same forms as TABLE
    #[arg(value_name = "DONT_CARES")]
    dont_cares: Option<String>,

    /// Number of variables (raised automatically when insufficient)
    #[arg(short, long, default_value_t = 0)]
    bits: u32,

    /// Skip the full-domain validation pass
    #[arg(long)]
    no_validate: bool,

    /// Echo the parsed table before the result
    #[arg(short, long)]
    summary: bool,
}

/// Parse one index, accepting the common radix prefixes
fn parse_index(token: &str) -> Option<u64> {
    let token = token.trim();
    if let Some(rest) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u64::from_str_radix(rest, 16).ok()
    } else if let Some(rest) = token.strip_prefix("0o").or_else(|| token.strip_prefix("0O")) {
        u64::from_str_radix(rest, 8).ok()
    } else if let Some(rest) = token.strip_prefix("0b").or_else(|| token.strip_prefix("0B")) {
        u64::from_str_radix(rest, 2).ok()
    } else {
        token.parse().ok()
    }
}

/// Parse an argument as an index list, falling back to expression syntax
fn parse_set(arg: &str, bits: u32) -> Result<(BTreeSet<u64>, u32), KarnaughError> {
    if arg.trim().is_empty() {
        return Ok((BTreeSet::new(), bits));
    }
    let indices: Option<BTreeSet<u64>> = arg.split(',').map(parse_index).collect();
    match indices {
        Some(indices) => Ok((indices, bits)),
        None => parse_expression(arg, bits),
    }
}

fn main() {
    let args = Args::parse();

    let dont_care_arg = args.dont_cares.as_deref().unwrap_or("");

    // Expressions infer their own width; reconcile both arguments (and the
    // requested width) by reparsing at the common maximum
    let mut bits = args.bits;
    for arg in [args.table.as_str(), dont_care_arg] {
        match parse_set(arg, bits) {
            Ok((_, width)) => bits = bits.max(width),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }
    let (ones, _) = parse_set(&args.table, bits).expect("already parsed once");
    let (dont_cares, _) = parse_set(dont_care_arg, bits).expect("already parsed once");

    let table = TruthTable::with_bits(ones, dont_cares, bits);

    if args.summary {
        let ones_csv: Vec<String> = table.ones().iter().map(u64::to_string).collect();
        let dcs_csv: Vec<String> = table.dont_cares().iter().map(u64::to_string).collect();
        eprintln!(
            "table: \"{}\" dont-cares: \"{}\" bits: {}",
            ones_csv.join(","),
            dcs_csv.join(","),
            table.bits()
        );
    }

    let function = if args.no_validate {
        table.minimize()
    } else {
        match table.minimize_validated() {
            Ok(function) => function,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    };

    println!("{}", function);
}
