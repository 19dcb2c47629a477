use anyhow::Result;
use clap::{Parser, Subcommand};

use splicebench::compare::run_compare;
use splicebench::convert::run_convert;

#[derive(Parser, Debug)]
#[command(name = "splicebench", author, version, about = "Splice-junction benchmarking utilities for simulated RNA-seq alignments", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert SimCT paired FASTQ into minimal SAM record pairs
    Convert {
        /// First mates FASTQ file (gzip)
        #[arg(short = '1', long = "reads1")]
        reads1: String,
        /// Second mates FASTQ file (gzip)
        #[arg(short = '2', long = "reads2")]
        reads2: String,
        /// Output SAM path
        #[arg(short = 'o', long = "out")]
        out: String,
    },
    /// Compare splice junctions recovered from two benchCT log files
    Compare {
        /// First log file
        #[arg(short = '1', long = "log1")]
        log1: String,
        /// Second log file
        #[arg(short = '2', long = "log2")]
        log2: String,
        /// Tab column holding the read identifier: 0 for false positives, 1 for true positives (they carry an extra first column)
        #[arg(short = 'c', long = "column")]
        column: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Convert { reads1, reads2, out } => run_convert(&reads1, &reads2, &out),
        Commands::Compare { log1, log2, column } => run_compare(&log1, &log2, column),
    }
}
