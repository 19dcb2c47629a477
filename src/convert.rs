//! SimCT FASTQ -> SAM 转换流水线
//!
//! 两个 mate 文件按记录同步推进；mate1 读尽即收工，
//! mate2 先读尽视为输入损坏。

use anyhow::{anyhow, Result};
use std::io::{BufWriter, Write};

use crate::io::fastq::FastqReader;
use crate::io::open_gzip;
use crate::readid;
use crate::sam;

pub fn run_convert(reads1: &str, reads2: &str, out_path: &str) -> Result<()> {
    let mut reader1 = FastqReader::new(open_gzip(reads1)?);
    let mut reader2 = FastqReader::new(open_gzip(reads2)?);

    let out = std::fs::File::create(out_path)
        .map_err(|e| anyhow!("cannot create output '{}': {}", out_path, e))?;
    let mut out = BufWriter::new(out);

    let mut n_pairs = 0usize;
    while let Some(rec1) = reader1.next_record()? {
        let rec2 = reader2
            .next_record()?
            .ok_or_else(|| anyhow!("'{}' ended before '{}' at record pair {}", reads2, reads1, n_pairs + 1))?;

        // both mates' true placements are encoded in mate1's identifier
        let pair = readid::decode(&rec1.id)?;
        let (line1, line2) = sam::format_pair(&pair, &rec1, &rec2)?;
        writeln!(out, "{}", line1)?;
        writeln!(out, "{}", line2)?;
        n_pairs += 1;
    }
    out.flush()?;

    println!("record pairs: {}", n_pairs);
    println!("SAM written: {}", out_path);
    Ok(())
}
