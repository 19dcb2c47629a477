//! 剪接位点日志比较流水线
//!
//! 逐行取出标识符，对两个 mate 各跑一遍剪接位点扫描，
//! 按来源计入 [`JunctionIndex`]，最后分三类输出。

use anyhow::Result;
use std::io::{BufRead, BufWriter, Write};

use crate::cigar;
use crate::error::Error;
use crate::io::open_text;
use crate::junction::{junction_key, JunctionComparison, JunctionIndex, Source};
use crate::readid;

/// 读入一个日志文件，把每行标识符两个 mate 的全部剪接位点记入 index。
/// `column` 选标识符所在的制表符列（真阳性日志多一个前导列）。
pub fn collect_junctions<R: BufRead>(
    reader: R,
    column: usize,
    source: Source,
    index: &mut JunctionIndex,
) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let read_id = line
            .split('\t')
            .nth(column)
            .ok_or_else(|| Error::MissingIdentifierColumn {
                column,
                line: line.clone(),
            })?;

        let pair = readid::decode(read_id)?;
        for mate in [&pair.mate1, &pair.mate2] {
            for junction in cigar::splice_junctions(mate.pos, &mate.cigar)? {
                index.insert(source, junction_key(&mate.chrom, &junction), read_id);
            }
        }
    }
    Ok(())
}

pub fn run_compare(log1: &str, log2: &str, column: usize) -> Result<()> {
    let mut index = JunctionIndex::new();
    collect_junctions(open_text(log1)?, column, Source::First, &mut index)?;
    collect_junctions(open_text(log2)?, column, Source::Second, &mut index)?;

    let cmp = index.compare();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &index, &cmp)?;
    out.flush()?;
    Ok(())
}

fn write_report(
    out: &mut impl Write,
    index: &JunctionIndex,
    cmp: &JunctionComparison,
) -> Result<()> {
    for (label, keys) in [
        ("1_2", &cmp.shared),
        ("1_only", &cmp.only_first),
        ("2_only", &cmp.only_second),
    ] {
        for key in keys {
            writeln!(out, "{}\t{}\t{}", label, key, index.reads(key).join(","))?;
        }
    }
    Ok(())
}
