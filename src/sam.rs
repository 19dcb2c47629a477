//! 最小 SAM 记录格式化
//!
//! 只生成 11 个必选列（QNAME..QUAL），不输出 header；
//! 供模拟真值转换用，FLAG 只认正确配对的两种链向组合。

use crate::error::{Error, Result};
use crate::io::fastq::FastqRecord;
use crate::readid::{ReadPlacementPair, Strand};

/// 模拟真值比对的固定 MAPQ
pub const MAPQ: u8 = 60;

/// 链向组合 -> (mate1 FLAG, mate2 FLAG)。
/// `(+,-)` 为 99/147，`(-,+)` 为 83/163；同链组合直接报错，不给默认值。
pub fn pair_flags(mate1: Strand, mate2: Strand) -> Result<(u16, u16)> {
    match (mate1, mate2) {
        (Strand::Forward, Strand::Reverse) => Ok((99, 147)),
        (Strand::Reverse, Strand::Forward) => Ok((83, 163)),
        (mate1, mate2) => Err(Error::InvalidStrandCombination { mate1, mate2 }),
    }
}

/// 按真值落点生成一对 SAM 行。
///
/// 两个 mate 映射到同一参考序列，RNEXT 固定 `=`；
/// TLEN 取 `mate2.pos + |seq2| - mate1.pos`，mate2 行取负。
pub fn format_pair(
    pair: &ReadPlacementPair,
    rec1: &FastqRecord,
    rec2: &FastqRecord,
) -> Result<(String, String)> {
    let (flag1, flag2) = pair_flags(pair.mate1.strand, pair.mate2.strand)?;
    let tlen = pair.mate2.pos as i64 + rec2.seq.len() as i64 - pair.mate1.pos as i64;

    let line1 = format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t=\t{}\t{}\t{}\t{}",
        rec1.id,
        flag1,
        pair.mate1.chrom,
        pair.mate1.pos,
        MAPQ,
        pair.mate1.cigar,
        pair.mate2.pos,
        tlen,
        rec1.seq,
        rec1.qual,
    );
    let line2 = format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t=\t{}\t{}\t{}\t{}",
        rec2.id,
        flag2,
        pair.mate2.chrom,
        pair.mate2.pos,
        MAPQ,
        pair.mate2.cigar,
        pair.mate1.pos,
        -tlen,
        rec2.seq,
        rec2.qual,
    );

    Ok((line1, line2))
}
