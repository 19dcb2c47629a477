//! 读段标识符解码
//!
//! SimCT 的标识符形如 `<pairID>:<mate1>;<mate2>`，其中每个 mate 段是
//! `<chrom>,<zeroBasedStart>,<strand>,<CIGAR>[:<extra>][/<suffix>]`。
//! 第二个 mate 的 CIGAR 字段可能拖着来源格式的残留后缀，解码时剥掉。

use std::fmt;

use crate::error::{Error, Result};

/// 链向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// 单个 mate 的真值落点。`pos` 为 1-based（标识符里存 0-based）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatePlacement {
    pub chrom: String,
    pub pos: u64,
    pub strand: Strand,
    pub cigar: String,
}

/// 一对 mate 的真值落点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadPlacementPair {
    pub mate1: MatePlacement,
    pub mate2: MatePlacement,
}

/// 解码读段标识符。
///
/// 在第一个 `:` 处切出 pair 段，再按 `;` 分出两个 mate，按 `,` 取字段。
/// 字段数不足、位置非数字、链向非 `+`/`-` 都返回 [`Error::MalformedIdentifier`]。
pub fn decode(id: &str) -> Result<ReadPlacementPair> {
    let pair_segment = id
        .splitn(2, ':')
        .nth(1)
        .ok_or_else(|| malformed(id, "no ':' before the pair segment"))?;

    let mut mates = pair_segment.splitn(2, ';');
    let seg1 = mates.next().unwrap_or("");
    let seg2 = mates
        .next()
        .ok_or_else(|| malformed(id, "expected two ';' separated mate segments"))?;

    Ok(ReadPlacementPair {
        mate1: decode_mate(id, seg1, false)?,
        mate2: decode_mate(id, seg2, true)?,
    })
}

fn decode_mate(id: &str, segment: &str, second_mate: bool) -> Result<MatePlacement> {
    let fields: Vec<&str> = segment.split(',').collect();
    if fields.len() < 4 {
        return Err(malformed(
            id,
            &format!("mate segment '{segment}' has {} of 4 fields", fields.len()),
        ));
    }

    let zero_based: u64 = fields[1]
        .parse()
        .map_err(|_| malformed(id, &format!("non-numeric start position '{}'", fields[1])))?;

    let strand = match fields[2] {
        "+" => Strand::Forward,
        "-" => Strand::Reverse,
        other => return Err(malformed(id, &format!("invalid strand '{other}'"))),
    };

    Ok(MatePlacement {
        chrom: fields[0].to_string(),
        pos: zero_based + 1,
        strand,
        cigar: clean_cigar(fields[3], second_mate),
    })
}

/// CIGAR 字段清理：两个 mate 都只取第一个 `:` 之前的部分；
/// 第二个 mate 还可能带两字符的 `/x` 读段号后缀，倒数第二个字符是 `/`
/// 时剥掉。
fn clean_cigar(field: &str, second_mate: bool) -> String {
    let mut cigar = field.splitn(2, ':').next().unwrap_or(field);
    if second_mate {
        let bytes = cigar.as_bytes();
        if bytes.len() >= 2 && bytes[bytes.len() - 2] == b'/' {
            cigar = &cigar[..bytes.len() - 2];
        }
    }
    cigar.to_string()
}

fn malformed(id: &str, reason: &str) -> Error {
    Error::MalformedIdentifier {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
