//! CIGAR 切分与剪接位点提取

use crate::error::{Error, Result};

/// 单个 CIGAR 操作：长度 + 操作符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CigarOp {
    pub len: u64,
    pub op: char,
}

/// 剪接位点（内含子区间），坐标为 1-based
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceJunction {
    pub start: u64,
    pub end: u64,
    /// 原始 `<len>N` token，仅用于展示与键拼接
    pub label: String,
}

/// CIGAR 走查结果：按出现顺序的剪接位点 + 最终参考坐标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceScan {
    pub junctions: Vec<SpliceJunction>,
    pub end: u64,
}

/// 把 CIGAR 字符串切分为 `(length, op)` 序列。
/// 手写数字段 + 单个操作符的状态扫描，不依赖正则；
/// 空串、缺少长度的操作符或其它字符都视为格式错误。
pub fn tokenize(cigar: &str) -> Result<Vec<CigarOp>> {
    if cigar.is_empty() {
        return Err(malformed(cigar, "empty string"));
    }

    let mut ops = Vec::new();
    let mut len: u64 = 0;
    let mut in_number = false;

    for ch in cigar.chars() {
        if let Some(d) = ch.to_digit(10) {
            len = len * 10 + u64::from(d);
            in_number = true;
        } else if ch.is_ascii_uppercase() || ch == '=' {
            if !in_number {
                return Err(malformed(cigar, &format!("operation '{ch}' without a length")));
            }
            ops.push(CigarOp { len, op: ch });
            len = 0;
            in_number = false;
        } else {
            return Err(malformed(cigar, &format!("unexpected character '{ch}'")));
        }
    }

    if in_number {
        return Err(malformed(cigar, "trailing length without an operation"));
    }

    Ok(ops)
}

/// 从 1-based 起始坐标沿 CIGAR 走查参考坐标。
///
/// `N` 段产出一个剪接位点 `(pos, pos + len)` 并前进；
/// M/D/X/= 仅前进；I/S 只消耗查询序列，不动参考坐标；
/// 其余操作符一律报错，绝不静默跳过。
pub fn scan(start: u64, cigar: &str) -> Result<SpliceScan> {
    let mut pos = start;
    let mut junctions = Vec::new();

    for tok in tokenize(cigar)? {
        match tok.op {
            'N' => {
                junctions.push(SpliceJunction {
                    start: pos,
                    end: pos + tok.len,
                    label: format!("{}N", tok.len),
                });
                pos += tok.len;
            }
            'M' | 'D' | 'X' | '=' => pos += tok.len,
            'I' | 'S' => {}
            op => {
                return Err(Error::UnrecognizedCigarOperation {
                    op,
                    token: format!("{}{}", tok.len, op),
                })
            }
        }
    }

    Ok(SpliceScan { junctions, end: pos })
}

/// 只取剪接位点列表的便捷包装
pub fn splice_junctions(start: u64, cigar: &str) -> Result<Vec<SpliceJunction>> {
    scan(start, cigar).map(|s| s.junctions)
}

fn malformed(cigar: &str, reason: &str) -> Error {
    Error::MalformedCigar {
        cigar: cigar.to_string(),
        reason: reason.to_string(),
    }
}
