//! # splicebench
//!
//! 剪接比对模拟基准测试的配套工具库。
//!
//! SimCT 等模拟器把真实比对位置与 CIGAR 编码在读段标识符里，
//! benchCT 的日志又以该标识符逐行记录判定结果。本 crate 提供：
//!
//! - **标识符解码**：把 `<pairID>:<mate1>;<mate2>` 形式的标识符还原为
//!   每个 mate 的染色体、1-based 起始位置、链向与 CIGAR
//! - **剪接位点扫描**：沿 CIGAR 走查参考坐标，提取 `N` 段对应的内含子区间
//! - **SAM 输出**：按真值链向组合生成成对的最小 SAM 记录
//! - **位点集合比较**：对两份日志恢复的剪接位点做交集 / 差集分类
//!
//! ## 快速示例
//!
//! ```rust
//! use splicebench::cigar;
//! use splicebench::readid;
//!
//! let pair = readid::decode("readA:X,100,+,50M100N50M;X,300,-,80M/1").unwrap();
//! assert_eq!(pair.mate1.pos, 101);
//!
//! let junctions = cigar::splice_junctions(pair.mate1.pos, &pair.mate1.cigar).unwrap();
//! assert_eq!(junctions[0].start, 151);
//! assert_eq!(junctions[0].end, 251);
//! ```
//!
//! ## 模块说明
//!
//! - [`readid`] — 读段标识符解码
//! - [`cigar`] — CIGAR 切分与剪接位点提取
//! - [`sam`] — 最小 SAM 记录格式化
//! - [`junction`] — 剪接位点集合索引与比较
//! - [`convert`] / [`compare`] — 两条命令行流水线
//! - [`io`] — FASTQ 解析与文件打开辅助
//! - [`error`] — 核心解析错误类型

pub mod cigar;
pub mod compare;
pub mod convert;
pub mod error;
pub mod io;
pub mod junction;
pub mod readid;
pub mod sam;
