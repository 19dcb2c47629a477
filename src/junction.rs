//! 剪接位点集合索引与比较
//!
//! 每个输入文件各自维护键集合与键 -> 贡献读段列表，
//! 报告时再按来源显式取并，避免跨文件的隐式累积。

use std::collections::{HashMap, HashSet};

use crate::cigar::SpliceJunction;

/// 比较的两个输入文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    First,
    Second,
}

impl Source {
    fn idx(self) -> usize {
        match self {
            Source::First => 0,
            Source::Second => 1,
        }
    }
}

/// 位点键：`<chrom>_<label>_<start>_<end>`，按字符串全等判同
pub fn junction_key(chrom: &str, junction: &SpliceJunction) -> String {
    format!(
        "{}_{}_{}_{}",
        chrom, junction.label, junction.start, junction.end
    )
}

/// 分来源的剪接位点索引，单次比较内构建、用完即弃
#[derive(Debug, Default)]
pub struct JunctionIndex {
    keys: [HashSet<String>; 2],
    reads: [HashMap<String, Vec<String>>; 2],
}

/// 键集合的比较结果，三类各自按字典序排序
#[derive(Debug, PartialEq, Eq)]
pub struct JunctionComparison {
    pub shared: Vec<String>,
    pub only_first: Vec<String>,
    pub only_second: Vec<String>,
}

impl JunctionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个位点键及其来源读段；同一读段重复产出同一键时照常追加
    pub fn insert(&mut self, source: Source, key: String, read_id: &str) {
        let i = source.idx();
        self.reads[i]
            .entry(key.clone())
            .or_default()
            .push(read_id.to_string());
        self.keys[i].insert(key);
    }

    /// 键的贡献读段：第一个文件的在前、第二个文件的在后，各自保持发现顺序。
    /// 键只出现在单个文件时另一侧为空，取并即该文件自己的列表。
    pub fn reads(&self, key: &str) -> Vec<&str> {
        self.reads
            .iter()
            .flat_map(|m| m.get(key).into_iter().flatten())
            .map(String::as_str)
            .collect()
    }

    pub fn compare(&self) -> JunctionComparison {
        let mut shared: Vec<String> = self.keys[0].intersection(&self.keys[1]).cloned().collect();
        let mut only_first: Vec<String> = self.keys[0].difference(&self.keys[1]).cloned().collect();
        let mut only_second: Vec<String> = self.keys[1].difference(&self.keys[0]).cloned().collect();
        shared.sort();
        only_first.sort();
        only_second.sort();

        JunctionComparison {
            shared,
            only_first,
            only_second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn key_layout() {
        let j = SpliceJunction {
            start: 101,
            end: 201,
            label: "100N".to_string(),
        };
        assert_eq!(junction_key("X", &j), "X_100N_101_201");
    }

    #[test]
    fn shared_key_unions_reads_from_both_files() {
        let mut index = JunctionIndex::new();
        index.insert(Source::First, key("X_100N_101_201"), "readA");
        index.insert(Source::First, key("X_100N_101_201"), "readB");
        index.insert(Source::Second, key("X_100N_101_201"), "readC");

        let cmp = index.compare();
        assert_eq!(cmp.shared, vec![key("X_100N_101_201")]);
        assert!(cmp.only_first.is_empty());
        assert!(cmp.only_second.is_empty());
        assert_eq!(index.reads("X_100N_101_201"), vec!["readA", "readB", "readC"]);
    }

    #[test]
    fn file_specific_keys_keep_their_own_reads() {
        let mut index = JunctionIndex::new();
        index.insert(Source::First, key("1_50N_10_60"), "r1");
        index.insert(Source::Second, key("2_70N_5_75"), "r2");

        let cmp = index.compare();
        assert_eq!(cmp.shared, Vec::<String>::new());
        assert_eq!(cmp.only_first, vec![key("1_50N_10_60")]);
        assert_eq!(cmp.only_second, vec![key("2_70N_5_75")]);
        assert_eq!(index.reads("1_50N_10_60"), vec!["r1"]);
        assert_eq!(index.reads("2_70N_5_75"), vec!["r2"]);
    }

    #[test]
    fn categories_partition_the_union() {
        let mut index = JunctionIndex::new();
        for k in ["a", "b", "c"] {
            index.insert(Source::First, key(k), "r");
        }
        for k in ["b", "c", "d"] {
            index.insert(Source::Second, key(k), "r");
        }

        let cmp = index.compare();
        assert_eq!(cmp.shared, vec![key("b"), key("c")]);
        assert_eq!(cmp.only_first, vec![key("a")]);
        assert_eq!(cmp.only_second, vec![key("d")]);

        // shared/only_first/only_second 互斥，且并起来恰是两集合之并
        let mut union: Vec<String> = cmp
            .shared
            .iter()
            .chain(cmp.only_first.iter())
            .chain(cmp.only_second.iter())
            .cloned()
            .collect();
        union.sort();
        assert_eq!(union, vec![key("a"), key("b"), key("c"), key("d")]);
    }

    #[test]
    fn duplicate_contributions_are_kept_in_order() {
        let mut index = JunctionIndex::new();
        index.insert(Source::First, key("k"), "r1");
        index.insert(Source::First, key("k"), "r1");
        index.insert(Source::First, key("k"), "r2");
        assert_eq!(index.reads("k"), vec!["r1", "r1", "r2"]);
    }
}
