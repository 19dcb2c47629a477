//! 文件读入：FASTQ 解析与打开辅助

pub mod fastq;

use anyhow::Result;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;

/// 打开 gzip 压缩输入
pub fn open_gzip(path: &str) -> Result<BufReader<GzDecoder<File>>> {
    let fh = File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open gzip input '{}': {}", path, e))?;
    Ok(BufReader::new(GzDecoder::new(fh)))
}

/// 打开普通文本输入
pub fn open_text(path: &str) -> Result<BufReader<File>> {
    let fh = File::open(path).map_err(|e| anyhow::anyhow!("cannot open input '{}': {}", path, e))?;
    Ok(BufReader::new(fh))
}
