use anyhow::{anyhow, Result};
use std::io::BufRead;

/// A single 4-line FASTQ record. `id` is the full header line with the
/// leading '@' and the line terminator stripped. Simulator identifiers
/// carry structured metadata and must survive verbatim, so no splitting
/// at whitespace here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: String,
    pub seq: String,
    pub qual: String,
}

pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), done: false }
    }

    pub fn next_record(&mut self) -> Result<Option<FastqRecord>> {
        if self.done { return Ok(None); }

        // header line starting with '@'
        self.buf.clear();
        let mut n = self.reader.read_line(&mut self.buf)?;
        if n == 0 { self.done = true; return Ok(None); }
        if !self.buf.starts_with('@') {
            return Err(anyhow!("FASTQ header not starting with '@'"));
        }
        let id = self.buf[1..].trim_end_matches(&['\r', '\n'][..]).to_string();

        // sequence line
        self.buf.clear();
        n = self.reader.read_line(&mut self.buf)?;
        if n == 0 { return Err(anyhow!("unexpected EOF after header")); }
        let seq = self.buf.trim_end().to_string();

        // plus line
        self.buf.clear();
        n = self.reader.read_line(&mut self.buf)?;
        if n == 0 || !self.buf.starts_with('+') { return Err(anyhow!("missing '+' line")); }

        // quality line
        self.buf.clear();
        n = self.reader.read_line(&mut self.buf)?;
        if n == 0 { return Err(anyhow!("missing quality line")); }
        let qual = self.buf.trim_end().to_string();

        if qual.len() != seq.len() { return Err(anyhow!("seq/qual length mismatch")); }

        Ok(Some(FastqRecord { id, seq, qual }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_simple_fastq() {
        let data = b"@r1:chr1,0,+,4M;chr1,50,-,4M/1\nACGT\n+\nIIII\n@r2 desc\nAAAA\n+\nJJJJ\n";
        let cursor = Cursor::new(&data[..]);
        let mut r = FastqReader::new(cursor);

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "r1:chr1,0,+,4M;chr1,50,-,4M/1");
        assert_eq!(r1.seq, "ACGT");
        assert_eq!(r1.qual, "IIII");

        // the whole header is the identifier, whitespace included
        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "r2 desc");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_crlf_headers() {
        let data = b"@r1\r\nACGT\r\n+\r\nIIII\r\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        let rec = r.next_record().unwrap().unwrap();
        assert_eq!(rec.id, "r1");
        assert_eq!(rec.seq, "ACGT");
    }

    #[test]
    fn header_must_start_with_at() {
        let data = b"r1\nACGT\n+\nIIII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().is_err());
    }

    #[test]
    fn truncated_record_is_an_error() {
        let data = b"@r1\nACGT\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().is_err());
    }

    #[test]
    fn seq_qual_mismatch_is_an_error() {
        let data = b"@r1\nACGT\n+\nII\n";
        let mut r = FastqReader::new(Cursor::new(&data[..]));
        assert!(r.next_record().is_err());
    }
}
