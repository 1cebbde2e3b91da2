use std::io::{self, BufRead, ErrorKind};

pub(crate) trait BufReadExt: BufRead {
    /// Skips up to `n` bytes, returning how many were actually skipped.
    ///
    /// The returned value is less than `n` only when the reader is exhausted.
    fn skip_exact(&mut self, n: u64) -> io::Result<u64> {
        let mut skipped = 0;
        while skipped < n {
            let available = match self.fill_buf() {
                Ok(buf) => buf.len() as u64,
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available == 0 {
                break;
            }
            let to_skip = available.min(n - skipped);
            self.consume(to_skip as usize);
            skipped += to_skip;
        }
        Ok(skipped)
    }
}

impl<R: BufRead + ?Sized> BufReadExt for R {}
