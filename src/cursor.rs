//! In-memory byte cursors used as the engine's I/O substrate.
//!
//! The decode/encode algorithms are generic over `std::io::Read` and
//! `std::io::Write`; these cursors are the memory-backed variants of that
//! substrate, next to `File`/`BufWriter` for the file-backed ones.

use std::io::{self, Read, Write};

/// Read-side cursor over a borrowed byte region.
pub(crate) struct SliceCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    /// Cursor positioned 8 bytes in, past a signature the caller has
    /// already validated.
    pub(crate) fn past_signature(buf: &'a [u8]) -> Self {
        SliceCursor { buf, pos: 8 }
    }
}

impl Read for SliceCursor<'_> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.buf[self.pos..];
        let n = remaining.len().min(out.len());
        out[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// Write-side cursor over an owned, growable buffer.
///
/// Each write grows the buffer to exactly `position + len` before copying,
/// so after the final write the buffer length equals the total bytes
/// produced, with no trailing slack. A failed growth does not advance the
/// position; the error surfaces through the engine as a fatal write failure.
pub(crate) struct MemCursor {
    buf: Vec<u8>,
    pos: usize,
}

impl MemCursor {
    pub(crate) fn new() -> Self {
        MemCursor {
            buf: Vec::new(),
            pos: 0,
        }
    }

    /// Consume the cursor, yielding the bytes written so far.
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Write for MemCursor {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let end = self.pos + data.len();
        if self.buf.len() < end {
            self.buf
                .try_reserve_exact(end - self.buf.len())
                .map_err(|_| io::Error::new(io::ErrorKind::OutOfMemory, "buffer growth failed"))?;
            self.buf.resize(end, 0);
        }
        self.buf[self.pos..end].copy_from_slice(data);
        self.pos = end;
        Ok(data.len())
    }

    // The destination is the buffer itself; there is nothing to flush.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
