//! Forward-only byte sources the decoder reads from.
//!
//! The decoder never seeks or rewinds: every byte is pulled exactly once,
//! in order, through [`ByteSource::next_byte`]. Raw pixel rows of `P6`
//! images go through [`ByteSource::read_exact`], which sources may
//! implement with a bulk copy.

use crate::error::PnmError;

/// A forward-only cursor over an ordered, finite byte stream.
pub trait ByteSource {
    /// Consume and return the next byte, or `None` at end of stream.
    fn next_byte(&mut self) -> Result<Option<u8>, PnmError>;

    /// Number of bytes consumed so far.
    fn position(&self) -> u64;

    /// Fill `buf` completely or fail with [`PnmError::UnexpectedEof`].
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), PnmError> {
        for slot in buf.iter_mut() {
            *slot = self.next_byte()?.ok_or(PnmError::UnexpectedEof)?;
        }
        Ok(())
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> Result<Option<u8>, PnmError> {
        (**self).next_byte()
    }

    fn position(&self) -> u64 {
        (**self).position()
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), PnmError> {
        (**self).read_exact(buf)
    }
}

/// In-memory byte source.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, PnmError> {
        let byte = self.data.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    fn position(&self) -> u64 {
        self.pos as u64
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), PnmError> {
        let data = self.data;
        match self.pos.checked_add(buf.len()).and_then(|end| data.get(self.pos..end)) {
            Some(chunk) => {
                buf.copy_from_slice(chunk);
                self.pos += buf.len();
                Ok(())
            }
            None => {
                // Truncated: consume what is left, like a reader would.
                self.pos = data.len();
                Err(PnmError::UnexpectedEof)
            }
        }
    }
}

/// Byte source over any [`std::io::Read`].
///
/// Reads one byte at a time while parsing text, so wrap unbuffered readers
/// (files, sockets) in a [`std::io::BufReader`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    pos: u64,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> Result<Option<u8>, PnmError> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.pos += 1;
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn position(&self) -> u64 {
        self.pos
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), PnmError> {
        // Track every byte taken from `inner`, including a short final read.
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => return Err(PnmError::UnexpectedEof),
                Ok(n) => {
                    filled += n;
                    self.pos += n as u64;
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
