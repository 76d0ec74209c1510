//! Growable byte buffer with explicit size and capacity.
//!
//! [`ByteBuffer`] owns a single contiguous [`Region`] whose whole length is
//! the buffer capacity. Only the first [`size`](ByteBuffer::size) bytes are
//! live, everything after them is left over from earlier use.
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use stagebuf::{buffer::ByteBuffer, dump::Endianness};
//!
//! let mut buffer = ByteBuffer::new(0).unwrap();
//! for _ in 0..10 {
//!     buffer.append_byte(0xFF).unwrap();
//! }
//! assert_eq!(buffer.size(), 10);
//! assert_eq!(buffer.capacity(), 10);
//!
//! let mut out = Vec::new();
//! buffer.dump(&mut out, 3, Endianness::Little).unwrap();
//! assert_eq!(out, b"11111111 11111111 11111111 \n");
//! # }
//! ```

use bitflags::bitflags;
use core::{cmp::Ordering, fmt::Debug};

use embedded_io::{ErrorType, Write};

use crate::{
    builder::{ByteBufferBuilder, Provided},
    dump::{self, BitDump, Endianness},
    error::Error,
    region::Region,
};

#[cfg(feature = "alloc")]
use crate::{builder::HeapCapacity, region::HeapRegion};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct Flags: u8 {
        const GEOMETRIC_GROWTH = 1;
        const SCRUB_ON_RELEASE = 1 << 1;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::SCRUB_ON_RELEASE
    }
}

/// Heap backed buffer
#[cfg(feature = "alloc")]
pub type HeapBuffer = ByteBuffer<HeapRegion>;

pub struct ByteBuffer<R: Region> {
    flags: Flags,
    region: R,

    /// How many bytes at the start of region are live
    size: usize,
}

impl<R: Region> Debug for ByteBuffer<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("body", &self.body())
            .field("capacity", &self.capacity())
            .field("flags", &self.flags)
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(feature = "alloc")]
impl ByteBuffer<HeapRegion> {
    /// Create empty buffer with heap region of exactly `initial_capacity` bytes
    pub fn new(initial_capacity: usize) -> Result<Self, Error> {
        Self::builder().initial_capacity(initial_capacity).build()
    }

    pub fn builder() -> ByteBufferBuilder<HeapCapacity> {
        ByteBufferBuilder::default()
    }
}

impl<R: Region> ByteBuffer<R> {
    /// Create empty buffer over caller provided storage.
    ///
    /// Fixed regions never grow, writes past their length fail
    /// with [`Error::FixedCapacity`].
    pub fn with_region(region: R) -> Self {
        Self::from_parts(region, Flags::default())
    }

    pub fn region_builder(region: R) -> ByteBufferBuilder<Provided<R>> {
        ByteBufferBuilder::with_region(region)
    }

    pub(crate) fn from_parts(region: R, flags: Flags) -> Self {
        log::debug!("buffer created with capacity {}", region.len());
        Self {
            flags,
            region,
            size: 0,
        }
    }

    /// Number of live bytes
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of backing region
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Live bytes `[0, size)`
    pub fn body(&self) -> &[u8] {
        &self.region.as_slice()[..self.size]
    }

    /// Whole backing region `[0, capacity)`.
    ///
    /// Bytes past [`size`](Self::size) are whatever was there before
    /// (zero unless written and not cleared).
    pub fn raw(&self) -> &[u8] {
        self.region.as_slice()
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    /// Copy `data` after the live bytes, growing region if needed
    pub fn append(&mut self, data: &[u8]) -> Result<(), Error> {
        let required = self
            .size
            .checked_add(data.len())
            .ok_or(Error::CapacityOverflow)?;
        self.reserve(required)?;

        self.region.as_slice_mut()[self.size..required].copy_from_slice(data);
        self.size = required;
        Ok(())
    }

    pub fn append_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.append(&[byte])
    }

    /// Copy `data` to position `index`, which must be exactly
    /// [`size`](Self::size).
    ///
    /// Any other index would either leave undefined bytes between live
    /// content and `data` (gap) or overwrite live content (overlap).
    /// Both are rejected before anything is touched.
    pub fn insert(&mut self, data: &[u8], index: usize) -> Result<(), Error> {
        match index.cmp(&self.size) {
            Ordering::Greater => {
                log::warn!("insert at {} rejected: gap after {}", index, self.size);
                Err(Error::Gap {
                    index,
                    size: self.size,
                })
            }
            Ordering::Less => {
                log::warn!("insert at {} rejected: overlap with {}", index, self.size);
                Err(Error::Overlap {
                    index,
                    size: self.size,
                })
            }
            Ordering::Equal => self.append(data),
        }
    }

    /// Replace backing region with a new one of exactly `new_capacity` bytes.
    ///
    /// Live bytes are carried over, old region is zeroed and released.
    /// Shrinking below [`size`](Self::size) is rejected.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity < self.size {
            log::warn!(
                "resize to {} rejected: {} live bytes",
                new_capacity,
                self.size
            );
            return Err(Error::ShrinkBelowSize {
                size: self.size,
                requested: new_capacity,
            });
        }
        let old_capacity = self.capacity();
        self.region.reallocate(new_capacity, self.size)?;
        log::trace!("buffer resized: {} -> {}", old_capacity, new_capacity);
        Ok(())
    }

    /// Make sure capacity is at least `required` bytes
    fn reserve(&mut self, required: usize) -> Result<(), Error> {
        let capacity = self.capacity();
        if required <= capacity {
            return Ok(());
        }
        if self.flags.contains(Flags::GEOMETRIC_GROWTH) {
            let doubled = capacity.saturating_mul(2);
            if doubled > required && self.resize(doubled).is_ok() {
                return Ok(());
            }
        }
        self.resize(required)
    }

    /// Zero live bytes and drop them, capacity is kept for reuse
    pub fn clear(&mut self) {
        self.region.scrub(self.size);
        self.size = 0;
    }

    /// Write bit pattern of the first `num_bytes` of backing region.
    ///
    /// This inspects raw capacity, not just live content, so `num_bytes`
    /// may exceed [`size`](Self::size) but not [`capacity`](Self::capacity).
    pub fn dump<W: Write>(
        &self,
        writer: &mut W,
        num_bytes: usize,
        endianness: Endianness,
    ) -> Result<(), Error> {
        let bytes = checked_prefix(self.raw(), num_bytes)?;
        dump::write_bits(writer, bytes, endianness).map_err(Error::from_io)
    }

    /// Write bit pattern of the first `num_bytes` live bytes
    pub fn dump_live<W: Write>(
        &self,
        writer: &mut W,
        num_bytes: usize,
        endianness: Endianness,
    ) -> Result<(), Error> {
        let bytes = checked_prefix(self.body(), num_bytes)?;
        dump::write_bits(writer, bytes, endianness).map_err(Error::from_io)
    }

    /// Displayable bit pattern of live bytes
    pub fn bits(&self, endianness: Endianness) -> BitDump<'_> {
        BitDump::new(self.body(), endianness)
    }

    /// Hand live bytes to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        writer.write_all(self.body()).map_err(Error::from_io)?;
        writer.flush().map_err(Error::from_io)
    }

    /// Release buffer together with its region
    pub fn free(self) {
        // scrubbing is done in drop
        drop(self)
    }
}

fn checked_prefix(bytes: &[u8], num_bytes: usize) -> Result<&[u8], Error> {
    bytes.get(..num_bytes).ok_or_else(|| {
        log::warn!("dump of {} bytes rejected: {} available", num_bytes, bytes.len());
        Error::OutOfRange {
            requested: num_bytes,
            limit: bytes.len(),
        }
    })
}

impl<R: Region> Drop for ByteBuffer<R> {
    fn drop(&mut self) {
        if self.flags.contains(Flags::SCRUB_ON_RELEASE) {
            let capacity = self.capacity();
            self.region.scrub(capacity);
        }
        log::debug!("buffer released with capacity {}", self.capacity());
    }
}

impl<R: Region> AsRef<[u8]> for ByteBuffer<R> {
    fn as_ref(&self) -> &[u8] {
        self.body()
    }
}

impl<R: Region> ErrorType for ByteBuffer<R> {
    type Error = Error;
}

impl<R: Region> Write for ByteBuffer<R> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
