//! Backing storage of a [`ByteBuffer`](crate::buffer::ByteBuffer).
//!
//! A region is a contiguous block of bytes whose whole length is the buffer
//! capacity. Fixed regions (arrays and borrowed slices) keep their length
//! forever, [`HeapRegion`] is reallocated on every resize.

use zeroize::Zeroize;

use crate::error::Error;

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};
#[cfg(feature = "alloc")]
use zeroize::ZeroizeOnDrop;

pub trait Region {
    fn as_slice(&self) -> &[u8];

    fn as_slice_mut(&mut self) -> &mut [u8];

    /// Replace region with a new one of `new_len` bytes.
    ///
    /// First `keep` bytes (clamped to both lengths) are carried over,
    /// everything else in the new region is zero. Old region is zeroed
    /// before it is released. On error region is left untouched.
    #[allow(unused_variables)]
    fn reallocate(&mut self, new_len: usize, keep: usize) -> Result<(), Error> {
        if new_len == self.len() {
            // nothing to change
            return Ok(());
        }
        Err(Error::FixedCapacity {
            capacity: self.len(),
            requested: new_len,
        })
    }

    /// Zero the first `len` bytes
    fn scrub(&mut self, len: usize) {
        let slice = self.as_slice_mut();
        let len = len.min(slice.len());
        slice[..len].zeroize();
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

impl<const SIZE: usize> Region for [u8; SIZE] {
    fn as_slice(&self) -> &[u8] {
        self
    }

    fn as_slice_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl<'a> Region for &'a mut [u8] {
    fn as_slice(&self) -> &[u8] {
        self
    }

    fn as_slice_mut(&mut self) -> &mut [u8] {
        self
    }
}

/// Heap allocated region of exact length.
///
/// Contents are zeroed when the region is dropped.
#[cfg(feature = "alloc")]
#[derive(Debug, Default)]
pub struct HeapRegion {
    body: Box<[u8]>,
}

#[cfg(feature = "alloc")]
impl HeapRegion {
    /// Allocate zeroed region of exactly `len` bytes
    pub fn new(len: usize) -> Result<Self, Error> {
        Ok(Self {
            body: allocate(len)?,
        })
    }
}

#[cfg(feature = "alloc")]
impl Region for HeapRegion {
    fn as_slice(&self) -> &[u8] {
        &self.body
    }

    fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.body
    }

    fn reallocate(&mut self, new_len: usize, keep: usize) -> Result<(), Error> {
        // new region must exist before old one is touched,
        // so a failed allocation leaves everything as it was
        let mut body = allocate(new_len)?;
        let keep = keep.min(new_len).min(self.body.len());
        body[..keep].copy_from_slice(&self.body[..keep]);

        let mut old = core::mem::replace(&mut self.body, body);
        old[..].zeroize();
        Ok(())
    }
}

#[cfg(feature = "alloc")]
impl Drop for HeapRegion {
    fn drop(&mut self) {
        self.body[..].zeroize();
    }
}

#[cfg(feature = "alloc")]
impl ZeroizeOnDrop for HeapRegion {}

#[cfg(feature = "alloc")]
fn allocate(len: usize) -> Result<Box<[u8]>, Error> {
    let mut body = Vec::new();
    body.try_reserve_exact(len)
        .map_err(|_| Error::Alloc { requested: len })?;
    body.resize(len, 0);
    Ok(body.into_boxed_slice())
}
