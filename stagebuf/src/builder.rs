use core::fmt::Debug;

use crate::{
    buffer::{ByteBuffer, Flags},
    error::Error,
    region::Region,
};

#[cfg(feature = "alloc")]
use crate::region::HeapRegion;

pub const DEFAULT_CAPACITY: usize = 0;

/// Where the backing region of a built buffer comes from
pub trait RegionSource {
    type Region: Region;

    fn into_region(self) -> Result<Self::Region, Error>;
}

/// Heap region of given length, allocated on build
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapCapacity(pub usize);

#[cfg(feature = "alloc")]
impl RegionSource for HeapCapacity {
    type Region = HeapRegion;

    fn into_region(self) -> Result<HeapRegion, Error> {
        HeapRegion::new(self.0)
    }
}

/// Region provided by caller
#[derive(Debug)]
pub struct Provided<R: Region>(pub R);

impl<R: Region> RegionSource for Provided<R> {
    type Region = R;

    fn into_region(self) -> Result<R, Error> {
        Ok(self.0)
    }
}

pub struct ByteBufferBuilder<S: RegionSource> {
    pub(crate) flags: Flags,
    pub(crate) source: S,
}

impl<S: RegionSource> Debug for ByteBufferBuilder<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteBufferBuilder")
            .field("flags", &self.flags)
            .finish()
    }
}

impl<S: RegionSource> ByteBufferBuilder<S> {
    pub fn build(self) -> Result<ByteBuffer<S::Region>, Error> {
        let region = self.source.into_region()?;
        Ok(ByteBuffer::from_parts(region, self.flags))
    }

    /// Grow at least twice the current capacity instead of exactly
    /// to the required size
    pub fn geometric_growth(mut self, enabled: bool) -> Self {
        self.flags.set(Flags::GEOMETRIC_GROWTH, enabled);
        self
    }

    /// Zero the whole region when buffer is freed or dropped
    pub fn scrub_on_release(mut self, enabled: bool) -> Self {
        self.flags.set(Flags::SCRUB_ON_RELEASE, enabled);
        self
    }

    pub fn region<R: Region>(self, region: R) -> ByteBufferBuilder<Provided<R>> {
        ByteBufferBuilder {
            flags: self.flags,
            source: Provided(region),
        }
    }
}

impl<R: Region> ByteBufferBuilder<Provided<R>> {
    pub fn with_region(region: R) -> Self {
        Self {
            flags: Flags::default(),
            source: Provided(region),
        }
    }
}

#[cfg(feature = "alloc")]
impl ByteBufferBuilder<HeapCapacity> {
    pub fn initial_capacity(self, capacity: usize) -> Self {
        Self {
            flags: self.flags,
            source: HeapCapacity(capacity),
        }
    }
}

#[cfg(feature = "alloc")]
impl Default for ByteBufferBuilder<HeapCapacity> {
    fn default() -> Self {
        Self {
            flags: Flags::default(),
            source: HeapCapacity(DEFAULT_CAPACITY),
        }
    }
}
