//! Growable byte buffer for staging binary data before it is written out.
//!
//! [`ByteBuffer`](buffer::ByteBuffer) keeps explicit size and capacity
//! bookkeeping over a single contiguous region, supports append-only
//! insertion, clearing, exact-fit (or geometric) growth and bit-level dumps
//! to any [`embedded_io::Write`] sink.
#![warn(rust_2018_idioms, missing_debug_implementations)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

// std used for simpler testing
#[cfg(test)]
extern crate std;

pub mod buffer;
pub mod builder;
pub mod codes;
pub mod dump;
pub mod error;
pub mod region;
pub mod writer;

pub use error::Error;
