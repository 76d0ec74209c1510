//! Bit-pattern rendering of raw bytes.
//!
//! Every byte is rendered as eight `0`/`1` characters, most significant bit
//! first, followed by a single space. [`Endianness`] only decides the order
//! in which bytes are visited.

use core::fmt;

use embedded_io::Write;
use ufmt::{uDisplay, uWrite};

use crate::{codes, writer::WriteExt};

/// Order in which bytes are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// First byte is rendered first
    Little,
    /// Last byte is rendered first
    Big,
}

impl Endianness {
    /// Byte order of the target the crate is compiled for
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endianness = Endianness::Little;

    /// Byte order of the target the crate is compiled for
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endianness = Endianness::Big;
}

/// Length of single rendered byte including separator
const GROUP_LEN: usize = 9;

fn bit_group(byte: u8) -> [u8; GROUP_LEN] {
    let mut group = [codes::SEPARATOR; GROUP_LEN];
    for (i, c) in group[..8].iter_mut().enumerate() {
        *c = if byte & (0x80 >> i) != 0 {
            codes::ONE
        } else {
            codes::ZERO
        };
    }
    group
}

/// Visit bytes in given order and pass rendered groups to `f`
fn for_each_group<E>(
    bytes: &[u8],
    endianness: Endianness,
    mut f: impl FnMut(&str) -> Result<(), E>,
) -> Result<(), E> {
    let n = bytes.len();
    for i in 0..n {
        let byte = match endianness {
            Endianness::Little => bytes[i],
            Endianness::Big => bytes[n - 1 - i],
        };
        let group = bit_group(byte);
        // SAFETY: group contains only ascii digits and space
        f(unsafe { core::str::from_utf8_unchecked(&group) })?;
    }
    Ok(())
}

/// Write bit pattern of `bytes` followed by a line feed
pub fn write_bits<W: Write>(
    writer: &mut W,
    bytes: &[u8],
    endianness: Endianness,
) -> Result<(), W::Error> {
    for_each_group(bytes, endianness, |group| writer.write_str(group))?;
    writer.flush_bytes(&[codes::LINE_FEED])
}

/// Displayable bit pattern of a byte slice.
///
/// Renders the same text as [`write_bits`] without the final line feed,
/// so it can be embedded into `write!` and `uwrite!` calls.
#[derive(Debug, Clone, Copy)]
pub struct BitDump<'a> {
    bytes: &'a [u8],
    endianness: Endianness,
}

impl<'a> BitDump<'a> {
    pub fn new(bytes: &'a [u8], endianness: Endianness) -> Self {
        Self { bytes, endianness }
    }
}

impl fmt::Display for BitDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for_each_group(self.bytes, self.endianness, |group| f.write_str(group))
    }
}

impl uDisplay for BitDump<'_> {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        for_each_group(self.bytes, self.endianness, |group| f.write_str(group))
    }
}
