pub const LINE_FEED: u8 = 0x0A;

pub const ZERO: u8 = b'0';
pub const ONE: u8 = b'1';
pub const SEPARATOR: u8 = b' ';

pub const LF: &str = "\n";
