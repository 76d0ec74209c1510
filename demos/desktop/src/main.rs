use embedded_io::{ErrorType, Write};
use stagebuf::buffer::ByteBuffer;
use stagebuf::dump::{self, Endianness};
use stagebuf::writer::Writer;
use std::convert::Infallible;
use std::io::{stdout, Stdout, Write as _};
use std::thread;
use std::time::Duration;

use ufmt::uwriteln;

const FRAME: Duration = Duration::from_millis(15);

pub struct Console {
    stdout: Stdout,
}

impl ErrorType for Console {
    type Error = Infallible;
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stdout.write_all(buf).unwrap();
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stdout.flush().unwrap();
        Ok(())
    }
}

/// Print bit pattern of every lowercase letter
fn alphabet(console: &mut Console) -> Result<(), stagebuf::Error> {
    let mut buffer = ByteBuffer::new(0)?;
    for c in b'a'..=b'z' {
        buffer.insert(&[c], 0)?;
        dump::write_bits(console, buffer.body(), Endianness::NATIVE).unwrap();
        buffer.clear();
        thread::sleep(FRAME);
    }
    buffer.free();
    Ok(())
}

/// Grow and shrink a triangle of set bits
fn hills(console: &mut Console, height: usize, bluntness: usize) -> Result<(), stagebuf::Error> {
    let mut buffer = ByteBuffer::new(1)?;
    for _ in 0..height {
        buffer.append_byte(0xFF)?;
    }

    let widths = (1..=buffer.capacity()).chain((0..buffer.capacity()).rev());
    for width in widths {
        for _ in 0..bluntness {
            buffer.dump(console, width, Endianness::NATIVE)?;
            thread::sleep(FRAME);
        }
    }
    buffer.free();
    Ok(())
}

fn main() {
    let mut console = Console { stdout: stdout() };

    let mut writer = Writer::new(&mut console);
    uwriteln!(writer, "Hello World!{}", 25).unwrap();
    writer.writeln_str("This is my message!").unwrap();

    match std::env::args().nth(1).as_deref() {
        Some("alphabet") => alphabet(&mut console).unwrap(),
        _ => hills(&mut console, 10, 6).unwrap(),
    }
}
