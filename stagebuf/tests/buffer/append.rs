use rstest::rstest;
use stagebuf::buffer::ByteBuffer;

#[rstest]
#[case::empty_start(0, &[&b"abc"[..], &b""[..], &b"de"[..]])]
#[case::spare_capacity(16, &[&b"abc"[..], &b"defgh"[..]])]
#[case::single_bytes(1, &[&b"a"[..], &b"b"[..], &b"c"[..], &b"d"[..]])]
fn concatenates_in_order(#[case] initial: usize, #[case] chunks: &[&[u8]]) {
    let mut buffer = ByteBuffer::new(initial).unwrap();
    let mut expected = Vec::new();

    for chunk in chunks {
        buffer.append(chunk).unwrap();
        expected.extend_from_slice(chunk);

        assert_eq!(buffer.size(), expected.len());
        assert!(buffer.capacity() >= buffer.size());
    }

    assert_eq!(buffer.body(), expected.as_slice());
}

#[test]
fn exact_fit_growth() {
    let mut buffer = ByteBuffer::new(0).unwrap();

    for _ in 0..10 {
        buffer.append_byte(0xFF).unwrap();
    }

    assert_eq!(buffer.size(), 10);
    assert_eq!(buffer.capacity(), 10);
    assert_eq!(buffer.body(), &[0xFF; 10]);
}

#[test]
fn keeps_spare_capacity() {
    let mut buffer = ByteBuffer::new(8).unwrap();

    buffer.append(b"abc").unwrap();

    assert_eq!(buffer.capacity(), 8);
    assert_eq!(buffer.raw(), b"abc\0\0\0\0\0");
}

#[test]
fn append_after_existing_content() {
    let mut buffer = ByteBuffer::new(2).unwrap();
    buffer.append(b"ab").unwrap();

    buffer.append(b"cd").unwrap();

    assert_eq!(buffer.body(), b"abcd");
    assert_eq!(buffer.capacity(), 4);
}
