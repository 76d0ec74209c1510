use rstest::rstest;
use stagebuf::{buffer::ByteBuffer, Error};

#[rstest]
#[case::empty(b"", b"xyz")]
#[case::non_empty(b"abc", b"xyz")]
#[case::empty_data(b"abc", b"")]
fn same_as_append(#[case] initial: &[u8], #[case] data: &[u8]) {
    let mut inserted = ByteBuffer::new(0).unwrap();
    let mut appended = ByteBuffer::new(0).unwrap();
    inserted.append(initial).unwrap();
    appended.append(initial).unwrap();

    let size = inserted.size();
    inserted.insert(data, size).unwrap();
    appended.append(data).unwrap();

    assert_eq!(inserted.size(), appended.size());
    assert_eq!(inserted.capacity(), appended.capacity());
    assert_eq!(inserted.raw(), appended.raw());
}

#[rstest]
#[case::gap(4, Error::Gap { index: 4, size: 3 })]
#[case::far_gap(100, Error::Gap { index: 100, size: 3 })]
#[case::overlap(2, Error::Overlap { index: 2, size: 3 })]
#[case::overlap_start(0, Error::Overlap { index: 0, size: 3 })]
fn rejects_wrong_index(#[case] index: usize, #[case] expected: Error) {
    let mut buffer = ByteBuffer::new(3).unwrap();
    buffer.append(b"abc").unwrap();

    assert_eq!(buffer.insert(b"xyz", index), Err(expected));

    assert_eq!(buffer.size(), 3);
    assert_eq!(buffer.capacity(), 3);
    assert_eq!(buffer.body(), b"abc");
}

#[test]
fn repeated_insert_at_end() {
    let mut buffer = ByteBuffer::new(0).unwrap();

    for c in b'a'..=b'z' {
        let size = buffer.size();
        buffer.insert(&[c], size).unwrap();
    }

    assert_eq!(buffer.body(), b"abcdefghijklmnopqrstuvwxyz");
    assert_eq!(buffer.capacity(), 26);
}

#[test]
fn insert_into_cleared_buffer() {
    let mut buffer = ByteBuffer::new(0).unwrap();

    for c in [b'a', b'b', b'c'] {
        buffer.insert(&[c], 0).unwrap();
        assert_eq!(buffer.body(), &[c]);
        buffer.clear();
    }

    assert_eq!(buffer.capacity(), 1);
}
