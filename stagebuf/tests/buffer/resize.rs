use rstest::rstest;
use stagebuf::{buffer::ByteBuffer, Error};

#[rstest]
#[case::same(5)]
#[case::grow(6)]
#[case::grow_big(64)]
fn preserves_live_bytes(#[case] new_capacity: usize) {
    let mut buffer = ByteBuffer::new(5).unwrap();
    buffer.append(b"hello").unwrap();

    buffer.resize(new_capacity).unwrap();

    assert_eq!(buffer.capacity(), new_capacity);
    assert_eq!(buffer.size(), 5);
    assert_eq!(buffer.body(), b"hello");
    assert!(buffer.raw()[5..].iter().all(|&b| b == 0));
}

#[test]
fn shrink_above_size() {
    let mut buffer = ByteBuffer::new(4).unwrap();
    buffer.append(b"ab").unwrap();

    buffer.resize(2).unwrap();

    assert_eq!(buffer.capacity(), 2);
    assert_eq!(buffer.body(), b"ab");
}

#[test]
fn shrink_empty() {
    let mut buffer = ByteBuffer::new(4).unwrap();

    buffer.resize(2).unwrap();

    assert_eq!(buffer.capacity(), 2);
    assert_eq!(buffer.size(), 0);
}

#[test]
fn shrink_below_size_is_rejected() {
    let mut buffer = ByteBuffer::new(4).unwrap();
    buffer.append(b"abc").unwrap();

    assert_eq!(
        buffer.resize(2),
        Err(Error::ShrinkBelowSize {
            size: 3,
            requested: 2
        })
    );

    assert_eq!(buffer.capacity(), 4);
    assert_eq!(buffer.body(), b"abc");
}

#[test]
fn geometric_growth_never_under_allocates() {
    let mut buffer = ByteBuffer::builder()
        .geometric_growth(true)
        .build()
        .unwrap();

    let mut capacities = Vec::new();
    for i in 0..9u8 {
        buffer.append_byte(i).unwrap();
        assert!(buffer.capacity() >= buffer.size());
        capacities.push(buffer.capacity());
    }

    assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    assert_eq!(buffer.body(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn allocation_failure_leaves_buffer_unchanged() {
    assert!(matches!(
        ByteBuffer::new(usize::MAX),
        Err(Error::Alloc { requested: usize::MAX })
    ));

    let mut buffer = ByteBuffer::new(2).unwrap();
    buffer.append(b"ab").unwrap();
    let too_big = isize::MAX as usize + 1;

    assert_eq!(
        buffer.resize(too_big),
        Err(Error::Alloc { requested: too_big })
    );
    assert_eq!(buffer.size(), 2);
    assert_eq!(buffer.capacity(), 2);
    assert_eq!(buffer.body(), b"ab");
}
