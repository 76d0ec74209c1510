use embedded_io::ErrorKind;

/// Everything that can go wrong while staging bytes.
///
/// All failures are all-or-nothing: when an operation returns an error the
/// buffer is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Allocator could not provide a region of the requested length
    #[error("failed to allocate {requested} bytes")]
    Alloc { requested: usize },

    /// Required capacity does not fit in `usize`
    #[error("capacity overflow")]
    CapacityOverflow,

    /// Region has a fixed length and cannot be reallocated
    #[error("fixed region of {capacity} bytes cannot hold {requested} bytes")]
    FixedCapacity { capacity: usize, requested: usize },

    /// Insert position is past the end of live content
    #[error("insert at {index} leaves a gap after {size} live bytes")]
    Gap { index: usize, size: usize },

    /// Insert position is inside live content
    #[error("insert at {index} overlaps {size} live bytes")]
    Overlap { index: usize, size: usize },

    /// Resize would drop live content
    #[error("cannot shrink to {requested} bytes below {size} live bytes")]
    ShrinkBelowSize { size: usize, requested: usize },

    /// Inspection past the end of the inspected range
    #[error("requested {requested} bytes but only {limit} are available")]
    OutOfRange { requested: usize, limit: usize },

    /// Sink refused the output
    #[error("write failed: {0:?}")]
    Write(ErrorKind),
}

impl Error {
    /// Converts a sink error into [`Error::Write`].
    pub fn from_io<E: embedded_io::Error>(err: E) -> Self {
        Error::Write(err.kind())
    }
}

impl embedded_io::Error for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::Alloc { .. } | Error::CapacityOverflow => ErrorKind::OutOfMemory,
            Error::FixedCapacity { .. } => ErrorKind::WriteZero,
            Error::Gap { .. } | Error::Overlap { .. } | Error::ShrinkBelowSize { .. } => {
                ErrorKind::InvalidInput
            }
            Error::OutOfRange { .. } => ErrorKind::InvalidInput,
            Error::Write(kind) => *kind,
        }
    }
}
