use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index fell outside the window a container operation accepts.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<Success, Failure = Error> = core::result::Result<Success, Failure>;

/// Fails with [`Error::IndexOutOfRange`] unless `index < len`.
pub(crate) const fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Fails with [`Error::IndexOutOfRange`] unless `at <= len`.
pub(crate) const fn check_position(at: usize, len: usize) -> Result<()> {
    if at <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index: at, len })
    }
}
