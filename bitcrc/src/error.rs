use core::fmt;

/// Error returned by [`checksum_until_nul`](crate::checksum_until_nul) when
/// the input holds no NUL terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingNul {
  /// Number of bytes scanned, i.e. the full input length.
  pub len: usize,
}

impl fmt::Display for MissingNul {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "no NUL terminator in {} bytes", self.len)
  }
}

impl core::error::Error for MissingNul {}
