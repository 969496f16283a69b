use core::hash::Hasher;

use crate::engine::{self, INITIAL};

/// Incremental CRC-32 state.
///
/// Wraps a single accumulator so multi-buffer streaming does not rely on
/// threading return values back into [`update`](crate::update) by hand.
///
/// `Crc32` is not `Copy`: [`finalize`](Self::finalize) consumes
/// the state, so a chain can neither be finalized twice nor updated after it
/// was finalized. Use [`Clone`] to fork a chain that shares a prefix.
///
/// # Examples
///
/// ```
/// use bitcrc::Crc32;
///
/// let mut crc = Crc32::new();
/// crc.update(&[0xEB, 0xE5, 0x51]);
/// crc.update(&[0x87, 0x7F, 0xB8, 0x18, 0x4E]);
/// assert_eq!(crc.finalize(), 0xC57A_3392);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Crc32 {
  acc: u32,
}

impl Default for Crc32 {
  fn default() -> Self {
    Self::new()
  }
}

impl Crc32 {
  /// Start a new chain seeded with [`INITIAL`].
  pub const fn new() -> Self {
    Self { acc: INITIAL }
  }

  /// Resume a chain from a raw accumulator, e.g. one saved with
  /// [`accumulator`](Self::accumulator).
  pub const fn from_accumulator(acc: u32) -> Self {
    Self { acc }
  }

  /// Raw, not yet finalized accumulator.
  #[must_use]
  pub const fn accumulator(&self) -> u32 {
    self.acc
  }

  /// Feed `buffer` into the chain.
  pub const fn update(&mut self, buffer: &[u8]) {
    self.acc = engine::update(buffer, self.acc);
  }

  /// By-value [`update`](Self::update), for building checksums in `const`
  /// items.
  ///
  /// ```
  /// use bitcrc::Crc32;
  ///
  /// const CRC: u32 = Crc32::new().chain(b"Hello ").chain(b"world ").finalize();
  /// assert_eq!(CRC, bitcrc::buffer_checksum(b"Hello world "));
  /// ```
  pub const fn chain(mut self, buffer: &[u8]) -> Self {
    self.update(buffer);
    self
  }

  /// Finish the chain and return the checksum.
  ///
  /// ```compile_fail,E0382
  /// let crc = bitcrc::Crc32::new().chain(b"payload");
  /// let first = crc.finalize();
  /// let second = crc.finalize();
  /// ```
  #[must_use]
  pub const fn finalize(self) -> u32 {
    engine::finalize(self.acc)
  }
}

impl Hasher for Crc32 {
  /// Finalized checksum of the bytes written so far, widened to `u64`.
  ///
  /// Unlike [`Crc32::finalize`] this leaves the chain open.
  fn finish(&self) -> u64 {
    u64::from(engine::finalize(self.acc))
  }

  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }
}

impl Extend<u8> for Crc32 {
  fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
    for byte in iter {
      self.update(&[byte]);
    }
  }
}

impl<'a> Extend<&'a u8> for Crc32 {
  fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
    self.extend(iter.into_iter().copied());
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc32 {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::buffer_checksum;

  #[test]
  fn new_is_seeded() {
    assert_eq!(Crc32::new().accumulator(), INITIAL);
    assert_eq!(Crc32::default(), Crc32::new());
  }

  #[test]
  fn empty_chain() {
    assert_eq!(Crc32::new().finalize(), 0);
  }

  #[test]
  fn multiple_strings() {
    let mut crc = Crc32::new();
    for part in [&b"Hello "[..], b"world ", b"multiple ", b"buffers!"] {
      crc.update(part);
    }
    assert_eq!(crc.finalize(), 0x951E_6550);
  }

  #[test]
  fn resume_from_accumulator() {
    let mut head = Crc32::new();
    head.update(b"1234");
    let saved = head.accumulator();

    let mut resumed = Crc32::from_accumulator(saved);
    resumed.update(b"56789");
    assert_eq!(resumed.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn clone_forks_chain() {
    let prefix = Crc32::new().chain(b"Hello world ");
    let a = prefix.clone().chain(b"String!").finalize();
    let b = prefix.chain(b"char array!").finalize();
    assert_eq!(a, 0x55DF_869B);
    assert_eq!(b, 0x9511_9850);
  }

  #[test]
  fn hasher_finish_keeps_chain_open() {
    let mut crc = Crc32::new();
    crc.write(b"1234");
    assert_eq!(crc.finish(), u64::from(buffer_checksum(b"1234")));
    crc.write(b"56789");
    assert_eq!(crc.finish(), 0xCBF4_3926);
    assert_eq!(crc.finalize(), 0xCBF4_3926);
  }

  #[test]
  fn extend_bytes() {
    let data = b"Hello world single buffer!";
    let mut by_value = Crc32::new();
    by_value.extend(data.iter().copied());
    let mut by_ref = Crc32::new();
    by_ref.extend(data);
    assert_eq!(by_value.finalize(), 0x9C3B_392A);
    assert_eq!(by_ref.finalize(), 0x9C3B_392A);
  }

  #[cfg(feature = "std")]
  #[test]
  fn io_write() {
    use std::io::Write;

    let mut crc = Crc32::new();
    let mut reader: &[u8] = b"Hello world multiple buffers!";
    let copied = std::io::copy(&mut reader, &mut crc).unwrap();
    crc.flush().unwrap();
    assert_eq!(copied, 29);
    assert_eq!(crc.finalize(), 0x951E_6550);
  }
}
