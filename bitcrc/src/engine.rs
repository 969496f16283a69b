//! Bit-serial CRC-32 engine (IEEE 802.3, reflected polynomial `0xEDB8_8320`).
//!
//! Each input byte is divided one bit at a time, least-significant bit first,
//! so no 256-entry lookup table is needed. The cost is a fixed eight inner
//! iterations per byte with no early exit, which keeps the execution time of
//! every call proportional to its input length.
//!
//! All entry points are `const fn` and can be evaluated at compile time.

use core::ffi::CStr;

use crate::MissingNul;

/// Seed of every accumulation chain (the CRC-32 "all ones" preset).
pub const INITIAL: u32 = 0xFFFF_FFFF;

/// Bit-reversed form of the CRC-32 generator polynomial `0x04C1_1DB7`.
pub const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Run the polynomial division over the low byte of `crc`, one bit at a
/// time.
#[inline]
const fn divide_byte(mut crc: u32) -> u32 {
  let mut bit = 0;
  while bit < 8 {
    // All ones when the low bit is set, zero otherwise.
    let mask = (crc & 1).wrapping_neg();
    crc = (crc >> 1) ^ (POLYNOMIAL & mask);
    bit += 1;
  }
  crc
}

/// Feed `buffer` into an accumulation chain.
///
/// Pass [`INITIAL`] to start a chain, or the value returned by the previous
/// call to continue one. The returned accumulator is not finalized; call
/// [`finalize`] once after the last update.
///
/// An empty buffer returns `accumulator` unchanged.
///
/// # Examples
///
/// ```
/// use bitcrc::{INITIAL, finalize, update};
///
/// let crc = update(b"Hello ", INITIAL);
/// let crc = update(b"world ", crc);
/// let crc = update(b"multiple ", crc);
/// let crc = update(b"buffers!", crc);
/// assert_eq!(finalize(crc), 0x951E_6550);
/// ```
#[must_use]
pub const fn update(buffer: &[u8], accumulator: u32) -> u32 {
  let mut crc = accumulator;
  let mut i = 0;
  while i < buffer.len() {
    crc = divide_byte(crc ^ buffer[i] as u32);
    i += 1;
  }
  crc
}

/// Turn an accumulator into the final checksum (bitwise complement).
///
/// Call exactly once, after the last [`update`] of a chain. Complementing is
/// an involution, so finalizing twice silently hands back the raw accumulator
/// instead of a checksum.
#[must_use]
pub const fn finalize(accumulator: u32) -> u32 {
  !accumulator
}

/// One-shot checksum of a byte buffer.
///
/// Equivalent to `finalize(update(buffer, INITIAL))`. The empty buffer
/// checksums to `0x0000_0000`.
///
/// # Examples
///
/// ```
/// assert_eq!(bitcrc::buffer_checksum(b"Hello world single buffer!"), 0x9C3B_392A);
/// assert_eq!(bitcrc::buffer_checksum(b""), 0);
/// ```
#[must_use]
pub const fn buffer_checksum(buffer: &[u8]) -> u32 {
  finalize(update(buffer, INITIAL))
}

/// One-shot checksum of a NUL-terminated string, excluding the terminator.
///
/// # Examples
///
/// ```
/// assert_eq!(bitcrc::string_checksum(c"Hello world String!"), 0x55DF_869B);
/// ```
#[must_use]
pub const fn string_checksum(s: &CStr) -> u32 {
  buffer_checksum(s.to_bytes())
}

/// Checksum of `bytes` up to, not including, the first NUL byte.
///
/// Bytes after the terminator are ignored.
///
/// # Errors
///
/// Returns [`MissingNul`] if `bytes` contains no NUL byte.
///
/// # Examples
///
/// ```
/// use bitcrc::{MissingNul, checksum_until_nul};
///
/// assert_eq!(checksum_until_nul(b"Hello world char array!\0junk"), Ok(0x9511_9850));
/// assert_eq!(checksum_until_nul(b"abc"), Err(MissingNul { len: 3 }));
/// ```
pub const fn checksum_until_nul(bytes: &[u8]) -> Result<u32, MissingNul> {
  match CStr::from_bytes_until_nul(bytes) {
    Ok(s) => Ok(string_checksum(s)),
    Err(_) => Err(MissingNul { len: bytes.len() }),
  }
}
