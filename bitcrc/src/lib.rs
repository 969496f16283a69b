//! Table-free CRC-32 for constrained targets.
//!
//! `bitcrc` computes the standard CRC-32 (IEEE 802.3, reflected input and
//! output, the checksum used by Ethernet, zlib, gzip and PNG) with a
//! bit-serial division loop instead of the usual 256-entry lookup table. That
//! gives up throughput to save roughly a kilobyte of static data, which matters on
//! microcontrollers where the table would otherwise sit in flash.
//!
//! The crate is `no_std` and allocation-free unless the `std` feature
//! (enabled by default) is turned on, which only adds [`std::io::Write`] for
//! [`Crc32`].
//!
//! # Accumulation chains
//!
//! A checksum is built from an accumulator seeded with [`INITIAL`], fed with
//! [`update`] any number of times, and complemented once by [`finalize`].
//! Splitting the input at arbitrary points never changes the result:
//!
//! ```
//! use bitcrc::{INITIAL, buffer_checksum, finalize, update};
//!
//! let whole = buffer_checksum(&[0xEB, 0xE5, 0x51, 0x87, 0x7F, 0xB8, 0x18, 0x4E]);
//!
//! let acc = update(&[0xEB, 0xE5, 0x51], INITIAL);
//! let acc = update(&[0x87, 0x7F, 0xB8, 0x18, 0x4E], acc);
//! assert_eq!(finalize(acc), whole);
//! assert_eq!(whole, 0xC57A_3392);
//! ```
//!
//! [`Crc32`] wraps the same chain in a value whose
//! [`finalize`](Crc32::finalize) consumes it, so finalizing twice is a
//! compile error rather than a silent bug:
//!
//! ```
//! use bitcrc::Crc32;
//!
//! let mut crc = Crc32::new();
//! crc.update(b"Hello world ");
//! crc.update(b"multiple buffers!");
//! assert_eq!(crc.finalize(), 0x951E_6550);
//! ```
//!
//! # Strings
//!
//! NUL-terminated strings are taken as [`CStr`](core::ffi::CStr), whose
//! terminator is guaranteed by construction. Raw byte buffers that are
//! expected to contain a terminator go through [`checksum_until_nul`], which
//! reports [`MissingNul`] instead of reading past the end.
//!
//! # Concurrency
//!
//! There is no global state. Every function is pure, so concurrent callers,
//! including interrupt handlers, only need their own accumulator.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

mod engine;
mod error;
mod hasher;

pub use engine::{
  INITIAL, POLYNOMIAL, buffer_checksum, checksum_until_nul, finalize, string_checksum, update,
};
pub use error::MissingNul;
pub use hasher::Crc32;
