//! Reference vectors printed in the `0xXXXXXXXX...OK` format used to compare
//! against online CRC-32 calculators.
//!
//! Run with `cargo run -p bitcrc --example demo`.

use std::{ffi::CString, process::ExitCode};

use bitcrc::{Crc32, INITIAL, buffer_checksum, finalize, string_checksum, update};

fn check(label: &str, calculated: u32, expected: u32) -> bool {
  print!("{label}: 0x{calculated:08X}...");
  if calculated == expected {
    println!("OK");
    true
  } else {
    println!("FAILED! Expected: 0x{expected:08X}");
    false
  }
}

fn main() -> ExitCode {
  println!("bitcrc example\n");

  let string = CString::new("Hello world String!").expect("literal has no interior NUL");
  let char_array = c"Hello world char array!";
  let single = b"Hello world single buffer!";

  let mut multiple = update(b"Hello ", INITIAL);
  multiple = update(b"world ", multiple);
  multiple = update(b"multiple ", multiple);
  multiple = update(b"buffers!", multiple);

  let mut buffers = Crc32::new();
  buffers.update(&[0xEB, 0xE5, 0x51]);
  buffers.update(&[0x87, 0x7F, 0xB8, 0x18, 0x4E]);

  let results = [
    check("Hello world String!", string_checksum(&string), 0x55DF_869B),
    check("Hello world char array!", string_checksum(char_array), 0x9511_9850),
    check("Hello world single buffer!", buffer_checksum(single), 0x9C3B_392A),
    check("Hello world multiple buffers!", finalize(multiple), 0x951E_6550),
    check("buffer1 + buffer2", buffers.finalize(), 0xC57A_3392),
  ];

  if results.iter().all(|&ok| ok) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
