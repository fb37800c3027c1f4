//! # libconsole - Embedded Command Console
//!
//! A small Rust library that gives any embedded device a line-oriented
//! command console over a serial byte stream. It is designed for firmware
//! main loops and supports `no_std` environments.
//!
//! ## Features
//!
//! - **Zero-allocation**: every buffer and table is a fixed-capacity
//!   `heapless` type sized at compile time
//! - **Typed commands**: each command declares whether it takes no argument,
//!   one signed 32-bit integer, or one text token, and the handler signature
//!   is tied to that declaration by construction
//! - **Line editing**: destructive backspace with visual erase, prompt and
//!   echo emission, tolerant of both `\n` and `\r\n` line endings
//! - **Help fallback**: an unmatched input prints the full command table,
//!   sorted by name
//! - **Bounded input**: over-long lines truncate instead of overflowing;
//!   the console never panics on operator input
//!
//! ## Usage
//!
//! The host application builds a [`registry::Registry`] once at startup,
//! then feeds console bytes to a [`shell::Console`] from its main loop:
//!
//! ```rust
//! use libconsole::registry::Registry;
//! use libconsole::shell::Console;
//! # struct MockUart(Vec<u8>);
//! # impl libconsole::io::Write for MockUart {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
//! #         self.0.extend_from_slice(buf);
//! #         Ok(buf.len())
//! #     }
//! #     fn flush(&mut self) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//!
//! fn restart() {
//!     // reset the device
//! }
//!
//! fn set_access_point(enabled: i32) {
//!     let _ = enabled;
//! }
//!
//! let mut registry = Registry::new();
//! registry.register_no_arg("restart", "restart the device", restart).unwrap();
//! registry.register_int("ap", "enable (1) or disable (0) the access point", set_access_point).unwrap();
//!
//! let mut console = Console::new();
//! let mut port = MockUart(Vec::new());
//!
//! // Bytes typically arrive from a UART; batches of any size work,
//! // including several complete lines pasted at once.
//! console.input(&mut port, &registry, b"ap 1\n").unwrap();
//! ```
//!
//! Transports that can report "no data available" can instead be drained
//! with [`shell::Console::poll`], which reads whatever the port has ready
//! and returns without blocking.
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![doc(html_root_url = "https://shishir-dey.github.io/libconsole/")]

/// Byte-stream transport traits connecting the console to a serial port.
///
/// Any UART, USB-CDC endpoint, or test double that implements these traits
/// can carry console input and output.
pub mod io;

/// Common error type for console operations.
pub mod error;

/// Fixed-capacity command table and the typed handler model.
///
/// Commands are registered once during application setup; the table is
/// append-only and immutable afterwards.
pub mod registry;

/// Command-line parsing and argument classification.
///
/// Splits one assembled line into a command name and at most one argument,
/// and infers whether that argument is an integer or free text.
pub mod parser;

/// The console itself: line assembly over a byte stream and command dispatch.
pub mod shell;
