//! Byte-stream transport traits for console I/O
//!
//! The console makes no assumption about its transport beyond "bytes can be
//! read as they become available" and "text can be written back". These
//! traits are the seam between the console and a concrete UART, USB-CDC
//! endpoint, or test double.

/// A non-blocking source of console input bytes.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Read available bytes into `buf`, returning how many were read.
    ///
    /// Returning `Ok(0)` means no data is currently available; it is not an
    /// end-of-stream condition. Implementations must not block waiting for
    /// input.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// A sink for console output text (echo, traces, help listings).
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Write data to the transport
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}
