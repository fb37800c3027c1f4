//! Common error types for console operations

/// A common error type for console operations.
///
/// This enum defines the ways console setup and servicing can fail. It is
/// designed to be simple and portable for `no_std` environments. Operator
/// mistakes (unknown commands, over-long lines, empty input) are not errors;
/// they are handled inside the console with the help fallback or silent
/// truncation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The command table's fixed capacity is exhausted.
    RegistryFull,
    /// A command was registered with an empty name.
    InvalidName,
    /// An error occurred while reading from the console transport.
    ReadError,
    /// An error occurred while writing to the console transport.
    WriteError,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::RegistryFull => defmt::write!(f, "RegistryFull"),
            Error::InvalidName => defmt::write!(f, "InvalidName"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
        }
    }
}
