//! Line assembly and command dispatch.
//!
//! This module turns a raw console byte stream into discrete text lines and
//! dispatches each line against a [`Registry`]:
//!
//! ```text
//! bytes ──▶ line assembler ──▶ parser ──▶ dispatcher ──▶ handler
//!                                             │
//!                                             └──▶ sorted help listing
//! ```
//!
//! The console is single-threaded and cooperative: it processes at most the
//! bytes it is handed, handlers run synchronously, and no input is read
//! while a handler is running. All state lives in fixed-capacity buffers.

use core::fmt::Write as _;
use core::str;

use heapless::{String, Vec};

use crate::error::Error;
use crate::io::{Read, Write};
use crate::parser::{Argument, CommandLine};
use crate::registry::{Handler, Registry};

/// Size of the line buffer in bytes.
///
/// One byte is reserved, so a line keeps at most `MAX_LINE_LENGTH - 1`
/// characters; further input is silently dropped until the line ends.
pub const MAX_LINE_LENGTH: usize = 64;

// ASCII control character constants for input processing
/// ASCII backspace character (0x08).
pub const ASCII_BACKSPACE: u8 = 0x08;
/// ASCII line feed character (0x0A).
pub const ASCII_LF: u8 = 0x0A;
/// ASCII carriage return character (0x0D).
pub const ASCII_CR: u8 = 0x0D;
/// ASCII delete character (0x7F).
pub const ASCII_DEL: u8 = 0x7F;

/// Prompt marker emitted when a new line begins.
pub const PROMPT: &str = "> ";

const TRACE_CAPACITY: usize = 64;
const HELP_LINE_CAPACITY: usize = 128;
const POLL_CHUNK: usize = 16;

/// The command console: a bounded line assembler plus dispatcher.
///
/// The console owns only its input state; the command table is built by the
/// application and passed in by reference, so one registry can serve
/// multiple consoles and consoles are cheap to create in tests.
///
/// # Examples
///
/// ```rust
/// use libconsole::registry::Registry;
/// use libconsole::shell::Console;
/// # struct MockUart(Vec<u8>);
/// # impl libconsole::io::Write for MockUart {
/// #     type Error = ();
/// #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
/// #         self.0.extend_from_slice(buf);
/// #         Ok(buf.len())
/// #     }
/// #     fn flush(&mut self) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
///
/// fn restart() {}
///
/// let mut registry = Registry::new();
/// registry.register_no_arg("restart", "restart the device", restart).unwrap();
///
/// let mut console = Console::new();
/// let mut port = MockUart(Vec::new());
/// console.input(&mut port, &registry, b"restart\n").unwrap();
/// ```
#[derive(Debug)]
pub struct Console {
    buffer: Vec<u8, MAX_LINE_LENGTH>,
    echo_enabled: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a console with an empty line buffer and echo enabled.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            echo_enabled: true,
        }
    }

    /// Enable or disable input echo.
    ///
    /// Echo covers the prompt marker, typed characters and the backspace
    /// erase sequence. Command traces and help listings are always written.
    /// Disable echo when the input comes from a machine rather than an
    /// interactive operator.
    pub fn set_echo(&mut self, enabled: bool) {
        self.echo_enabled = enabled;
    }

    /// Process a batch of input bytes.
    ///
    /// Bytes are consumed one at a time by the line assembler:
    ///
    /// - line feed completes the current line, which is parsed and
    ///   dispatched before the next byte is looked at
    /// - carriage return is ignored, so `\r\n` and `\n` endings both work
    /// - backspace and delete erase one character, with the visual erase
    ///   sequence echoed; at an empty line they do nothing
    /// - any other byte is appended and echoed, with the prompt marker
    ///   emitted first when the line was empty; once the buffer is full the
    ///   byte is dropped silently
    ///
    /// A batch may contain several complete lines (pasted input); each
    /// dispatches independently, in arrival order.
    ///
    /// # Arguments
    ///
    /// * `port` - Output transport for echo, traces and help text
    /// * `registry` - Command table to dispatch against
    /// * `data` - Input bytes, typically whatever the UART just produced
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All bytes processed
    /// * `Err(Error::WriteError)` - The output transport failed
    pub fn input<W: Write>(
        &mut self,
        port: &mut W,
        registry: &Registry,
        data: &[u8],
    ) -> Result<(), Error> {
        for &byte in data {
            match byte {
                ASCII_LF => {
                    if self.echo_enabled {
                        emit(port, "\r\n")?;
                    }
                    let line = core::mem::take(&mut self.buffer);
                    // A line that is not valid UTF-8 cannot name a command
                    // and is dropped.
                    if let Ok(text) = str::from_utf8(&line) {
                        dispatch(port, registry, text)?;
                    }
                }
                ASCII_CR => {}
                ASCII_BACKSPACE | ASCII_DEL => {
                    if self.buffer.pop().is_some() && self.echo_enabled {
                        emit(port, "\x08 \x08")?;
                    }
                }
                _ => {
                    if self.buffer.len() < MAX_LINE_LENGTH - 1 {
                        if self.buffer.is_empty() && self.echo_enabled {
                            emit(port, PROMPT)?;
                        }
                        let _ = self.buffer.push(byte);
                        if self.echo_enabled {
                            port.write(&[byte]).map_err(|_| Error::WriteError)?;
                        }
                    }
                    // Past capacity the byte is dropped; the line truncates
                    // instead of overflowing.
                }
            }
        }

        Ok(())
    }

    /// Drain whatever input the transport has ready.
    ///
    /// Reads in small chunks until the port reports no data (`Ok(0)`) and
    /// feeds everything through [`Console::input`]. Suitable for calling
    /// from a firmware main loop on every iteration; the call never blocks
    /// waiting for input.
    pub fn poll<P: Read + Write>(
        &mut self,
        port: &mut P,
        registry: &Registry,
    ) -> Result<(), Error> {
        let mut chunk = [0u8; POLL_CHUNK];
        loop {
            let count = port.read(&mut chunk).map_err(|_| Error::ReadError)?;
            if count == 0 {
                return Ok(());
            }
            self.input(port, registry, &chunk[..count])?;
        }
    }
}

/// Parse one complete line and dispatch it against the registry.
///
/// An empty line carries no name to match and is ignored. A command matches
/// only when both the name and the inferred argument kind equal a registry
/// entry; anything else falls through to the help listing.
fn dispatch<W: Write>(port: &mut W, registry: &Registry, raw: &str) -> Result<(), Error> {
    if raw.is_empty() {
        return Ok(());
    }

    let line = CommandLine::parse(raw);
    if let Some(command) = registry.find(&line.name) {
        let mut trace: String<TRACE_CAPACITY> = String::new();
        match (command.handler, &line.argument) {
            (Handler::NoArg(run), Argument::None) => {
                let _ = write!(trace, "Calling : {}()\r\n", command.name);
                emit(port, &trace)?;
                run();
                return Ok(());
            }
            (Handler::Int(run), Argument::Int(value)) => {
                let _ = write!(trace, "Calling : {}({})\r\n", command.name, value);
                emit(port, &trace)?;
                run(*value);
                return Ok(());
            }
            (Handler::Text(run), Argument::Text(text)) => {
                let _ = write!(trace, "Calling : {}({})\r\n", command.name, text);
                emit(port, &trace)?;
                run(text);
                return Ok(());
            }
            _ => {}
        }
    }

    print_help(port, registry, raw)
}

/// Print the "not supported" notice and the sorted command listing.
fn print_help<W: Write>(port: &mut W, registry: &Registry, raw: &str) -> Result<(), Error> {
    let mut header: String<HELP_LINE_CAPACITY> = String::new();
    let _ = write!(header, "'{}' not supported. Available commands :\r\n", raw);
    emit(port, &header)?;

    for command in registry.sorted() {
        let mut entry: String<HELP_LINE_CAPACITY> = String::new();
        let _ = write!(entry, "  {} {}.\r\n", command.name, command.doc);
        emit(port, &entry)?;
    }

    Ok(())
}

fn emit<W: Write>(port: &mut W, text: &str) -> Result<(), Error> {
    port.write(text.as_bytes()).map_err(|_| Error::WriteError)?;
    Ok(())
}
