//! Fixed-capacity command registry.
//!
//! The registry maps a command name to its parameter kind, handler and
//! documentation text. It is filled once during application setup and then
//! only read by the dispatcher; entries are never removed.

use heapless::Vec;

use crate::error::Error;

/// Maximum number of commands the registry can hold.
///
/// Registration beyond this bound fails with [`Error::RegistryFull`] and
/// leaves the already-registered entries untouched.
pub const MAX_COMMANDS: usize = 10;

/// The shape of a command's expected argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// The command takes no argument.
    None,
    /// The command takes one signed 32-bit integer.
    Int,
    /// The command takes one text token.
    Text,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ParamKind {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ParamKind::None => defmt::write!(f, "None"),
            ParamKind::Int => defmt::write!(f, "Int"),
            ParamKind::Text => defmt::write!(f, "Text"),
        }
    }
}

/// A command handler together with its calling convention.
///
/// The variant carries the function pointer, so a handler can never be
/// invoked with an argument shape other than the one it was registered
/// with. The parameter kind is derived from the variant via
/// [`Handler::kind`] rather than stored alongside it.
///
/// # Examples
///
/// ```rust
/// use libconsole::registry::{Handler, ParamKind};
///
/// fn restart() {}
///
/// let handler = Handler::NoArg(restart);
/// assert_eq!(handler.kind(), ParamKind::None);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Handler {
    /// Callback for a command that takes no argument.
    NoArg(fn()),
    /// Callback for a command that takes one signed 32-bit integer.
    Int(fn(i32)),
    /// Callback for a command that takes one text token.
    Text(fn(&str)),
}

impl Handler {
    /// The parameter kind this handler accepts.
    pub fn kind(&self) -> ParamKind {
        match self {
            Handler::NoArg(_) => ParamKind::None,
            Handler::Int(_) => ParamKind::Int,
            Handler::Text(_) => ParamKind::Text,
        }
    }
}

/// One registry entry: a named, documented command.
#[derive(Debug, Clone)]
pub struct Command {
    /// The command name as typed by the operator.
    ///
    /// Names are case-sensitive and must be unique within a registry;
    /// lookup returns the first entry with an exactly equal name.
    pub name: &'static str,

    /// The handler and its calling convention.
    pub handler: Handler,

    /// Human-readable usage text shown in the help listing.
    pub doc: &'static str,
}

/// Append-only command table with a compile-time capacity bound.
///
/// Built by the application during setup and passed by reference into the
/// dispatch loop, so several independent consoles can coexist in one
/// process (and in one test binary).
///
/// # Examples
///
/// ```rust
/// use libconsole::registry::{ParamKind, Registry};
///
/// fn set_access_point(enabled: i32) {
///     let _ = enabled;
/// }
///
/// let mut registry = Registry::new();
/// registry
///     .register_int("ap", "enable (1) or disable (0) the access point", set_access_point)
///     .unwrap();
///
/// let command = registry.find("ap").unwrap();
/// assert_eq!(command.handler.kind(), ParamKind::Int);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    commands: Vec<Command, MAX_COMMANDS>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with an explicit [`Handler`] variant.
    ///
    /// # Arguments
    ///
    /// * `name` - Command name (must not be empty)
    /// * `doc` - Usage text for the help listing
    /// * `handler` - The callback and its calling convention
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Command registered successfully
    /// * `Err(Error::InvalidName)` - Empty command name provided
    /// * `Err(Error::RegistryFull)` - The capacity bound is exhausted
    pub fn register(
        &mut self,
        name: &'static str,
        doc: &'static str,
        handler: Handler,
    ) -> Result<(), Error> {
        if name.is_empty() {
            return Err(Error::InvalidName);
        }

        let command = Command { name, handler, doc };
        if self.commands.push(command).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("command table full, dropping '{}'", name);
            return Err(Error::RegistryFull);
        }

        Ok(())
    }

    /// Register a command that takes no argument.
    pub fn register_no_arg(
        &mut self,
        name: &'static str,
        doc: &'static str,
        run: fn(),
    ) -> Result<(), Error> {
        self.register(name, doc, Handler::NoArg(run))
    }

    /// Register a command that takes one signed 32-bit integer.
    pub fn register_int(
        &mut self,
        name: &'static str,
        doc: &'static str,
        run: fn(i32),
    ) -> Result<(), Error> {
        self.register(name, doc, Handler::Int(run))
    }

    /// Register a command that takes one text token.
    pub fn register_text(
        &mut self,
        name: &'static str,
        doc: &'static str,
        run: fn(&str),
    ) -> Result<(), Error> {
        self.register(name, doc, Handler::Text(run))
    }

    /// Look up a command by exact name.
    ///
    /// Comparison is byte-wise string equality; there is no prefix or fuzzy
    /// matching. Returns the first (and, with unique names, only) match.
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    /// All entries ordered lexicographically by name (ASCII byte order).
    ///
    /// The order is computed on demand; the underlying table keeps its
    /// insertion order. Used for the help listing.
    pub fn sorted(&self) -> Vec<&Command, MAX_COMMANDS> {
        let mut entries: Vec<&Command, MAX_COMMANDS> = Vec::new();
        for command in self.commands.iter() {
            // Cannot fail: both vectors share the same capacity bound.
            let _ = entries.push(command);
        }
        entries.sort_unstable_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
        entries
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands have been registered yet.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
