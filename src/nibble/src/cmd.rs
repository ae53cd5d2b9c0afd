pub mod dump;
pub mod inspect;
pub mod read;
pub mod write;

/// Represents a command in the Nibble application.
pub trait Command {
    /// Consumes a command object and executes the handler actions
    /// associated with it.
    ///
    /// On failure, an error will be reported.
    fn handle(self) -> eyre::Result<()>;
}
