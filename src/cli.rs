use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "keyslot",
    about = "One slot, one secret — stored in the OS keychain.",
    version
)]
pub struct Cli {
    /// Keychain service name the slot lives under.
    #[arg(long, global = true, default_value = crate::commands::DEFAULT_SERVICE)]
    pub service: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store a secret in the slot, replacing any existing one
    /// (value is prompted interactively, never passed as an argument).
    Set,

    /// Print the stored secret.
    Show,

    /// Clear the slot. Succeeds even if it is already empty.
    Delete,

    /// Report whether the slot currently holds a secret.
    Status,
}
