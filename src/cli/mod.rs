//! CLI surface for the `studio` binary.

pub mod commands;

use clap::{Parser, Subcommand};

/// Studio authentication CLI
#[derive(Parser, Debug)]
#[command(name = "studio", version, about = "Authenticate this machine with Studio")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authorize with Studio and store the token
    Login(LoginArgs),
    /// Log out from Studio
    Logout,
    /// Print the token used to contact Studio
    Token,
}

/// Arguments for `studio login`.
#[derive(Parser, Debug, Default)]
pub struct LoginArgs {
    /// The hostname of the Studio instance to authenticate with
    #[arg(short = 'H', long)]
    pub hostname: Option<String>,

    /// Comma-separated scopes for the authentication token
    #[arg(short, long)]
    pub scopes: Option<String>,

    /// The name of the authentication token, shown in the Studio profile
    #[arg(short, long)]
    pub name: Option<String>,

    /// Use the user-code flow: print the code to enter in a browser instead
    /// of opening one on your behalf
    #[arg(short = 'd', long)]
    pub use_device_code: bool,
}
