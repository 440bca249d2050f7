//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

/// Folio ACL diagnostics
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "Inspect how Folio access control grants resolve", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the principals that hold a permission
    Check {
        /// Grants making up the ACL
        #[command(flatten)]
        grants: GrantArgs,

        /// Target of the requested permission, e.g. `main:FrontPage`
        #[arg(short, long)]
        target: String,

        /// Requested actions, e.g. `edit` or `view,comment`
        #[arg(short, long)]
        actions: String,
    },

    /// Print the ACL built from the grants
    Show {
        /// Grants making up the ACL
        #[command(flatten)]
        grants: GrantArgs,
    },
}

/// Grant list shared by every command.
#[derive(Args, Debug)]
pub struct GrantArgs {
    /// Grant as `<principal>=<wiki:page>:<actions>`; repeat for more grants
    #[arg(short, long = "grant", value_name = "GRANT", required = true)]
    pub grants: Vec<String>,
}
