use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Design settings file (JSON). Built-in defaults apply when omitted.
    #[clap(long, global = true, env = "WIRESIZE_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Print the result as JSON instead of a text report.
    #[clap(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Size a conductor from load, run length and environment.
    #[clap(name = "conductor")]
    Conductor(InputArgs),

    /// Size a breaker or fuse.
    #[clap(name = "breaker")]
    Breaker(InputArgs),

    /// Size a conduit for the conductors it carries.
    #[clap(name = "conduit")]
    Conduit(InputArgs),

    /// Check a request without sizing anything.
    #[clap(name = "validate")]
    Validate(InputArgs),

    /// Run a request of any kind, tagged with `"kind"`.
    #[clap(name = "request")]
    Request(InputArgs),
}

#[derive(clap::Args)]
pub struct InputArgs {
    /// Request file (JSON). Reads standard input when omitted.
    #[clap(long, short)]
    pub input: Option<PathBuf>,
}
