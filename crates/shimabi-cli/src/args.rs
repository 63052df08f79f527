use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use shimabi_core::facts::catalog::Profile;

#[derive(Debug, Parser)]
#[command(
    name = "shimabi",
    version,
    about = "Verify the platform ABI facts a WASI shim hard-codes",
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub verify: VerifyArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the fact table against this platform (the default)
    Verify(VerifyArgs),

    /// Check a compiled module against the shim's host surface
    Audit(AuditArgs),
}

#[derive(Debug, Clone, ClapArgs)]
pub struct VerifyArgs {
    /// Fact subset to check
    #[arg(long, default_value = "extended")]
    pub profile: ProfileArg,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Trace every evaluated fact to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuditArgs {
    /// Path to the .wasm module
    pub wasm_path: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    Minimal,
    Extended,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Minimal => Profile::Minimal,
            ProfileArg::Extended => Profile::Extended,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
