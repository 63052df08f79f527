use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use shimabi_core::report::{model::ToolInfo, render};

mod args;

use args::{AuditArgs, Command, OutputFormat, VerifyArgs};

fn main() -> Result<()> {
    let args = args::Args::parse();

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let exit_code = match args.command {
        Some(Command::Audit(audit)) => run_audit(audit, tool)?,
        Some(Command::Verify(verify)) => run_verify(verify, tool)?,
        None => run_verify(args.verify, tool)?,
    };

    std::process::exit(exit_code);
}

fn run_verify(args: VerifyArgs, tool: ToolInfo) -> Result<i32> {
    let report = shimabi_core::check(args.profile.into(), tool);

    if args.verbose {
        eprint!("{}", render::render_trace(&report));
    }

    let output = match args.format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => render::render_text(&report),
    };
    emit(&output, args.out.as_deref())?;

    Ok(report.outcome.exit_code)
}

fn run_audit(args: AuditArgs, tool: ToolInfo) -> Result<i32> {
    let report = shimabi_core::inspect(&args.wasm_path, tool)?;

    let output = match args.format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => render::render_audit_text(&report),
    };
    emit(&output, args.out.as_deref())?;

    Ok(report.exit_code)
}

fn emit(output: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            // process::exit skips destructors; flush before returning.
            stdout.flush()?;
        }
    }
    Ok(())
}
