use std::{fs, io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use ratmat::{get_result, interpreter::evaluator::core::Environment, repl::run_repl};
use tracing_subscriber::EnvFilter;

/// ratmat evaluates matrix and scalar expressions with exact rational
/// arithmetic.
///
/// With no script it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a script file instead of the script.
    #[arg(short, long)]
    file: bool,

    /// Print the last value the script produces.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Do not print the banner or prompts in interactive mode.
    #[arg(short, long)]
    quiet: bool,

    /// The script, or its path when `--file` is given.
    contents: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let Some(contents) = args.contents else {
        let mut env = Environment::new();
        run_repl(io::stdin().lock(), io::stdout().lock(), &mut env, args.quiet)?;
        return Ok(());
    };

    let script = if args.file {
        let path = PathBuf::from(&contents);
        fs::read_to_string(&path).with_context(|| format!("failed to read script '{}'", path.display()))?
    } else {
        contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    Ok(())
}
