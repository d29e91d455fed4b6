// crates/rdvz-cli/src/main.rs

use std::process::ExitCode;

use clap::Parser;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "rdvz-cli")]
#[command(
    about = "Two-impulse Clohessy-Wiltshire rendezvous: solve v0 and export TikZ coordinates",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub plan: cmd::plan::PlanArgs,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        // Usage errors (unknown flag, "-inf" read as a flag, ...) share the
        // exit status of every other input error.
        Err(e) => {
            let msg = e.to_string();
            eprint!("ERROR: {}", msg.strip_prefix("error: ").unwrap_or(&msg));
            return ExitCode::from(1);
        }
    };
    init_logging(cli.verbose);

    match cmd::plan::run(cli.plan) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::from(1)
        }
    }
}
