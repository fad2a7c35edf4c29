// SPDX-License-Identifier: MPL-2.0
use farmflow::app::{self, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
farmflow - localized farm dashboard

USAGE:
  farmflow [OPTIONS]

OPTIONS:
  --lang <CODE>          Switch to and remember a language (en, hi, kn)
  --config-dir <PATH>    Directory holding settings.toml
  --today <YYYY-MM-DD>   Date used for harvest countdowns
  --list-languages       Print the supported languages
  -h, --help             Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        today: args.opt_value_from_str("--today")?,
        list_languages: args.contains("--list-languages"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let store = app::open_store(&flags);
    match app::run(&flags, store) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
