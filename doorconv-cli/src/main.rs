//! doorconv CLI
//!
//! Converts the L1J door SQL dumps into the server's YAML catalogs.

mod commands;
mod error;
mod paths;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use doorconv_sql::{ConvertOptions, ParseMode};

#[derive(Parser)]
#[command(name = "doorconv")]
#[command(about = "Convert door SQL dumps to YAML catalogs", long_about = None)]
struct Cli {
    /// Fail a table when its dump has insert lines that do not parse
    #[arg(long)]
    strict: bool,

    /// Re-read each written catalog and check the entry count
    #[arg(long)]
    verify: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let options = ConvertOptions {
        mode: if cli.strict {
            ParseMode::Strict
        } else {
            ParseMode::Permissive
        },
        verify: cli.verify,
    };

    let tables = commands::convert::Tables {
        gfx: (Path::new(paths::GFX_SQL), Path::new(paths::GFX_YAML)),
        spawn: (Path::new(paths::SPAWN_SQL), Path::new(paths::SPAWN_YAML)),
    };

    match commands::convert::run_convert(&tables, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr with a level tag. `RUST_LOG` takes precedence
/// over `-v`.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}",
                record.level().as_str().to_ascii_lowercase(),
                record.args()
            )
        })
        .init();
}
