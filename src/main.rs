//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use hfz::compression::{
    compress::compress_file,
    decompress::{decompress_file, test_file},
};
use hfz::tools::cli::{HfzOpts, Mode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    let opts = HfzOpts::parse();

    // Available log levels are Off, Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        opts.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("hfz: could not start the terminal logger");
    }
    info!("Mode {}, input {}.", opts.mode, opts.input.display());

    //----- Figure how what we need to do and go do it
    let result = match opts.mode {
        Mode::Compress => compress_file(&opts),
        Mode::Decompress => decompress_file(&opts),
        Mode::Test => test_file(&opts),
    };

    match result {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}: {}", opts.input.display(), e);
            ExitCode::FAILURE
        }
    }
}
