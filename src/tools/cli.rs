use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Compress, Decompress, Test
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Write INPUT.huff (or --output) from INPUT
    Compress,
    /// Restore INPUT.out (or --output) from an hfz container
    Decompress,
    /// Decode an hfz container in memory and report whether it is intact
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "hfz",
    version,
    about = "A byte-oriented Huffman file compressor",
    long_about = "
    hfz builds an optimal prefix code from the byte frequencies of a file and packs the
    file with it. The frequency table travels with the packed data, so the decoder
    rebuilds the identical code on its own."
)]
pub struct HfzOpts {
    /// File to process
    #[clap(value_parser)]
    pub input: PathBuf,

    /// Operation to perform
    #[clap(short, long, value_enum, default_value = "compress")]
    pub mode: Mode,

    /// Output file. Defaults to INPUT.huff when compressing and INPUT.out when decompressing
    #[clap(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[clap(short, long)]
    pub force: bool,

    /// Sets verbosity. -v info, -vv debug, -vvv trace
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress everything but the exit status. Overrides -v
    #[clap(short, long)]
    pub quiet: bool,
}

impl HfzOpts {
    pub fn new(mode: Mode, input: PathBuf) -> Self {
        Self {
            input,
            mode,
            output: None,
            force: false,
            verbose: 0,
            quiet: false,
        }
    }

    /// Where the result goes: --output if given, otherwise the input path plus a suffix.
    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.output {
            return path.clone();
        }
        let suffix = match self.mode {
            Mode::Compress => ".huff",
            Mode::Decompress | Mode::Test => ".out",
        };
        let mut name = self.input.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Log level for the terminal logger.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
