//! mkcas - wrap a raw file into an MSX CAS cassette image

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cas_formats::{BlockName, CasEntry, DEFAULT_ADDR, OpenMode, TapeWriter};
use clap::{Parser, ValueEnum};
use tracing::{Level, debug};

#[derive(Parser)]
#[command(
    name = "mkcas",
    about = "Make a CAS file for the MSX",
    version,
    long_about = "Wraps a raw input file into the cassette data blocks an MSX tape \
                  loader expects, creating a new .CAS container or appending to an \
                  existing one."
)]
struct Cli {
    /// Set the logging level (diagnostics go to stderr)
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Append to the existing CAS file instead of creating a new one
    #[arg(short = 'a', long = "add")]
    add: bool,

    /// Name to use for the file (limit 6 chars, defaults to the file name)
    #[arg(long)]
    name: Option<String>,

    /// Address to load if binary file
    #[arg(long, value_parser = parse_addr, default_value_t = DEFAULT_ADDR)]
    addr: u16,

    /// Address to exec if binary file
    #[arg(long = "exec", value_parser = parse_addr, default_value_t = DEFAULT_ADDR)]
    exec: u16,

    /// Target .CAS file
    output: PathBuf,

    /// File type
    #[arg(value_enum)]
    file_type: FileType,

    /// Input file
    file: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FileType {
    /// Machine-code image with load/end/exec address words
    Binary,
    /// Tokenised BASIC program
    Basic,
    /// Text file, written in 256 byte chunks
    Ascii,
    /// Raw payload behind a load-address/length header
    CustomHeader,
    /// Raw payload with no framing
    Custom,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Parse a 16 bit address given as decimal or 0x-prefixed hexadecimal.
fn parse_addr(value: &str) -> Result<u16, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| format!("invalid 16-bit address `{value}` (decimal or 0x-prefixed hex)"))
}

/// Name recorded on the tape when `--name` is not given: the base name of
/// the input file, extension included.
fn derived_name(file: &Path) -> String {
    file.file_name()
        .map(|base| base.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let data = fs::read(&cli.file)
        .with_context(|| format!("failed to read input file `{}`", cli.file.display()))?;
    debug!(len = data.len(), "read input payload");

    let name = match &cli.name {
        Some(name) => BlockName::new(name),
        None => BlockName::new(&derived_name(&cli.file)),
    };

    let entry = match cli.file_type {
        FileType::Binary => CasEntry::Binary {
            name,
            load_addr: cli.addr,
            exec_addr: cli.exec,
            data,
        },
        FileType::Basic => CasEntry::Basic { name, data },
        FileType::Ascii => CasEntry::Ascii { name, data },
        FileType::CustomHeader => CasEntry::CustomHeader {
            load_addr: cli.addr,
            data,
        },
        FileType::Custom => CasEntry::Custom { data },
    };

    let mode = if cli.add {
        OpenMode::Append
    } else {
        OpenMode::Create
    };

    let mut tape = TapeWriter::open(&cli.output, mode)
        .with_context(|| format!("failed to open output file `{}`", cli.output.display()))?;
    tape.write_entry(&entry)
        .with_context(|| format!("failed to write `{}`", cli.output.display()))?;
    tape.finish()
        .with_context(|| format!("failed to flush `{}`", cli.output.display()))?;

    debug!(output = %cli.output.display(), ?mode, "tape updated");
    Ok(())
}
