use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use b64kit::decoder::{DecodeOptions, Utf8Policy, ValidationPolicy};
use b64kit::host::{AssumeNo, AssumeYes};
use b64kit::{Decoded, Decoder, OutputMode, Source};
use clap::Parser;

mod logging;

/// Decode Base64 from a string, a file or the clipboard
#[derive(Debug, Parser)]
#[command(name = "d64", version)]
struct Cli {
    /// Base64 text to decode
    string: Option<String>,

    /// File containing Base64 text
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Read Base64 text from the clipboard
    #[arg(short, long)]
    clipboard: bool,

    /// Print byte values instead of UTF-8 text
    #[arg(short, long)]
    bytes: bool,

    /// Write the decoded bytes to this file; its directory must exist
    #[arg(short, long, value_name = "PATH")]
    out_file: Option<PathBuf>,

    /// Replace invalid UTF-8 instead of failing
    #[arg(long)]
    lossy: bool,

    /// Only check the shape of literal input; file and clipboard text go straight to the decoder
    #[arg(long)]
    literal_only_validation: bool,

    /// Open the written file without asking
    #[arg(long, conflicts_with = "no_open")]
    open: bool,

    /// Never open the written file
    #[arg(long)]
    no_open: bool,
}

impl Cli {
    fn options(&self) -> DecodeOptions {
        DecodeOptions {
            output_mode: if self.bytes {
                OutputMode::Bytes
            } else {
                OutputMode::Text
            },
            out_file: self.out_file.clone(),
            validation: if self.literal_only_validation {
                ValidationPolicy::LiteralOnly
            } else {
                ValidationPolicy::Uniform
            },
            utf8: if self.lossy {
                Utf8Policy::Lossy
            } else {
                Utf8Policy::Strict
            },
        }
    }

    fn decoder(&self) -> Decoder {
        let builder = Decoder::builder().with_options(self.options());

        if self.open {
            builder.with_interaction(AssumeYes).build()
        } else if self.no_open {
            builder.with_interaction(AssumeNo).build()
        } else {
            builder.build()
        }
    }
}

fn run(cli: Cli) -> Result<Decoded> {
    let decoder = cli.decoder();
    let source = Source::from_args(cli.string, cli.file, cli.clipboard)?;
    Ok(decoder.decode(&source)?)
}

fn print(decoded: &Decoded, out: &mut impl Write) -> io::Result<()> {
    match decoded {
        Decoded::Text(text) => writeln!(out, "{}", text),
        Decoded::Bytes(bytes) => bytes.iter().try_for_each(|b| writeln!(out, "{}", b)),
        // The decoder has already reported the write and any failure to open it
        Decoded::Written(_) => Ok(()),
    }
}

fn main() -> Result<()> {
    logging::init();

    match run(Cli::parse()) {
        Ok(decoded) => {
            let stdout = io::stdout();
            print(&decoded, &mut stdout.lock())?;
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
