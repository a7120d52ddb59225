use std::path::PathBuf;

use anyhow::Result;
use b64kit::{encoder, Payload};
use clap::Parser;
use log::debug;

mod logging;

/// Encode a string or a file as Base64
#[derive(Debug, Parser)]
#[command(name = "b64", version)]
struct Cli {
    /// Text to encode
    string: Option<String>,

    /// File whose bytes are encoded
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<String> {
    let payload = Payload::from_args(cli.string, cli.file)?;
    debug!("Encoding {:?}", payload);
    Ok(encoder::encode(&payload)?)
}

fn main() -> Result<()> {
    logging::init();

    match run(Cli::parse()) {
        Ok(encoded) => {
            println!("{}", encoded);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use b64kit::Error;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("b64").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_encode_positional() {
        assert_eq!(run(parse(&["hello world"])).unwrap(), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_file_alias() {
        let cli = parse(&["-f", "input.bin"]);
        assert_eq!(cli.file, Some(PathBuf::from("input.bin")));
        assert_eq!(cli.string, None);
    }

    #[test]
    fn test_string_and_file_rejected() {
        let err = run(parse(&["hello", "--file", "input.bin"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = run(parse(&["--file", "/definitely/not/here.bin"])).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NotFound(_))));
    }
}
