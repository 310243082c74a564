//! Command line interface for the `private_cdn` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line arguments for the `private_cdn` binary.
#[derive(Debug, Parser)]
#[command(
    name = "private_cdn",
    version,
    about = "Strip or apply private CDN padding envelopes"
)]
pub struct Cli {
    /// Largest envelope accepted or produced, in bytes.
    #[arg(long, global = true, value_name = "BYTES")]
    pub max_length: Option<usize>,

    /// Log rejected envelopes and sizes to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Operation to run on the input.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the payload of a padded body to stdout.
    Unpad {
        /// Padded input file. Reads stdin when omitted.
        input: Option<PathBuf>,
    },
    /// Wrap the input in a zero-padded envelope and write it to stdout.
    Pad {
        /// Total envelope size in bytes.
        #[arg(short, long, value_name = "BYTES")]
        bucket: usize,
        /// Payload file. Reads stdin when omitted.
        input: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Command};

    #[test]
    fn parses_unpad_with_file() {
        let cli = Cli::parse_from(["private_cdn", "unpad", "body.bin"]);
        assert!(!cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Unpad { input: Some(ref path) } if *path == PathBuf::from("body.bin")
        ));
    }

    #[test]
    fn parses_pad_with_global_options() {
        let cli = Cli::parse_from([
            "private_cdn",
            "pad",
            "--bucket",
            "1024",
            "-v",
            "--max-length",
            "4096",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.max_length, Some(4096));
        assert!(matches!(
            cli.command,
            Command::Pad {
                bucket: 1024,
                input: None
            }
        ));
    }

    #[test]
    fn pad_requires_bucket() {
        assert!(Cli::try_parse_from(["private_cdn", "pad"]).is_err());
    }

    #[test]
    fn every_subcommand_documents_itself() {
        let cmd = Cli::command();
        cmd.clone().debug_assert();
        let names: Vec<_> = cmd.get_subcommands().map(clap::Command::get_name).collect();
        assert_eq!(names, ["unpad", "pad"]);
        for sub in cmd.get_subcommands() {
            assert!(sub.get_about().is_some(), "{} has no about", sub.get_name());
        }
    }
}
