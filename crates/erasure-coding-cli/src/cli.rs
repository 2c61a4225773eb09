//! Commands hierarchy.

use std::path::PathBuf;

/// The root of the CLI commands hierarchy.
#[derive(Debug, clap::Parser)]
#[command(version, about = "Erasure code files into a directory of shards and back.")]
pub struct Root {
    /// The command to run.
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

/// The available commands.
#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    /// Split a file into original and recovery shards.
    Encode(EncodeCmd),
    /// Restore a file from a directory of shards.
    Decode(DecodeCmd),
}

/// The `encode` command.
#[derive(Debug, clap::Args, Clone)]
pub struct EncodeCmd {
    /// The file to encode.
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// The directory to write the shards and the manifest to.
    /// Created if it does not exist.
    #[arg(long, value_name = "DIR")]
    pub output: PathBuf,

    /// The amount of original shards to split the file into.
    #[arg(long, env = "ERASURE_ORIGINAL_COUNT")]
    pub original_count: u16,

    /// The amount of recovery shards to compute.
    #[arg(long, env = "ERASURE_RECOVERY_COUNT")]
    pub recovery_count: u16,
}

/// The `decode` command.
#[derive(Debug, clap::Args, Clone)]
pub struct DecodeCmd {
    /// The directory holding the manifest and the surviving shards.
    #[arg(long, value_name = "DIR")]
    pub input: PathBuf,

    /// The file to write the restored data to.
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_encode() {
        let root = Root::try_parse_from([
            "erasure-coding",
            "encode",
            "--input",
            "data.bin",
            "--output",
            "shards",
            "--original-count",
            "4",
            "--recovery-count",
            "2",
        ])
        .unwrap();

        let Subcommand::Encode(cmd) = root.subcommand else {
            panic!("unexpected subcommand");
        };
        assert_eq!(cmd.input, PathBuf::from("data.bin"));
        assert_eq!(cmd.output, PathBuf::from("shards"));
        assert_eq!(cmd.original_count, 4);
        assert_eq!(cmd.recovery_count, 2);
    }

    #[test]
    fn parse_decode() {
        let root = Root::try_parse_from([
            "erasure-coding",
            "decode",
            "--input",
            "shards",
            "--output",
            "data.bin",
        ])
        .unwrap();

        let Subcommand::Decode(cmd) = root.subcommand else {
            panic!("unexpected subcommand");
        };
        assert_eq!(cmd.input, PathBuf::from("shards"));
        assert_eq!(cmd.output, PathBuf::from("data.bin"));
    }

    /// Both env vars are handled in a single test, as the process env is shared.
    #[test]
    fn encode_counts_from_env() {
        let args = [
            "erasure-coding",
            "encode",
            "--input",
            "data.bin",
            "--output",
            "shards",
        ];

        std::env::remove_var("ERASURE_ORIGINAL_COUNT");
        std::env::remove_var("ERASURE_RECOVERY_COUNT");
        assert!(Root::try_parse_from(args).is_err());

        std::env::set_var("ERASURE_ORIGINAL_COUNT", "5");
        assert!(Root::try_parse_from(args).is_err());

        std::env::set_var("ERASURE_RECOVERY_COUNT", "3");
        let res = Root::try_parse_from(args);

        // Flags take precedence over the env.
        let overridden = Root::try_parse_from(args.into_iter().chain(["--recovery-count", "1"]));

        std::env::remove_var("ERASURE_ORIGINAL_COUNT");
        std::env::remove_var("ERASURE_RECOVERY_COUNT");

        let Subcommand::Encode(cmd) = res.unwrap().subcommand else {
            panic!("unexpected subcommand");
        };
        assert_eq!(cmd.original_count, 5);
        assert_eq!(cmd.recovery_count, 3);

        let Subcommand::Encode(cmd) = overridden.unwrap().subcommand else {
            panic!("unexpected subcommand");
        };
        assert_eq!(cmd.original_count, 5);
        assert_eq!(cmd.recovery_count, 1);
    }

    #[test]
    fn encode_rejects_out_of_range_counts() {
        let res = Root::try_parse_from([
            "erasure-coding",
            "encode",
            "--input",
            "data.bin",
            "--output",
            "shards",
            "--original-count",
            "70000",
            "--recovery-count",
            "2",
        ]);
        assert!(res.is_err());
    }
}
