//! A tiny utility for erasure coding files into a directory of shards and back.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

use clap::Parser;

mod cli;
mod logging;
mod manifest;
mod op_decode;
mod op_encode;

fn main() -> anyhow::Result<()> {
    let root = cli::Root::parse();
    logging::init()?;

    match root.subcommand {
        cli::Subcommand::Encode(cmd) => op_encode::run(&cmd),
        cli::Subcommand::Decode(cmd) => op_decode::run(&cmd),
    }
}
