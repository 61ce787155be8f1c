#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod dashboard;
mod prelude;
mod quantity;
mod simulator;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Report(args) => args.run().await?,
        Command::Watch(args) => args.run().await?,
        Command::Analyze(args) => args.run()?,
        Command::Generate(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
