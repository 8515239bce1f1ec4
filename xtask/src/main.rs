// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Project automation for the cinema workspace, run as `cargo xtask <command>`.
//!
//! `cargo xtask ci` is what the pipeline runs: lints, build, then every test.
//! Everything here shells out to cargo or an external tool; nothing needs
//! services beyond the local toolchain, except `smoke`, which starts the server.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test)
    CI,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Generate an lcov coverage report under target/
    #[command(visible_alias = "cov")]
    Coverage,

    /// Run clippy, rustdoc and rustfmt checks
    #[command(visible_alias = "l")]
    Lint,

    /// Apply rustfmt to the workspace
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run unit, integration and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Start the server on a scratch port and hit each endpoint once
    Smoke,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Coverage => coverage(),
            Self::Lint => lint(),
            Self::FixFormatting => run_cargo(&["fmt", "--all"]),
            Self::Test => test(),
            Self::Smoke => smoke(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()
}

fn build() -> Result<()> {
    run_cargo(&["build", "--all-targets", "--all-features"])
}

fn coverage() -> Result<()> {
    run_cargo(&[
        "llvm-cov",
        "--workspace",
        "--lcov",
        "--output-path",
        "target/lcov.info",
    ])
}

fn lint() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])?;
    lint_docs()?;
    run_cargo(&["fmt", "--all", "--check"])
}

/// Builds rustdoc for each default member with warnings denied.
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to read cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd("cargo", ["doc", "--no-deps", "--package", &package.name])
            .env("RUSTDOCFLAGS", "-D warnings")
            .run_with_trace()?;
    }
    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test", "--workspace", "--all-targets"])?;
    run_cargo(&["test", "--workspace", "--doc"])
}

/// Runs the release server against a 2x2 room and exercises each route with curl.
///
/// The ticket bought through `/purchase` is handed back through `/return`.
fn smoke() -> Result<()> {
    const BASE: &str = "http://127.0.0.1:28999";

    run_cargo(&["build", "--release", "--package", "cinema-server"])?;
    let server = cmd!(
        "target/release/cinema-server",
        "--total-rows",
        "2",
        "--total-columns",
        "2",
        "--port",
        "28999"
    )
    .start()
    .wrap_err("failed to start cinema-server")?;
    std::thread::sleep(std::time::Duration::from_millis(500));

    let result: Result<()> = smoke_requests(BASE);

    server.kill().wrap_err("failed to stop cinema-server")?;
    result
}

fn smoke_requests(base: &str) -> Result<()> {
    cmd!("curl", "-fsS", format!("{base}/seats")).run_with_trace()?;
    let purchase: Output = cmd!(
        "curl",
        "-fsS",
        "-H",
        "content-type: application/json",
        "-d",
        r#"{"row":1,"column":1}"#,
        format!("{base}/purchase")
    )
    .stdout_capture()
    .run_with_trace()?;

    let ticket: serde_json::Value =
        serde_json::from_slice(&purchase.stdout).wrap_err("purchase response is not JSON")?;
    let token: &str = ticket["token"]
        .as_str()
        .ok_or_else(|| color_eyre::eyre::eyre!("purchase response has no token"))?;
    cmd!(
        "curl",
        "-fsS",
        "-H",
        "content-type: application/json",
        "-d",
        serde_json::json!({ "token": token }).to_string(),
        format!("{base}/return")
    )
    .run_with_trace()?;

    cmd!(
        "curl",
        "-fsS",
        "-X",
        "POST",
        format!("{base}/stats?password=super_secret")
    )
    .run_with_trace()?;
    Ok(())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
