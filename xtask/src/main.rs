// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Developer commands for the Shiftbook workspace:
//!
//! - `cargo xtask ci` runs lint, build, test and smoke in that order
//! - `cargo xtask lint` runs clippy, rustdoc and rustfmt checks
//! - `cargo xtask smoke` drives the `shiftbook` binary through a scratch
//!   workbook, exercising every subcommand that writes to it

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, path::PathBuf, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:#}");
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

#[derive(Clone, Copy, Debug, Subcommand)]
enum Command {
    /// Lint, build, test, then smoke-run the binary
    CI,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Run clippy, rustdoc and rustfmt checks
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build the docs of every workspace crate with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Apply formatting
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run the unit and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Drive the shiftbook binary through a scratch workbook
    #[command(visible_alias = "s")]
    Smoke,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => {
                for step in [Self::Lint, Self::Build, Self::Test, Self::Smoke] {
                    step.run()?;
                }
                Ok(())
            }
            Self::Build => cargo(&["build", "--all-targets"]),
            Self::Lint => {
                for step in [Self::LintClippy, Self::LintDocs, Self::LintFormatting] {
                    step.run()?;
                }
                Ok(())
            }
            Self::LintClippy => cargo(&["clippy", "--all-targets", "--", "-D", "warnings"]),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => cargo_nightly(&["fmt", "--all", "--check"]),
            Self::FixFormatting => cargo_nightly(&["fmt", "--all"]),
            Self::Test => {
                cargo(&["test", "--all-targets"])?;
                cargo(&["test", "--doc"])
            }
            Self::Smoke => smoke(),
        }
    }
}

/// Builds each default workspace package's docs the way docs.rs would.
fn lint_docs() -> Result<()> {
    let meta: cargo_metadata::Metadata = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd("cargo", ["doc", "--no-deps", "--package", &package.name])
            .env_remove("CARGO")
            .env("RUSTUP_TOOLCHAIN", "nightly")
            .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
            .run_with_trace()?;
    }
    Ok(())
}

/// Shiftbook invocations run in order against one scratch workbook.
const SMOKE_STEPS: &[&[&str]] = &[
    &["init", "--force"],
    &[
        "define-shift",
        "--code",
        "V",
        "--label",
        "On call",
        "--hours",
        "0",
        "--kind",
        "on-call",
    ],
    &[
        "add-job",
        "--id",
        "plant",
        "--name",
        "Plant",
        "--start",
        "2024-01-01",
        "--hourly-rate",
        "10",
        "--tax-percent",
        "20",
        "--steps",
        "morning:2,night:2,off:3",
    ],
    &[
        "set-override",
        "--job",
        "plant",
        "--date",
        "2024-01-01",
        "--overtime-hours",
        "2",
        "--note",
        "smoke",
    ],
    &[
        "update-job",
        "--job",
        "plant",
        "--overtime-rate",
        "15",
        "--end",
        "2024-12-31",
    ],
    &["day", "--job", "plant", "--date", "2024-01-01"],
    &["month", "--job", "plant", "--year", "2024", "--month", "1", "--days"],
    &[
        "range",
        "--job",
        "plant",
        "--from",
        "2024-01-01",
        "--to",
        "2024-01-14",
    ],
    &["overrides", "--job", "plant"],
    &["clear-override", "--job", "plant", "--date", "2024-01-01"],
    &["remove-shift", "--code", "V"],
    &["jobs"],
    &["shifts"],
];

/// Runs every smoke step through `cargo run`; any non-zero exit fails.
/// The scratch workbook is removed afterwards either way.
fn smoke() -> Result<()> {
    let workbook: PathBuf = std::env::temp_dir().join("shiftbook-smoke.json");
    let workbook_arg: String = workbook.display().to_string();

    let result: Result<()> = SMOKE_STEPS.iter().try_for_each(|step| {
        let mut args: Vec<&str> = vec![
            "run",
            "--quiet",
            "--package",
            "shiftbook-cli",
            "--",
            "--workbook",
            &workbook_arg,
        ];
        args.extend_from_slice(step);
        cargo(&args)
    });

    let _ = std::fs::remove_file(&workbook);
    result.wrap_err("shiftbook smoke run failed")
}

fn cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn cargo_nightly(args: &[&str]) -> Result<()> {
    cmd("cargo", args)
        // CARGO is set when running as a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct` expression before running it.
trait ExpressionExt {
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
