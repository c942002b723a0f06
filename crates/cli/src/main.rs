/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::process::ExitCode;

use clap::{ArgMatches, FromArgMatches};
use tokio_util::sync::CancellationToken;
use tracing::metadata::LevelFilter;

use crate::cfg::cli_options::{DEFAULT_CONFIG_COMMAND, GlobalOptions, cli_command};
use crate::cfg::config::Config;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::{CliError, CliResult};

mod cfg;
mod endpoint;
mod errors;
mod invoke;
mod lifecycle_config;
mod model;
#[cfg(test)]
mod testing;
mod training_job;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let matches = cli_command().get_matches();
    let options = match GlobalOptions::from_arg_matches(&matches) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };
    setup_logging(&options);

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::debug!("interrupted, cancelling in-flight request");
                cancel.cancel();
            }
        }
    });

    match run(&options, &matches, cancel).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, command_path(&matches).as_deref());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(
    options: &GlobalOptions,
    matches: &ArgMatches,
    cancel: CancellationToken,
) -> CliResult<()> {
    let Some((group, group_matches)) = matches.subcommand() else {
        return Err(CliError::UnknownCommand(String::new()));
    };
    if group == DEFAULT_CONFIG_COMMAND {
        print!("{}", Config::default().into_annotated_config_file());
        return Ok(());
    }
    let Some((command, matches)) = group_matches.subcommand() else {
        return Err(CliError::UnknownCommand(group.to_string()));
    };

    let config = Config::load_or_default(options.config.as_deref())?;
    let mut ctx = RuntimeContext::new(options, config, cancel)?;
    match group {
        "model" => model::Cmd { command, matches }.dispatch(&mut ctx).await,
        "training-job" => training_job::Cmd { command, matches }.dispatch(&mut ctx).await,
        "endpoint" => endpoint::Cmd { command, matches }.dispatch(&mut ctx).await,
        "lifecycle-config" => {
            lifecycle_config::Cmd { command, matches }
                .dispatch(&mut ctx)
                .await
        }
        other => Err(CliError::UnknownCommand(format!("{other} {command}"))),
    }
}

fn command_path(matches: &ArgMatches) -> Option<String> {
    let (group, matches) = matches.subcommand()?;
    Some(match matches.subcommand() {
        Some((command, _)) => format!("{group} {command}"),
        None => group.to_string(),
    })
}

/// Writes the error as a single JSON record on stderr, keeping stdout
/// reserved for command output.
fn report(error: &CliError, target: Option<&str>) {
    match serde_json::to_string(&error.record(target)) {
        Ok(line) => eprintln!("{line}"),
        Err(_) => eprintln!("{error}"),
    }
}

fn setup_logging(options: &GlobalOptions) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::util::SubscriberInitExt;

    let level = if options.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .compact()
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .try_init()
    {
        eprintln!("Failed to initialize trace logging, continuing without it: {e}");
    }
}
