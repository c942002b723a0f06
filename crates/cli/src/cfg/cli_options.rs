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


use std::path::PathBuf;

use clap::{Args, Command};
use cmdlet::{CommandGroup, ConfirmImpact, OutputFormat};

use crate::{endpoint, lifecycle_config, model, training_job};

/// Every command group the binary exposes, in help order.
pub static GROUPS: &[&CommandGroup] = &[
    &model::GROUP,
    &training_job::GROUP,
    &endpoint::GROUP,
    &lifecycle_config::GROUP,
];

pub const DEFAULT_CONFIG_COMMAND: &str = "default-config";

// GlobalOptions are accepted before the command group and apply
// to every command. Anything left unset falls back to the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    #[clap(
        long,
        short,
        global = true,
        env = "MLPLANE_CONFIG",
        help = "Path to TOML configuration file (default: ~/.config/mlplane/config.toml if present)"
    )]
    pub config: Option<PathBuf>,

    #[clap(
        long,
        global = true,
        env = "MLPLANE_ENDPOINT",
        help = "Control-plane API endpoint, overriding configuration file"
    )]
    pub endpoint: Option<String>,

    #[clap(
        long,
        global = true,
        env = "MLPLANE_REGION",
        help = "Region, overriding configuration file"
    )]
    pub region: Option<String>,

    #[clap(
        long,
        global = true,
        env = "MLPLANE_API_TOKEN",
        hide_env_values = true,
        help = "Bearer token for the API"
    )]
    pub api_token: Option<String>,

    #[clap(long, global = true, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,

    #[clap(
        long,
        global = true,
        value_enum,
        help = "Ask for confirmation for commands at or above this impact"
    )]
    pub confirm_threshold: Option<ConfirmImpact>,

    #[clap(
        long,
        short,
        global = true,
        help = "Turn on debug logging (same as RUST_LOG=debug)"
    )]
    pub debug: bool,
}

pub fn cli_command() -> Command {
    let cmd = Command::new("mlplane")
        .about("Command-line surface over the ML platform control-plane API")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(DEFAULT_CONFIG_COMMAND)
                .about("Output a default TOML config file for use with --config"),
        );
    let cmd = GROUPS
        .iter()
        .fold(cmd, |cmd, group| cmd.subcommand(group.clap_command()));
    GlobalOptions::augment_args(cmd)
}
