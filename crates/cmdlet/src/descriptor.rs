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

use std::fmt;

use clap::{Args, Command};
use tracing::{debug, warn};

use crate::confirm::ConfirmImpact;
use crate::param::{ParamSpec, ParamValue, ParameterSet};

/// Static description of one remote operation as a command.
#[derive(Debug)]
pub struct CommandDescriptor {
    /// Full command path, e.g. `model create`.
    pub name: &'static str,
    pub about: &'static str,
    /// Remote operation name, e.g. `CreateModel`.
    pub operation: &'static str,
    pub impact: ConfirmImpact,
    /// Parameter echoed by `--pass-thru` and bound from a bare pipeline value.
    pub primary: &'static str,
    /// Selector applied when the caller gives none.
    pub default_select: &'static str,
    pub params: &'static [ParamSpec],
}

impl CommandDescriptor {
    /// Last word of the command path; the subcommand name clap sees.
    pub fn command_name(&self) -> &'static str {
        self.name.rsplit(' ').next().unwrap_or(self.name)
    }

    pub fn lookup(&self, name: &str) -> Option<&'static ParamSpec> {
        let params: &'static [ParamSpec] = self.params;
        params.iter().find(|p| p.matches_name(name))
    }

    pub fn clap_command(&self) -> Command {
        let cmd = Command::new(self.command_name()).about(self.about);
        let cmd = self
            .params
            .iter()
            .fold(cmd, |cmd, spec| cmd.arg(spec.clap_arg()));
        InvocationOptions::augment_args(cmd)
    }

    /// Required parameters explicitly bound to null produce a warning each.
    /// The call still goes ahead; the service has the final word.
    pub fn check_required(&self, params: &ParameterSet) -> Vec<RequiredParamWarning> {
        let mut warnings = Vec::new();
        for spec in self.params.iter().filter(|p| p.required) {
            match params.get(spec.name) {
                Some(ParamValue::Null) => {
                    let warning = RequiredParamWarning {
                        command: self.name,
                        param: spec.name,
                    };
                    warn!("{warning}");
                    warnings.push(warning);
                }
                None => debug!(
                    "{}: required parameter {} is not bound, leaving validation to the service",
                    self.name, spec.name
                ),
                Some(_) => {}
            }
        }
        warnings
    }
}

/// Options every generated command accepts next to its parameter table.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationOptions {
    #[clap(
        long,
        value_name = "SELECTOR",
        help = "What to output: '*' for the whole response, a response field path such as 'ModelArn', or '^Param' to echo an input parameter"
    )]
    pub select: Option<String>,

    #[clap(
        long,
        help = "Output the value of the command's primary parameter instead of the response"
    )]
    pub pass_thru: bool,

    #[clap(long, short = 'f', help = "Do not ask for confirmation")]
    pub force: bool,

    #[clap(
        long,
        value_name = "FILE",
        help = "Bind parameters from a JSON object (or a single value for the primary parameter) read from FILE, or '-' for stdin"
    )]
    pub input_json: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredParamWarning {
    pub command: &'static str,
    pub param: &'static str,
}

impl fmt::Display for RequiredParamWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: null passed for parameter {}, which is marked as required. \
             If you believe it is incorrectly marked as required, please report it.",
            self.command, self.param
        )
    }
}

/// A named set of commands, e.g. every `model` command.
#[derive(Debug)]
pub struct CommandGroup {
    pub name: &'static str,
    pub about: &'static str,
    pub commands: &'static [&'static CommandDescriptor],
}

impl CommandGroup {
    pub fn clap_command(&self) -> Command {
        self.commands
            .iter()
            .fold(
                Command::new(self.name)
                    .about(self.about)
                    .subcommand_required(true)
                    .arg_required_else_help(true),
                |cmd, d| cmd.subcommand(d.clap_command()),
            )
    }

    pub fn find(&self, command: &str) -> Option<&'static CommandDescriptor> {
        self.commands
            .iter()
            .copied()
            .find(|d| d.command_name() == command)
    }
}
