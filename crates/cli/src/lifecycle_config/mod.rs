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

pub mod args;
pub mod cmds;


pub use args::GROUP;
use clap::ArgMatches;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::{CliError, CliResult};
use crate::invoke::dispatch;

pub struct Cmd<'a> {
    pub command: &'a str,
    pub matches: &'a ArgMatches,
}

impl Dispatch for Cmd<'_> {
    async fn dispatch(self, ctx: &mut RuntimeContext) -> CliResult<()> {
        match self.command {
            "create" => dispatch(&cmds::CreateLifecycleConfig, self.matches, ctx).await,
            other => Err(CliError::UnknownCommand(format!("{} {other}", GROUP.name))),
        }
    }
}
