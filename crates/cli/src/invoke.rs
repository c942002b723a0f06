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

//! The per-command pipeline: bind, resolve the selector, confirm, warn about
//! null required parameters, project the request, call, select, emit.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::io::Read;

use clap::{ArgMatches, FromArgMatches};
use cmdlet::output::render;
use cmdlet::{
    CmdletResult, CommandDescriptor, InvocationOptions, Overrides, ParameterSet,
    RequiredParamWarning, Selector, needs_confirmation,
};
use rpc::{ApiError, MlPlaneApi};
use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cfg::runtime::RuntimeContext;
use crate::errors::{CliError, CliResult};

/// One remote operation exposed as a command.
#[async_trait::async_trait]
pub trait Operation: Send + Sync {
    type Request: Serialize + Debug + Send + 'static;
    type Response: Serialize + Send + 'static;

    fn descriptor(&self) -> &'static CommandDescriptor;

    /// Projects the bound parameters onto the request tree.
    fn build(&self, params: &ParameterSet) -> CmdletResult<Self::Request>;

    async fn call(
        &self,
        api: &dyn MlPlaneApi,
        request: Self::Request,
        cancel: &CancellationToken,
    ) -> Result<Self::Response, ApiError>;
}

/// Bound parameters plus the common invocation options of one command line.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub params: ParameterSet,
    pub options: InvocationOptions,
}

const STDIN_INPUT: &str = "-";

impl Invocation {
    /// Binds the command line. `--input-json FILE` is merged here;
    /// `--input-json -` is left for [`Invocation::merge_stdin`].
    pub fn from_matches(
        descriptor: &'static CommandDescriptor,
        matches: &ArgMatches,
    ) -> CliResult<Self> {
        let mut params = ParameterSet::from_matches(descriptor, matches)?;
        let options = InvocationOptions::from_arg_matches(matches)?;
        if let Some(path) = options.input_json.as_deref()
            && path != STDIN_INPUT
        {
            let text = std::fs::read_to_string(path).map_err(|error| CliError::PipelineRead {
                path: path.to_string(),
                error,
            })?;
            params.merge_pipeline(&parse_pipeline_input(path, &text)?)?;
        }
        Ok(Self { params, options })
    }

    /// Reads and merges `--input-json -`. The read can be abandoned with `cancel`.
    pub async fn merge_stdin(&mut self, cancel: &CancellationToken) -> CliResult<()> {
        if self.options.input_json.as_deref() != Some(STDIN_INPUT) {
            return Ok(());
        }
        let text = on_stdin_thread(cancel, "--input-json", || {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map(|_| buf)
        })
        .await?
        .map_err(|error| CliError::PipelineRead {
            path: "stdin".to_string(),
            error,
        })?;
        let input = parse_pipeline_input("stdin", &text)?;
        self.params.merge_pipeline(&input)?;
        Ok(())
    }
}

/// Runs a blocking stdin read on a thread of its own and races it against
/// `cancel`. On cancellation the thread is abandoned and ends with the
/// process; `spawn_blocking` would hold up runtime shutdown until the read
/// returned.
pub async fn on_stdin_thread<T: Send + 'static>(
    cancel: &CancellationToken,
    what: &str,
    read: impl FnOnce() -> T + Send + 'static,
) -> CliResult<T> {
    let (tx, rx) = tokio::sync::oneshot::channel();
    std::thread::spawn(move || {
        // The receiver is gone if the read was abandoned.
        let _ = tx.send(read());
    });
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(CliError::Cancelled(what.to_string())),
        answer = rx => answer.map_err(|_| CliError::StdinReader(what.to_string())),
    }
}

fn parse_pipeline_input(path: &str, text: &str) -> CliResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|error| CliError::PipelineJson {
        path: path.to_string(),
        error,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub warnings: Vec<RequiredParamWarning>,
    /// `None` when the confirmation prompt was declined and nothing was called.
    pub output: Option<Value>,
}

/// Pre-build hook binding configured defaults for parameters nothing else bound.
pub fn config_defaults<R>(defaults: BTreeMap<String, Value>) -> Overrides<R> {
    Overrides::new().before_build(move |params| {
        defaults
            .iter()
            .try_for_each(|(name, value)| params.bind_default(name, value))
    })
}

pub async fn run<O: Operation>(
    op: &O,
    invocation: Invocation,
    ctx: &RuntimeContext,
    overrides: &Overrides<O::Request>,
) -> CliResult<Outcome> {
    let descriptor = op.descriptor();
    let Invocation {
        mut params,
        options,
    } = invocation;

    let selector = Selector::resolve(options.select.as_deref(), options.pass_thru, descriptor)?;
    debug!("{}: selector {selector}", descriptor.name);

    if needs_confirmation(
        options.force,
        descriptor.impact,
        ctx.config.confirm_threshold,
    ) {
        let target = confirm_target(&params, descriptor);
        let confirmer = ctx.confirmer.clone();
        let (action, prompt_target) = (descriptor.operation, target.clone());
        let confirmed = on_stdin_thread(&ctx.cancel, descriptor.name, move || {
            confirmer.confirm(action, &prompt_target)
        })
        .await??;
        if !confirmed {
            info!("{} on {target} was not confirmed, skipping", descriptor.name);
            return Ok(Outcome {
                warnings: Vec::new(),
                output: None,
            });
        }
    }
    if ctx.cancel.is_cancelled() {
        return Err(CliError::Cancelled(descriptor.name.to_string()));
    }

    let warnings = descriptor.check_required(&params);

    overrides.apply_before(&mut params)?;
    let mut request = op.build(&params)?;
    overrides.apply_after(&mut request)?;

    let response = op
        .call(ctx.api_client.as_ref(), request, &ctx.cancel)
        .await
        .map_err(|e| CliError::from_api(e, &ctx.config.endpoint, &ctx.config.region))?;

    let response = serde_json::to_value(&response)?;
    let output = selector.apply(&response, &params)?;
    Ok(Outcome {
        warnings,
        output: Some(output),
    })
}

fn confirm_target(params: &ParameterSet, descriptor: &CommandDescriptor) -> String {
    match params.get(descriptor.primary).map(|v| v.to_json()) {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => "<unset>".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Binds one command line, runs it with the configured defaults for the
/// command and writes the rendered projection to the output file.
pub async fn dispatch<O: Operation>(
    op: &O,
    matches: &ArgMatches,
    ctx: &mut RuntimeContext,
) -> CliResult<()> {
    let descriptor = op.descriptor();
    let mut invocation = Invocation::from_matches(descriptor, matches)?;
    invocation.merge_stdin(&ctx.cancel).await?;
    let defaults = ctx.config.defaults_for(descriptor.name);
    let outcome = run(op, invocation, ctx, &config_defaults(defaults)).await?;

    if let Some(value) = outcome.output
        && let Some(text) = render(&value, ctx.config.format)?
    {
        ctx.output_file.write_all(text.as_bytes()).await?;
        ctx.output_file.write_all(b"\n").await?;
        ctx.output_file.flush().await?;
    }
    Ok(())
}
