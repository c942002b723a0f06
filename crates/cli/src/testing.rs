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

// Shared helpers for command tests: a fake API that records every request
// it receives and answers with canned responses, and a runtime context
// wired to it.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use cmdlet::{AssumeYes, CmdletError, CmdletResult, Confirm, ConfirmImpact, OutputFormat};
use rpc::model::*;
use rpc::{ApiError, MlPlaneApi};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::invoke::{Invocation, Operation};

pub const TEST_ENDPOINT: &str = "https://mlplane.example.invalid/";
pub const TEST_REGION: &str = "us-test-1";

#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<(&'static str, Value)>>,
    pub fail_name_resolution: bool,
}

impl RecordingApi {
    pub fn failing_name_resolution() -> Self {
        Self {
            fail_name_resolution: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(&'static str, Value)> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<Req, Resp>(
        &self,
        operation: &'static str,
        req: &Req,
        cancel: &CancellationToken,
        response: Value,
    ) -> Result<Resp, ApiError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled(operation.to_string()));
        }
        self.calls
            .lock()
            .unwrap()
            .push((operation, serde_json::to_value(req).unwrap()));
        if self.fail_name_resolution {
            return Err(ApiError::NameResolution {
                endpoint: TEST_ENDPOINT.to_string(),
                source: "dns error: failed to lookup address information: Name or service not known"
                    .into(),
            });
        }
        Ok(serde_json::from_value(response).unwrap())
    }
}

fn name_or_unset(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("unset")
}

#[async_trait::async_trait]
impl MlPlaneApi for RecordingApi {
    async fn create_model(
        &self,
        req: CreateModelRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateModelResponse, ApiError> {
        let arn = format!("arn:mlplane:model/{}", name_or_unset(&req.model_name));
        self.answer("CreateModel", &req, cancel, json!({ "ModelArn": arn }))
    }

    async fn describe_model(
        &self,
        req: DescribeModelRequest,
        cancel: &CancellationToken,
    ) -> Result<DescribeModelResponse, ApiError> {
        let name = name_or_unset(&req.model_name).to_string();
        self.answer(
            "DescribeModel",
            &req,
            cancel,
            json!({
                "ModelName": name,
                "ModelArn": format!("arn:mlplane:model/{name}"),
                "PrimaryContainer": { "Image": "registry.example/serve:1", "Environment": { "A": "1" } },
                "Containers": [{ "Image": "registry.example/sidecar:3" }],
                "CreationTime": 1700000000.5
            }),
        )
    }

    async fn delete_model(
        &self,
        req: DeleteModelRequest,
        cancel: &CancellationToken,
    ) -> Result<DeleteModelResponse, ApiError> {
        self.answer("DeleteModel", &req, cancel, json!({}))
    }

    async fn create_training_job(
        &self,
        req: CreateTrainingJobRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateTrainingJobResponse, ApiError> {
        let arn = format!(
            "arn:mlplane:training-job/{}",
            name_or_unset(&req.training_job_name)
        );
        self.answer("CreateTrainingJob", &req, cancel, json!({ "TrainingJobArn": arn }))
    }

    async fn describe_training_job(
        &self,
        req: DescribeTrainingJobRequest,
        cancel: &CancellationToken,
    ) -> Result<DescribeTrainingJobResponse, ApiError> {
        let name = name_or_unset(&req.training_job_name).to_string();
        self.answer(
            "DescribeTrainingJob",
            &req,
            cancel,
            json!({
                "TrainingJobName": name,
                "TrainingJobStatus": "Completed",
                "ModelArtifacts": { "S3ModelArtifacts": "s3://bucket/out/model.tar.gz" }
            }),
        )
    }

    async fn stop_training_job(
        &self,
        req: StopTrainingJobRequest,
        cancel: &CancellationToken,
    ) -> Result<StopTrainingJobResponse, ApiError> {
        self.answer("StopTrainingJob", &req, cancel, json!({}))
    }

    async fn create_endpoint(
        &self,
        req: CreateEndpointRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateEndpointResponse, ApiError> {
        let arn = format!("arn:mlplane:endpoint/{}", name_or_unset(&req.endpoint_name));
        self.answer("CreateEndpoint", &req, cancel, json!({ "EndpointArn": arn }))
    }

    async fn delete_endpoint(
        &self,
        req: DeleteEndpointRequest,
        cancel: &CancellationToken,
    ) -> Result<DeleteEndpointResponse, ApiError> {
        self.answer("DeleteEndpoint", &req, cancel, json!({}))
    }

    async fn create_notebook_instance_lifecycle_config(
        &self,
        req: CreateNotebookInstanceLifecycleConfigRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateNotebookInstanceLifecycleConfigResponse, ApiError> {
        let arn = format!(
            "arn:mlplane:lifecycle-config/{}",
            name_or_unset(&req.notebook_instance_lifecycle_config_name)
        );
        self.answer(
            "CreateNotebookInstanceLifecycleConfig",
            &req,
            cancel,
            json!({ "NotebookInstanceLifecycleConfigArn": arn }),
        )
    }
}

/// Declines every confirmation prompt.
pub struct Refuse;

impl Confirm for Refuse {
    fn confirm(&self, _action: &str, _target: &str) -> CmdletResult<bool> {
        Ok(false)
    }
}

/// Behaves like a prompt with no terminal attached.
pub struct NoTerminal;

impl Confirm for NoTerminal {
    fn confirm(&self, action: &str, target: &str) -> CmdletResult<bool> {
        Err(CmdletError::ConfirmationUnavailable {
            action: action.to_string(),
            target: target.to_string(),
        })
    }
}

/// Cancels the token while the prompt is showing, then answers yes.
pub struct InterruptedPrompt(pub CancellationToken);

impl Confirm for InterruptedPrompt {
    fn confirm(&self, _action: &str, _target: &str) -> CmdletResult<bool> {
        self.0.cancel();
        Ok(true)
    }
}

/// Never answers.
pub struct Stalled;

impl Confirm for Stalled {
    fn confirm(&self, _action: &str, _target: &str) -> CmdletResult<bool> {
        loop {
            std::thread::park();
        }
    }
}

pub fn test_context(api: Arc<RecordingApi>) -> RuntimeContext {
    RuntimeContext {
        api_client: api,
        config: RuntimeConfig {
            format: OutputFormat::Json,
            confirm_threshold: ConfirmImpact::Medium,
            endpoint: TEST_ENDPOINT.to_string(),
            region: TEST_REGION.to_string(),
            command_defaults: BTreeMap::new(),
        },
        output_file: Box::pin(tokio::io::sink()),
        confirmer: Arc::new(AssumeYes),
        cancel: CancellationToken::new(),
    }
}

/// Parses one command line for `op` the way the binary does.
pub fn parse<O: Operation>(op: &O, args: &[&str]) -> Invocation {
    let descriptor = op.descriptor();
    let matches = descriptor
        .clap_command()
        .try_get_matches_from(std::iter::once(descriptor.command_name()).chain(args.iter().copied()))
        .expect("command line should parse");
    Invocation::from_matches(descriptor, &matches).expect("parameters should bind")
}
