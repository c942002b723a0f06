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

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::errors::{ApiError, is_name_resolution_failure};
use crate::model::*;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_TARGET_PREFIX: &str = "MlPlane";

const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const TARGET_HEADER: &str = "x-amz-target";
const USER_AGENT_VALUE: &str = concat!("mlplane/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`MlPlaneApiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub endpoint: Url,
    pub region: String,
    pub service_target_prefix: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(endpoint: &str, region: &str) -> Result<Self, ApiError> {
        let endpoint = Url::parse(endpoint).map_err(|source| ApiError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        Ok(Self {
            endpoint,
            region: region.to_string(),
            service_target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

/// MlPlaneApi is the control-plane surface the commands are written against.
/// Every call takes a cancellation token; implementations must stop and return
/// [`ApiError::Cancelled`] once it fires.
#[async_trait::async_trait]
pub trait MlPlaneApi: Send + Sync {
    async fn create_model(
        &self,
        req: CreateModelRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateModelResponse, ApiError>;
    async fn describe_model(
        &self,
        req: DescribeModelRequest,
        cancel: &CancellationToken,
    ) -> Result<DescribeModelResponse, ApiError>;
    async fn delete_model(
        &self,
        req: DeleteModelRequest,
        cancel: &CancellationToken,
    ) -> Result<DeleteModelResponse, ApiError>;

    async fn create_training_job(
        &self,
        req: CreateTrainingJobRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateTrainingJobResponse, ApiError>;
    async fn describe_training_job(
        &self,
        req: DescribeTrainingJobRequest,
        cancel: &CancellationToken,
    ) -> Result<DescribeTrainingJobResponse, ApiError>;
    async fn stop_training_job(
        &self,
        req: StopTrainingJobRequest,
        cancel: &CancellationToken,
    ) -> Result<StopTrainingJobResponse, ApiError>;

    async fn create_endpoint(
        &self,
        req: CreateEndpointRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateEndpointResponse, ApiError>;
    async fn delete_endpoint(
        &self,
        req: DeleteEndpointRequest,
        cancel: &CancellationToken,
    ) -> Result<DeleteEndpointResponse, ApiError>;

    async fn create_notebook_instance_lifecycle_config(
        &self,
        req: CreateNotebookInstanceLifecycleConfigRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateNotebookInstanceLifecycleConfigResponse, ApiError>;
}

/// HTTP implementation of [`MlPlaneApi`]. Each operation is a single POST;
/// nothing is retried here.
#[derive(Debug, Clone)]
pub struct MlPlaneApiClient {
    config: ApiConfig,
    client: HttpClient,
}

impl MlPlaneApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::ClientBuild)?;
        Ok(Self { config, client })
    }

    async fn call<B, T>(
        &self,
        operation: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ::std::fmt::Debug + Sync,
        T: DeserializeOwned,
    {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ApiError::Cancelled(operation.to_string())),
            res = self.send(operation, body) => res,
        }
    }

    async fn send<B, T>(&self, operation: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ::std::fmt::Debug + Sync,
        T: DeserializeOwned,
    {
        let endpoint = self.config.endpoint.to_string();
        let body_enc = serde_json::to_vec(body).map_err(|source| ApiError::JsonSerialize {
            operation: operation.to_string(),
            source,
        })?;
        debug!("TX {operation} {endpoint} {body:?}");

        let mut req_b = self
            .client
            .post(self.config.endpoint.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE))
            .header(
                TARGET_HEADER,
                format!("{}.{operation}", self.config.service_target_prefix),
            );
        if let Some(token) = self.config.api_token.as_ref() {
            req_b = req_b.bearer_auth(token);
        }

        let response = req_b
            .body(body_enc)
            .send()
            .await
            .map_err(|e| transport_error(&endpoint, e))?;
        let status = response.status();
        let response_buffer = response
            .bytes()
            .await
            .map_err(|e| transport_error(&endpoint, e))?;
        let response_body = String::from_utf8_lossy(&response_buffer).to_string();
        debug!("RX {status} {}", truncate(&response_body, 1500));

        if !status.is_success() {
            return Err(service_error(operation, status, &response_body));
        }

        // Operations without output answer with an empty body.
        let text = if response_body.trim().is_empty() {
            "{}"
        } else {
            response_body.as_str()
        };
        serde_json::from_str(text).map_err(|source| ApiError::JsonDeserialize {
            operation: operation.to_string(),
            body: response_body.clone(),
            source,
        })
    }
}

macro_rules! operations {
    ($($method:ident($req:ty) -> $resp:ty => $operation:literal;)+) => {
        #[async_trait::async_trait]
        impl MlPlaneApi for MlPlaneApiClient {
            $(
                async fn $method(
                    &self,
                    req: $req,
                    cancel: &CancellationToken,
                ) -> Result<$resp, ApiError> {
                    self.call($operation, &req, cancel).await
                }
            )+
        }
    };
}

operations! {
    create_model(CreateModelRequest) -> CreateModelResponse => "CreateModel";
    describe_model(DescribeModelRequest) -> DescribeModelResponse => "DescribeModel";
    delete_model(DeleteModelRequest) -> DeleteModelResponse => "DeleteModel";
    create_training_job(CreateTrainingJobRequest) -> CreateTrainingJobResponse => "CreateTrainingJob";
    describe_training_job(DescribeTrainingJobRequest) -> DescribeTrainingJobResponse => "DescribeTrainingJob";
    stop_training_job(StopTrainingJobRequest) -> StopTrainingJobResponse => "StopTrainingJob";
    create_endpoint(CreateEndpointRequest) -> CreateEndpointResponse => "CreateEndpoint";
    delete_endpoint(DeleteEndpointRequest) -> DeleteEndpointResponse => "DeleteEndpoint";
    create_notebook_instance_lifecycle_config(CreateNotebookInstanceLifecycleConfigRequest)
        -> CreateNotebookInstanceLifecycleConfigResponse => "CreateNotebookInstanceLifecycleConfig";
}

fn transport_error(endpoint: &str, source: reqwest::Error) -> ApiError {
    if is_name_resolution_failure(&source) {
        ApiError::NameResolution {
            endpoint: endpoint.to_string(),
            source: Box::new(source),
        }
    } else if source.is_timeout() {
        ApiError::Timeout {
            endpoint: endpoint.to_string(),
            source,
        }
    } else {
        ApiError::Network {
            endpoint: endpoint.to_string(),
            source,
        }
    }
}

#[derive(Deserialize, Default)]
struct ServiceErrorBody {
    #[serde(rename = "__type", alias = "code", alias = "Code")]
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

fn service_error(operation: &str, status: StatusCode, body: &str) -> ApiError {
    let parsed: ServiceErrorBody = serde_json::from_str(body).unwrap_or_default();
    // Error types can arrive namespaced, e.g. "com.example.mlplane#ValidationException".
    let code = parsed
        .code
        .map(|c| c.rsplit('#').next().unwrap_or_default().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("UnknownError")
                .replace(' ', "")
        });
    let message = parsed
        .message
        .unwrap_or_else(|| truncate(body, 500).to_string());
    ApiError::Service {
        operation: operation.to_string(),
        status,
        code,
        message,
    }
}

fn truncate(s: &str, len: usize) -> &str {
    let mut end = len.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_strips_namespace() {
        let err = service_error(
            "CreateModel",
            StatusCode::BAD_REQUEST,
            r#"{"__type":"com.example.mlplane#ValidationException","message":"ModelName is required"}"#,
        );
        match err {
            ApiError::Service { code, message, .. } => {
                assert_eq!(code, "ValidationException");
                assert_eq!(message, "ModelName is required");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn service_error_without_json_body() {
        let err = service_error("DeleteModel", StatusCode::SERVICE_UNAVAILABLE, "upstream down");
        match err {
            ApiError::Service { code, message, .. } => {
                assert_eq!(code, "ServiceUnavailable");
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        assert!(matches!(
            ApiConfig::new("not a url", "us-west-2"),
            Err(ApiError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "h");
        assert_eq!(truncate("abc", 10), "abc");
    }
}
