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

use cmdlet::CmdletError;
use rpc::ApiError;
use serde::Serialize;

use crate::cfg::config::ConfigError;

pub type CliResult<T> = Result<T, CliError>;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_CANCELLED: u8 = 130;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(
        "{message} (endpoint: {endpoint}, region: {region}). Check the --endpoint and --region \
         settings and that the host name resolves from this machine."
    )]
    EndpointResolution {
        message: String,
        endpoint: String,
        region: String,
        #[source]
        source: ApiError,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Cmdlet(#[from] CmdletError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("Could not read --input-json from {path}: {error}")]
    PipelineRead { path: String, error: std::io::Error },

    #[error("--input-json from {path} is not valid JSON: {error}")]
    PipelineJson {
        path: String,
        error: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Unknown command {0}")]
    UnknownCommand(String),

    #[error("{0} was cancelled")]
    Cancelled(String),

    #[error("Reading stdin for {0} failed: the reader thread stopped")]
    StdinReader(String),
}

/// The structured form of an error, written to stderr as one JSON line.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorRecord {
    pub error_id: String,
    pub category: &'static str,
    pub message: String,
    pub target: Option<String>,
}

impl CliError {
    pub fn is_usage(&self) -> bool {
        match self {
            CliError::Cmdlet(e) => e.is_usage(),
            CliError::Usage(_)
            | CliError::PipelineRead { .. }
            | CliError::PipelineJson { .. }
            | CliError::UnknownCommand(_) => true,
            _ => false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            CliError::Api(ApiError::Cancelled(_)) | CliError::Cancelled(_)
        )
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_cancelled() {
            EXIT_CANCELLED
        } else if self.is_usage() {
            EXIT_USAGE
        } else {
            EXIT_FAILURE
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            _ if self.is_cancelled() => "OperationStopped",
            _ if self.is_usage() => "InvalidArgument",
            CliError::EndpointResolution { .. } => "ConnectionError",
            CliError::Api(ApiError::Network { .. }) => "ConnectionError",
            CliError::Api(ApiError::Timeout { .. }) => "OperationTimeout",
            CliError::Api(ApiError::Service { .. }) => "InvalidOperation",
            CliError::Api(_) => "InvalidResult",
            CliError::Cmdlet(CmdletError::FieldNotFound { .. }) => "InvalidResult",
            CliError::Cmdlet(CmdletError::FileRead { .. }) => "ReadError",
            CliError::Config(_) => "InvalidData",
            CliError::Output(_) => "WriteError",
            CliError::StdinReader(_) => "ReadError",
            _ => "NotSpecified",
        }
    }

    pub fn error_id(&self) -> String {
        match self {
            CliError::EndpointResolution { .. } => "EndpointResolution".to_string(),
            CliError::Api(ApiError::Service { code, .. }) => code.clone(),
            CliError::Api(ApiError::Cancelled(_)) | CliError::Cancelled(_) => {
                "Cancelled".to_string()
            }
            CliError::Api(_) => "ApiError".to_string(),
            CliError::Cmdlet(CmdletError::ConflictingSelector) => "ConflictingSelector".to_string(),
            CliError::Cmdlet(CmdletError::InvalidSelector { .. }) => "InvalidSelector".to_string(),
            CliError::Cmdlet(CmdletError::TypeCoercion { .. }) => "TypeCoercion".to_string(),
            CliError::Cmdlet(CmdletError::FieldNotFound { .. }) => "FieldNotFound".to_string(),
            CliError::Cmdlet(CmdletError::ConfirmationUnavailable { .. }) => {
                "ConfirmationUnavailable".to_string()
            }
            CliError::Cmdlet(_) => "CmdletError".to_string(),
            CliError::Config(_) => "ConfigError".to_string(),
            CliError::Usage(_) | CliError::UnknownCommand(_) => "Usage".to_string(),
            CliError::PipelineRead { .. } | CliError::PipelineJson { .. } => {
                "PipelineInput".to_string()
            }
            CliError::Json(_) => "Json".to_string(),
            CliError::Output(_) => "Output".to_string(),
            CliError::StdinReader(_) => "StdinReader".to_string(),
        }
    }

    pub fn record(&self, target: Option<&str>) -> ErrorRecord {
        ErrorRecord {
            error_id: self.error_id(),
            category: self.category(),
            message: self.to_string(),
            target: target.map(str::to_string),
        }
    }

    /// Adds endpoint context to name resolution failures. Everything else
    /// passes through unchanged.
    pub fn from_api(error: ApiError, endpoint: &str, region: &str) -> Self {
        if error.is_name_resolution() {
            CliError::EndpointResolution {
                message: error.to_string(),
                endpoint: endpoint.to_string(),
                region: region.to_string(),
                source: error,
            }
        } else {
            CliError::Api(error)
        }
    }
}
