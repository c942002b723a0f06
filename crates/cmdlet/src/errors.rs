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

pub type CmdletResult<T> = Result<T, CmdletError>;

/// CmdletError covers everything that can go wrong on the client side of an
/// invocation, before the request is sent or after the response arrived.
#[derive(thiserror::Error, Debug)]
pub enum CmdletError {
    #[error("--select and --pass-thru cannot be used together")]
    ConflictingSelector,

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Command {command} has no parameter named {name}")]
    UnknownParameter { command: String, name: String },

    #[error("Cannot convert value '{value}' of parameter {param} to {expected}")]
    TypeCoercion {
        param: String,
        expected: &'static str,
        value: String,
    },

    #[error("Response has no field '{path}'")]
    FieldNotFound { path: String },

    #[error("Could not read {param} from {path}: {error}")]
    FileRead {
        param: String,
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Invalid pipeline input: {0}")]
    PipelineInput(String),

    #[error(
        "{action} on \"{target}\" needs confirmation but stdin is not a terminal; pass --force to proceed"
    )]
    ConfirmationUnavailable { action: String, target: String },

    #[error("Confirmation prompt failed: {0}")]
    Prompt(std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CmdletError {
    /// Usage errors are the caller's fault and are reported before any remote call.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            CmdletError::ConflictingSelector
                | CmdletError::InvalidSelector { .. }
                | CmdletError::UnknownParameter { .. }
                | CmdletError::TypeCoercion { .. }
                | CmdletError::PipelineInput(_)
                | CmdletError::ConfirmationUnavailable { .. }
        )
    }
}
