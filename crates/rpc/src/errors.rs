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

use reqwest::StatusCode;

/// ApiError enumerates failures of a single remote operation.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Could not resolve host for {endpoint}: {source}")]
    NameResolution {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Network error talking to {endpoint}: {source}")]
    Network {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("Request to {endpoint} timed out: {source}")]
    Timeout {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("{operation} failed with HTTP {status}: {code}: {message}")]
    Service {
        operation: String,
        status: StatusCode,
        code: String,
        message: String,
    },

    #[error("Could not deserialize {operation} response. Body: {body}. {source}")]
    JsonDeserialize {
        operation: String,
        body: String,
        source: serde_json::Error,
    },

    #[error("Could not serialize {operation} request: {source}")]
    JsonSerialize {
        operation: String,
        source: serde_json::Error,
    },

    #[error("Invalid endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    #[error("HTTP client could not be built: {0}")]
    ClientBuild(reqwest::Error),

    #[error("{0} was cancelled")]
    Cancelled(String),
}

impl ApiError {
    pub fn is_name_resolution(&self) -> bool {
        matches!(self, ApiError::NameResolution { .. })
    }
}

// Hyper reports resolver failures as a connect error whose source chain carries
// a "dns error" (or the libc "failed to lookup address" text on some platforms).
pub(crate) fn is_name_resolution_failure(err: &reqwest::Error) -> bool {
    if !err.is_connect() {
        return false;
    }
    let mut source: Option<&(dyn std::error::Error + 'static)> = std::error::Error::source(err);
    while let Some(e) = source {
        let text = e.to_string().to_ascii_lowercase();
        if text.contains("dns error")
            || text.contains("failed to lookup address")
            || text.contains("name or service not known")
            || text.contains("no such host")
        {
            return true;
        }
        source = e.source();
    }
    false
}
