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

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cmdlet::{ConfirmImpact, OutputFormat};
use duration_str::deserialize_duration;
use rpc::client::{DEFAULT_TARGET_PREFIX, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize, Serializer};

/// Parameter defaults per command, keyed by the full command path
/// (`"model create"`), then by parameter name or alias.
pub type CommandDefaults = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
/// Configuration for mlplane. Fields are documented as comments in the output of [`Config::into_annotated_config_file`].
pub struct Config {
    #[serde(default = "Defaults::endpoint")]
    pub endpoint: String,
    #[serde(default = "Defaults::region")]
    pub region: String,
    #[serde(default = "Defaults::service_target_prefix")]
    pub service_target_prefix: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(
        default = "Defaults::timeout",
        serialize_with = "serialize_duration",
        deserialize_with = "deserialize_duration"
    )]
    pub timeout: Duration,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub confirm_threshold: ConfirmImpact,
    #[serde(default)]
    pub defaults: CommandDefaults,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let cfg = std::fs::read_to_string(path).map_err(|error| ConfigError::CouldNotRead {
            path: path.to_string_lossy().to_string(),
            error,
        })?;
        toml::from_str::<Self>(&cfg).map_err(|error| ConfigError::InvalidToml {
            path: path.to_string_lossy().to_string(),
            error,
        })
    }

    /// Loads the explicitly given file, or the per-user file when it exists,
    /// or falls back to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Defaults::user_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn into_annotated_config_file(self) -> String {
        let Self {
            endpoint,
            region,
            service_target_prefix,
            api_token: _,
            timeout,
            output_format,
            confirm_threshold,
            defaults: _,
        } = self;
        let timeout = format!("{}s", timeout.as_secs());
        let output_format = match output_format {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::AsciiTable => "ascii-table",
        };
        let confirm_threshold = match confirm_threshold {
            ConfirmImpact::None => "none",
            ConfirmImpact::Low => "low",
            ConfirmImpact::Medium => "medium",
            ConfirmImpact::High => "high",
        };

        format!(
            r#"
#####
## This is a default config file for mlplane. Everything in this file is optional: Any
## non-comment line in this file simply represents default values. Commented lines with a single `#`
## represent examples for optional configuration which is not part of the default config.
#####

## Control-plane API endpoint. Overridden by --endpoint or MLPLANE_ENDPOINT.
endpoint = {endpoint:?}

## Region the endpoint serves. Overridden by --region or MLPLANE_REGION.
region = {region:?}

## Prefix of the operation target header (`<prefix>.<Operation>`)
service_target_prefix = {service_target_prefix:?}

## Bearer token sent with every request. Prefer MLPLANE_API_TOKEN over storing it here.
# api_token = "<token>"

## Per-request timeout
timeout = {timeout:?}

## Output format: "json", "yaml" or "ascii-table"
output_format = {output_format:?}

## Commands whose impact is at or above this level ask for confirmation unless --force is given.
## One of "none", "low", "medium" or "high". Read-only commands never ask.
confirm_threshold = {confirm_threshold:?}

## Parameter defaults per command. Values given on the command line or through --input-json win.
# [defaults."model create"]
# ExecutionRoleArn = "arn:example:iam::123456789012:role/inference"
#
# [defaults."training-job create"]
# ResourceConfig_InstanceType = "ml.m5.xlarge"
# ResourceConfig_InstanceCount = 1
"#
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Defaults::endpoint(),
            region: Defaults::region(),
            service_target_prefix: Defaults::service_target_prefix(),
            api_token: None,
            timeout: Defaults::timeout(),
            output_format: OutputFormat::default(),
            confirm_threshold: ConfirmImpact::default(),
            defaults: CommandDefaults::default(),
        }
    }
}

pub struct Defaults;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file at {path}: {error}")]
    CouldNotRead { path: String, error: std::io::Error },
    #[error("TOML error reading config file at {path}: {error}")]
    InvalidToml {
        path: String,
        error: toml::de::Error,
    },
}

impl Defaults {
    pub fn endpoint() -> String {
        "http://127.0.0.1:8600".to_string()
    }

    pub fn region() -> String {
        "us-east-1".to_string()
    }

    pub fn service_target_prefix() -> String {
        DEFAULT_TARGET_PREFIX.to_string()
    }

    pub fn timeout() -> Duration {
        DEFAULT_TIMEOUT
    }

    pub fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .map(|home| home.join(".config").join("mlplane").join("config.toml"))
    }
}

fn serialize_duration<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{}s", d.as_secs()))
}
