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
use std::pin::Pin;
use std::sync::Arc;

use cmdlet::{Confirm, ConfirmImpact, OutputFormat, StdinConfirm};
use rpc::{ApiConfig, MlPlaneApi, MlPlaneApiClient};
use tokio_util::sync::CancellationToken;

use crate::cfg::cli_options::GlobalOptions;
use crate::cfg::config::{CommandDefaults, Config};
use crate::errors::CliResult;

// RuntimeContext is context passed to all command group
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub api_client: Arc<dyn MlPlaneApi>,
    pub config: RuntimeConfig,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite + Send>>,
    pub confirmer: Arc<dyn Confirm>,
    pub cancel: CancellationToken,
}

// RuntimeConfig contains runtime configuration parameters merged
// from the config file and CLI options. This should contain the
// entirety of any options that need to be leveraged by any
// downstream command handler.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub format: OutputFormat,
    pub confirm_threshold: ConfirmImpact,
    pub endpoint: String,
    pub region: String,
    pub command_defaults: CommandDefaults,
}

impl RuntimeConfig {
    // Command line options override the corresponding config file settings.
    pub fn merge(options: &GlobalOptions, config: Config) -> (Self, ApiSettings) {
        let endpoint = options.endpoint.clone().unwrap_or(config.endpoint);
        let region = options.region.clone().unwrap_or(config.region);
        let runtime = Self {
            format: options.format.unwrap_or(config.output_format),
            confirm_threshold: options.confirm_threshold.unwrap_or(config.confirm_threshold),
            endpoint: endpoint.clone(),
            region: region.clone(),
            command_defaults: config.defaults,
        };
        let api = ApiSettings {
            endpoint,
            region,
            service_target_prefix: config.service_target_prefix,
            api_token: options.api_token.clone().or(config.api_token),
            timeout: config.timeout,
        };
        (runtime, api)
    }

    /// Configured parameter defaults for one command, e.g. `"model create"`.
    pub fn defaults_for(&self, command: &str) -> BTreeMap<String, serde_json::Value> {
        self.command_defaults
            .get(command)
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub endpoint: String,
    pub region: String,
    pub service_target_prefix: String,
    pub api_token: Option<String>,
    pub timeout: std::time::Duration,
}

impl ApiSettings {
    pub fn into_api_config(self) -> CliResult<ApiConfig> {
        let mut api_config = ApiConfig::new(&self.endpoint, &self.region)?;
        api_config.service_target_prefix = self.service_target_prefix;
        api_config.api_token = self.api_token;
        api_config.timeout = self.timeout;
        Ok(api_config)
    }
}

impl RuntimeContext {
    pub fn new(
        options: &GlobalOptions,
        config: Config,
        cancel: CancellationToken,
    ) -> CliResult<Self> {
        let (runtime, api) = RuntimeConfig::merge(options, config);
        let api_client = MlPlaneApiClient::new(api.into_api_config()?)?;
        Ok(Self {
            api_client: Arc::new(api_client),
            config: runtime,
            output_file: Box::pin(tokio::io::stdout()),
            confirmer: Arc::new(StdinConfirm),
            cancel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_override_config() {
        let options = GlobalOptions {
            endpoint: Some("http://override:9000".to_string()),
            format: Some(OutputFormat::AsciiTable),
            ..Default::default()
        };
        let config = Config {
            region: "eu-central-1".to_string(),
            api_token: Some("from-file".to_string()),
            ..Default::default()
        };
        let (runtime, api) = RuntimeConfig::merge(&options, config);
        assert_eq!(runtime.endpoint, "http://override:9000");
        assert_eq!(runtime.region, "eu-central-1");
        assert_eq!(runtime.format, OutputFormat::AsciiTable);
        assert_eq!(runtime.confirm_threshold, ConfirmImpact::Medium);
        assert_eq!(api.api_token.as_deref(), Some("from-file"));

        let api_config = api.into_api_config().unwrap();
        assert_eq!(api_config.endpoint.as_str(), "http://override:9000/");
    }

    #[test]
    fn defaults_are_looked_up_by_full_command_name() {
        let config = Config {
            defaults: CommandDefaults::from([(
                "model create".to_string(),
                BTreeMap::from([("ExecutionRoleArn".to_string(), serde_json::json!("arn:role/r"))]),
            )]),
            ..Default::default()
        };
        let (runtime, _) = RuntimeConfig::merge(&GlobalOptions::default(), config);
        assert_eq!(
            runtime.defaults_for("model create").get("ExecutionRoleArn"),
            Some(&serde_json::json!("arn:role/r"))
        );
        assert!(runtime.defaults_for("model delete").is_empty());
    }

    #[test]
    fn invalid_endpoint_is_an_error() {
        let options = GlobalOptions {
            endpoint: Some("not a url".to_string()),
            ..Default::default()
        };
        let (_, api) = RuntimeConfig::merge(&options, Config::default());
        assert!(api.into_api_config().is_err());
    }
}
