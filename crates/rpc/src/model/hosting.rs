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

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{Extra, Tag, VpcConfig};
use crate::collapsible;

/////////////////////////////////////////////////////////////////////////////
// Models

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateModelRequest {
    pub model_name: Option<String>,
    pub primary_container: Option<ContainerDefinition>,
    pub execution_role_arn: Option<String>,
    pub vpc_config: Option<VpcConfig>,
    pub enable_network_isolation: Option<bool>,
    pub tags: Option<Vec<Tag>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerDefinition {
    pub container_hostname: Option<String>,
    pub image: Option<String>,
    pub image_config: Option<ImageConfig>,
    pub mode: Option<String>,
    pub model_data_url: Option<String>,
    pub model_package_name: Option<String>,
    pub environment: Option<BTreeMap<String, String>>,
}
collapsible!(ContainerDefinition {
    container_hostname,
    image,
    image_config,
    mode,
    model_data_url,
    model_package_name,
    environment,
});

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageConfig {
    pub repository_access_mode: Option<String>,
    pub repository_auth_config: Option<RepositoryAuthConfig>,
}
collapsible!(ImageConfig {
    repository_access_mode,
    repository_auth_config
});

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RepositoryAuthConfig {
    pub repository_credentials_provider_arn: Option<String>,
}
collapsible!(RepositoryAuthConfig {
    repository_credentials_provider_arn
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateModelResponse {
    pub model_arn: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeModelRequest {
    pub model_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeModelResponse {
    pub model_name: Option<String>,
    pub model_arn: Option<String>,
    pub primary_container: Option<ContainerDefinition>,
    pub execution_role_arn: Option<String>,
    pub vpc_config: Option<VpcConfig>,
    pub enable_network_isolation: Option<bool>,
    pub creation_time: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteModelRequest {
    pub model_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteModelResponse {
    #[serde(flatten)]
    pub extra: Extra,
}

/////////////////////////////////////////////////////////////////////////////
// Endpoints

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateEndpointRequest {
    pub endpoint_name: Option<String>,
    pub endpoint_config_name: Option<String>,
    pub deployment_config: Option<DeploymentConfig>,
    pub tags: Option<Vec<Tag>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentConfig {
    pub blue_green_update_policy: Option<BlueGreenUpdatePolicy>,
    pub auto_rollback_configuration: Option<AutoRollbackConfig>,
}
collapsible!(DeploymentConfig {
    blue_green_update_policy,
    auto_rollback_configuration
});

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlueGreenUpdatePolicy {
    pub traffic_routing_configuration: Option<TrafficRoutingConfig>,
    pub termination_wait_in_seconds: Option<i64>,
    pub maximum_execution_timeout_in_seconds: Option<i64>,
}
collapsible!(BlueGreenUpdatePolicy {
    traffic_routing_configuration,
    termination_wait_in_seconds,
    maximum_execution_timeout_in_seconds,
});

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrafficRoutingConfig {
    #[serde(rename = "Type")]
    pub routing_type: Option<String>,
    pub wait_interval_in_seconds: Option<i64>,
    pub canary_size: Option<CapacitySize>,
    pub linear_step_size: Option<CapacitySize>,
}
collapsible!(TrafficRoutingConfig {
    routing_type,
    wait_interval_in_seconds,
    canary_size,
    linear_step_size,
});

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CapacitySize {
    #[serde(rename = "Type")]
    pub size_type: Option<String>,
    pub value: Option<i64>,
}
collapsible!(CapacitySize { size_type, value });

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoRollbackConfig {
    pub alarms: Option<Vec<Alarm>>,
}
collapsible!(AutoRollbackConfig { alarms });

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Alarm {
    pub alarm_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateEndpointResponse {
    pub endpoint_arn: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteEndpointRequest {
    pub endpoint_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteEndpointResponse {
    #[serde(flatten)]
    pub extra: Extra,
}
