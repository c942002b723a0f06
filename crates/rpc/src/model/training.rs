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

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrainingJobRequest {
    pub training_job_name: Option<String>,
    pub role_arn: Option<String>,
    pub hyper_parameters: Option<BTreeMap<String, String>>,
    pub algorithm_specification: Option<AlgorithmSpecification>,
    pub input_data_config: Option<Vec<Channel>>,
    pub output_data_config: Option<OutputDataConfig>,
    pub resource_config: Option<ResourceConfig>,
    pub stopping_condition: Option<StoppingCondition>,
    pub checkpoint_config: Option<CheckpointConfig>,
    pub vpc_config: Option<VpcConfig>,
    pub environment: Option<BTreeMap<String, String>>,
    pub enable_network_isolation: Option<bool>,
    pub enable_managed_spot_training: Option<bool>,
    pub tags: Option<Vec<Tag>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlgorithmSpecification {
    pub training_image: Option<String>,
    pub algorithm_name: Option<String>,
    pub training_input_mode: Option<String>,
    pub metric_definitions: Option<Vec<MetricDefinition>>,
}
collapsible!(AlgorithmSpecification {
    training_image,
    algorithm_name,
    training_input_mode,
    metric_definitions,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDefinition {
    pub name: String,
    pub regex: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Channel {
    pub channel_name: String,
    pub data_source: Option<DataSource>,
    pub content_type: Option<String>,
    pub compression_type: Option<String>,
    pub input_mode: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSource {
    #[serde(rename = "S3DataSource")]
    pub s3_data_source: Option<S3DataSource>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3DataSource {
    #[serde(rename = "S3DataType")]
    pub s3_data_type: Option<String>,
    #[serde(rename = "S3Uri")]
    pub s3_uri: Option<String>,
    #[serde(rename = "S3DataDistributionType")]
    pub s3_data_distribution_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputDataConfig {
    pub kms_key_id: Option<String>,
    #[serde(rename = "S3OutputPath")]
    pub s3_output_path: Option<String>,
    pub compression_type: Option<String>,
}
collapsible!(OutputDataConfig {
    kms_key_id,
    s3_output_path,
    compression_type
});

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceConfig {
    pub instance_type: Option<String>,
    pub instance_count: Option<i64>,
    #[serde(rename = "VolumeSizeInGB")]
    pub volume_size_in_gb: Option<i64>,
    pub volume_kms_key_id: Option<String>,
    pub keep_alive_period_in_seconds: Option<i64>,
}
collapsible!(ResourceConfig {
    instance_type,
    instance_count,
    volume_size_in_gb,
    volume_kms_key_id,
    keep_alive_period_in_seconds,
});

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoppingCondition {
    pub max_runtime_in_seconds: Option<i64>,
    pub max_wait_time_in_seconds: Option<i64>,
    pub max_pending_time_in_seconds: Option<i64>,
}
collapsible!(StoppingCondition {
    max_runtime_in_seconds,
    max_wait_time_in_seconds,
    max_pending_time_in_seconds,
});

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckpointConfig {
    #[serde(rename = "S3Uri")]
    pub s3_uri: Option<String>,
    pub local_path: Option<String>,
}
collapsible!(CheckpointConfig { s3_uri, local_path });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrainingJobResponse {
    pub training_job_arn: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTrainingJobRequest {
    pub training_job_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTrainingJobResponse {
    pub training_job_name: Option<String>,
    pub training_job_arn: Option<String>,
    pub training_job_status: Option<String>,
    pub secondary_status: Option<String>,
    pub failure_reason: Option<String>,
    pub hyper_parameters: Option<BTreeMap<String, String>>,
    pub algorithm_specification: Option<AlgorithmSpecification>,
    pub role_arn: Option<String>,
    pub resource_config: Option<ResourceConfig>,
    pub stopping_condition: Option<StoppingCondition>,
    pub model_artifacts: Option<ModelArtifacts>,
    pub creation_time: Option<f64>,
    pub training_start_time: Option<f64>,
    pub training_end_time: Option<f64>,
    pub billable_time_in_seconds: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelArtifacts {
    #[serde(rename = "S3ModelArtifacts")]
    pub s3_model_artifacts: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopTrainingJobRequest {
    pub training_job_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopTrainingJobResponse {
    #[serde(flatten)]
    pub extra: Extra,
}
