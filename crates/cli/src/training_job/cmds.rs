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

use cmdlet::{CmdletResult, CommandDescriptor, ParameterSet};
use rpc::model::*;
use rpc::{ApiError, Collapse, MlPlaneApi};
use tokio_util::sync::CancellationToken;

use super::args;
use crate::invoke::Operation;
use crate::model::cmds::vpc_config;

pub struct CreateTrainingJob;

#[async_trait::async_trait]
impl Operation for CreateTrainingJob {
    type Request = CreateTrainingJobRequest;
    type Response = CreateTrainingJobResponse;

    fn descriptor(&self) -> &'static CommandDescriptor {
        &args::CREATE
    }

    fn build(&self, p: &ParameterSet) -> CmdletResult<CreateTrainingJobRequest> {
        let algorithm_specification = AlgorithmSpecification {
            training_image: p.string("AlgorithmSpecification_TrainingImage")?,
            algorithm_name: p.string("AlgorithmSpecification_AlgorithmName")?,
            training_input_mode: p.string("AlgorithmSpecification_TrainingInputMode")?,
            metric_definitions: p.structure("AlgorithmSpecification_MetricDefinition")?,
        }
        .collapse();
        let output_data_config = OutputDataConfig {
            kms_key_id: p.string("OutputDataConfig_KmsKeyId")?,
            s3_output_path: p.string("OutputDataConfig_S3OutputPath")?,
            compression_type: p.string("OutputDataConfig_CompressionType")?,
        }
        .collapse();
        let resource_config = ResourceConfig {
            instance_type: p.string("ResourceConfig_InstanceType")?,
            instance_count: p.int("ResourceConfig_InstanceCount")?,
            volume_size_in_gb: p.int("ResourceConfig_VolumeSizeInGB")?,
            volume_kms_key_id: p.string("ResourceConfig_VolumeKmsKeyId")?,
            keep_alive_period_in_seconds: p.int("ResourceConfig_KeepAlivePeriodInSecond")?,
        }
        .collapse();
        let stopping_condition = StoppingCondition {
            max_runtime_in_seconds: p.int("StoppingCondition_MaxRuntimeInSecond")?,
            max_wait_time_in_seconds: p.int("StoppingCondition_MaxWaitTimeInSecond")?,
            max_pending_time_in_seconds: p.int("StoppingCondition_MaxPendingTimeInSecond")?,
        }
        .collapse();
        let checkpoint_config = CheckpointConfig {
            s3_uri: p.string("CheckpointConfig_S3Uri")?,
            local_path: p.string("CheckpointConfig_LocalPath")?,
        }
        .collapse();

        Ok(CreateTrainingJobRequest {
            training_job_name: p.string("TrainingJobName")?,
            role_arn: p.string("RoleArn")?,
            hyper_parameters: p.map("HyperParameter")?,
            algorithm_specification,
            input_data_config: p.structure("InputDataConfig")?,
            output_data_config,
            resource_config,
            stopping_condition,
            checkpoint_config,
            vpc_config: vpc_config(p)?,
            environment: p.map("Environment")?,
            enable_network_isolation: p.bool("EnableNetworkIsolation")?,
            enable_managed_spot_training: p.bool("EnableManagedSpotTraining")?,
            tags: p.map("Tag")?.map(Tag::from_map),
        })
    }

    async fn call(
        &self,
        api: &dyn MlPlaneApi,
        request: CreateTrainingJobRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateTrainingJobResponse, ApiError> {
        api.create_training_job(request, cancel).await
    }
}

pub struct DescribeTrainingJob;

#[async_trait::async_trait]
impl Operation for DescribeTrainingJob {
    type Request = DescribeTrainingJobRequest;
    type Response = DescribeTrainingJobResponse;

    fn descriptor(&self) -> &'static CommandDescriptor {
        &args::DESCRIBE
    }

    fn build(&self, p: &ParameterSet) -> CmdletResult<DescribeTrainingJobRequest> {
        Ok(DescribeTrainingJobRequest {
            training_job_name: p.string("TrainingJobName")?,
        })
    }

    async fn call(
        &self,
        api: &dyn MlPlaneApi,
        request: DescribeTrainingJobRequest,
        cancel: &CancellationToken,
    ) -> Result<DescribeTrainingJobResponse, ApiError> {
        api.describe_training_job(request, cancel).await
    }
}

pub struct StopTrainingJob;

#[async_trait::async_trait]
impl Operation for StopTrainingJob {
    type Request = StopTrainingJobRequest;
    type Response = StopTrainingJobResponse;

    fn descriptor(&self) -> &'static CommandDescriptor {
        &args::STOP
    }

    fn build(&self, p: &ParameterSet) -> CmdletResult<StopTrainingJobRequest> {
        Ok(StopTrainingJobRequest {
            training_job_name: p.string("TrainingJobName")?,
        })
    }

    async fn call(
        &self,
        api: &dyn MlPlaneApi,
        request: StopTrainingJobRequest,
        cancel: &CancellationToken,
    ) -> Result<StopTrainingJobResponse, ApiError> {
        api.stop_training_job(request, cancel).await
    }
}
