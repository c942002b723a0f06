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

pub struct CreateModel;

#[async_trait::async_trait]
impl Operation for CreateModel {
    type Request = CreateModelRequest;
    type Response = CreateModelResponse;

    fn descriptor(&self) -> &'static CommandDescriptor {
        &args::CREATE
    }

    fn build(&self, p: &ParameterSet) -> CmdletResult<CreateModelRequest> {
        let repository_auth_config = RepositoryAuthConfig {
            repository_credentials_provider_arn: p.string(
                "PrimaryContainer_ImageConfig_RepositoryAuthConfig_RepositoryCredentialsProviderArn",
            )?,
        }
        .collapse();
        let image_config = ImageConfig {
            repository_access_mode: p.string("PrimaryContainer_ImageConfig_RepositoryAccessMode")?,
            repository_auth_config,
        }
        .collapse();
        let primary_container = ContainerDefinition {
            container_hostname: p.string("PrimaryContainer_ContainerHostname")?,
            image: p.string("PrimaryContainer_Image")?,
            image_config,
            mode: p.string("PrimaryContainer_Mode")?,
            model_data_url: p.string("PrimaryContainer_ModelDataUrl")?,
            model_package_name: p.string("PrimaryContainer_ModelPackageName")?,
            environment: p.map("PrimaryContainer_Environment")?,
        }
        .collapse();

        Ok(CreateModelRequest {
            model_name: p.string("ModelName")?,
            primary_container,
            execution_role_arn: p.string("ExecutionRoleArn")?,
            vpc_config: vpc_config(p)?,
            enable_network_isolation: p.bool("EnableNetworkIsolation")?,
            tags: p.map("Tag")?.map(Tag::from_map),
        })
    }

    async fn call(
        &self,
        api: &dyn MlPlaneApi,
        request: CreateModelRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateModelResponse, ApiError> {
        api.create_model(request, cancel).await
    }
}

pub struct DescribeModel;

#[async_trait::async_trait]
impl Operation for DescribeModel {
    type Request = DescribeModelRequest;
    type Response = DescribeModelResponse;

    fn descriptor(&self) -> &'static CommandDescriptor {
        &args::DESCRIBE
    }

    fn build(&self, p: &ParameterSet) -> CmdletResult<DescribeModelRequest> {
        Ok(DescribeModelRequest {
            model_name: p.string("ModelName")?,
        })
    }

    async fn call(
        &self,
        api: &dyn MlPlaneApi,
        request: DescribeModelRequest,
        cancel: &CancellationToken,
    ) -> Result<DescribeModelResponse, ApiError> {
        api.describe_model(request, cancel).await
    }
}

pub struct DeleteModel;

#[async_trait::async_trait]
impl Operation for DeleteModel {
    type Request = DeleteModelRequest;
    type Response = DeleteModelResponse;

    fn descriptor(&self) -> &'static CommandDescriptor {
        &args::DELETE
    }

    fn build(&self, p: &ParameterSet) -> CmdletResult<DeleteModelRequest> {
        Ok(DeleteModelRequest {
            model_name: p.string("ModelName")?,
        })
    }

    async fn call(
        &self,
        api: &dyn MlPlaneApi,
        request: DeleteModelRequest,
        cancel: &CancellationToken,
    ) -> Result<DeleteModelResponse, ApiError> {
        api.delete_model(request, cancel).await
    }
}

/// Shared by every command that takes `VpcConfig_SecurityGroupId` and `VpcConfig_Subnet`.
pub(crate) fn vpc_config(p: &ParameterSet) -> CmdletResult<Option<VpcConfig>> {
    Ok(VpcConfig {
        security_group_ids: p.list("VpcConfig_SecurityGroupId")?,
        subnets: p.list("VpcConfig_Subnet")?,
    }
    .collapse())
}
