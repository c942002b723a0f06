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

const ROUTING: &str = "DeploymentConfig_BlueGreenUpdatePolicy_TrafficRoutingConfiguration";
const POLICY: &str = "DeploymentConfig_BlueGreenUpdatePolicy";

fn capacity_size(p: &ParameterSet, node: &str) -> CmdletResult<Option<CapacitySize>> {
    Ok(CapacitySize {
        size_type: p.string(&format!("{ROUTING}_{node}_Type"))?,
        value: p.int(&format!("{ROUTING}_{node}_Value"))?,
    }
    .collapse())
}

fn deployment_config(p: &ParameterSet) -> CmdletResult<Option<DeploymentConfig>> {
    let traffic_routing_configuration = TrafficRoutingConfig {
        routing_type: p.string(&format!("{ROUTING}_Type"))?,
        wait_interval_in_seconds: p.int(&format!("{ROUTING}_WaitIntervalInSecond"))?,
        canary_size: capacity_size(p, "CanarySize")?,
        linear_step_size: capacity_size(p, "LinearStepSize")?,
    }
    .collapse();
    let blue_green_update_policy = BlueGreenUpdatePolicy {
        traffic_routing_configuration,
        termination_wait_in_seconds: p.int(&format!("{POLICY}_TerminationWaitInSecond"))?,
        maximum_execution_timeout_in_seconds: p
            .int(&format!("{POLICY}_MaximumExecutionTimeoutInSecond"))?,
    }
    .collapse();
    let auto_rollback_configuration = AutoRollbackConfig {
        alarms: p.structure("DeploymentConfig_AutoRollbackConfiguration_Alarm")?,
    }
    .collapse();

    Ok(DeploymentConfig {
        blue_green_update_policy,
        auto_rollback_configuration,
    }
    .collapse())
}

pub struct CreateEndpoint;

#[async_trait::async_trait]
impl Operation for CreateEndpoint {
    type Request = CreateEndpointRequest;
    type Response = CreateEndpointResponse;

    fn descriptor(&self) -> &'static CommandDescriptor {
        &args::CREATE
    }

    fn build(&self, p: &ParameterSet) -> CmdletResult<CreateEndpointRequest> {
        Ok(CreateEndpointRequest {
            endpoint_name: p.string("EndpointName")?,
            endpoint_config_name: p.string("EndpointConfigName")?,
            deployment_config: deployment_config(p)?,
            tags: p.map("Tag")?.map(Tag::from_map),
        })
    }

    async fn call(
        &self,
        api: &dyn MlPlaneApi,
        request: CreateEndpointRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateEndpointResponse, ApiError> {
        api.create_endpoint(request, cancel).await
    }
}

pub struct DeleteEndpoint;

#[async_trait::async_trait]
impl Operation for DeleteEndpoint {
    type Request = DeleteEndpointRequest;
    type Response = DeleteEndpointResponse;

    fn descriptor(&self) -> &'static CommandDescriptor {
        &args::DELETE
    }

    fn build(&self, p: &ParameterSet) -> CmdletResult<DeleteEndpointRequest> {
        Ok(DeleteEndpointRequest {
            endpoint_name: p.string("EndpointName")?,
        })
    }

    async fn call(
        &self,
        api: &dyn MlPlaneApi,
        request: DeleteEndpointRequest,
        cancel: &CancellationToken,
    ) -> Result<DeleteEndpointResponse, ApiError> {
        api.delete_endpoint(request, cancel).await
    }
}
