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

use cmdlet::{CommandDescriptor, CommandGroup, ConfirmImpact, ParamSpec};

pub const TRAFFIC_ROUTING_TYPES: &[&str] = &["ALL_AT_ONCE", "CANARY", "LINEAR"];
pub const CAPACITY_SIZE_TYPES: &[&str] = &["INSTANCE_COUNT", "CAPACITY_PERCENT"];

pub static CREATE: CommandDescriptor = CommandDescriptor {
    name: "endpoint create",
    about: "Create an endpoint from an endpoint configuration",
    operation: "CreateEndpoint",
    impact: ConfirmImpact::Medium,
    primary: "EndpointName",
    default_select: "EndpointArn",
    params: &[
        ParamSpec::string("EndpointName").required(),
        ParamSpec::string("EndpointConfigName").required(),
        ParamSpec::enumeration(
            "DeploymentConfig_BlueGreenUpdatePolicy_TrafficRoutingConfiguration_Type",
            TRAFFIC_ROUTING_TYPES,
        )
        .aliases(&["TrafficRoutingType"]),
        ParamSpec::int(
            "DeploymentConfig_BlueGreenUpdatePolicy_TrafficRoutingConfiguration_WaitIntervalInSecond",
        )
        .aliases(&["WaitIntervalInSeconds"]),
        ParamSpec::enumeration(
            "DeploymentConfig_BlueGreenUpdatePolicy_TrafficRoutingConfiguration_CanarySize_Type",
            CAPACITY_SIZE_TYPES,
        )
        .aliases(&["CanarySizeType"]),
        ParamSpec::int(
            "DeploymentConfig_BlueGreenUpdatePolicy_TrafficRoutingConfiguration_CanarySize_Value",
        )
        .aliases(&["CanarySizeValue"]),
        ParamSpec::enumeration(
            "DeploymentConfig_BlueGreenUpdatePolicy_TrafficRoutingConfiguration_LinearStepSize_Type",
            CAPACITY_SIZE_TYPES,
        )
        .aliases(&["LinearStepSizeType"]),
        ParamSpec::int(
            "DeploymentConfig_BlueGreenUpdatePolicy_TrafficRoutingConfiguration_LinearStepSize_Value",
        )
        .aliases(&["LinearStepSizeValue"]),
        ParamSpec::int("DeploymentConfig_BlueGreenUpdatePolicy_TerminationWaitInSecond")
            .aliases(&["TerminationWaitInSeconds"]),
        ParamSpec::int("DeploymentConfig_BlueGreenUpdatePolicy_MaximumExecutionTimeoutInSecond")
            .aliases(&["MaximumExecutionTimeoutInSeconds"]),
        ParamSpec::structure("DeploymentConfig_AutoRollbackConfiguration_Alarm")
            .aliases(&["RollbackAlarms"])
            .help("JSON list of {\"AlarmName\"} objects"),
        ParamSpec::map("Tag"),
    ],
};

pub static DELETE: CommandDescriptor = CommandDescriptor {
    name: "endpoint delete",
    about: "Delete an endpoint",
    operation: "DeleteEndpoint",
    impact: ConfirmImpact::High,
    primary: "EndpointName",
    default_select: "*",
    params: &[ParamSpec::string("EndpointName").required()],
};

pub static GROUP: CommandGroup = CommandGroup {
    name: "endpoint",
    about: "Hosted inference endpoints",
    commands: &[&CREATE, &DELETE],
};
