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

pub const REPOSITORY_ACCESS_MODES: &[&str] = &["Platform", "Vpc"];
pub const CONTAINER_MODES: &[&str] = &["SingleModel", "MultiModel"];

pub static CREATE: CommandDescriptor = CommandDescriptor {
    name: "model create",
    about: "Create a model from a serving container",
    operation: "CreateModel",
    impact: ConfirmImpact::Medium,
    primary: "ModelName",
    default_select: "ModelArn",
    params: &[
        ParamSpec::string("ModelName")
            .required()
            .help("Name of the model"),
        ParamSpec::string("ExecutionRoleArn")
            .aliases(&["RoleArn"])
            .help("Role the platform assumes to access model artifacts and images"),
        ParamSpec::bool("EnableNetworkIsolation")
            .help("Run the model container without network access"),
        ParamSpec::string("PrimaryContainer_ContainerHostname")
            .aliases(&["ContainerHostname"]),
        ParamSpec::string("PrimaryContainer_Image")
            .aliases(&["Image"])
            .help("Registry path of the inference image"),
        ParamSpec::enumeration(
            "PrimaryContainer_ImageConfig_RepositoryAccessMode",
            REPOSITORY_ACCESS_MODES,
        )
        .aliases(&["RepositoryAccessMode"]),
        ParamSpec::string(
            "PrimaryContainer_ImageConfig_RepositoryAuthConfig_RepositoryCredentialsProviderArn",
        )
        .aliases(&["RepositoryCredentialsProviderArn"]),
        ParamSpec::enumeration("PrimaryContainer_Mode", CONTAINER_MODES),
        ParamSpec::string("PrimaryContainer_ModelDataUrl")
            .aliases(&["ModelDataUrl"])
            .help("Location of the model artifacts"),
        ParamSpec::string("PrimaryContainer_ModelPackageName"),
        ParamSpec::map("PrimaryContainer_Environment")
            .aliases(&["Environment"])
            .help("Environment variables for the container, KEY=VALUE"),
        ParamSpec::list("VpcConfig_SecurityGroupId").aliases(&["SecurityGroupId"]),
        ParamSpec::list("VpcConfig_Subnet").aliases(&["Subnet"]),
        ParamSpec::map("Tag").help("Tags to attach, KEY=VALUE"),
    ],
};

pub static DESCRIBE: CommandDescriptor = CommandDescriptor {
    name: "model describe",
    about: "Describe a model",
    operation: "DescribeModel",
    impact: ConfirmImpact::None,
    primary: "ModelName",
    default_select: "*",
    params: &[ParamSpec::string("ModelName").required()],
};

pub static DELETE: CommandDescriptor = CommandDescriptor {
    name: "model delete",
    about: "Delete a model",
    operation: "DeleteModel",
    impact: ConfirmImpact::High,
    primary: "ModelName",
    default_select: "*",
    params: &[ParamSpec::string("ModelName").required()],
};

pub static GROUP: CommandGroup = CommandGroup {
    name: "model",
    about: "Models",
    commands: &[&CREATE, &DESCRIBE, &DELETE],
};
