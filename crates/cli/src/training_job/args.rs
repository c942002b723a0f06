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

pub const TRAINING_INPUT_MODES: &[&str] = &["Pipe", "File", "FastFile"];
pub const COMPRESSION_TYPES: &[&str] = &["GZIP", "NONE"];

pub static CREATE: CommandDescriptor = CommandDescriptor {
    name: "training-job create",
    about: "Start a training job",
    operation: "CreateTrainingJob",
    impact: ConfirmImpact::Medium,
    primary: "TrainingJobName",
    default_select: "TrainingJobArn",
    params: &[
        ParamSpec::string("TrainingJobName").required(),
        ParamSpec::string("RoleArn").required(),
        ParamSpec::map("HyperParameter")
            .aliases(&["HyperParameters"])
            .help("Algorithm hyperparameters, KEY=VALUE"),
        ParamSpec::string("AlgorithmSpecification_TrainingImage").aliases(&["TrainingImage"]),
        ParamSpec::string("AlgorithmSpecification_AlgorithmName").aliases(&["AlgorithmName"]),
        ParamSpec::enumeration(
            "AlgorithmSpecification_TrainingInputMode",
            TRAINING_INPUT_MODES,
        )
        .aliases(&["TrainingInputMode"]),
        ParamSpec::structure("AlgorithmSpecification_MetricDefinition")
            .aliases(&["MetricDefinitions"])
            .help("JSON list of {\"Name\", \"Regex\"} objects"),
        ParamSpec::structure("InputDataConfig")
            .help("JSON list of input channels, or file://PATH to one"),
        ParamSpec::string("OutputDataConfig_S3OutputPath")
            .required()
            .aliases(&["S3OutputPath"]),
        ParamSpec::string("OutputDataConfig_KmsKeyId"),
        ParamSpec::enumeration("OutputDataConfig_CompressionType", COMPRESSION_TYPES),
        ParamSpec::string("ResourceConfig_InstanceType").aliases(&["InstanceType"]),
        ParamSpec::int("ResourceConfig_InstanceCount").aliases(&["InstanceCount"]),
        ParamSpec::int("ResourceConfig_VolumeSizeInGB").aliases(&["VolumeSizeInGB"]),
        ParamSpec::string("ResourceConfig_VolumeKmsKeyId"),
        ParamSpec::int("ResourceConfig_KeepAlivePeriodInSecond"),
        ParamSpec::int("StoppingCondition_MaxRuntimeInSecond").aliases(&["MaxRuntimeInSeconds"]),
        ParamSpec::int("StoppingCondition_MaxWaitTimeInSecond"),
        ParamSpec::int("StoppingCondition_MaxPendingTimeInSecond"),
        ParamSpec::string("CheckpointConfig_S3Uri"),
        ParamSpec::string("CheckpointConfig_LocalPath"),
        ParamSpec::list("VpcConfig_SecurityGroupId"),
        ParamSpec::list("VpcConfig_Subnet"),
        ParamSpec::map("Environment"),
        ParamSpec::bool("EnableNetworkIsolation"),
        ParamSpec::bool("EnableManagedSpotTraining"),
        ParamSpec::map("Tag"),
    ],
};

pub static DESCRIBE: CommandDescriptor = CommandDescriptor {
    name: "training-job describe",
    about: "Describe a training job",
    operation: "DescribeTrainingJob",
    impact: ConfirmImpact::None,
    primary: "TrainingJobName",
    default_select: "*",
    params: &[ParamSpec::string("TrainingJobName").required()],
};

pub static STOP: CommandDescriptor = CommandDescriptor {
    name: "training-job stop",
    about: "Stop a running training job",
    operation: "StopTrainingJob",
    impact: ConfirmImpact::High,
    primary: "TrainingJobName",
    default_select: "*",
    params: &[ParamSpec::string("TrainingJobName").required()],
};

pub static GROUP: CommandGroup = CommandGroup {
    name: "training-job",
    about: "Training jobs",
    commands: &[&CREATE, &DESCRIBE, &STOP],
};
