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

pub static CREATE: CommandDescriptor = CommandDescriptor {
    name: "lifecycle-config create",
    about: "Create a notebook instance lifecycle configuration",
    operation: "CreateNotebookInstanceLifecycleConfig",
    impact: ConfirmImpact::Medium,
    primary: "NotebookInstanceLifecycleConfigName",
    default_select: "NotebookInstanceLifecycleConfigArn",
    params: &[
        ParamSpec::string("NotebookInstanceLifecycleConfigName")
            .required()
            .aliases(&["Name"]),
        ParamSpec::blob("OnCreate_Content")
            .aliases(&["OnCreate"])
            .help("Script run once when the notebook instance is created; file://PATH or inline text"),
        ParamSpec::blob("OnStart_Content")
            .aliases(&["OnStart"])
            .help("Script run every time the notebook instance starts; file://PATH or inline text"),
        ParamSpec::map("Tag"),
    ],
};

pub static GROUP: CommandGroup = CommandGroup {
    name: "lifecycle-config",
    about: "Notebook instance lifecycle configurations",
    commands: &[&CREATE],
};
