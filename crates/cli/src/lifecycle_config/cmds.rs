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
use rpc::{ApiError, MlPlaneApi};
use tokio_util::sync::CancellationToken;

use super::args;
use crate::invoke::Operation;

pub struct CreateLifecycleConfig;

#[async_trait::async_trait]
impl Operation for CreateLifecycleConfig {
    type Request = CreateNotebookInstanceLifecycleConfigRequest;
    type Response = CreateNotebookInstanceLifecycleConfigResponse;

    fn descriptor(&self) -> &'static CommandDescriptor {
        &args::CREATE
    }

    fn build(&self, p: &ParameterSet) -> CmdletResult<CreateNotebookInstanceLifecycleConfigRequest> {
        // The service accepts at most one hook per event.
        let hook = |name| -> CmdletResult<Option<Vec<LifecycleHook>>> {
            Ok(p.blob(name)?
                .map(|script| vec![LifecycleHook::from_script(&script)]))
        };
        Ok(CreateNotebookInstanceLifecycleConfigRequest {
            notebook_instance_lifecycle_config_name: p
                .string("NotebookInstanceLifecycleConfigName")?,
            on_create: hook("OnCreate_Content")?,
            on_start: hook("OnStart_Content")?,
            tags: p.map("Tag")?.map(Tag::from_map),
        })
    }

    async fn call(
        &self,
        api: &dyn MlPlaneApi,
        request: CreateNotebookInstanceLifecycleConfigRequest,
        cancel: &CancellationToken,
    ) -> Result<CreateNotebookInstanceLifecycleConfigResponse, ApiError> {
        api.create_notebook_instance_lifecycle_config(request, cancel)
            .await
    }
}
