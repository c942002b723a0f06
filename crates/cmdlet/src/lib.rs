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

//! Building blocks shared by every generated command: the parameter table
//! and binding rules, the response selector, confirmation, call-site
//! override hooks and output rendering.

pub mod confirm;
pub mod descriptor;
pub mod errors;
pub mod hooks;
pub mod output;
pub mod param;
pub mod selector;

pub use confirm::{AssumeYes, Confirm, ConfirmImpact, StdinConfirm, needs_confirmation};
pub use descriptor::{CommandDescriptor, CommandGroup, InvocationOptions, RequiredParamWarning};
pub use errors::{CmdletError, CmdletResult};
pub use hooks::Overrides;
pub use output::OutputFormat;
pub use param::{BindingSource, ParamKind, ParamSpec, ParamValue, ParameterSet};
pub use selector::Selector;
