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

use crate::errors::CmdletResult;
use crate::param::ParameterSet;

pub type BeforeBuild = Box<dyn Fn(&mut ParameterSet) -> CmdletResult<()> + Send + Sync>;
pub type AfterBuild<R> = Box<dyn Fn(&mut R) -> CmdletResult<()> + Send + Sync>;

/// Call-site customisation of a single invocation. Hooks run in the order
/// they were added: `before_build` over the bound parameters, `after_build`
/// over the projected request.
pub struct Overrides<R> {
    before_build: Vec<BeforeBuild>,
    after_build: Vec<AfterBuild<R>>,
}

impl<R> Default for Overrides<R> {
    fn default() -> Self {
        Self {
            before_build: Vec::new(),
            after_build: Vec::new(),
        }
    }
}

impl<R> Overrides<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before_build(
        mut self,
        hook: impl Fn(&mut ParameterSet) -> CmdletResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.before_build.push(Box::new(hook));
        self
    }

    pub fn after_build(
        mut self,
        hook: impl Fn(&mut R) -> CmdletResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.after_build.push(Box::new(hook));
        self
    }

    pub fn apply_before(&self, params: &mut ParameterSet) -> CmdletResult<()> {
        self.before_build.iter().try_for_each(|hook| hook(params))
    }

    pub fn apply_after(&self, request: &mut R) -> CmdletResult<()> {
        self.after_build.iter().try_for_each(|hook| hook(request))
    }
}
