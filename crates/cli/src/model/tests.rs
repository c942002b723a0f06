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

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, request
// projection and the end-to-end invocation pipeline against a
// recording fake client. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.
// Projection        - Ensure bound parameters land in the right request nodes.
// Invocation        - Ensure selection, confirmation and error enrichment.

use std::sync::Arc;

use cmdlet::Overrides;
use serde_json::{Value, json};

use super::args::*;
use super::cmds::*;
use crate::errors::CliError;
use crate::invoke::{Operation, run};
use crate::testing::{RecordingApi, TEST_ENDPOINT, TEST_REGION, parse, test_context};

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation,
// ensuring things like unique argument definitions, group
// configurations, argument references, etc. Things that would
// otherwise be missed until runtime.
#[test]
fn verify_cmd_structure() {
    GROUP.clap_command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including aliases and enum value checking.

// parse_create_aliases ensures short aliases bind to their nested parameter.
#[test]
fn parse_create_aliases() {
    let invocation = parse(
        &CreateModel,
        &["--model-name", "m1", "--image", "registry.example/serve:1", "--role-arn", "arn:role/r"],
    );
    assert_eq!(
        invocation.params.string("PrimaryContainer_Image").unwrap().as_deref(),
        Some("registry.example/serve:1")
    );
    assert_eq!(
        invocation.params.string("ExecutionRoleArn").unwrap().as_deref(),
        Some("arn:role/r")
    );
}

// parse_create_bad_mode ensures enum values are checked at parse time.
#[test]
fn parse_create_bad_mode() {
    let res = CREATE.clap_command().try_get_matches_from([
        "create",
        "--model-name",
        "m1",
        "--primary-container-mode",
        "ManyModels",
    ]);
    assert!(res.is_err());
}

// parse_delete_force ensures --force and -f parse.
#[test]
fn parse_delete_force() {
    let invocation = parse(&DeleteModel, &["--model-name", "m1", "-f"]);
    assert!(invocation.options.force);
}

/////////////////////////////////////////////////////////////////////////////
// Projection

fn project(args: &[&str]) -> Value {
    let invocation = parse(&CreateModel, args);
    serde_json::to_value(CreateModel.build(&invocation.params).unwrap()).unwrap()
}

// create_with_name_only ensures a create with just the identifier has no nested nodes.
#[test]
fn create_with_name_only() {
    assert_eq!(project(&["--model-name", "m1"]), json!({ "ModelName": "m1" }));
}

// create_deep_leaf ensures a leaf two levels down brings its parents along and nothing else.
#[test]
fn create_deep_leaf() {
    assert_eq!(
        project(&[
            "--model-name",
            "m1",
            "--primary-container-image-config-repository-access-mode",
            "Vpc",
        ]),
        json!({
            "ModelName": "m1",
            "PrimaryContainer": { "ImageConfig": { "RepositoryAccessMode": "Vpc" } }
        })
    );
}

// create_three_levels ensures the deepest auth config nests correctly.
#[test]
fn create_three_levels() {
    assert_eq!(
        project(&[
            "--model-name",
            "m1",
            "--repository-credentials-provider-arn",
            "arn:fn/creds",
        ]),
        json!({
            "ModelName": "m1",
            "PrimaryContainer": {
                "ImageConfig": {
                    "RepositoryAuthConfig": { "RepositoryCredentialsProviderArn": "arn:fn/creds" }
                }
            }
        })
    );
}

// create_environment_map ensures map entries are copied with their exact keys.
#[test]
fn create_environment_map() {
    assert_eq!(
        project(&[
            "--model-name",
            "m1",
            "--primary-container-environment",
            "a=1",
            "--primary-container-environment",
            "b=2",
        ]),
        json!({
            "ModelName": "m1",
            "PrimaryContainer": { "Environment": { "a": "1", "b": "2" } }
        })
    );
}

// create_empty_subnets ensures an explicitly empty list is sent and keeps its parent.
#[test]
fn create_empty_subnets() {
    assert_eq!(
        project(&["--model-name", "m1", "--vpc-config-subnet", ""]),
        json!({ "ModelName": "m1", "VpcConfig": { "Subnets": [] } })
    );
}

// create_tags ensures the tag map becomes a key-sorted tag list.
#[test]
fn create_tags() {
    assert_eq!(
        project(&["--model-name", "m1", "--tag", "team=ml,env=dev"]),
        json!({
            "ModelName": "m1",
            "Tags": [{ "Key": "env", "Value": "dev" }, { "Key": "team", "Value": "ml" }]
        })
    );
}

/////////////////////////////////////////////////////////////////////////////
// Invocation

// create_returns_default_selection ensures the default selector picks the model ARN.
#[tokio::test]
async fn create_returns_default_selection() {
    let api = Arc::new(RecordingApi::default());
    let ctx = test_context(api.clone());
    let outcome = run(
        &CreateModel,
        parse(&CreateModel, &["--model-name", "m1"]),
        &ctx,
        &Overrides::new(),
    )
    .await
    .unwrap();
    assert_eq!(outcome.output, Some(json!("arn:mlplane:model/m1")));
    assert_eq!(api.calls(), vec![("CreateModel", json!({ "ModelName": "m1" }))]);
}

// create_pass_thru ensures --pass-thru echoes the model name.
#[tokio::test]
async fn create_pass_thru() {
    let api = Arc::new(RecordingApi::default());
    let ctx = test_context(api.clone());
    let outcome = run(
        &CreateModel,
        parse(&CreateModel, &["--model-name", "m1", "--pass-thru"]),
        &ctx,
        &Overrides::new(),
    )
    .await
    .unwrap();
    assert_eq!(outcome.output, Some(json!("m1")));
}

// describe_returns_whole_response ensures the wildcard default keeps declared nulls.
#[tokio::test]
async fn describe_returns_whole_response() {
    let api = Arc::new(RecordingApi::default());
    let ctx = test_context(api.clone());
    let outcome = run(
        &DescribeModel,
        parse(&DescribeModel, &["--model-name", "m1"]),
        &ctx,
        &Overrides::new(),
    )
    .await
    .unwrap();
    let output = outcome.output.unwrap();
    assert_eq!(output["ModelArn"], json!("arn:mlplane:model/m1"));
    assert_eq!(output.get("ExecutionRoleArn"), Some(&Value::Null));
}

// describe_nested_selector ensures dotted selectors walk into the response.
#[tokio::test]
async fn describe_nested_selector() {
    let api = Arc::new(RecordingApi::default());
    let ctx = test_context(api.clone());
    let outcome = run(
        &DescribeModel,
        parse(
            &DescribeModel,
            &["--model-name", "m1", "--select", "primarycontainer.Environment.A"],
        ),
        &ctx,
        &Overrides::new(),
    )
    .await
    .unwrap();
    assert_eq!(outcome.output, Some(json!("1")));
}

// describe_selects_unmodelled_field ensures response fields outside the
// typed model survive for both the wildcard and a field selector.
#[tokio::test]
async fn describe_selects_unmodelled_field() {
    let api = Arc::new(RecordingApi::default());
    let ctx = test_context(api.clone());
    let whole = run(
        &DescribeModel,
        parse(&DescribeModel, &["--model-name", "m1"]),
        &ctx,
        &Overrides::new(),
    )
    .await
    .unwrap();
    assert_eq!(
        whole.output.unwrap()["Containers"],
        json!([{ "Image": "registry.example/sidecar:3" }])
    );

    let selected = run(
        &DescribeModel,
        parse(&DescribeModel, &["--model-name", "m1", "--select", "Containers.0.Image"]),
        &ctx,
        &Overrides::new(),
    )
    .await
    .unwrap();
    assert_eq!(selected.output, Some(json!("registry.example/sidecar:3")));
}

// name_resolution_failure_is_enriched ensures the message carries the
// original text plus endpoint context, after exactly one attempt.
#[tokio::test]
async fn name_resolution_failure_is_enriched() {
    let api = Arc::new(RecordingApi::failing_name_resolution());
    let ctx = test_context(api.clone());
    let err = run(
        &CreateModel,
        parse(&CreateModel, &["--model-name", "m1"]),
        &ctx,
        &Overrides::new(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::EndpointResolution { .. }));
    let message = err.to_string();
    assert!(message.contains("Name or service not known"));
    assert!(message.contains(TEST_ENDPOINT));
    assert!(message.contains(TEST_REGION));
    assert_eq!(api.calls().len(), 1);
}
