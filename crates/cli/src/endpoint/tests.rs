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
// Invocation        - Ensure selection and confirmation.

use std::sync::Arc;

use cmdlet::{CmdletError, Overrides};
use serde_json::{Value, json};

use super::args::*;
use super::cmds::*;
use crate::invoke::{Operation, run};
use crate::testing::{RecordingApi, Refuse, parse, test_context};

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

// parse_routing_type ensures the traffic routing enum is checked.
#[test]
fn parse_routing_type() {
    let ok = CREATE
        .clap_command()
        .try_get_matches_from(["create", "--traffic-routing-type", "CANARY"]);
    assert!(ok.is_ok());
    let bad = CREATE
        .clap_command()
        .try_get_matches_from(["create", "--traffic-routing-type", "canary"]);
    assert!(bad.is_err());
}

/////////////////////////////////////////////////////////////////////////////
// Projection

fn project(args: &[&str]) -> Value {
    let invocation = parse(&CreateEndpoint, args);
    serde_json::to_value(CreateEndpoint.build(&invocation.params).unwrap()).unwrap()
}

// create_without_deployment_config ensures no deployment node when nothing nested is bound.
#[test]
fn create_without_deployment_config() {
    assert_eq!(
        project(&["--endpoint-name", "e1", "--endpoint-config-name", "c1"]),
        json!({ "EndpointName": "e1", "EndpointConfigName": "c1" })
    );
}

// create_canary_size_four_levels_deep ensures a single deep leaf creates
// exactly its ancestor chain.
#[test]
fn create_canary_size_four_levels_deep() {
    assert_eq!(
        project(&["--endpoint-name", "e1", "--canary-size-value", "10"]),
        json!({
            "EndpointName": "e1",
            "DeploymentConfig": {
                "BlueGreenUpdatePolicy": {
                    "TrafficRoutingConfiguration": {
                        "CanarySize": { "Value": 10 }
                    }
                }
            }
        })
    );
}

// create_full_canary_policy ensures siblings at each level land together.
#[test]
fn create_full_canary_policy() {
    let value = project(&[
        "--endpoint-name",
        "e1",
        "--traffic-routing-type",
        "CANARY",
        "--wait-interval-in-seconds",
        "300",
        "--canary-size-type",
        "CAPACITY_PERCENT",
        "--canary-size-value",
        "10",
        "--termination-wait-in-seconds",
        "120",
        "--rollback-alarms",
        r#"[{"AlarmName": "latency-p99"}]"#,
    ]);
    assert_eq!(
        value["DeploymentConfig"],
        json!({
            "BlueGreenUpdatePolicy": {
                "TrafficRoutingConfiguration": {
                    "Type": "CANARY",
                    "WaitIntervalInSeconds": 300,
                    "CanarySize": { "Type": "CAPACITY_PERCENT", "Value": 10 }
                },
                "TerminationWaitInSeconds": 120
            },
            "AutoRollbackConfiguration": {
                "Alarms": [{ "AlarmName": "latency-p99" }]
            }
        })
    );
}

// create_explicit_empty_alarms ensures an empty list still counts as set.
#[test]
fn create_explicit_empty_alarms() {
    assert_eq!(
        project(&["--endpoint-name", "e1", "--rollback-alarms", "[]"])["DeploymentConfig"],
        json!({ "AutoRollbackConfiguration": { "Alarms": [] } })
    );
}

// create_null_leaf_is_omitted ensures an explicit null does not create its parent.
#[test]
fn create_null_leaf_is_omitted() {
    assert_eq!(
        project(&["--endpoint-name", "e1", "--termination-wait-in-seconds", ""]),
        json!({ "EndpointName": "e1" })
    );
}

// create_bad_alarm_shape ensures malformed structures fail before the call.
#[test]
fn create_bad_alarm_shape() {
    let invocation = parse(&CreateEndpoint, &["--rollback-alarms", r#"[{"Name": 1}]"#]);
    assert!(matches!(
        CreateEndpoint.build(&invocation.params),
        Err(CmdletError::TypeCoercion { .. })
    ));
}

/////////////////////////////////////////////////////////////////////////////
// Invocation

// create_selects_arn ensures the default selection is the endpoint ARN.
#[tokio::test]
async fn create_selects_arn() {
    let api = Arc::new(RecordingApi::default());
    let ctx = test_context(api.clone());
    let outcome = run(
        &CreateEndpoint,
        parse(&CreateEndpoint, &["--endpoint-name", "e1", "--endpoint-config-name", "c1"]),
        &ctx,
        &Overrides::new(),
    )
    .await
    .unwrap();
    assert_eq!(outcome.output, Some(json!("arn:mlplane:endpoint/e1")));
}

// delete_declined_makes_no_call ensures High impact prompts at the default threshold.
#[tokio::test]
async fn delete_declined_makes_no_call() {
    let api = Arc::new(RecordingApi::default());
    let mut ctx = test_context(api.clone());
    ctx.confirmer = Arc::new(Refuse);
    let outcome = run(
        &DeleteEndpoint,
        parse(&DeleteEndpoint, &["--endpoint-name", "e1"]),
        &ctx,
        &Overrides::new(),
    )
    .await
    .unwrap();
    assert_eq!(outcome.output, None);
    assert!(api.calls().is_empty());
}

// delete_forced_returns_empty_response ensures the wildcard projection of an empty response.
#[tokio::test]
async fn delete_forced_returns_empty_response() {
    let api = Arc::new(RecordingApi::default());
    let mut ctx = test_context(api.clone());
    ctx.confirmer = Arc::new(Refuse);
    let outcome = run(
        &DeleteEndpoint,
        parse(&DeleteEndpoint, &["--endpoint-name", "e1", "--force"]),
        &ctx,
        &Overrides::new(),
    )
    .await
    .unwrap();
    assert_eq!(outcome.output, Some(json!({})));
    assert_eq!(
        api.calls(),
        vec![("DeleteEndpoint", json!({ "EndpointName": "e1" }))]
    );
}
