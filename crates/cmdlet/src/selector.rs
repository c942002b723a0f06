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

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::descriptor::CommandDescriptor;
use crate::errors::{CmdletError, CmdletResult};
use crate::param::ParameterSet;

/// Decides what an invocation emits: the whole response, one field of it,
/// or the value of an input parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Wildcard,
    EchoInput(String),
    Field(Vec<String>),
}

impl FromStr for Selector {
    type Err = CmdletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CmdletError::InvalidSelector {
            selector: s.to_string(),
            reason: reason.to_string(),
        };
        let s_trim = s.trim();
        if s_trim == "*" {
            return Ok(Selector::Wildcard);
        }
        if let Some(param) = s_trim.strip_prefix('^') {
            if param.is_empty() {
                return Err(invalid("missing parameter name after '^'"));
            }
            return Ok(Selector::EchoInput(param.to_string()));
        }
        if s_trim.is_empty() {
            return Err(invalid("empty selector"));
        }
        let path: Vec<String> = s_trim.split('.').map(str::to_string).collect();
        if path.iter().any(String::is_empty) {
            return Err(invalid("empty path segment"));
        }
        Ok(Selector::Field(path))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Wildcard => f.write_str("*"),
            Selector::EchoInput(p) => write!(f, "^{p}"),
            Selector::Field(path) => f.write_str(&path.join(".")),
        }
    }
}

impl Selector {
    /// Combines `--select` and `--pass-thru` with the command's default.
    /// Supplying both is always an error, for every command.
    pub fn resolve(
        select: Option<&str>,
        pass_thru: bool,
        descriptor: &CommandDescriptor,
    ) -> CmdletResult<Self> {
        let selector = match (select, pass_thru) {
            (Some(_), true) => return Err(CmdletError::ConflictingSelector),
            (None, true) => Selector::EchoInput(descriptor.primary.to_string()),
            (Some(s), false) => s.parse()?,
            (None, false) => descriptor.default_select.parse()?,
        };
        if let Selector::EchoInput(name) = &selector {
            let spec = descriptor
                .lookup(name)
                .ok_or_else(|| CmdletError::InvalidSelector {
                    selector: selector.to_string(),
                    reason: format!("{} has no parameter named {name}", descriptor.name),
                })?;
            return Ok(Selector::EchoInput(spec.name.to_string()));
        }
        Ok(selector)
    }

    pub fn apply(&self, response: &Value, params: &ParameterSet) -> CmdletResult<Value> {
        match self {
            Selector::Wildcard => Ok(response.clone()),
            Selector::EchoInput(name) => Ok(params
                .get(name)
                .map(|v| v.to_json())
                .unwrap_or(Value::Null)),
            Selector::Field(path) => {
                let mut current = response;
                for segment in path {
                    current = step(current, segment).ok_or_else(|| CmdletError::FieldNotFound {
                        path: path.join("."),
                    })?;
                }
                Ok(current.clone())
            }
        }
    }
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(obj) => obj.get(segment).or_else(|| {
            obj.iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(segment))
                .map(|(_, v)| v)
        }),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::confirm::ConfirmImpact;
    use crate::param::{BindingSource, ParamSpec, ParamValue};

    static CREATE: CommandDescriptor = CommandDescriptor {
        name: "widget create",
        about: "Creates a widget",
        operation: "CreateWidget",
        impact: ConfirmImpact::Medium,
        primary: "WidgetName",
        default_select: "WidgetArn",
        params: &[
            ParamSpec::string("WidgetName").aliases(&["Name"]),
            ParamSpec::string("Color"),
        ],
    };

    #[test]
    fn parses_forms() {
        assert_eq!("*".parse::<Selector>().unwrap(), Selector::Wildcard);
        assert_eq!(
            "^Name".parse::<Selector>().unwrap(),
            Selector::EchoInput("Name".to_string())
        );
        assert_eq!(
            "Config.Items.0".parse::<Selector>().unwrap(),
            Selector::Field(vec!["Config".into(), "Items".into(), "0".into()])
        );
        assert!("^".parse::<Selector>().is_err());
        assert!("a..b".parse::<Selector>().is_err());
    }

    #[test]
    fn select_and_pass_thru_conflict() {
        assert!(matches!(
            Selector::resolve(Some("*"), true, &CREATE),
            Err(CmdletError::ConflictingSelector)
        ));
    }

    #[test]
    fn defaults_and_pass_thru() {
        assert_eq!(
            Selector::resolve(None, false, &CREATE).unwrap(),
            Selector::Field(vec!["WidgetArn".to_string()])
        );
        assert_eq!(
            Selector::resolve(None, true, &CREATE).unwrap(),
            Selector::EchoInput("WidgetName".to_string())
        );
    }

    #[test]
    fn echo_resolves_alias_and_rejects_unknown() {
        assert_eq!(
            Selector::resolve(Some("^name"), false, &CREATE).unwrap(),
            Selector::EchoInput("WidgetName".to_string())
        );
        assert!(matches!(
            Selector::resolve(Some("^Size"), false, &CREATE),
            Err(CmdletError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn field_lookup_falls_back_to_case_insensitive() {
        let params = ParameterSet::new(&CREATE);
        let response = json!({ "WidgetArn": "arn:w", "Parts": [{ "Id": 7 }] });
        let sel: Selector = "widgetarn".parse().unwrap();
        assert_eq!(sel.apply(&response, &params).unwrap(), json!("arn:w"));
        let sel: Selector = "Parts.0.Id".parse().unwrap();
        assert_eq!(sel.apply(&response, &params).unwrap(), json!(7));
        let sel: Selector = "Missing".parse().unwrap();
        assert!(matches!(
            sel.apply(&response, &params),
            Err(CmdletError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn echo_returns_bound_value_or_null() {
        let mut params = ParameterSet::new(&CREATE);
        let sel = Selector::EchoInput("WidgetName".to_string());
        assert_eq!(sel.apply(&json!({}), &params).unwrap(), Value::Null);
        params
            .bind(
                "WidgetName",
                ParamValue::String("w1".to_string()),
                BindingSource::CommandLine,
            )
            .unwrap();
        assert_eq!(sel.apply(&json!({}), &params).unwrap(), json!("w1"));
    }
}
