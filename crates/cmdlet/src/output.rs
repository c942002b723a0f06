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

use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CmdletResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    AsciiTable,
}

/// Renders a projection. `None` means there is nothing to emit.
pub fn render(value: &Value, format: OutputFormat) -> CmdletResult<Option<String>> {
    if value.is_null() {
        return Ok(None);
    }
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::AsciiTable => table(value),
    };
    Ok(Some(text.trim_end().to_string()))
}

fn table(value: &Value) -> String {
    match value {
        Value::Object(obj) => {
            let mut table = Table::new();
            table.set_titles(Row::new(vec![Cell::new("Property"), Cell::new("Value")]));
            for (k, v) in obj {
                table.add_row(Row::new(vec![Cell::new(k), Cell::new(&cell_text(v))]));
            }
            table.to_string()
        }
        Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
            let mut columns: Vec<&str> = Vec::new();
            for item in items.iter().filter_map(Value::as_object) {
                for key in item.keys() {
                    if !columns.contains(&key.as_str()) {
                        columns.push(key);
                    }
                }
            }
            let mut table = Table::new();
            table.set_titles(Row::new(columns.iter().map(|c| Cell::new(c)).collect()));
            for item in items.iter().filter_map(Value::as_object) {
                table.add_row(Row::new(
                    columns
                        .iter()
                        .map(|c| Cell::new(&item.get(*c).map(cell_text).unwrap_or_default()))
                        .collect(),
                ));
            }
            table.to_string()
        }
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join("\n"),
        scalar => cell_text(scalar),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_emits_nothing() {
        assert_eq!(render(&Value::Null, OutputFormat::Json).unwrap(), None);
        assert_eq!(render(&Value::Null, OutputFormat::AsciiTable).unwrap(), None);
    }

    #[test]
    fn scalars_are_bare_in_tables() {
        assert_eq!(
            render(&json!("arn:model/m1"), OutputFormat::AsciiTable).unwrap(),
            Some("arn:model/m1".to_string())
        );
    }

    #[test]
    fn json_is_pretty_printed() {
        assert_eq!(
            render(&json!({ "ModelArn": "a" }), OutputFormat::Json).unwrap(),
            Some("{\n  \"ModelArn\": \"a\"\n}".to_string())
        );
    }

    #[test]
    fn yaml_output() {
        assert_eq!(
            render(&json!({ "ModelArn": "a" }), OutputFormat::Yaml).unwrap(),
            Some("ModelArn: a".to_string())
        );
    }

    #[test]
    fn object_table_has_property_rows() {
        let out = render(
            &json!({ "ModelName": "m1", "EnableNetworkIsolation": true }),
            OutputFormat::AsciiTable,
        )
        .unwrap()
        .unwrap();
        assert!(out.contains("Property"));
        assert!(out.contains("ModelName"));
        assert!(out.contains("m1"));
        assert!(out.contains("true"));
    }

    #[test]
    fn array_of_objects_uses_columns() {
        let out = render(
            &json!([{ "Name": "a", "Size": 1 }, { "Name": "b", "Extra": "x" }]),
            OutputFormat::AsciiTable,
        )
        .unwrap()
        .unwrap();
        let header = out.lines().nth(1).unwrap();
        assert!(header.contains("Name") && header.contains("Size") && header.contains("Extra"));
    }
}
