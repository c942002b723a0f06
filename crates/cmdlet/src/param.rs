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

//! Parameter tables and the bound parameter set.
//!
//! Every command declares its parameters as a static slice of [`ParamSpec`].
//! Values arrive from three places (command line, pipeline input, configured
//! defaults) and are coerced to the declared [`ParamKind`] when they are
//! bound, so the request projectors only ever see typed values.

use std::collections::BTreeMap;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::builder::PossibleValuesParser;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches};
use heck::ToKebabCase;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::descriptor::CommandDescriptor;
use crate::errors::{CmdletError, CmdletResult};

/// Prefix that makes a blob or structure value read from a local file.
pub const FILE_PREFIX: &str = "file://";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Int,
    Float,
    Bool,
    Enum(&'static [&'static str]),
    List,
    Map,
    Blob,
    Structure,
}

impl ParamKind {
    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Int => "integer",
            ParamKind::Float => "number",
            ParamKind::Bool => "boolean",
            ParamKind::Enum(_) => "enumeration value",
            ParamKind::List => "list",
            ParamKind::Map => "map",
            ParamKind::Blob => "blob",
            ParamKind::Structure => "structure",
        }
    }

    fn value_name(&self) -> &'static str {
        match self {
            ParamKind::String | ParamKind::Enum(_) => "STRING",
            ParamKind::Int => "INT",
            ParamKind::Float => "NUMBER",
            ParamKind::Bool => "BOOL",
            ParamKind::List => "VALUE[,VALUE...]",
            ParamKind::Map => "KEY=VALUE",
            ParamKind::Blob => "TEXT|file://PATH",
            ParamKind::Structure => "JSON|file://PATH",
        }
    }
}

/// Static description of one command parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<&'static str>,
    pub help: &'static str,
}

impl ParamSpec {
    pub const fn new(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            aliases: &[],
            kind,
            required: false,
            default: None,
            help: "",
        }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, ParamKind::String)
    }

    pub const fn int(name: &'static str) -> Self {
        Self::new(name, ParamKind::Int)
    }

    pub const fn float(name: &'static str) -> Self {
        Self::new(name, ParamKind::Float)
    }

    pub const fn bool(name: &'static str) -> Self {
        Self::new(name, ParamKind::Bool)
    }

    pub const fn enumeration(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(name, ParamKind::Enum(values))
    }

    pub const fn list(name: &'static str) -> Self {
        Self::new(name, ParamKind::List)
    }

    pub const fn map(name: &'static str) -> Self {
        Self::new(name, ParamKind::Map)
    }

    pub const fn blob(name: &'static str) -> Self {
        Self::new(name, ParamKind::Blob)
    }

    pub const fn structure(name: &'static str) -> Self {
        Self::new(name, ParamKind::Structure)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub const fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn help(mut self, help: &'static str) -> Self {
        self.help = help;
        self
    }

    /// Long flag name, e.g. `PrimaryContainer_Image` -> `primary-container-image`.
    pub fn flag(&self) -> String {
        self.name.to_kebab_case()
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    pub fn clap_arg(&self) -> Arg {
        let mut arg = Arg::new(self.name)
            .long(self.flag())
            .value_name(self.kind.value_name())
            .visible_aliases(self.aliases.iter().map(|a| a.to_kebab_case()));
        if !self.help.is_empty() {
            arg = arg.help(self.help);
        }
        arg = match self.kind {
            ParamKind::Enum(values) => {
                arg.value_parser(PossibleValuesParser::new(values.iter().copied()))
            }
            ParamKind::Bool => arg.num_args(0..=1).default_missing_value("true"),
            ParamKind::List => arg.action(ArgAction::Append).value_delimiter(','),
            ParamKind::Map => arg.action(ArgAction::Append),
            _ => arg,
        };
        if let Some(default) = self.default {
            arg = arg.default_value(default);
        }
        arg
    }

    fn coercion_error(&self, value: impl ToString) -> CmdletError {
        CmdletError::TypeCoercion {
            param: self.name.to_string(),
            expected: self.kind.name(),
            value: value.to_string(),
        }
    }

    /// Coerces a textual value (command line or configured default).
    /// An empty string is an explicit null for scalar kinds and an explicitly
    /// empty collection for lists and maps.
    pub fn coerce_text(&self, text: &str) -> CmdletResult<ParamValue> {
        match self.kind {
            ParamKind::List => Ok(ParamValue::List(split_list(text))),
            ParamKind::Map => {
                let mut map = BTreeMap::new();
                self.extend_map(&mut map, text)?;
                Ok(ParamValue::Map(map))
            }
            _ if text.is_empty() => Ok(ParamValue::Null),
            ParamKind::String | ParamKind::Enum(_) => Ok(ParamValue::String(text.to_string())),
            ParamKind::Int => text
                .trim()
                .parse()
                .map(ParamValue::Int)
                .map_err(|_| self.coercion_error(text)),
            ParamKind::Float => text
                .trim()
                .parse()
                .map(ParamValue::Float)
                .map_err(|_| self.coercion_error(text)),
            ParamKind::Bool => parse_bool(text)
                .map(ParamValue::Bool)
                .ok_or_else(|| self.coercion_error(text)),
            ParamKind::Blob => match text.strip_prefix(FILE_PREFIX) {
                Some(path) => self.read_file(path).map(ParamValue::Blob),
                None => Ok(ParamValue::Blob(text.as_bytes().to_vec())),
            },
            ParamKind::Structure => {
                let raw = match text.strip_prefix(FILE_PREFIX) {
                    Some(path) => self.read_file(path)?,
                    None => text.as_bytes().to_vec(),
                };
                serde_json::from_slice(&raw)
                    .map(ParamValue::Structure)
                    .map_err(|_| self.coercion_error(text))
            }
        }
    }

    /// Coerces a JSON value taken from pipeline input or the config file.
    ///
    /// JSON can spell `null`, so only `null` binds [`ParamValue::Null`] here and
    /// `""` stays an empty string. On the command line there is no null
    /// literal, which is why [`ParamSpec::coerce_text`] maps `""` to null.
    pub fn coerce_json(&self, value: &Value) -> CmdletResult<ParamValue> {
        if value.is_null() {
            return Ok(ParamValue::Null);
        }
        match self.kind {
            ParamKind::String | ParamKind::Enum(_) => scalar_text(value)
                .map(ParamValue::String)
                .ok_or_else(|| self.coercion_error(value)),
            ParamKind::Int => match value {
                Value::Number(n) => n.as_i64().map(ParamValue::Int),
                Value::String(s) => s.trim().parse().ok().map(ParamValue::Int),
                _ => None,
            }
            .ok_or_else(|| self.coercion_error(value)),
            ParamKind::Float => match value {
                Value::Number(n) => n.as_f64().map(ParamValue::Float),
                Value::String(s) => s.trim().parse().ok().map(ParamValue::Float),
                _ => None,
            }
            .ok_or_else(|| self.coercion_error(value)),
            ParamKind::Bool => match value {
                Value::Bool(b) => Some(ParamValue::Bool(*b)),
                Value::String(s) => parse_bool(s).map(ParamValue::Bool),
                _ => None,
            }
            .ok_or_else(|| self.coercion_error(value)),
            ParamKind::List => match value {
                Value::Array(items) => items
                    .iter()
                    .map(|v| scalar_text(v).ok_or_else(|| self.coercion_error(value)))
                    .collect::<CmdletResult<Vec<_>>>()
                    .map(ParamValue::List),
                other => scalar_text(other)
                    .map(|s| ParamValue::List(vec![s]))
                    .ok_or_else(|| self.coercion_error(value)),
            },
            ParamKind::Map => match value {
                Value::Object(obj) => obj
                    .iter()
                    .map(|(k, v)| {
                        scalar_text(v)
                            .map(|s| (k.clone(), s))
                            .ok_or_else(|| self.coercion_error(value))
                    })
                    .collect::<CmdletResult<BTreeMap<_, _>>>()
                    .map(ParamValue::Map),
                _ => Err(self.coercion_error(value)),
            },
            ParamKind::Blob => match value {
                Value::String(s) => STANDARD
                    .decode(s)
                    .map(ParamValue::Blob)
                    .map_err(|_| self.coercion_error(s)),
                _ => Err(self.coercion_error(value)),
            },
            ParamKind::Structure => Ok(ParamValue::Structure(value.clone())),
        }
    }

    // Map entries are KEY=VALUE, comma separated, or a JSON object.
    fn extend_map(&self, map: &mut BTreeMap<String, String>, text: &str) -> CmdletResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }
        if text.starts_with('{') {
            let value: Value =
                serde_json::from_str(text).map_err(|_| self.coercion_error(text))?;
            if let ParamValue::Map(parsed) = self.coerce_json(&value)? {
                map.extend(parsed);
            }
            return Ok(());
        }
        for entry in text.split(',').filter(|e| !e.is_empty()) {
            let (k, v) = entry
                .split_once('=')
                .ok_or_else(|| self.coercion_error(entry))?;
            map.insert(k.trim().to_string(), v.to_string());
        }
        Ok(())
    }

    fn read_file(&self, path: &str) -> CmdletResult<Vec<u8>> {
        std::fs::read(path).map_err(|error| CmdletError::FileRead {
            param: self.name.to_string(),
            path: Path::new(path).to_path_buf(),
            error,
        })
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
    Blob(Vec<u8>),
    Structure(Value),
}

impl ParamValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// JSON rendering used when a parameter is echoed back as output.
    pub fn to_json(&self) -> Value {
        match self {
            ParamValue::Null => Value::Null,
            ParamValue::String(s) => Value::String(s.clone()),
            ParamValue::Int(i) => Value::from(*i),
            ParamValue::Float(f) => Value::from(*f),
            ParamValue::Bool(b) => Value::Bool(*b),
            ParamValue::List(items) => Value::from(items.clone()),
            ParamValue::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
            ParamValue::Blob(bytes) => Value::String(STANDARD.encode(bytes)),
            ParamValue::Structure(v) => v.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSource {
    CommandLine,
    Pipeline,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    pub value: ParamValue,
    pub source: BindingSource,
}

/// The values bound for one invocation, keyed by canonical parameter name.
#[derive(Debug, Clone)]
pub struct ParameterSet {
    descriptor: &'static CommandDescriptor,
    values: BTreeMap<&'static str, Bound>,
}

impl ParameterSet {
    pub fn new(descriptor: &'static CommandDescriptor) -> Self {
        Self {
            descriptor,
            values: BTreeMap::new(),
        }
    }

    pub fn descriptor(&self) -> &'static CommandDescriptor {
        self.descriptor
    }

    fn spec(&self, name: &str) -> CmdletResult<&'static ParamSpec> {
        self.descriptor
            .lookup(name)
            .ok_or_else(|| CmdletError::UnknownParameter {
                command: self.descriptor.name.to_string(),
                name: name.to_string(),
            })
    }

    pub fn bind(&mut self, name: &str, value: ParamValue, source: BindingSource) -> CmdletResult<()> {
        let spec = self.spec(name)?;
        self.values.insert(spec.name, Bound { value, source });
        Ok(())
    }

    pub fn bind_text(&mut self, name: &str, text: &str, source: BindingSource) -> CmdletResult<()> {
        let spec = self.spec(name)?;
        let value = spec.coerce_text(text)?;
        self.bind(spec.name, value, source)
    }

    pub fn bind_json(&mut self, name: &str, value: &Value, source: BindingSource) -> CmdletResult<()> {
        let spec = self.spec(name)?;
        let value = spec.coerce_json(value)?;
        self.bind(spec.name, value, source)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bound(name).is_some()
    }

    pub fn bound(&self, name: &str) -> Option<&Bound> {
        let spec = self.descriptor.lookup(name)?;
        self.values.get(spec.name)
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.bound(name).map(|b| &b.value)
    }

    pub fn source(&self, name: &str) -> Option<BindingSource> {
        self.bound(name).map(|b| b.source)
    }

    /// Binds everything clap saw for this command's parameter table.
    pub fn from_matches(
        descriptor: &'static CommandDescriptor,
        matches: &ArgMatches,
    ) -> CmdletResult<Self> {
        let mut params = Self::new(descriptor);
        for spec in descriptor.params {
            let source = match matches.value_source(spec.name) {
                Some(ValueSource::DefaultValue) => BindingSource::Default,
                Some(_) => BindingSource::CommandLine,
                None => continue,
            };
            let value = match spec.kind {
                ParamKind::List => ParamValue::List(
                    matches
                        .get_many::<String>(spec.name)
                        .into_iter()
                        .flatten()
                        .map(|s| s.trim())
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect(),
                ),
                ParamKind::Map => {
                    let mut map = BTreeMap::new();
                    for entry in matches.get_many::<String>(spec.name).into_iter().flatten() {
                        spec.extend_map(&mut map, entry)?;
                    }
                    ParamValue::Map(map)
                }
                _ => match matches.get_one::<String>(spec.name) {
                    Some(text) => spec.coerce_text(text)?,
                    None => continue,
                },
            };
            params.values.insert(spec.name, Bound { value, source });
        }
        Ok(params)
    }

    /// Binds pipeline input. An object binds its like-named properties; a
    /// bare scalar binds to the primary parameter. Values already given on
    /// the command line win.
    pub fn merge_pipeline(&mut self, input: &Value) -> CmdletResult<()> {
        match input {
            Value::Null => Ok(()),
            Value::Object(obj) => {
                for (key, value) in obj {
                    let Some(spec) = self.descriptor.lookup(key) else {
                        debug!(
                            "Ignoring pipeline property {key}: not a parameter of {}",
                            self.descriptor.name
                        );
                        continue;
                    };
                    if self.source(spec.name) == Some(BindingSource::CommandLine) {
                        continue;
                    }
                    self.bind_json(spec.name, value, BindingSource::Pipeline)?;
                }
                Ok(())
            }
            Value::Array(_) => Err(CmdletError::PipelineInput(
                "expected a JSON object or a single value, got an array".to_string(),
            )),
            scalar => {
                let primary = self.descriptor.primary;
                if self.source(primary) != Some(BindingSource::CommandLine) {
                    self.bind_json(primary, scalar, BindingSource::Pipeline)?;
                }
                Ok(())
            }
        }
    }

    /// Binds a configured default unless something else already bound the parameter.
    pub fn bind_default(&mut self, name: &str, value: &Value) -> CmdletResult<()> {
        if self.is_bound(name) {
            return Ok(());
        }
        self.bind_json(name, value, BindingSource::Default)
    }

    fn typed<T>(
        &self,
        name: &str,
        extract: impl FnOnce(&ParamValue) -> Option<T>,
    ) -> CmdletResult<Option<T>> {
        let spec = self.spec(name)?;
        match self.values.get(spec.name).map(|b| &b.value) {
            None | Some(ParamValue::Null) => Ok(None),
            Some(value) => extract(value).map(Some).ok_or_else(|| CmdletError::TypeCoercion {
                param: spec.name.to_string(),
                expected: spec.kind.name(),
                value: value.to_json().to_string(),
            }),
        }
    }

    pub fn string(&self, name: &str) -> CmdletResult<Option<String>> {
        self.typed(name, |v| match v {
            ParamValue::String(s) => Some(s.clone()),
            _ => None,
        })
    }

    pub fn int(&self, name: &str) -> CmdletResult<Option<i64>> {
        self.typed(name, |v| match v {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        })
    }

    pub fn float(&self, name: &str) -> CmdletResult<Option<f64>> {
        self.typed(name, |v| match v {
            ParamValue::Float(f) => Some(*f),
            ParamValue::Int(i) => Some(*i as f64),
            _ => None,
        })
    }

    pub fn bool(&self, name: &str) -> CmdletResult<Option<bool>> {
        self.typed(name, |v| match v {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        })
    }

    pub fn list(&self, name: &str) -> CmdletResult<Option<Vec<String>>> {
        self.typed(name, |v| match v {
            ParamValue::List(items) => Some(items.clone()),
            _ => None,
        })
    }

    pub fn map(&self, name: &str) -> CmdletResult<Option<BTreeMap<String, String>>> {
        self.typed(name, |v| match v {
            ParamValue::Map(map) => Some(map.clone()),
            _ => None,
        })
    }

    pub fn blob(&self, name: &str) -> CmdletResult<Option<Vec<u8>>> {
        self.typed(name, |v| match v {
            ParamValue::Blob(bytes) => Some(bytes.clone()),
            _ => None,
        })
    }

    /// Deserializes a structure parameter into the request type it feeds.
    pub fn structure<T: DeserializeOwned>(&self, name: &str) -> CmdletResult<Option<T>> {
        let spec = self.spec(name)?;
        let raw = self.typed(name, |v| match v {
            ParamValue::Structure(value) => Some(value.clone()),
            _ => None,
        })?;
        raw.map(|value| {
            serde_json::from_value(value.clone()).map_err(|_| CmdletError::TypeCoercion {
                param: spec.name.to_string(),
                expected: spec.kind.name(),
                value: value.to_string(),
            })
        })
        .transpose()
    }
}
