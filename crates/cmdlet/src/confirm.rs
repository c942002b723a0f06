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

use std::io::{BufRead, IsTerminal, Write};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{CmdletError, CmdletResult};

/// How disruptive a command is. Ordered, so it compares against the
/// configured confirmation threshold.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmImpact {
    None,
    Low,
    #[default]
    Medium,
    High,
}

pub trait Confirm: Send + Sync {
    /// Asks whether `action` may be performed on `target`.
    fn confirm(&self, action: &str, target: &str) -> CmdletResult<bool>;
}

/// Prompts on stderr and reads the answer from stdin.
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, action: &str, target: &str) -> CmdletResult<bool> {
        let stdin = std::io::stdin();
        require_terminal(stdin.is_terminal(), action, target)?;
        prompt(&mut stdin.lock(), action, target).map_err(CmdletError::Prompt)
    }
}

// A prompt nobody can answer is an error, not a decline: the caller has to
// know that nothing ran.
fn require_terminal(is_terminal: bool, action: &str, target: &str) -> CmdletResult<()> {
    if is_terminal {
        return Ok(());
    }
    warn!("{action} on \"{target}\" needs confirmation but stdin is not a terminal");
    Err(CmdletError::ConfirmationUnavailable {
        action: action.to_string(),
        target: target.to_string(),
    })
}

fn prompt(input: &mut impl BufRead, action: &str, target: &str) -> std::io::Result<bool> {
    let mut stderr = std::io::stderr().lock();
    write!(
        stderr,
        "Are you sure you want to perform this action?\n\
         Performing the operation \"{action}\" on target \"{target}\".\n\
         [y] Yes  [N] No (default is \"N\"): "
    )?;
    stderr.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Answers yes to everything.
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _action: &str, _target: &str) -> CmdletResult<bool> {
        Ok(true)
    }
}

/// Returns whether the command has to ask before going ahead. Read-only
/// commands (impact `None`) never ask; `force` skips the prompt altogether.
pub fn needs_confirmation(force: bool, impact: ConfirmImpact, threshold: ConfirmImpact) -> bool {
    !force && impact != ConfirmImpact::None && impact >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_is_ordered() {
        assert!(ConfirmImpact::None < ConfirmImpact::Low);
        assert!(ConfirmImpact::Medium < ConfirmImpact::High);
        assert_eq!(ConfirmImpact::default(), ConfirmImpact::Medium);
    }

    #[test]
    fn asks_at_or_above_threshold() {
        assert!(needs_confirmation(false, ConfirmImpact::Medium, ConfirmImpact::Medium));
        assert!(needs_confirmation(false, ConfirmImpact::High, ConfirmImpact::Medium));
        assert!(!needs_confirmation(false, ConfirmImpact::Medium, ConfirmImpact::High));
        assert!(!needs_confirmation(false, ConfirmImpact::None, ConfirmImpact::None));
    }

    #[test]
    fn force_skips_prompt() {
        assert!(!needs_confirmation(true, ConfirmImpact::High, ConfirmImpact::Low));
    }

    #[test]
    fn no_terminal_is_an_error() {
        let err = require_terminal(false, "DeleteModel", "m1").unwrap_err();
        assert!(matches!(err, CmdletError::ConfirmationUnavailable { .. }));
        assert!(err.is_usage());
        assert!(err.to_string().contains("--force"));
        require_terminal(true, "DeleteModel", "m1").unwrap();
    }

    #[test]
    fn prompt_accepts_yes_only() {
        let answer = |text: &str| prompt(&mut text.as_bytes(), "DeleteModel", "m1").unwrap();
        assert!(answer("y\n"));
        assert!(answer("YES\n"));
        assert!(!answer("\n"));
        assert!(!answer("no\n"));
        assert!(!answer(""));
    }

    #[test]
    fn threshold_parses_from_config_text() {
        let impact: ConfirmImpact = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(impact, ConfirmImpact::High);
    }
}
