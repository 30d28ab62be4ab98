//! `rn rules` — print the classification rule table.
//!
//! The trigger table is declarative so it can be inspected; this
//! command is that inspection surface.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use relnav_core::classify::RULE_TABLE;
use relnav_core::model::ChangeKind;

use crate::output::{OutputMode, emit_json, pretty_rule};

#[derive(Serialize)]
struct RuleEntry {
    kind: ChangeKind,
    priority: u8,
    triggers: Vec<&'static str>,
}

/// Execute `rn rules`.
///
/// # Errors
///
/// Returns an error when writing to `w` fails.
pub fn run_rules(mode: OutputMode, w: &mut dyn Write) -> Result<()> {
    let entries: Vec<RuleEntry> = RULE_TABLE
        .iter()
        .map(|(kind, triggers)| RuleEntry {
            kind: *kind,
            priority: kind.priority(),
            triggers: triggers.to_vec(),
        })
        .collect();

    if mode.is_json() {
        return emit_json(&entries, w);
    }

    if mode == OutputMode::Pretty {
        writeln!(w, "classification rules (evaluation order)")?;
        pretty_rule(w)?;
    }
    for entry in &entries {
        writeln!(
            w,
            "{} (display priority {}): {}",
            entry.kind,
            entry.priority,
            entry.triggers.join("  ")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_rules;
    use crate::output::OutputMode;

    #[test]
    fn json_lists_every_kind_once() {
        let mut buf = Vec::new();
        run_rules(OutputMode::Json, &mut buf).expect("render rules");
        let entries: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
        let kinds: Vec<&str> = entries
            .as_array()
            .expect("array")
            .iter()
            .map(|e| e["kind"].as_str().expect("kind"))
            .collect();
        assert_eq!(kinds.len(), 7);
        assert!(kinds.contains(&"breaking"));
        assert!(kinds.contains(&"behavior_change"));
    }
}
