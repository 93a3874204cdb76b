use nhl_core::EncodedCell;
use serde::Serialize;

/// Placed items split into in-game drop commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropReport {
    /// Full command prefix, e.g. `!drop`.
    pub command: String,
    /// Item words as four-or-more digit uppercase hex, `group` per entry.
    pub groups: Vec<Vec<String>>,
}

impl DropReport {
    pub fn new(items: &[EncodedCell], group: usize, prefix: &str) -> Self {
        Self {
            command: format!("{prefix}drop"),
            groups: items
                .chunks(group.max(1))
                .map(|chunk| chunk.iter().map(|item| format!("{item:04X}")).collect())
                .collect(),
        }
    }

    /// One `command item item ...` line per group.
    pub fn lines(&self) -> Vec<String> {
        self.groups
            .iter()
            .map(|group| format!("{} {}", self.command, group.join(" ")))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
