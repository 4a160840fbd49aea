//! Output formatting for head command results.

use super::execute::HeadResult;
use crate::output::Outputable;

impl Outputable for HeadResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("First {} staff members:", self.requested));

        if self.rows.is_empty() {
            lines.push("No staff found.".to_string());
            return lines.join("\n");
        }

        for row in &self.rows {
            lines.push(format!("  #{} {} (age {})", row.id, row.name, row.age));
        }

        if self.more {
            lines.push("  ...".to_string());
        }

        lines.join("\n")
    }
}
