//! Output formatting for init command results.

use super::execute::InitResult;
use crate::output::Outputable;

impl Outputable for InitResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        if self.dropped {
            lines.push("Dropped existing staff table.".to_string());
        }
        lines.push("Staff table ready.".to_string());
        if self.seeded > 0 {
            lines.push(format!("Seeded {} sample rows.", self.seeded));
        }

        lines.join("\n")
    }
}
