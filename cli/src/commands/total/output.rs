//! Output formatting for total command results.

use super::execute::TotalResult;
use crate::output::Outputable;

impl Outputable for TotalResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        match &self.city {
            Some(city) => lines.push(format!("Totals for {}:", city)),
            None => lines.push("Totals:".to_string()),
        }
        lines.push(format!("  headcount:   {}", self.headcount));
        lines.push(format!("  average age: {:.1}", self.average_age));
        lines.push(format!("  payroll:     {:.2}", self.payroll));

        lines.join("\n")
    }
}
