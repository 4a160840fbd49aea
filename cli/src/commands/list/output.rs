//! Output formatting for list command results.

use super::execute::ListResult;
use crate::output::{format_salary, Outputable};

impl Outputable for ListResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        match &self.city {
            Some(city) => lines.push(format!("Staff in {} ({}):", city, self.members.len())),
            None => lines.push(format!("Staff ({}):", self.members.len())),
        }

        if self.members.is_empty() {
            lines.push("No staff found.".to_string());
            return lines.join("\n");
        }

        for m in &self.members {
            let city = m.city.as_deref().unwrap_or("-");
            lines.push(format!(
                "  #{} {} (age {}, city {}, salary {})",
                m.id,
                m.name,
                m.age,
                city,
                format_salary(m.salary)
            ));
        }

        lines.join("\n")
    }
}
