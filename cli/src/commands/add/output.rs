//! Output formatting for add command results.

use super::execute::AddResult;
use crate::output::{format_salary, Outputable};

impl Outputable for AddResult {
    fn to_table(&self) -> String {
        let city = self.city.as_deref().unwrap_or("-");
        format!(
            "Added #{}: {} (age {}, city {}, salary {})",
            self.id,
            self.name,
            self.age,
            city,
            format_salary(self.salary)
        )
    }
}
