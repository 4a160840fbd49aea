use std::error::Error;

use litebind::Connection;
use serde::Serialize;

use super::TotalCmd;
use crate::commands::Execute;

/// Result of the total command execution
#[derive(Debug, Serialize)]
pub struct TotalResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub headcount: i64,
    pub average_age: f64,
    pub payroll: f64,
}

impl Execute for TotalCmd {
    type Output = TotalResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        // Aggregates always produce exactly one row, even over an empty
        // table, so exec_get cannot miss.
        let (headcount, average_age, payroll) = match &self.city {
            Some(city) => conn.exec_get(
                "SELECT count(*), coalesce(avg(age), 0.0), coalesce(sum(salary), 0.0) \
                 FROM staff WHERE city = ?1",
                (city.as_str(),),
            )?,
            None => conn.exec_get(
                "SELECT count(*), coalesce(avg(age), 0.0), coalesce(sum(salary), 0.0) FROM staff",
                (),
            )?,
        };

        Ok(TotalResult {
            city: self.city,
            headcount,
            average_age,
            payroll,
        })
    }
}
