use std::error::Error;

use litebind::Connection;
use serde::Serialize;

use super::ListCmd;
use crate::commands::Execute;

/// A staff member row
#[derive(Debug, Clone, Serialize)]
pub struct StaffMember {
    pub id: i64,
    pub name: String,
    pub age: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

/// Result of the list command execution
#[derive(Debug, Serialize)]
pub struct ListResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub members: Vec<StaffMember>,
}

impl Execute for ListCmd {
    type Output = ListResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        let mut stmt = match &self.city {
            Some(city) => {
                let mut stmt = conn.prepare(
                    "SELECT id, name, age, city, salary FROM staff WHERE city = ?1 ORDER BY id",
                )?;
                stmt.bind_at(1, city.as_str())?;
                stmt
            }
            None => conn.prepare("SELECT id, name, age, city, salary FROM staff ORDER BY id")?,
        };

        let mut members = Vec::new();
        stmt.for_each_row(
            |id: i64, name: String, age: i64, city: Option<String>, salary: Option<f64>| {
                members.push(StaffMember {
                    id,
                    name,
                    age,
                    city,
                    salary,
                });
            },
        );

        Ok(ListResult {
            city: self.city,
            members,
        })
    }
}
