use std::error::Error;

use litebind::Connection;
use serde::Serialize;

use super::AddCmd;
use crate::commands::Execute;

/// Result of the add command execution
#[derive(Debug, Serialize)]
pub struct AddResult {
    pub id: i64,
    pub name: String,
    pub age: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl Execute for AddCmd {
    type Output = AddResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        conn.exec(
            "INSERT INTO staff (name, age, city, salary) VALUES (?1, ?2, ?3, ?4)",
            (
                self.name.as_str(),
                self.age,
                self.city.as_deref(),
                self.salary,
            ),
        )?;

        Ok(AddResult {
            id: conn.last_insert_rowid(),
            name: self.name,
            age: self.age,
            city: self.city,
            salary: self.salary,
        })
    }
}
