use std::error::Error;

use litebind::Connection;
use serde::Serialize;

use super::InitCmd;
use crate::commands::Execute;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS staff (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    city TEXT,
    salary REAL
)";

/// Sample roster loaded by `init --seed`.
const SEED_ROWS: [(&str, i64, &str, f64); 4] = [
    ("Paul", 32, "California", 20000.0),
    ("Allen", 25, "Texas", 15000.0),
    ("Teddy", 23, "Norway", 20000.0),
    ("Mark", 25, "Richmond", 65000.0),
];

/// Result of the init command execution
#[derive(Debug, Serialize)]
pub struct InitResult {
    pub dropped: bool,
    pub seeded: usize,
}

impl Execute for InitCmd {
    type Output = InitResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        if self.force {
            conn.execute_batch("DROP TABLE IF EXISTS staff")?;
        }
        conn.execute_batch(SCHEMA)?;

        let mut seeded = 0;
        if self.seed {
            let mut stmt = conn
                .prepare("INSERT INTO staff (name, age, city, salary) VALUES (?1, ?2, ?3, ?4)")?;
            for (name, age, city, salary) in SEED_ROWS {
                stmt.rexec((name, age, city, salary))?;
                seeded += 1;
            }
        }

        Ok(InitResult {
            dropped: self.force,
            seeded,
        })
    }
}
