use std::error::Error;

use litebind::{Connection, Step};
use serde::Serialize;

use super::HeadCmd;
use crate::commands::Execute;

/// One row of the head listing
#[derive(Debug, Clone, Serialize)]
pub struct HeadRow {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Result of the head command execution
#[derive(Debug, Serialize)]
pub struct HeadResult {
    pub requested: usize,
    pub more: bool,
    pub rows: Vec<HeadRow>,
}

impl Execute for HeadCmd {
    type Output = HeadResult;

    fn execute(self, conn: &Connection) -> Result<Self::Output, Box<dyn Error>> {
        let limit = self.limit as usize;
        let mut stmt = conn.prepare("SELECT id, name, age FROM staff ORDER BY id")?;

        let mut fetched: Vec<(i64, String, i64)> = Vec::new();
        let status = stmt.drain_n_into(limit, &mut fetched);

        let rows = fetched
            .into_iter()
            .map(|(id, name, age)| HeadRow { id, name, age })
            .collect();

        // A bounded drain that fills its quota may have stopped exactly at
        // the end; one more step settles whether rows remain.
        let more = status == Step::Row && stmt.step()? == Step::Row;

        Ok(HeadResult {
            requested: limit,
            more,
            rows,
        })
    }
}
