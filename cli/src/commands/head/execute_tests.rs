//! Execute tests for the head command.

#[cfg(test)]
mod tests {
    use super::super::HeadCmd;
    use crate::commands::{Execute, InitCmd};
    use litebind::Connection;
    use rstest::{fixture, rstest};

    #[fixture]
    fn seeded_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        InitCmd {
            seed: true,
            force: false,
        }
        .execute(&conn)
        .unwrap();
        conn
    }

    #[rstest]
    fn test_head_returns_the_first_rows(seeded_conn: Connection) {
        let result = HeadCmd { limit: 2 }.execute(&seeded_conn).unwrap();

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0].name, "Paul");
        assert_eq!(result.rows[1].name, "Allen");
        assert!(result.more);
    }

    #[rstest]
    fn test_head_past_the_end_reports_everything(seeded_conn: Connection) {
        let result = HeadCmd { limit: 100 }.execute(&seeded_conn).unwrap();

        assert_eq!(result.rows.len(), 4);
        assert!(!result.more);
    }

    #[rstest]
    fn test_head_exactly_at_the_end_reports_no_more(seeded_conn: Connection) {
        let result = HeadCmd { limit: 4 }.execute(&seeded_conn).unwrap();

        assert_eq!(result.rows.len(), 4);
        assert!(!result.more);
    }

    #[rstest]
    fn test_head_on_an_empty_table() {
        let conn = Connection::open_in_memory().unwrap();
        InitCmd {
            seed: false,
            force: false,
        }
        .execute(&conn)
        .unwrap();

        let result = HeadCmd { limit: 5 }.execute(&conn).unwrap();
        assert!(result.rows.is_empty());
        assert!(!result.more);
    }

    #[rstest]
    fn test_head_reads_an_on_disk_database() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = crate::cli::resolve_db_path(Some(dir.path().join("staff.sqlite3")));
        assert_eq!(db_path, dir.path().join("staff.sqlite3"));

        {
            let conn = Connection::open(&db_path).unwrap();
            InitCmd {
                seed: true,
                force: false,
            }
            .execute(&conn)
            .unwrap();
        }

        let conn = Connection::open(&db_path).unwrap();
        let result = HeadCmd { limit: 2 }.execute(&conn).unwrap();
        assert_eq!(result.rows[0].name, "Paul");
        assert_eq!(result.rows[1].name, "Allen");
        assert!(result.more);
    }
}
