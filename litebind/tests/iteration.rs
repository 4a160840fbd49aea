//! Integration tests for row visitors, bounded drains and sink collection.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};

use litebind::{Connection, Step};
use rstest::rstest;

fn staff_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE staff (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL
        )",
    )
    .unwrap();

    {
        let mut stmt = conn
            .prepare("INSERT INTO staff (name, age) VALUES (?1, ?2)")
            .unwrap();
        for (name, age) in [("Paul", 32i64), ("Allen", 25), ("Teddy", 23)] {
            stmt.rexec((name, age)).unwrap();
        }
    }
    conn
}

#[rstest]
fn test_void_visitor_sees_every_row() {
    let conn = staff_db();
    let mut stmt = conn
        .prepare("SELECT name, age FROM staff ORDER BY id")
        .unwrap();

    let mut seen = Vec::new();
    let status = stmt.for_each_row(|name: String, age: i64| {
        seen.push((name, age));
    });

    assert_eq!(status, Step::Done);
    assert_eq!(
        seen,
        vec![
            ("Paul".to_string(), 32),
            ("Allen".to_string(), 25),
            ("Teddy".to_string(), 23),
        ]
    );
}

#[rstest]
fn test_bool_visitor_stops_on_false() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT name FROM staff ORDER BY id").unwrap();

    let mut seen = Vec::new();
    let status = stmt.for_each_row(|name: String| -> bool {
        seen.push(name);
        false
    });

    assert_eq!(status, Step::Row);
    assert_eq!(seen, vec!["Paul".to_string()]);

    // The cursor stays on the row the visitor declined to continue past.
    assert_eq!(stmt.step().unwrap(), Step::Row);
    assert_eq!(stmt.row().get_text(0), "Allen");
}

#[rstest]
fn test_counted_visitor_reports_zero_based_indices() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT name FROM staff ORDER BY id").unwrap();

    let mut indices = Vec::new();
    let status = stmt.for_each_row_counted(|index: u64, _name: String| {
        indices.push(index);
    });

    assert_eq!(status, Step::Done);
    assert_eq!(indices, vec![0, 1, 2]);
}

#[rstest]
fn test_counted_visitor_stops_on_false() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT name FROM staff ORDER BY id").unwrap();

    let status = stmt.for_each_row_counted(|index: u64, _name: String| -> bool { index < 1 });
    assert_eq!(status, Step::Row);
}

#[rstest]
fn test_for_each_step_advances_without_decoding() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT name FROM staff").unwrap();

    let mut steps = 0usize;
    let status = stmt.for_each_step(|| {
        steps += 1;
        true
    });

    assert_eq!(status, Step::Done);
    assert_eq!(steps, 3);
}

#[rstest]
fn test_visitors_honor_a_column_offset() {
    let conn = staff_db();
    let mut stmt = conn
        .prepare("SELECT id, name, age FROM staff ORDER BY id")
        .unwrap();

    let mut names = Vec::new();
    let status = stmt.for_each_row_at(1, |name: String| {
        names.push(name);
    });

    assert_eq!(status, Step::Done);
    assert_eq!(names, vec!["Paul", "Allen", "Teddy"]);
}

#[rstest]
fn test_drain_into_collects_until_exhaustion() {
    let conn = staff_db();
    let mut stmt = conn
        .prepare("SELECT name, age FROM staff ORDER BY id")
        .unwrap();

    let mut rows: Vec<(String, i64)> = Vec::new();
    let status = stmt.drain_into(&mut rows);

    assert_eq!(status, Step::Done);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], ("Paul".to_string(), 32));
}

#[rstest]
fn test_bounded_drain_leaves_the_cursor_on_the_last_row() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT name FROM staff ORDER BY id").unwrap();

    let mut rows: Vec<(String,)> = Vec::new();
    let status = stmt.drain_n_into(2, &mut rows);

    assert_eq!(status, Step::Row);
    assert_eq!(rows, vec![("Paul".to_string(),), ("Allen".to_string(),)]);

    // The next step picks up right after the drained rows.
    assert_eq!(stmt.step().unwrap(), Step::Row);
    assert_eq!(stmt.row().get_text(0), "Teddy");
    assert_eq!(stmt.step().unwrap(), Step::Done);
}

#[rstest]
fn test_bounded_drain_with_zero_limit_reports_done() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT name FROM staff").unwrap();

    let mut rows: Vec<(String,)> = Vec::new();
    assert_eq!(stmt.drain_n_into(0, &mut rows), Step::Done);
    assert!(rows.is_empty());

    // Nothing was consumed, so a subsequent drain still sees every row.
    assert_eq!(stmt.drain_into(&mut rows), Step::Done);
    assert_eq!(rows.len(), 3);
}

#[rstest]
fn test_bounded_drain_past_the_end_reports_done() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT name FROM staff").unwrap();

    let mut rows: Vec<(String,)> = Vec::new();
    assert_eq!(stmt.drain_n_into(10, &mut rows), Step::Done);
    assert_eq!(rows.len(), 3);
}

#[rstest]
fn test_map_sink_keys_on_the_leading_column() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT name, age FROM staff").unwrap();

    let mut ages: BTreeMap<String, i64> = BTreeMap::new();
    assert_eq!(stmt.drain_into(&mut ages), Step::Done);

    assert_eq!(ages.len(), 3);
    assert_eq!(ages.get("Allen"), Some(&25));
}

#[rstest]
fn test_set_sink_deduplicates() {
    let conn = staff_db();
    conn.exec("INSERT INTO staff (name, age) VALUES (?1, ?2)", ("Mark", 25i64))
        .unwrap();

    let mut stmt = conn.prepare("SELECT age FROM staff").unwrap();
    let mut distinct: HashSet<i64> = HashSet::new();
    assert_eq!(stmt.drain_into(&mut distinct), Step::Done);

    assert_eq!(distinct.len(), 3);
    assert!(distinct.contains(&25));
}

#[rstest]
fn test_deque_sink_preserves_row_order() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT name FROM staff ORDER BY id").unwrap();

    let mut queue: VecDeque<(String,)> = VecDeque::new();
    assert_eq!(stmt.drain_into(&mut queue), Step::Done);

    assert_eq!(queue.front(), Some(&("Paul".to_string(),)));
    assert_eq!(queue.back(), Some(&("Teddy".to_string(),)));
}

#[rstest]
fn test_heap_sink_surfaces_the_largest_value_first() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT age FROM staff").unwrap();

    let mut ages: BinaryHeap<(i64,)> = BinaryHeap::new();
    assert_eq!(stmt.drain_into(&mut ages), Step::Done);

    assert_eq!(ages.pop(), Some((32,)));
}

#[rstest]
fn test_btree_set_sink_sorts_and_deduplicates() {
    let conn = staff_db();
    conn.exec("INSERT INTO staff (name, age) VALUES (?1, ?2)", ("Mark", 25i64))
        .unwrap();

    let mut stmt = conn.prepare("SELECT age FROM staff").unwrap();
    let mut ages: BTreeSet<(i64,)> = BTreeSet::new();
    assert_eq!(stmt.drain_into(&mut ages), Step::Done);

    assert_eq!(ages.len(), 3);
    assert_eq!(ages.iter().next(), Some(&(23,)));
}

#[rstest]
fn test_hash_map_sink_collects_pairs() {
    let conn = staff_db();
    let mut stmt = conn.prepare("SELECT name, age FROM staff").unwrap();

    let mut ages: HashMap<String, i64> = HashMap::new();
    assert_eq!(stmt.drain_into(&mut ages), Step::Done);

    assert_eq!(ages.len(), 3);
    assert_eq!(ages.get("Teddy"), Some(&23));
}

#[rstest]
fn test_statement_reruns_after_reset_and_rebind() {
    let conn = staff_db();
    let mut stmt = conn
        .prepare("SELECT name FROM staff WHERE age > ?1 ORDER BY id")
        .unwrap();

    let mut older = Vec::new();
    stmt.bind_from(1, (24i64,)).unwrap();
    stmt.for_each_row(|name: String| older.push(name));
    assert_eq!(older, vec!["Paul", "Allen"]);

    let mut all = Vec::new();
    stmt.reset();
    stmt.bind_from(1, (0i64,)).unwrap();
    stmt.for_each_row(|name: String| all.push(name));
    assert_eq!(all.len(), 3);
}
