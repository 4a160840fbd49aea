//! Output formatting tests for list command.

#[cfg(test)]
mod tests {
    use super::super::execute::{ListResult, StaffMember};
    use rstest::{fixture, rstest};

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const EMPTY_TABLE: &str = "\
Staff (0):
No staff found.";

    const ROSTER_TABLE: &str = "\
Staff (2):
  #1 Paul (age 32, city California, salary 20000.00)
  #2 Allen (age 25, city -, salary -)";

    const CITY_TABLE: &str = "\
Staff in Texas (1):
  #2 Allen (age 25, city Texas, salary 15000.00)";

    const ROSTER_JSON: &str = r#"{
  "members": [
    {
      "id": 1,
      "name": "Paul",
      "age": 32,
      "city": "California",
      "salary": 20000.0
    },
    {
      "id": 2,
      "name": "Allen",
      "age": 25
    }
  ]
}"#;

    // =========================================================================
    // Fixtures
    // =========================================================================

    #[fixture]
    fn empty_result() -> ListResult {
        ListResult {
            city: None,
            members: vec![],
        }
    }

    #[fixture]
    fn roster_result() -> ListResult {
        ListResult {
            city: None,
            members: vec![
                StaffMember {
                    id: 1,
                    name: "Paul".to_string(),
                    age: 32,
                    city: Some("California".to_string()),
                    salary: Some(20000.0),
                },
                StaffMember {
                    id: 2,
                    name: "Allen".to_string(),
                    age: 25,
                    city: None,
                    salary: None,
                },
            ],
        }
    }

    #[fixture]
    fn city_result() -> ListResult {
        ListResult {
            city: Some("Texas".to_string()),
            members: vec![StaffMember {
                id: 2,
                name: "Allen".to_string(),
                age: 25,
                city: Some("Texas".to_string()),
                salary: Some(15000.0),
            }],
        }
    }

    // =========================================================================
    // Tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: ListResult,
        expected: EMPTY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_roster,
        fixture: roster_result,
        fixture_type: ListResult,
        expected: ROSTER_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_city_filter,
        fixture: city_result,
        fixture_type: ListResult,
        expected: CITY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_format_json,
        fixture: roster_result,
        fixture_type: ListResult,
        expected: ROSTER_JSON,
        format: Json,
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: city_result,
        fixture_type: ListResult,
        contains: ["city: Texas", "Allen"],
    }
}
