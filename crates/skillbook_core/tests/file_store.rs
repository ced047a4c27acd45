use skillbook_core::{
    EmployeeRecord, EmployeeRepository, JsonTableEmployeeRepository, RepoError, UpsertOutcome,
};

#[test]
fn load_on_missing_file_is_empty_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonTableEmployeeRepository::new(dir.path().join("employees.json"));

    assert!(repo.load().unwrap().is_empty());
    assert!(repo.find_by_id(101).unwrap().is_none());
    assert!(!repo.exists(101).unwrap());
}

#[test]
fn load_on_zero_length_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    std::fs::write(&path, "").unwrap();

    let repo = JsonTableEmployeeRepository::new(&path);
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn load_on_corrupt_file_reports_corruption() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    std::fs::write(&path, "not a table {{{").unwrap();

    let repo = JsonTableEmployeeRepository::new(&path);
    let err = repo.load().unwrap_err();
    assert!(matches!(err, RepoError::Corrupt(_)));
}

#[test]
fn upsert_on_corrupt_file_applies_no_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    std::fs::write(&path, "not a table {{{").unwrap();

    let mut repo = JsonTableEmployeeRepository::new(&path);
    let err = repo.upsert(&EmployeeRecord::new(101)).unwrap_err();
    assert!(matches!(err, RepoError::Corrupt(_)));

    // The broken table file is left exactly as it was.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "not a table {{{");
}

#[test]
fn upsert_then_reopen_roundtrips_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");

    let mut record = EmployeeRecord::new(101);
    record.department_name = "Sales".to_string();
    record.skill_7 = "Excel".to_string();

    {
        let mut repo = JsonTableEmployeeRepository::new(&path);
        assert_eq!(repo.upsert(&record).unwrap(), UpsertOutcome::Inserted);
    }

    let reopened = JsonTableEmployeeRepository::new(&path);
    let loaded = reopened.find_by_id(101).unwrap().unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn upsert_existing_key_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = JsonTableEmployeeRepository::new(dir.path().join("employees.json"));

    let mut record = EmployeeRecord::new(101);
    record.department_name = "Sales".to_string();
    assert_eq!(repo.upsert(&record).unwrap(), UpsertOutcome::Inserted);

    record.department_name = "Marketing".to_string();
    assert_eq!(repo.upsert(&record).unwrap(), UpsertOutcome::Updated);

    let rows = repo.load().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].department_name, "Marketing");
}

#[test]
fn rows_keep_append_order_across_rewrites() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = JsonTableEmployeeRepository::new(dir.path().join("employees.json"));

    for id in [5, 3, 9] {
        repo.upsert(&EmployeeRecord::new(id)).unwrap();
    }
    // Updating the middle row must not move it.
    let mut middle = EmployeeRecord::new(3);
    middle.work_location = "Derby".to_string();
    repo.upsert(&middle).unwrap();

    let ids: Vec<i64> = repo.load().unwrap().iter().map(|r| r.employee_id).collect();
    assert_eq!(ids, vec![5, 3, 9]);
}

#[test]
fn every_column_is_written_to_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    let mut repo = JsonTableEmployeeRepository::new(&path);
    repo.upsert(&EmployeeRecord::new(101)).unwrap();

    let rows: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let row = &rows[0];
    for column in [
        "employee_id",
        "career_band",
        "bf_level_1",
        "bf_level_5",
        "department_name",
        "work_location",
        "skill_1",
        "skill_10",
    ] {
        assert!(!row[column].is_null(), "column {column} missing from row");
    }
}

#[test]
fn rows_with_missing_columns_load_with_empty_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    std::fs::write(
        &path,
        r#"[{"employee_id": 7, "department_name": "Sales"}]"#,
    )
    .unwrap();

    let repo = JsonTableEmployeeRepository::new(&path);
    let loaded = repo.find_by_id(7).unwrap().unwrap();
    assert_eq!(loaded.department_name, "Sales");
    assert_eq!(loaded.career_band, "");
    assert_eq!(loaded.skill_1, "");
}

#[test]
fn invalid_search_ids_do_not_touch_the_backend() {
    // A directory path cannot be read as a table file; a guard miss
    // would surface as an I/O error here.
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonTableEmployeeRepository::new(dir.path());

    assert!(repo.find_by_id(0).unwrap().is_none());
    assert!(repo.find_by_id(-3).unwrap().is_none());
    assert!(!repo.exists(0).unwrap());
}

#[test]
fn upsert_rejects_non_positive_ids_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    let mut repo = JsonTableEmployeeRepository::new(&path);

    let err = repo.upsert(&EmployeeRecord::new(-2)).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(!path.exists());
}
