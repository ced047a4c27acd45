//! Relational (SQLite) employee store implementation.
//!
//! # Responsibility
//! - Map the store contract onto the `employees` table.
//! - Keep SQL details inside this persistence boundary.
//!
//! # Invariants
//! - The exists-check and write of an upsert run inside one
//!   transaction, so a failed save never leaves a partial row.
//! - Connections must have the schema applied before use; `try_new`
//!   rejects anything else.

use crate::db::migrations::latest_version;
use crate::model::employee::EmployeeRecord;
use crate::repo::{EmployeeRepository, RepoError, RepoResult, UpsertOutcome};
use rusqlite::{params, Connection, Row, TransactionBehavior};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    employee_id,
    career_band,
    bf_level_1,
    bf_level_2,
    bf_level_3,
    bf_level_4,
    bf_level_5,
    department_name,
    work_location,
    skill_1,
    skill_2,
    skill_3,
    skill_4,
    skill_5,
    skill_6,
    skill_7,
    skill_8,
    skill_9,
    skill_10
FROM employees";

/// SQLite-backed employee store.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Constructs a store over a bootstrapped connection.
    ///
    /// # Errors
    /// - [`RepoError::UninitializedConnection`] when the connection's
    ///   `user_version` does not match the schema this binary expects.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn load(&self) -> RepoResult<Vec<EmployeeRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY rowid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_employee_row(row)?);
        }

        Ok(records)
    }

    fn find_by_id(&self, employee_id: i64) -> RepoResult<Option<EmployeeRecord>> {
        if employee_id <= 0 {
            return Ok(None);
        }

        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE employee_id = ?1;"))?;

        let mut rows = stmt.query(params![employee_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn exists(&self, employee_id: i64) -> RepoResult<bool> {
        if employee_id <= 0 {
            return Ok(false);
        }

        let found: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = ?1);",
            params![employee_id],
            |row| row.get(0),
        )?;
        Ok(found == 1)
    }

    fn upsert(&mut self, record: &EmployeeRecord) -> RepoResult<UpsertOutcome> {
        record.validate()?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let found: i64 = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = ?1);",
            params![record.employee_id],
            |row| row.get(0),
        )?;

        let outcome = if found == 1 {
            tx.execute(
                "UPDATE employees
                 SET
                    career_band = ?2,
                    bf_level_1 = ?3,
                    bf_level_2 = ?4,
                    bf_level_3 = ?5,
                    bf_level_4 = ?6,
                    bf_level_5 = ?7,
                    department_name = ?8,
                    work_location = ?9,
                    skill_1 = ?10,
                    skill_2 = ?11,
                    skill_3 = ?12,
                    skill_4 = ?13,
                    skill_5 = ?14,
                    skill_6 = ?15,
                    skill_7 = ?16,
                    skill_8 = ?17,
                    skill_9 = ?18,
                    skill_10 = ?19
                 WHERE employee_id = ?1;",
                &employee_params(record),
            )?;
            UpsertOutcome::Updated
        } else {
            tx.execute(
                "INSERT INTO employees (
                    employee_id,
                    career_band,
                    bf_level_1,
                    bf_level_2,
                    bf_level_3,
                    bf_level_4,
                    bf_level_5,
                    department_name,
                    work_location,
                    skill_1,
                    skill_2,
                    skill_3,
                    skill_4,
                    skill_5,
                    skill_6,
                    skill_7,
                    skill_8,
                    skill_9,
                    skill_10
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19);",
                &employee_params(record),
            )?;
            UpsertOutcome::Inserted
        };

        tx.commit()?;
        Ok(outcome)
    }
}

fn employee_params(record: &EmployeeRecord) -> [&dyn rusqlite::ToSql; 19] {
    [
        &record.employee_id,
        &record.career_band,
        &record.bf_level_1,
        &record.bf_level_2,
        &record.bf_level_3,
        &record.bf_level_4,
        &record.bf_level_5,
        &record.department_name,
        &record.work_location,
        &record.skill_1,
        &record.skill_2,
        &record.skill_3,
        &record.skill_4,
        &record.skill_5,
        &record.skill_6,
        &record.skill_7,
        &record.skill_8,
        &record.skill_9,
        &record.skill_10,
    ]
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<EmployeeRecord> {
    // A pre-existing table may lack the NOT NULL constraint; rows with
    // a NULL key load as id 0, visible in a full load but invalid for
    // lookup and save.
    let employee_id = row
        .get::<_, Option<i64>>("employee_id")?
        .unwrap_or_default();

    Ok(EmployeeRecord {
        employee_id,
        career_band: row.get("career_band")?,
        bf_level_1: row.get("bf_level_1")?,
        bf_level_2: row.get("bf_level_2")?,
        bf_level_3: row.get("bf_level_3")?,
        bf_level_4: row.get("bf_level_4")?,
        bf_level_5: row.get("bf_level_5")?,
        department_name: row.get("department_name")?,
        work_location: row.get("work_location")?,
        skill_1: row.get("skill_1")?,
        skill_2: row.get("skill_2")?,
        skill_3: row.get("skill_3")?,
        skill_4: row.get("skill_4")?,
        skill_5: row.get("skill_5")?,
        skill_6: row.get("skill_6")?,
        skill_7: row.get("skill_7")?,
        skill_8: row.get("skill_8")?,
        skill_9: row.get("skill_9")?,
        skill_10: row.get("skill_10")?,
    })
}
