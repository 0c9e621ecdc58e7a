//! Employee Repository

use chrono::Utc;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeFilter, EmployeeMerge, NewEmployee};

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Resolve a path parameter to a RecordId.
    ///
    /// Accepts both "employee:key" and a bare key. A string that cannot be
    /// a record id resolves to None, which callers report as not-found.
    fn parse_id(id: &str) -> Option<RecordId> {
        if id.contains(':') {
            id.parse::<RecordId>()
                .ok()
                .filter(|r| r.table() == "employee")
        } else {
            Some(RecordId::from_table_key("employee", id))
        }
    }

    /// Find employees matching the equality filter (unfiltered when empty)
    pub async fn find(&self, filter: &EmployeeFilter) -> RepoResult<Vec<Employee>> {
        let mut sql = String::from("SELECT * FROM employee");
        let mut clauses = Vec::new();
        if filter.department.is_some() {
            clauses.push("department = $department");
        }
        if filter.position.is_some() {
            clauses.push("position = $position");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY created_at");

        let mut query = self.base.db().query(sql);
        if let Some(department) = &filter.department {
            query = query.bind(("department", department.clone()));
        }
        if let Some(position) = &filter.position {
            query = query.bind(("position", position.clone()));
        }

        let employees: Vec<Employee> = query.await?.take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let Some(thing) = Self::parse_id(id) else {
            return Ok(None);
        };
        let employee: Option<Employee> = self.base.db().select(thing).await?;
        Ok(employee)
    }

    /// Find employee by (normalized) email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee
    ///
    /// The duplicate-email pre-check gives the friendly error; the unique
    /// index on `email` is the backstop under concurrent creates.
    pub async fn create(&self, data: NewEmployee) -> RepoResult<Employee> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee with email '{}' already exists",
                data.email
            )));
        }

        let now = Utc::now();
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    first_name = $first_name,
                    last_name = $last_name,
                    email = $email,
                    position = $position,
                    department = $department,
                    salary = $salary,
                    date_of_joining = $date_of_joining,
                    created_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("first_name", data.first_name))
            .bind(("last_name", data.last_name))
            .bind(("email", data.email))
            .bind(("position", data.position))
            .bind(("department", data.department))
            .bind(("salary", data.salary))
            .bind(("date_of_joining", data.date_of_joining))
            .bind(("now", now))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Apply a sparse merge to an employee; None when the id does not resolve
    pub async fn update(&self, id: &str, data: EmployeeMerge) -> RepoResult<Option<Employee>> {
        let Some(thing) = Self::parse_id(id) else {
            return Ok(None);
        };

        // UPDATE in SurrealDB creates missing records, so check existence first
        let existing: Option<Employee> = self.base.db().select(thing.clone()).await?;
        if existing.is_none() {
            return Ok(None);
        }

        // a merged-in email must not collide with another record; without
        // this check the unique index turns the merge into a database error
        if let Some(email) = &data.email
            && let Some(other) = self.find_by_email(email).await?
            && other.id.as_ref() != Some(&thing)
        {
            return Err(RepoError::Duplicate(format!(
                "Employee with email '{email}' already exists"
            )));
        }

        let updated: Option<Employee> = self.base.db().update(thing).merge(data).await?;
        Ok(updated)
    }

    /// Remove an employee; false when the id does not resolve
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let Some(thing) = Self::parse_id(id) else {
            return Ok(false);
        };
        let deleted: Option<Employee> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }
}
