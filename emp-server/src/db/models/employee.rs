//! Employee Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::FieldError;
use crate::utils::validation::{
    MAX_NAME_LEN, is_valid_email, normalize_email, sanitize_text,
};

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee record matching the SurrealDB table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Id rendered as "employee:key" (empty when not yet persisted)
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Equality filter over the employee collection
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub position: Option<String>,
}

impl EmployeeFilter {
    pub fn is_empty(&self) -> bool {
        self.department.is_none() && self.position.is_none()
    }
}

/// Create employee payload
///
/// Every field is optional so a missing field surfaces as a field-level
/// validation error rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeCreate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub salary: Option<serde_json::Value>,
    pub date_of_joining: Option<String>,
}

/// Fully validated create payload, ready for the repository
#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub date_of_joining: NaiveDate,
}

/// Update employee payload (sparse; absent fields are left untouched)
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub salary: Option<serde_json::Value>,
    pub date_of_joining: Option<String>,
}

/// Validated sparse update, applied as a field-by-field merge
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeMerge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

impl EmployeeCreate {
    /// Validate and sanitize the payload, collecting all field errors.
    pub fn validate(self) -> Result<NewEmployee, Vec<FieldError>> {
        let mut errors = Vec::new();

        let first_name = required_text(self.first_name, "first_name", &mut errors);
        let last_name = required_text(self.last_name, "last_name", &mut errors);
        let position = required_text(self.position, "position", &mut errors);
        let department = required_text(self.department, "department", &mut errors);

        let email = match self.email.as_deref().map(normalize_email) {
            Some(email) if is_valid_email(&email) => email,
            Some(_) => {
                errors.push(FieldError::new("email", "email must be a valid email address."));
                String::new()
            }
            None => {
                errors.push(FieldError::new("email", "email is required."));
                String::new()
            }
        };

        let salary = match self.salary.as_ref() {
            Some(value) => parse_salary(value).unwrap_or_else(|| {
                errors.push(FieldError::new(
                    "salary",
                    "salary must be a non-negative number.",
                ));
                0.0
            }),
            None => {
                errors.push(FieldError::new("salary", "salary is required."));
                0.0
            }
        };

        let date_of_joining = match self.date_of_joining.as_deref() {
            Some(raw) => parse_iso_date(raw).unwrap_or_else(|| {
                errors.push(FieldError::new(
                    "date_of_joining",
                    "date_of_joining must be a valid ISO-8601 date.",
                ));
                NaiveDate::default()
            }),
            None => {
                errors.push(FieldError::new(
                    "date_of_joining",
                    "date_of_joining is required.",
                ));
                NaiveDate::default()
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewEmployee {
            first_name,
            last_name,
            email,
            position,
            department,
            salary,
            date_of_joining,
        })
    }
}

impl EmployeeUpdate {
    /// Validate and sanitize the fields that are present; absent fields stay
    /// out of the merge entirely.
    pub fn validate(self) -> Result<EmployeeMerge, Vec<FieldError>> {
        let mut errors = Vec::new();

        let email = match self.email.as_deref().map(normalize_email) {
            Some(email) if is_valid_email(&email) => Some(email),
            Some(_) => {
                errors.push(FieldError::new("email", "email must be a valid email address."));
                None
            }
            None => None,
        };

        let salary = match self.salary.as_ref() {
            Some(value) => match parse_salary(value) {
                Some(salary) => Some(salary),
                None => {
                    errors.push(FieldError::new(
                        "salary",
                        "salary must be a non-negative number.",
                    ));
                    None
                }
            },
            None => None,
        };

        let date_of_joining = match self.date_of_joining.as_deref() {
            Some(raw) => match parse_iso_date(raw) {
                Some(date) => Some(date),
                None => {
                    errors.push(FieldError::new(
                        "date_of_joining",
                        "date_of_joining must be a valid ISO-8601 date.",
                    ));
                    None
                }
            },
            None => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EmployeeMerge {
            first_name: self.first_name.as_deref().map(sanitize_text),
            last_name: self.last_name.as_deref().map(sanitize_text),
            email,
            position: self.position.as_deref().map(sanitize_text),
            department: self.department.as_deref().map(sanitize_text),
            salary,
            date_of_joining,
            updated_at: Utc::now(),
        })
    }
}

fn required_text(value: Option<String>, field: &str, errors: &mut Vec<FieldError>) -> String {
    match value.as_deref().map(sanitize_text) {
        Some(text) if !text.is_empty() && text.len() <= MAX_NAME_LEN => text,
        Some(text) if text.len() > MAX_NAME_LEN => {
            errors.push(FieldError::new(
                field,
                format!("{field} is too long (max {MAX_NAME_LEN} chars)."),
            ));
            String::new()
        }
        _ => {
            errors.push(FieldError::new(field, format!("{field} is required.")));
            String::new()
        }
    }
}

/// Accept a JSON number or a numeric string; reject negatives.
fn parse_salary(value: &serde_json::Value) -> Option<f64> {
    let salary = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (salary.is_finite() && salary >= 0.0).then_some(salary)
}

/// Accept "YYYY-MM-DD" or a full RFC 3339 timestamp.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    raw.parse::<NaiveDate>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> EmployeeCreate {
        EmployeeCreate {
            first_name: Some("Ann".into()),
            last_name: Some("Lee".into()),
            email: Some("Ann@X.com".into()),
            position: Some("Eng".into()),
            department: Some("R&D".into()),
            salary: Some(serde_json::json!(50000)),
            date_of_joining: Some("2024-01-01".into()),
        }
    }

    #[test]
    fn valid_payload_is_sanitized_and_normalized() {
        let new = full_payload().validate().expect("payload should validate");
        assert_eq!(new.email, "ann@x.com");
        assert_eq!(new.department, "R&amp;D");
        assert_eq!(new.salary, 50000.0);
        assert_eq!(
            new.date_of_joining,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn each_missing_field_is_reported_by_name() {
        for field in [
            "first_name",
            "last_name",
            "email",
            "position",
            "department",
            "salary",
            "date_of_joining",
        ] {
            let mut payload = full_payload();
            match field {
                "first_name" => payload.first_name = None,
                "last_name" => payload.last_name = None,
                "email" => payload.email = None,
                "position" => payload.position = None,
                "department" => payload.department = None,
                "salary" => payload.salary = None,
                _ => payload.date_of_joining = None,
            }
            let errors = payload.validate().expect_err("missing field must fail");
            assert!(
                errors.iter().any(|e| e.field == field),
                "expected an error naming {field}"
            );
        }
    }

    #[test]
    fn rejects_bad_email_salary_and_date() {
        let mut payload = full_payload();
        payload.email = Some("not-an-email".into());
        payload.salary = Some(serde_json::json!(-10));
        payload.date_of_joining = Some("January 1st".into());
        let errors = payload.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"salary"));
        assert!(fields.contains(&"date_of_joining"));
    }

    #[test]
    fn accepts_numeric_string_salary() {
        let mut payload = full_payload();
        payload.salary = Some(serde_json::json!("42000.5"));
        let new = payload.validate().unwrap();
        assert_eq!(new.salary, 42000.5);
    }

    #[test]
    fn update_merge_only_carries_present_fields() {
        let update = EmployeeUpdate {
            first_name: None,
            last_name: None,
            email: None,
            position: Some("Staff Eng".into()),
            department: None,
            salary: Some(serde_json::json!(60000)),
            date_of_joining: None,
        };
        let merge = update.validate().unwrap();
        assert_eq!(merge.position.as_deref(), Some("Staff Eng"));
        assert_eq!(merge.salary, Some(60000.0));
        assert!(merge.first_name.is_none());
        assert!(merge.email.is_none());

        let value = serde_json::to_value(&merge).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert!(keys.contains(&"position".to_string()));
        assert!(!keys.contains(&"first_name".to_string()));
        assert!(keys.contains(&"updated_at".to_string()));
    }
}
