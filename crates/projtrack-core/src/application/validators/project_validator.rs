//! Project request validation
//!
//! Validates loosely typed request bodies and coerces them into typed inputs.
//! Every field is checked so that all failures can be reported at once.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::projects::{NewProject, ProjectStatus, UpdateProject, parse_datetime};
use crate::error::{Error, FieldError, Result};

/// Outcome of validating a request body
pub type Validated<T> = std::result::Result<T, Vec<FieldError>>;

/// Whether a field must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

/// Validator for project create/update payloads
pub struct ProjectValidator;

impl ProjectValidator {
    /// Validate a create payload
    ///
    /// Rules:
    /// - `name`, `description`: strings, non-empty after trimming
    /// - `status`: one of the known statuses, any casing
    /// - `startDate`: ISO-8601 date or date-time
    /// - `endDate`: optional, `null` accepted, otherwise a valid date-time
    pub fn validate_create(body: &Value) -> Validated<NewProject> {
        let fields = as_object(body)?;
        let mut failures = Vec::new();

        let name = text_field(fields, "name", Presence::Required, &mut failures);
        let description = text_field(fields, "description", Presence::Required, &mut failures);
        let status = status_field(fields, Presence::Required, &mut failures);
        let start_date = start_date_field(fields, Presence::Required, &mut failures);
        let end_date = end_date_field(fields, &mut failures);

        match (name, description, status, start_date) {
            (Some(name), Some(description), Some(status), Some(start_date))
                if failures.is_empty() =>
            {
                Ok(NewProject {
                    name,
                    description,
                    status,
                    start_date,
                    end_date,
                })
            }
            _ => Err(failures),
        }
    }

    /// Validate an update payload
    ///
    /// Same per-field rules as create, but every field is optional. An empty
    /// object is valid. A supplied `name` or `description` must still be
    /// non-empty after trimming.
    pub fn validate_update(body: &Value) -> Validated<UpdateProject> {
        let fields = as_object(body)?;
        let mut failures = Vec::new();

        let update = UpdateProject {
            name: text_field(fields, "name", Presence::Optional, &mut failures),
            description: text_field(fields, "description", Presence::Optional, &mut failures),
            status: status_field(fields, Presence::Optional, &mut failures),
            start_date: start_date_field(fields, Presence::Optional, &mut failures),
            end_date: end_date_field(fields, &mut failures),
        };

        if failures.is_empty() {
            Ok(update)
        } else {
            Err(failures)
        }
    }

    /// Validate a create payload, folding failures into a validation error
    pub fn check_create(body: &Value) -> Result<NewProject> {
        Self::validate_create(body).map_err(Error::invalid_fields)
    }

    /// Validate an update payload, folding failures into a validation error
    pub fn check_update(body: &Value) -> Result<UpdateProject> {
        Self::validate_update(body).map_err(Error::invalid_fields)
    }
}

fn as_object(body: &Value) -> Validated<&Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| vec![FieldError::new("body", "Request body must be a JSON object")])
}

fn field_label(field: &str) -> &'static str {
    match field {
        "name" => "Name",
        "description" => "Description",
        _ => "Field",
    }
}

/// Trimmed, non-empty string field
fn text_field(
    fields: &Map<String, Value>,
    field: &str,
    presence: Presence,
    failures: &mut Vec<FieldError>,
) -> Option<String> {
    let label = field_label(field);
    match fields.get(field) {
        None => {
            if presence == Presence::Required {
                failures.push(FieldError::new(field, format!("{} is required", label)));
            }
            None
        }
        Some(Value::String(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                let message = match presence {
                    Presence::Required => format!("{} is required", label),
                    Presence::Optional => format!("{} cannot be empty", label),
                };
                failures.push(FieldError::new(field, message));
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(_) => {
            failures.push(FieldError::new(field, format!("{} must be a string", label)));
            None
        }
    }
}

fn status_field(
    fields: &Map<String, Value>,
    presence: Presence,
    failures: &mut Vec<FieldError>,
) -> Option<ProjectStatus> {
    match fields.get("status") {
        None if presence == Presence::Optional => None,
        None => {
            failures.push(FieldError::new("status", "Invalid status"));
            None
        }
        Some(Value::String(raw)) => match ProjectStatus::parse(raw) {
            Ok(status) => Some(status),
            Err(_) => {
                failures.push(FieldError::new("status", "Invalid status"));
                None
            }
        },
        Some(_) => {
            failures.push(FieldError::new("status", "Status must be a string"));
            None
        }
    }
}

fn start_date_field(
    fields: &Map<String, Value>,
    presence: Presence,
    failures: &mut Vec<FieldError>,
) -> Option<DateTime<Utc>> {
    match fields.get("startDate") {
        None if presence == Presence::Optional => None,
        value => {
            let parsed = value.and_then(Value::as_str).and_then(parse_datetime);
            if parsed.is_none() {
                failures.push(FieldError::new("startDate", "Invalid start date format"));
            }
            parsed
        }
    }
}

/// Optional end date; absent, `null` and the empty string all mean "none"
fn end_date_field(
    fields: &Map<String, Value>,
    failures: &mut Vec<FieldError>,
) -> Option<DateTime<Utc>> {
    match fields.get("endDate") {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) if raw.is_empty() => None,
        Some(value) => {
            let parsed = value.as_str().and_then(parse_datetime);
            if parsed.is_none() {
                failures.push(FieldError::new("endDate", "Invalid end date format"));
            }
            parsed
        }
    }
}
