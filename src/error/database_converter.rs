use crate::error::AppError;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
///
/// PostgreSQL reports the offending table, column and constraint alongside a
/// `DETAIL` line of the form `Key (field)=(value) ...`; those are used to
/// build field-level errors instead of leaking raw driver messages.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info.as_ref(), operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    /// Error reported when a row points at a missing parent row.
    pub fn invalid_reference(field: &str, referenced_table: &str, value: &str) -> AppError {
        AppError::Validation {
            field: field.to_string(),
            reason: format!(
                "Invalid reference to {} with value '{}'",
                referenced_table, value
            ),
        }
    }

    /// Error reported when a parent row is deleted while children still point at it.
    pub fn still_referenced(field: &str, value: &str, referencing_table: &str) -> AppError {
        AppError::Validation {
            field: field.to_string(),
            reason: format!(
                "Value '{}' is still referenced from {}",
                value, referencing_table
            ),
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: &(dyn DatabaseErrorInformation + Send + Sync),
        operation: &str,
    ) -> AppError {
        let key = info.details().and_then(Self::parse_key_detail);
        let entity = info.table_name().unwrap_or("resource").to_string();

        match (kind, key) {
            (DatabaseErrorKind::UniqueViolation, Some((field, value))) => AppError::Duplicate {
                entity,
                field,
                value,
            },
            (DatabaseErrorKind::ForeignKeyViolation, Some((field, value))) => {
                let details = info.details().unwrap_or_default();
                let other_table = Self::quoted_table(details).unwrap_or("resource");
                if details.contains("still referenced") {
                    Self::still_referenced(&field, &value, other_table)
                } else {
                    Self::invalid_reference(&field, other_table, &value)
                }
            }
            (DatabaseErrorKind::NotNullViolation, _) => match info.column_name() {
                Some(column) => AppError::Validation {
                    field: column.to_string(),
                    reason: format!("Field is required for {}", entity),
                },
                None => Self::opaque(operation, "Not null constraint violation", info),
            },
            (DatabaseErrorKind::CheckViolation, _) => AppError::Validation {
                field: info
                    .column_name()
                    .or(info.constraint_name())
                    .unwrap_or("unknown")
                    .to_string(),
                reason: format!("Check constraint failed for {}", entity),
            },
            (DatabaseErrorKind::UniqueViolation, None) => {
                Self::opaque(operation, "Unique constraint violation", info)
            }
            (DatabaseErrorKind::ForeignKeyViolation, None) => {
                Self::opaque(operation, "Foreign key constraint violation", info)
            }
            _ => Self::opaque(operation, "Database error", info),
        }
    }

    fn opaque(
        operation: &str,
        label: &str,
        info: &(dyn DatabaseErrorInformation + Send + Sync),
    ) -> AppError {
        AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::msg(format!("{}: {}", label, info.message())),
        }
    }

    /// Extracts `(field, value)` from a `Key (field)=(value) ...` detail line.
    pub fn parse_key_detail(details: &str) -> Option<(String, String)> {
        let rest = details.split_once("Key (")?.1;
        let (field, rest) = rest.split_once(")=(")?;
        let (value, _) = rest.split_once(')')?;
        Some((field.to_string(), value.to_string()))
    }

    fn quoted_table(details: &str) -> Option<&str> {
        let rest = details.split_once("table \"")?.1;
        rest.split_once('"').map(|(table, _)| table)
    }
}
