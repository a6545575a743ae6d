//! Database error classification

use std::fmt;

/// Entity a database error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Client,
    Lawyer,
    Case,
    Receipt,
}

impl Resource {
    /// Capitalized name used in caller-facing messages
    pub fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Lawyer => "Lawyer",
            Self::Case => "Case",
            Self::Receipt => "Receipt",
        }
    }

    /// Entity referenced by a foreign key constraint, by constraint name.
    fn referenced_by(constraint: &str) -> Option<Self> {
        match constraint {
            "cases_lawyer_id_fkey" => Some(Self::Lawyer),
            "cases_client_id_fkey" => Some(Self::Client),
            "receipts_case_id_fkey" => Some(Self::Case),
            _ => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => f.write_str("client"),
            Self::Lawyer => f.write_str("lawyer"),
            Self::Case => f.write_str("case"),
            Self::Receipt => f.write_str("receipt"),
        }
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: Resource, id: String },

    /// Unique constraint violated while writing `resource`
    #[error("conflict: {resource} violates {constraint}")]
    Conflict {
        resource: Resource,
        constraint: String,
    },

    /// Foreign key violated: the referenced row does not exist
    #[error("missing {resource} referenced by {constraint}")]
    MissingReference {
        resource: Resource,
        constraint: String,
    },
}

impl DbError {
    /// Classify a failed INSERT into `resource`'s table.
    ///
    /// Unique violations (23505) become `Conflict`, foreign key violations
    /// (23503) on a known constraint become `MissingReference`; anything else
    /// stays a plain sqlx error.
    pub fn from_write(err: sqlx::Error, resource: Resource) -> Self {
        let Some(db_err) = err.as_database_error() else {
            return Self::Sqlx(err);
        };
        let constraint = db_err.constraint().unwrap_or_default().to_owned();

        if db_err.is_unique_violation() {
            return Self::Conflict {
                resource,
                constraint,
            };
        }

        if db_err.is_foreign_key_violation() {
            if let Some(referenced) = Resource::referenced_by(&constraint) {
                return Self::MissingReference {
                    resource: referenced,
                    constraint,
                };
            }
        }

        Self::Sqlx(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_display() {
        assert_eq!(Resource::Client.label(), "Client");
        assert_eq!(Resource::Receipt.to_string(), "receipt");
    }

    #[test]
    fn maps_foreign_keys_to_referenced_entity() {
        assert_eq!(
            Resource::referenced_by("cases_lawyer_id_fkey"),
            Some(Resource::Lawyer)
        );
        assert_eq!(
            Resource::referenced_by("cases_client_id_fkey"),
            Some(Resource::Client)
        );
        assert_eq!(
            Resource::referenced_by("receipts_case_id_fkey"),
            Some(Resource::Case)
        );
        assert_eq!(Resource::referenced_by("clients_document_key"), None);
    }

    #[test]
    fn non_database_errors_pass_through() {
        let err = DbError::from_write(sqlx::Error::RowNotFound, Resource::Client);
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn not_found_display() {
        let err = DbError::NotFound {
            resource: Resource::Case,
            id: "abc".into(),
        };
        assert_eq!(err.to_string(), "not found: case 'abc'");
    }
}
