//! Error taxonomy for the data service.

use crate::domain::validation::ValidationError;
use thiserror::Error;

/// The record type a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Restaurant,
    Customer,
    Review,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Restaurant => "Restaurant",
            Resource::Customer => "Customer",
            Resource::Review => "Review",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(Resource),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<sqlx::Error> for ServiceError {
    /// Constraint violations are caller mistakes, everything else is internal.
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                let what = match db_err.message() {
                    m if m.contains("customers.email") => "email",
                    m if m.contains("restaurants.name") => "name",
                    _ => "value",
                };
                return ServiceError::Validation(ValidationError::Duplicate(what));
            }
            if db_err.is_foreign_key_violation() {
                return ServiceError::Validation(ValidationError::DanglingReference);
            }
        }
        ServiceError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::database_service::DatabaseService;

    #[test]
    fn not_found_message_names_the_type() {
        assert_eq!(
            ServiceError::NotFound(Resource::Restaurant).to_string(),
            "Restaurant not found"
        );
        assert_eq!(
            ServiceError::NotFound(Resource::Review).to_string(),
            "Review not found"
        );
    }

    #[test]
    fn row_not_found_is_internal() {
        let err: ServiceError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ServiceError::Database(_)));
    }

    #[tokio::test]
    async fn foreign_key_violation_is_a_dangling_reference() {
        let db = DatabaseService::connect("sqlite::memory:").await.unwrap();
        let err = sqlx::query(
            "INSERT INTO reviews (rating, comment, customer_id, restaurant_id) \
             VALUES (5, '', 41, 42)",
        )
        .execute(&db.pool)
        .await
        .unwrap_err();

        let err = ServiceError::from(err);
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::DanglingReference)
        ));
        assert_eq!(
            err.to_string(),
            "validation failed: reference to a missing record"
        );
    }
}
