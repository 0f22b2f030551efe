use crate::domain::validation::{self, ValidationError};

/// A persisted customer row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

impl NewCustomer {
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::name(name)?,
            email: validation::email(email)?,
        })
    }
}

/// The fields a customer update may touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Customer {
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validation::name(name)?;
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = validation::email(email)?;
        Ok(())
    }

    pub fn apply(&mut self, changes: &CustomerChanges) -> Result<(), ValidationError> {
        if let Some(name) = changes.name.as_deref() {
            self.set_name(name)?;
        }
        if let Some(email) = changes.email.as_deref() {
            self.set_email(email)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_normalizes_email() {
        let c = NewCustomer::new("John Doe", " JOHN@Example.com ").unwrap();
        assert_eq!(c.email, "john@example.com");
    }

    #[test]
    fn new_customer_rejects_bad_fields() {
        assert_eq!(
            NewCustomer::new("J", "john@example.com"),
            Err(ValidationError::NameTooShort)
        );
        assert_eq!(
            NewCustomer::new("John Doe", "john.example.com"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn setters_validate() {
        let mut c = Customer {
            id: 7,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        };
        assert_eq!(c.set_email("nope"), Err(ValidationError::InvalidEmail));
        assert_eq!(c.email, "jane@example.com");
        c.set_name(" Jane S. ").unwrap();
        assert_eq!(c.name, "Jane S.");
    }
}
