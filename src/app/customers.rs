use crate::app::database_service::DatabaseService;
use crate::app::error::{Resource, ServiceError, ServiceResult};
use crate::app::reviews::REVIEW_SELECT;
use crate::domain::model::{Customer, CustomerChanges, NewCustomer, Review};
use tracing::{debug, info};

const CUSTOMER_SELECT: &str = "SELECT id, name, email FROM customers";

impl DatabaseService {
    pub async fn list_customers(&self) -> ServiceResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, Customer>(&format!("{} ORDER BY id", CUSTOMER_SELECT))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_customer(&self, id: i64) -> ServiceResult<Customer> {
        sqlx::query_as::<_, Customer>(&format!("{} WHERE id = ?", CUSTOMER_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServiceError::NotFound(Resource::Customer))
    }

    pub async fn customer_reviews(&self, customer_id: i64) -> ServiceResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>(&format!(
            "{} WHERE r.customer_id = ? ORDER BY r.id",
            REVIEW_SELECT
        ))
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// A duplicate email surfaces as a validation failure.
    pub async fn create_customer(&self, new: NewCustomer) -> ServiceResult<Customer> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("INSERT INTO customers (name, email) VALUES (?, ?)")
            .bind(&new.name)
            .bind(&new.email)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        let id = result.last_insert_rowid();
        info!(id, "customer created");
        Ok(Customer {
            id,
            name: new.name,
            email: new.email,
        })
    }

    /// Partial update through the validating setters, in one transaction.
    /// Customers have no update route; this is the data-layer operation only.
    pub async fn update_customer(
        &self,
        id: i64,
        changes: &CustomerChanges,
    ) -> ServiceResult<Customer> {
        let mut tx = self.pool.begin().await?;
        let mut customer =
            sqlx::query_as::<_, Customer>(&format!("{} WHERE id = ?", CUSTOMER_SELECT))
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(ServiceError::NotFound(Resource::Customer))?;

        if let Err(e) = customer.apply(changes) {
            debug!(id, error = %e, "customer update rejected");
            return Err(e.into());
        }

        sqlx::query("UPDATE customers SET name = ?, email = ? WHERE id = ?")
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!(id, "customer updated");
        Ok(customer)
    }

    /// Deletes a customer and all of their reviews. Not routed over HTTP.
    pub async fn delete_customer(&self, id: i64) -> ServiceResult<u64> {
        let mut tx = self.pool.begin().await?;
        let reviews = sqlx::query("DELETE FROM reviews WHERE customer_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let deleted = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(ServiceError::NotFound(Resource::Customer));
        }
        tx.commit().await?;

        info!(id, reviews, "customer deleted");
        Ok(reviews)
    }
}
