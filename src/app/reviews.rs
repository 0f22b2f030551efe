use crate::app::database_service::DatabaseService;
use crate::app::error::{Resource, ServiceError, ServiceResult};
use crate::domain::model::{NewReview, Review};
use crate::domain::validation::ValidationError;
use tracing::{debug, info};

/// Reviews are always read joined with both parents' names.
pub(crate) const REVIEW_SELECT: &str = "\
     SELECT r.id, r.rating, r.comment, r.customer_id, r.restaurant_id, \
            c.name AS customer_name, s.name AS restaurant_name \
     FROM reviews r \
     JOIN customers c ON c.id = r.customer_id \
     JOIN restaurants s ON s.id = r.restaurant_id";

impl DatabaseService {
    pub async fn list_reviews(&self) -> ServiceResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>(&format!("{} ORDER BY r.id", REVIEW_SELECT))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_review(&self, id: i64) -> ServiceResult<Review> {
        sqlx::query_as::<_, Review>(&format!("{} WHERE r.id = ?", REVIEW_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServiceError::NotFound(Resource::Review))
    }

    /// Inserts a review after checking, in the same transaction, that both
    /// parents exist. A dangling reference is a validation failure.
    pub async fn create_review(&self, new: NewReview) -> ServiceResult<Review> {
        let mut tx = self.pool.begin().await?;

        let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE id = ?")
            .bind(new.customer_id)
            .fetch_one(&mut *tx)
            .await?;
        if customers == 0 {
            debug!(customer_id = new.customer_id, "review references unknown customer");
            return Err(ValidationError::UnknownCustomer(new.customer_id).into());
        }

        let restaurants: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants WHERE id = ?")
            .bind(new.restaurant_id)
            .fetch_one(&mut *tx)
            .await?;
        if restaurants == 0 {
            debug!(restaurant_id = new.restaurant_id, "review references unknown restaurant");
            return Err(ValidationError::UnknownRestaurant(new.restaurant_id).into());
        }

        let id = sqlx::query(
            "INSERT INTO reviews (rating, comment, customer_id, restaurant_id) VALUES (?, ?, ?, ?)",
        )
        .bind(new.rating)
        .bind(&new.comment)
        .bind(new.customer_id)
        .bind(new.restaurant_id)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let review = sqlx::query_as::<_, Review>(&format!("{} WHERE r.id = ?", REVIEW_SELECT))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        info!(
            id,
            customer_id = review.customer_id,
            restaurant_id = review.restaurant_id,
            "review created"
        );
        Ok(review)
    }

    pub async fn delete_review(&self, id: i64) -> ServiceResult<()> {
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(ServiceError::NotFound(Resource::Review));
        }
        tx.commit().await?;

        info!(id, "review deleted");
        Ok(())
    }
}
