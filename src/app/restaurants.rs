use crate::app::database_service::DatabaseService;
use crate::app::error::{Resource, ServiceError, ServiceResult};
use crate::app::reviews::REVIEW_SELECT;
use crate::domain::model::{NewRestaurant, Restaurant, RestaurantChanges, Review};
use tracing::{debug, info};

const RESTAURANT_SELECT: &str = "SELECT id, name, address, price_range FROM restaurants";

impl DatabaseService {
    pub async fn list_restaurants(&self) -> ServiceResult<Vec<Restaurant>> {
        let rows = sqlx::query_as::<_, Restaurant>(&format!("{} ORDER BY id", RESTAURANT_SELECT))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_restaurant(&self, id: i64) -> ServiceResult<Restaurant> {
        sqlx::query_as::<_, Restaurant>(&format!("{} WHERE id = ?", RESTAURANT_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ServiceError::NotFound(Resource::Restaurant))
    }

    /// Reviews attached to a restaurant, oldest first.
    pub async fn restaurant_reviews(&self, restaurant_id: i64) -> ServiceResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>(&format!(
            "{} WHERE r.restaurant_id = ? ORDER BY r.id",
            REVIEW_SELECT
        ))
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create_restaurant(&self, new: NewRestaurant) -> ServiceResult<Restaurant> {
        let mut tx = self.pool.begin().await?;
        let result =
            sqlx::query("INSERT INTO restaurants (name, address, price_range) VALUES (?, ?, ?)")
                .bind(&new.name)
                .bind(&new.address)
                .bind(new.price_range)
                .execute(&mut *tx)
                .await?;
        tx.commit().await?;

        let id = result.last_insert_rowid();
        info!(id, name = %new.name, "restaurant created");
        Ok(Restaurant {
            id,
            name: new.name,
            address: new.address,
            price_range: new.price_range,
        })
    }

    /// Applies allow-listed changes through the validating setters and persists
    /// the result. Nothing is written if any change is rejected.
    pub async fn update_restaurant(
        &self,
        id: i64,
        changes: &RestaurantChanges,
    ) -> ServiceResult<Restaurant> {
        let mut tx = self.pool.begin().await?;
        let mut restaurant =
            sqlx::query_as::<_, Restaurant>(&format!("{} WHERE id = ?", RESTAURANT_SELECT))
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(ServiceError::NotFound(Resource::Restaurant))?;

        if let Err(e) = restaurant.apply(changes) {
            debug!(id, error = %e, "restaurant update rejected");
            return Err(e.into());
        }

        sqlx::query("UPDATE restaurants SET name = ?, address = ?, price_range = ? WHERE id = ?")
            .bind(&restaurant.name)
            .bind(&restaurant.address)
            .bind(restaurant.price_range)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!(id, "restaurant updated");
        Ok(restaurant)
    }

    /// Deletes a restaurant and every review that references it.
    ///
    /// Returns the number of reviews removed along with it.
    pub async fn delete_restaurant(&self, id: i64) -> ServiceResult<u64> {
        let mut tx = self.pool.begin().await?;
        let reviews = sqlx::query("DELETE FROM reviews WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let deleted = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(ServiceError::NotFound(Resource::Restaurant));
        }
        tx.commit().await?;

        info!(id, reviews, "restaurant deleted");
        Ok(reviews)
    }
}
