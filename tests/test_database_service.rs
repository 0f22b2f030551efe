//! Data-layer tests against an in-memory SQLite database.

use restaurant_reviews::app::seed;
use restaurant_reviews::{
    CustomerChanges, DatabaseService, NewCustomer, NewRestaurant, NewReview, Resource,
    RestaurantChanges, ServiceError, ValidationError,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

async fn fresh_db() -> Result<DatabaseService, ServiceError> {
    DatabaseService::connect("sqlite::memory:").await
}

#[tokio::test]
async fn test_rejected_update_leaves_row_untouched() -> TestResult {
    let db = fresh_db().await?;
    let restaurant = db
        .create_restaurant(NewRestaurant::new("Pizza Palace", "456 Oak Avenue, Midtown", Some(2))?)
        .await?;

    // The first change is valid, the second is not: nothing may be written.
    let changes = RestaurantChanges {
        name: Some("Pizza Palazzo".to_string()),
        price_range: Some(7),
        ..Default::default()
    };
    let err = db.update_restaurant(restaurant.id, &changes).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::PriceRangeOutOfRange(7))
    ));

    let stored = db.get_restaurant(restaurant.id).await?;
    assert_eq!(stored, restaurant);

    let err = db
        .update_restaurant(restaurant.id + 1, &RestaurantChanges::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(Resource::Restaurant)));
    Ok(())
}

#[tokio::test]
async fn test_unique_constraints_surface_as_validation() -> TestResult {
    let db = fresh_db().await?;
    db.create_restaurant(NewRestaurant::new("Pizza Palace", "456 Oak Avenue, Midtown", None)?)
        .await?;
    let err = db
        .create_restaurant(NewRestaurant::new("Pizza Palace", "1 Somewhere Else Road", None)?)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::Duplicate("name"))
    ));

    db.create_customer(NewCustomer::new("John Doe", "john@example.com")?).await?;
    let err = db
        .create_customer(NewCustomer::new("Johnny", " JOHN@example.com")?)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::Duplicate("email"))
    ));

    assert_eq!(db.list_restaurants().await?.len(), 1);
    assert_eq!(db.list_customers().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_review_requires_existing_parents() -> TestResult {
    let db = fresh_db().await?;
    let gourmet = NewRestaurant::new("The Gourmet Spot", "123 Main Street, Downtown", Some(3))?;
    let restaurant = db.create_restaurant(gourmet).await?;
    let customer = db
        .create_customer(NewCustomer::new("John Doe", "john@example.com")?)
        .await?;

    let err = db
        .create_review(NewReview::new(5, None, customer.id + 10, restaurant.id)?)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::UnknownCustomer(_))
    ));

    let err = db
        .create_review(NewReview::new(5, None, customer.id, restaurant.id + 10)?)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::UnknownRestaurant(_))
    ));
    assert!(db.list_reviews().await?.is_empty());

    let comment = Some("  Excellent food and service!  ");
    let review = db
        .create_review(NewReview::new(5, comment, customer.id, restaurant.id)?)
        .await?;
    assert_eq!(review.comment, "Excellent food and service!");
    assert_eq!(review.customer_name, "John Doe");
    assert_eq!(review.restaurant_name, "The Gourmet Spot");
    Ok(())
}

#[tokio::test]
async fn test_delete_customer_cascades_to_reviews() -> TestResult {
    let db = fresh_db().await?;
    let restaurant = db
        .create_restaurant(NewRestaurant::new("Pizza Palace", "456 Oak Avenue, Midtown", Some(2))?)
        .await?;
    let jane = db
        .create_customer(NewCustomer::new("Jane Smith", "jane@example.com")?)
        .await?;
    let bob = db
        .create_customer(NewCustomer::new("Bob Johnson", "bob@example.com")?)
        .await?;

    let first = db.create_review(NewReview::new(4, None, jane.id, restaurant.id)?).await?;
    let second = db.create_review(NewReview::new(2, None, jane.id, restaurant.id)?).await?;
    let kept = db.create_review(NewReview::new(3, None, bob.id, restaurant.id)?).await?;

    assert_eq!(db.delete_customer(jane.id).await?, 2);

    for id in [first.id, second.id] {
        let err = db.get_review(id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(Resource::Review)));
    }
    assert_eq!(db.restaurant_reviews(restaurant.id).await?, vec![kept.clone()]);
    assert_eq!(db.customer_reviews(bob.id).await?, vec![kept]);

    let err = db.delete_customer(jane.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(Resource::Customer)));
    Ok(())
}

#[tokio::test]
async fn test_update_customer_normalizes_email() -> TestResult {
    let db = fresh_db().await?;
    let customer = db
        .create_customer(NewCustomer::new("Bob Johnson", "bob@example.com")?)
        .await?;

    let updated = db
        .update_customer(
            customer.id,
            &CustomerChanges {
                email: Some("  Robert@Example.com ".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.email, "robert@example.com");
    assert_eq!(db.get_customer(customer.id).await?, updated);

    let err = db
        .update_customer(
            customer.id,
            &CustomerChanges {
                email: Some("robert.example.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ValidationError::InvalidEmail)));
    assert_eq!(db.get_customer(customer.id).await?.email, "robert@example.com");
    Ok(())
}

#[tokio::test]
async fn test_deleted_ids_are_not_reissued() -> TestResult {
    let db = fresh_db().await?;
    let first = db
        .create_restaurant(NewRestaurant::new("Pizza Palace", "456 Oak Avenue, Midtown", None)?)
        .await?;
    db.delete_restaurant(first.id).await?;
    let second = db
        .create_restaurant(NewRestaurant::new("Pizza Palace", "456 Oak Avenue, Midtown", None)?)
        .await?;
    assert!(second.id > first.id);
    Ok(())
}

#[tokio::test]
async fn test_seed_is_repeatable() -> TestResult {
    let db = fresh_db().await?;

    for _ in 0..2 {
        let summary = seed::run(&db).await?;
        assert_eq!(
            (summary.restaurants, summary.customers, summary.reviews),
            (3, 3, 3)
        );
    }

    let restaurants = db.list_restaurants().await?;
    let names: Vec<&str> = restaurants.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["The Gourmet Spot", "Pizza Palace", "Fine Dining Experience"]
    );

    let reviews = db.list_reviews().await?;
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0].rating, 5);
    assert_eq!(reviews[0].customer_name, "John Doe");
    assert_eq!(reviews[0].restaurant_name, "The Gourmet Spot");
    assert_eq!(reviews[2].comment, "Good but overpriced");

    db.clear_db().await?;
    assert!(db.list_customers().await?.is_empty());
    assert!(db.list_reviews().await?.is_empty());
    Ok(())
}
