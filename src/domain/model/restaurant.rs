use crate::domain::validation::{self, ValidationError, DEFAULT_PRICE_RANGE};

/// A persisted restaurant row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub price_range: i64,
}

/// A validated restaurant that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
    pub price_range: i64,
}

impl NewRestaurant {
    /// `price_range` falls back to 1 when absent.
    pub fn new(
        name: &str,
        address: &str,
        price_range: Option<i64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validation::name(name)?,
            address: validation::address(address)?,
            price_range: validation::price_range(price_range.unwrap_or(DEFAULT_PRICE_RANGE))?,
        })
    }
}

/// The fields a partial update may touch. Anything else is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantChanges {
    pub name: Option<String>,
    pub address: Option<String>,
    pub price_range: Option<i64>,
}

impl RestaurantChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.price_range.is_none()
    }
}

impl Restaurant {
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validation::name(name)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: &str) -> Result<(), ValidationError> {
        self.address = validation::address(address)?;
        Ok(())
    }

    pub fn set_price_range(&mut self, price_range: i64) -> Result<(), ValidationError> {
        self.price_range = validation::price_range(price_range)?;
        Ok(())
    }

    /// Applies every present change through its validating setter.
    ///
    /// On error `self` may be partially modified; callers discard it.
    pub fn apply(&mut self, changes: &RestaurantChanges) -> Result<(), ValidationError> {
        if let Some(name) = changes.name.as_deref() {
            self.set_name(name)?;
        }
        if let Some(address) = changes.address.as_deref() {
            self.set_address(address)?;
        }
        if let Some(price_range) = changes.price_range {
            self.set_price_range(price_range)?;
        }
        Ok(())
    }
}
