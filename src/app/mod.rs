pub mod customers;
pub mod database_service;
pub mod error;
pub mod restaurants;
pub mod reviews;
pub mod seed;
