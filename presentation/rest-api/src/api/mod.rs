pub mod basket;
pub mod error;
pub mod health;
pub mod identity;
pub mod tags;
