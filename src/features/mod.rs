pub mod auth;
pub mod contributions;
pub mod health;
pub mod pickups;
pub mod products;
