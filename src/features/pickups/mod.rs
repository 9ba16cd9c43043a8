//! Home pickup scheduling (mock).
//!
//! These endpoints serve a fixed sample list and acknowledge submissions
//! without storing them; real persistence lands with the logistics
//! integration.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/pickups` | No | Static sample list |
//! | POST | `/api/pickups` | No | Echo the payload with a generated id |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::PickupService;
