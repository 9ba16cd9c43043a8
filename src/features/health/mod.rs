//! Deployment health diagnostics.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/health` | No | Database counts and env-variable presence |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::HealthService;
