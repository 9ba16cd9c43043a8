//! Marketplace products derived from certified contributions.
//!
//! A product snapshots the source contribution's impact metrics at listing
//! time and keeps a `tracking` back-reference; at most one product exists
//! per contribution (application-level check).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/products` | No | Derive a listing from a certified contribution |
//! | GET | `/api/products` | No | Paginated listing |
//! | GET | `/api/products/{id}` | No | Fetch by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
