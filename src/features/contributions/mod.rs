//! Contribution lifecycle: public submission and tracking, admin review
//! and certification.
//!
//! A contribution is created with a unique tracking code and walks the
//! stages registered → received → processed → certified. Verifying a
//! contribution stamps a write-once certificate hash and date.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contributions` | No | Submit a contribution |
//! | GET | `/api/contributions` | No | Paginated listing (admin dashboard) |
//! | GET | `/api/contributions/me` | No | Contributions matching an email |
//! | GET | `/api/contributions/{tracking}` | No | Fetch by tracking code |
//! | PUT | `/api/contributions/{tracking}` | No | Admin full-field overwrite |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ContributionService;
