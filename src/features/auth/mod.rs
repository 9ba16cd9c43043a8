//! Admin dashboard login gate.
//!
//! A single hardcoded credential pair, checked server-side; the client
//! stores the returned flag in local storage and page guards read it back.
//! Cosmetic only; see `AuthService` for the caveats.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/login` | No | Check the hardcoded admin pair |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AuthService;
