/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// TRACKING CODES
// =============================================================================

/// Prefix for public contribution tracking codes
pub const TRACKING_PREFIX: &str = "INF-";

/// Number of random hex characters after the prefix
pub const TRACKING_SUFFIX_LEN: usize = 8;

// =============================================================================
// ADMIN GATE
// =============================================================================
// The admin dashboard is gated behind a single hardcoded credential pair.
// This is cosmetic, not an authorization boundary: every /api route stays
// public and the dashboard is expected to be bypassable.

/// Hardcoded admin username
pub const ADMIN_USERNAME: &str = "admin";

/// Hardcoded admin password
pub const ADMIN_PASSWORD: &str = "infinito2024";

/// Error message shown on failed admin login (user-facing, Portuguese)
pub const ADMIN_LOGIN_ERROR: &str =
    "Credenciais inválidas. Verifique o utilizador e a palavra-passe.";
