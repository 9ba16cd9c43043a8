use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginDto, LoginResponseDto};
use crate::shared::constants::{ADMIN_LOGIN_ERROR, ADMIN_PASSWORD, ADMIN_USERNAME};

/// The admin dashboard gate.
///
/// Exact compare against a single hardcoded credential pair. This is a
/// cosmetic gate for the dashboard, not an authorization boundary: every
/// API route stays public and the client-stored flag is trivially forged.
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Check the submitted pair; a mismatch mutates nothing anywhere
    pub fn login(&self, dto: LoginDto) -> Result<LoginResponseDto> {
        if dto.username == ADMIN_USERNAME && dto.password == ADMIN_PASSWORD {
            tracing::info!("Admin login accepted");
            return Ok(LoginResponseDto {
                authenticated: true,
                role: "admin".to_string(),
            });
        }

        tracing::warn!("Admin login rejected for username {:?}", dto.username);
        Err(AppError::Unauthorized(ADMIN_LOGIN_ERROR.to_string()))
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pair_is_accepted() {
        let service = AuthService::new();
        let response = service
            .login(LoginDto {
                username: ADMIN_USERNAME.to_string(),
                password: ADMIN_PASSWORD.to_string(),
            })
            .unwrap();
        assert!(response.authenticated);
        assert_eq!(response.role, "admin");
    }

    #[test]
    fn test_any_other_input_is_rejected() {
        let service = AuthService::new();
        for (user, pass) in [
            ("admin", "wrong"),
            ("Admin", ADMIN_PASSWORD),
            ("", ""),
            (ADMIN_PASSWORD, ADMIN_USERNAME),
        ] {
            let err = service
                .login(LoginDto {
                    username: user.to_string(),
                    password: pass.to_string(),
                })
                .unwrap_err();
            assert!(err.to_string().contains("Credenciais inválidas"));
        }
    }
}
