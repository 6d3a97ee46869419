//! CORS configuration for browser clients.
//!
//! Development accepts any origin so a local frontend can run on any port;
//! production only honours the origins listed in `ALLOWED_ORIGINS`.

use std::env;

use actix_cors::Cors;
use actix_web::http::{header, Method};

const DEFAULT_PREFLIGHT_MAX_AGE: usize = 3600;

/// Builds the CORS middleware for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: "production" switches to the restricted policy
/// - `ALLOWED_ORIGINS`: comma-separated origin allowlist (production only)
/// - `CORS_MAX_AGE`: preflight cache lifetime in seconds (default 3600)
pub fn create_cors() -> Cors {
    let base = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(preflight_max_age());

    if is_production() {
        restrict_to_allowed_origins(base)
    } else {
        log::info!("CORS: development policy, any origin accepted");
        base.allow_any_origin()
    }
}

fn is_production() -> bool {
    env::var("ENVIRONMENT")
        .map(|value| value == "production")
        .unwrap_or(false)
}

fn preflight_max_age() -> usize {
    env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PREFLIGHT_MAX_AGE)
}

/// Production policy: only origins named in `ALLOWED_ORIGINS` may call us.
/// An empty allowlist leaves cross-origin requests blocked entirely.
fn restrict_to_allowed_origins(mut cors: Cors) -> Cors {
    let origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();
    for origin in origins.split(',').map(str::trim) {
        if origin.is_empty() {
            continue;
        }
        log::info!("CORS: allowing origin {}", origin);
        cors = cors.allowed_origin(origin);
    }
    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_policy_builds() {
        env::set_var("ENVIRONMENT", "development");
        let _cors = create_cors();
        env::remove_var("ENVIRONMENT");
    }

    #[test]
    fn test_production_policy_builds_with_allowlist() {
        env::set_var("ENVIRONMENT", "production");
        env::set_var("ALLOWED_ORIGINS", "https://app.homequest.example, https://admin.homequest.example");
        let _cors = create_cors();
        env::remove_var("ENVIRONMENT");
        env::remove_var("ALLOWED_ORIGINS");
    }

    #[test]
    fn test_unparseable_max_age_falls_back() {
        env::set_var("CORS_MAX_AGE", "not-a-number");
        assert_eq!(preflight_max_age(), DEFAULT_PREFLIGHT_MAX_AGE);
        env::remove_var("CORS_MAX_AGE");
    }
}
