/// Application-level constants
pub const APP_NAME: &str = "medglean";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    format!("{APP_NAME}=info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_medglean() {
        assert_eq!(APP_NAME, "medglean");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn default_filter_scopes_to_crate() {
        assert_eq!(default_log_filter(), "medglean=info");
    }
}
