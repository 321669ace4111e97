//! Integration tests for configuration loading

use vigie_domain::VigieError;
use vigie_infra::config::load_from_env;

#[test]
fn unset_variable_falls_back_to_same_origin_api() {
    let config = load_from_env("VIGIE_IT_UNSET").unwrap();
    assert_eq!(config.api.base_url, "/api");
}

#[test]
fn configured_base_url_is_used_verbatim() {
    std::env::set_var("VIGIE_IT_BASE_URL", "https://staging.vigie.app/api");
    let config = load_from_env("VIGIE_IT_BASE_URL").unwrap();
    assert_eq!(config.api.base_url, "https://staging.vigie.app/api");
    std::env::remove_var("VIGIE_IT_BASE_URL");
}

#[test]
fn empty_value_is_a_config_error() {
    std::env::set_var("VIGIE_IT_EMPTY", "");
    let result = load_from_env("VIGIE_IT_EMPTY");
    assert!(matches!(result, Err(VigieError::Config(_))));
    std::env::remove_var("VIGIE_IT_EMPTY");
}
