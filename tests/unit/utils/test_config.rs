use coin_dashboard::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("DASH_TEST_STRING", "eur");
        let result: String = get_env_or_default("DASH_TEST_STRING", "usd".to_string());
        assert_eq!(result, "eur");
        env::remove_var("DASH_TEST_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("DASH_TEST_MISSING");
    }
    let result: String = get_env_or_default("DASH_TEST_MISSING", "usd".to_string());
    assert_eq!(result, "usd");
}

#[test]
fn test_get_env_or_default_with_integer() {
    unsafe {
        env::set_var("DASH_TEST_INT", " 250 ");
        let result: u32 = get_env_or_default("DASH_TEST_INT", 100);
        assert_eq!(result, 250);
        env::remove_var("DASH_TEST_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("DASH_TEST_INVALID", "lots");
        let result: u32 = get_env_or_default("DASH_TEST_INVALID", 7);
        assert_eq!(result, 7);
        env::remove_var("DASH_TEST_INVALID");
    }
}

#[test]
fn test_get_env_or_default_treats_blank_as_unset() {
    unsafe {
        env::set_var("DASH_TEST_BLANK", "   ");
        let result: String = get_env_or_default("DASH_TEST_BLANK", "bitcoin".to_string());
        assert_eq!(result, "bitcoin");
        env::remove_var("DASH_TEST_BLANK");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("DASH_TEST_OPTION", "30");
        let present: Option<u64> = get_env_or_none("DASH_TEST_OPTION");
        assert_eq!(present, Some(30));
        env::set_var("DASH_TEST_OPTION", "thirty");
        let invalid: Option<u64> = get_env_or_none("DASH_TEST_OPTION");
        assert_eq!(invalid, None);
        env::remove_var("DASH_TEST_OPTION");
        let missing: Option<u64> = get_env_or_none("DASH_TEST_OPTION");
        assert_eq!(missing, None);
    }
}
