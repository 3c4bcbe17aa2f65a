use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, MAX_TIMEOUT_SECS};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_timeout_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("SP_SYNC_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let over = (MAX_TIMEOUT_SECS + 1).to_string();
    let _timeout = EnvGuard::set("SP_SYNC_TIMEOUT_SECS", &over);

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_valid_timeout_when_timeout_then_duration_matches() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("SP_SYNC_TIMEOUT_SECS", "5");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.sync.timeout(), eq(Duration::from_secs(5)));
}
