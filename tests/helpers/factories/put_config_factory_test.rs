use crate::engine::errors::ConfigError;
use crate::test_helpers::factories::PutConfigFactory;

#[test]
fn default_factory_config_is_valid() {
    let config = PutConfigFactory::new().create();

    assert_eq!(config.table_name(), "metrics");
    assert_eq!(config.zookeeper_quorum(), "zk1");
    assert_eq!(config.family(), "m");
}

#[test]
fn without_removes_required_key() {
    let err = PutConfigFactory::new()
        .without("table_name")
        .try_create()
        .unwrap_err();

    assert_eq!(err, ConfigError::MissingField("table_name"));
}
