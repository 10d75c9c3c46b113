use delivery_mode::protocol::{JMS_NON_PERSISTENT, JMS_PERSISTENT};
use delivery_mode::{DeliveryMode, DeliveryModeError};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Header {
    mode: DeliveryMode,
}

#[test]
fn codes_match_jms_constants() {
    assert_eq!(JMS_PERSISTENT, 2);
    assert_eq!(JMS_NON_PERSISTENT, 1);
    assert_eq!(DeliveryMode::Persistent.jms_code(), JMS_PERSISTENT);
    assert_eq!(DeliveryMode::NonPersistent.jms_code(), JMS_NON_PERSISTENT);
}

#[test]
fn all_lists_each_variant_once() {
    assert_eq!(
        DeliveryMode::ALL,
        [DeliveryMode::Persistent, DeliveryMode::NonPersistent]
    );
}

#[test]
fn serializes_as_canonical_name() {
    let json = serde_json::to_string(&Header {
        mode: DeliveryMode::NonPersistent,
    })
    .unwrap();
    assert_eq!(json, r#"{"mode":"NON_PERSISTENT"}"#);

    let parsed: Header = serde_json::from_str(r#"{"mode":"non-persistent"}"#).unwrap();
    assert_eq!(parsed.mode, DeliveryMode::NonPersistent);
}

#[test]
fn rejects_unknown_values() {
    assert!(serde_json::from_str::<Header>(r#"{"mode":"TRANSIENT"}"#).is_err());
    assert_eq!(
        DeliveryMode::try_from(-1),
        Err(DeliveryModeError::UnknownCode(-1))
    );
    assert_eq!(
        DeliveryModeError::UnknownName("x".into()).to_string(),
        "unknown delivery mode name: x"
    );
}
