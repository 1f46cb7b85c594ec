#[path = "../common/mod.rs"]
mod common;

use libsl500::device::{ReaderBuilder, ReaderConfig};
use libsl500::transport::MockTransport;
use libsl500::types::{DeviceId, KeyType};

#[test]
fn builder_without_transport_fails() {
    assert!(matches!(
        ReaderBuilder::new().build(),
        Err(libsl500::Error::TransportMissing)
    ));
}

#[test]
fn builder_overrides_config() {
    let reader = ReaderBuilder::new()
        .with_transport(Box::new(MockTransport::new()))
        .device_id(DeviceId::new(7))
        .key_type(KeyType::KeyB)
        .auth_key([0x01; 6])
        .byte_timeout_ms(50)
        .header_wait(3, 5)
        .build()
        .unwrap();

    let cfg = reader.config();
    assert_eq!(cfg.device_id, DeviceId::new(7));
    assert_eq!(cfg.key_type, KeyType::KeyB);
    assert_eq!(cfg.auth_key, [0x01; 6]);
    assert_eq!(cfg.byte_timeout_ms, 50);
    assert_eq!(cfg.header_attempts, 3);
    assert_eq!(cfg.header_poll_interval_ms, 5);
    assert_eq!(cfg.text_block, ReaderConfig::default().text_block);
}
