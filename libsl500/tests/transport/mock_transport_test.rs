#[path = "../common/mod.rs"]
mod common;

use libsl500::device::Reader;
use libsl500::protocol::{CommandCode, Reply};
use libsl500::transport::{MockTransport, Transport};
use libsl500::types::BaudRate;

#[test]
fn mock_transport_send_and_receive() {
    let mut m = MockTransport::new();
    m.push_bytes(&[0x01, 0x02, 0x03]);
    m.send(&[0xAA]).unwrap();
    assert_eq!(m.sent, vec![vec![0xAA]]);

    let mut buf = [0u8; 3];
    m.receive_exact(&mut buf, 200).unwrap();
    assert_eq!(buf, [0x01, 0x02, 0x03]);
    assert!(matches!(
        m.receive_byte(200),
        Err(libsl500::Error::ReadTimeout)
    ));
}

#[test]
fn shared_mock_is_visible_after_reader_takes_it() {
    let shared = MockTransport::new().into_shared();
    shared
        .borrow_mut()
        .push_reply(&Reply::success(CommandCode::InitCom, vec![]));

    let mut reader = Reader::with_config(
        Box::new(shared.clone()),
        libsl500::test_support::fast_config(),
    );
    reader.set_baud_rate(BaudRate::B115200).unwrap();

    assert_eq!(shared.borrow().baud_rate, Some(115_200));
    assert_eq!(shared.borrow().sent.len(), 1);
}

#[test]
fn failed_baud_change_keeps_transport_speed() {
    let (mut reader, shared) =
        common::helpers::reader_with(&[Reply::failure(CommandCode::InitCom, 0x01)]);
    assert!(reader.set_baud_rate(BaudRate::B9600).is_err());
    assert_eq!(shared.borrow().baud_rate, None);
}

#[test]
fn pop_sent_returns_last_frame() {
    let mut m = MockTransport::new();
    m.send(&[0x01]).unwrap();
    m.send(&[0x02]).unwrap();
    assert_eq!(m.pop_sent(), Some(vec![0x02]));
    assert_eq!(m.sent.len(), 1);
}
