use libsl500::protocol::codec::encode_command_frame;
use libsl500::protocol::{Command, Frame};
use libsl500::types::{BlockData, DeviceId, KeyType, RequestMode, SerialNumber};

#[test]
fn request_frame_bytes() {
    let bytes = encode_command_frame(
        &Command::Request {
            mode: RequestMode::Idle,
        },
        DeviceId::DEFAULT,
    )
    .unwrap();
    assert_eq!(
        bytes,
        vec![0xAA, 0xBB, 0x06, 0x00, 0x00, 0x00, 0x01, 0x02, 0x26, 0x25]
    );
}

#[test]
fn authenticate_frame_bytes() {
    let cmd = Command::Authenticate {
        key_type: KeyType::KeyA,
        block: 1,
        key: [0xFF; 6],
    };
    let bytes = encode_command_frame(&cmd, DeviceId::DEFAULT).unwrap();

    let mut expected = vec![0xAA, 0xBB, 0x0D, 0x00, 0x00, 0x00, 0x07, 0x02, 0x60, 0x01];
    expected.extend_from_slice(&[0xFF; 6]);
    expected.push(0x64);
    assert_eq!(bytes, expected);
}

#[test]
fn length_field_is_total_minus_four() {
    let cmd = Command::Write {
        block: 4,
        data: BlockData::from_slice_padded(b"hello").unwrap(),
    };
    let bytes = encode_command_frame(&cmd, DeviceId::new(0x0203)).unwrap();
    assert_eq!(bytes.len(), 9 + 17);
    let len = u16::from_le_bytes([bytes[2], bytes[3]]) as usize;
    assert_eq!(len, bytes.len() - 4);
    assert_eq!(&bytes[4..6], &[0x03, 0x02]);
}

#[test]
fn encoded_frame_parses_back() {
    let cmd = Command::Select {
        serial: SerialNumber::from_bytes([0x11, 0x22, 0x33, 0x44]),
    };
    let bytes = encode_command_frame(&cmd, DeviceId::DEFAULT).unwrap();
    let frame = Frame::parse(&bytes).unwrap();
    assert_eq!(frame, cmd.to_frame(DeviceId::DEFAULT));
}

#[test]
fn parse_rejects_corrupted_checksum() {
    let mut bytes = encode_command_frame(&Command::Ping, DeviceId::DEFAULT).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    assert!(matches!(
        Frame::parse(&bytes),
        Err(libsl500::Error::ChecksumMismatch { .. })
    ));
}
