use libsl500::protocol::{Frame, verify, xor_checksum};
use proptest::prelude::*;

#[test]
fn empty_range_checksum_is_zero() {
    assert_eq!(xor_checksum(&[]), 0);
}

proptest! {
    // checksum == XOR(devid..payload) and folding it back in yields 0
    #[test]
    fn frame_checksum_covers_devid_to_payload(
        command in any::<u16>(),
        payload in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let bytes = Frame::command(command, payload).encode().unwrap();
        let body = &bytes[4..bytes.len() - 1];
        let chk = bytes[bytes.len() - 1];
        prop_assert_eq!(chk, xor_checksum(body));
        prop_assert!(verify(body, chk));
        prop_assert_eq!(xor_checksum(&bytes[4..]), 0);
    }
}
