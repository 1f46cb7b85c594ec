// libsl500-rs/libsl500/src/protocol/checksum.rs

/// Compute the frame checksum: XOR of every byte from the device id
/// field through the end of the payload.
pub fn xor_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Check a covered byte range against its stored checksum. XOR-ing the
/// range together with the checksum yields 0 for an intact frame.
pub fn verify(bytes: &[u8], checksum: u8) -> bool {
    xor_checksum(bytes) ^ checksum == 0
}
