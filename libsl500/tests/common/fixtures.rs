// fixtures.rs: provides commonly used test payloads/replies

use libsl500::protocol::{CommandCode, Reply};

pub fn sample_serial_bytes() -> [u8; 4] {
    [0x11, 0x22, 0x33, 0x44]
}

pub fn request_ok() -> Reply {
    Reply::success(CommandCode::Request, vec![0x04, 0x00])
}

pub fn request_no_card() -> Reply {
    Reply::failure(CommandCode::Request, 0x01)
}

pub fn anticollision_reply() -> Reply {
    Reply::success(CommandCode::Anticollision, sample_serial_bytes().to_vec())
}

pub fn select_reply() -> Reply {
    Reply::success(CommandCode::Select, vec![0x08])
}

pub fn auth_reply() -> Reply {
    Reply::success(CommandCode::Authenticate, vec![])
}

pub fn read_reply(block: [u8; 16]) -> Reply {
    Reply::success(CommandCode::Read, block.to_vec())
}

pub fn write_reply() -> Reply {
    Reply::success(CommandCode::Write, vec![])
}

/// "ABC" followed by zero padding
pub fn abc_block() -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..3].copy_from_slice(b"ABC");
    block
}

/// Request through authenticate for the sample card.
pub fn session_prefix() -> Vec<Reply> {
    vec![
        request_ok(),
        anticollision_reply(),
        select_reply(),
        auth_reply(),
    ]
}
