//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::BLOCK_SIZE;
use crate::device::{Reader, ReaderConfig};
use crate::protocol::{CommandCode, Reply};
use crate::transport::{MockTransport, SharedMockTransport};

/// Reader configuration with the default protocol values but no waiting
/// between header polls.
#[doc(hidden)]
pub fn fast_config() -> ReaderConfig {
    ReaderConfig {
        header_poll_interval_ms: 0,
        ..ReaderConfig::default()
    }
}

/// Build a Reader over a MockTransport pre-seeded with the given replies.
/// The returned handle shares the mock so the test can inspect sent frames.
#[doc(hidden)]
pub fn mock_reader(replies: Vec<Reply>) -> (Reader, SharedMockTransport) {
    let shared = MockTransport::new().into_shared();
    for reply in &replies {
        shared.borrow_mut().push_reply(reply);
    }
    let reader = Reader::with_config(Box::new(shared.clone()), fast_config());
    (reader, shared)
}

/// Replies for request, anticollision and select of a card with `serial`.
#[doc(hidden)]
pub fn selected_card_replies(serial: [u8; 4]) -> Vec<Reply> {
    vec![
        Reply::success(CommandCode::Request, vec![0x04, 0x00]),
        Reply::success(CommandCode::Anticollision, serial.to_vec()),
        Reply::success(CommandCode::Select, vec![0x08]),
    ]
}

/// Same as [`selected_card_replies`] followed by a successful authenticate.
#[doc(hidden)]
pub fn authenticated_card_replies(serial: [u8; 4]) -> Vec<Reply> {
    let mut replies = selected_card_replies(serial);
    replies.push(Reply::success(CommandCode::Authenticate, vec![]));
    replies
}

/// 16-byte block holding `text` followed by zeros.
#[doc(hidden)]
pub fn text_block(text: &[u8]) -> Vec<u8> {
    let mut block = vec![0u8; BLOCK_SIZE];
    let n = text.len().min(BLOCK_SIZE);
    block[..n].copy_from_slice(&text[..n]);
    block
}
