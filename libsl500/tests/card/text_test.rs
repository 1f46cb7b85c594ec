#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use common::helpers::{LateReplyTransport, reader_with, sent_commands, sent_frame};
use libsl500::card::CardSession;
use libsl500::device::ReaderBuilder;
use std::time::{Duration, Instant};

#[test]
fn read_text_decodes_leading_bytes() {
    let mut replies = session_prefix();
    replies.push(read_reply(abc_block()));
    let (mut reader, shared) = reader_with(&replies);

    let mut session = CardSession::new();
    assert_eq!(session.read_text(&mut reader).unwrap(), "ABC");
    // authenticated against the text block
    assert_eq!(sent_frame(&shared, 3).payload[1], 1);
    assert_eq!(sent_frame(&shared, 4).payload, vec![1]);
}

#[test]
fn read_text_without_card_sends_only_request() {
    let (mut reader, shared) = reader_with(&[request_no_card()]);
    let mut session = CardSession::new();

    let err = session.read_text(&mut reader).unwrap_err();
    assert!(err.is_card_not_found());
    assert_eq!(sent_commands(&shared), vec![0x0201]);
}

#[test]
fn write_text_with_seventeen_bytes_sends_nothing() {
    let (mut reader, shared) = reader_with(&[]);
    let mut session = CardSession::new();

    let err = session
        .write_text(&mut reader, "ABCDEFGHIJKLMNOPQ")
        .unwrap_err();
    assert!(matches!(
        err,
        libsl500::Error::PayloadTooLarge {
            max: 16,
            actual: 17
        }
    ));
    assert!(shared.borrow().sent.is_empty());
}

#[test]
fn write_block_with_seventeen_bytes_sends_nothing() {
    let (mut reader, shared) = reader_with(&session_prefix());
    let mut session = CardSession::new();
    session.request(&mut reader).unwrap();
    session.anticollision(&mut reader).unwrap();
    session.select(&mut reader).unwrap();
    session.authenticate(&mut reader, 1).unwrap();
    let before = shared.borrow().sent.len();

    assert!(session.write_block(&mut reader, &[0u8; 17]).is_err());
    assert_eq!(shared.borrow().sent.len(), before);
}

#[test]
fn write_then_read_text() {
    let mut replies = session_prefix();
    replies.push(write_reply());
    replies.extend(session_prefix());
    let mut stored = [0u8; 16];
    stored[..5].copy_from_slice(b"hello");
    replies.push(read_reply(stored));
    let (mut reader, shared) = reader_with(&replies);

    let mut session = CardSession::new();
    session.write_text(&mut reader, "hello").unwrap();
    assert_eq!(&sent_frame(&shared, 4).payload[1..6], b"hello");
    assert_eq!(session.read_text(&mut reader).unwrap(), "hello");
}

#[test]
fn read_text_picks_up_late_replies_immediately() {
    let mut replies = session_prefix();
    replies.push(read_reply(abc_block()));
    // default config: 10 polls up to 100 ms apart
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(LateReplyTransport::new(&replies)))
        .build()
        .unwrap();

    let mut session = CardSession::new();
    let started = Instant::now();
    let text = session.read_text(&mut reader).unwrap();
    let elapsed = started.elapsed();

    assert_eq!(text, "ABC");
    assert!(
        elapsed < Duration::from_millis(100),
        "5 exchanges took {:?}",
        elapsed
    );
}
