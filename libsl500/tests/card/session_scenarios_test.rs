#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use common::helpers::{reader_with, sent_commands, sent_frame};
use libsl500::card::{CardSession, SessionState};
use libsl500::protocol::{CommandCode, Reply};
use libsl500::Error;

#[test]
fn request_with_status_zero_finds_card() {
    let (mut reader, _) = reader_with(&[request_ok()]);
    let mut session = CardSession::new();
    assert!(session.request(&mut reader).unwrap());
    assert_eq!(session.state(), SessionState::Requested);
}

#[test]
fn request_with_status_one_finds_nothing() {
    let (mut reader, shared) = reader_with(&[request_no_card()]);
    let mut session = CardSession::new();
    assert!(!session.request(&mut reader).unwrap());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(sent_commands(&shared), vec![0x0201]);
}

#[test]
fn anticollision_stores_serial_number() {
    let (mut reader, _) = reader_with(&[request_ok(), anticollision_reply()]);
    let mut session = CardSession::new();
    session.request(&mut reader).unwrap();
    let serial = session.anticollision(&mut reader).unwrap();

    assert_eq!(serial.as_bytes(), &[0x11, 0x22, 0x33, 0x44]);
    assert_eq!(session.serial_number(), Some(serial));
    assert_eq!(session.state(), SessionState::Identified);
}

#[test]
fn full_session_step_by_step() {
    let mut replies = session_prefix();
    replies.push(read_reply(abc_block()));
    replies.push(Reply::success(CommandCode::Halt, vec![]));
    let (mut reader, shared) = reader_with(&replies);

    let mut session = CardSession::new();
    assert!(session.request(&mut reader).unwrap());
    session.anticollision(&mut reader).unwrap();
    session.select(&mut reader).unwrap();
    session.authenticate(&mut reader, 5).unwrap();
    let block = session.read_block(&mut reader).unwrap();
    assert_eq!(block.leading_text(), "ABC");
    session.halt(&mut reader).unwrap();

    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(
        sent_commands(&shared),
        vec![0x0201, 0x0202, 0x0203, 0x0207, 0x0208, 0x0204]
    );
    assert_eq!(sent_frame(&shared, 4).payload, vec![5]);
}

#[test]
fn out_of_order_call_sends_nothing_and_keeps_state() {
    let (mut reader, shared) = reader_with(&[request_ok()]);
    let mut session = CardSession::new();
    session.request(&mut reader).unwrap();

    match session.read_block(&mut reader) {
        Err(Error::InvalidSessionState { operation, state }) => {
            assert_eq!(operation, "read_block");
            assert_eq!(state, SessionState::Requested);
        }
        other => panic!("expected InvalidSessionState, got: {:?}", other),
    }
    assert_eq!(session.state(), SessionState::Requested);
    assert_eq!(shared.borrow().sent.len(), 1);
}

#[test]
fn timeout_mid_session_resets_to_idle() {
    // select never answers
    let (mut reader, _) = reader_with(&[request_ok(), anticollision_reply()]);
    let mut session = CardSession::new();
    session.request(&mut reader).unwrap();
    session.anticollision(&mut reader).unwrap();

    let err = session.select(&mut reader).unwrap_err();
    assert!(matches!(err, Error::HeaderTimeout { attempts: 10 }));
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.serial_number(), None);
}

#[test]
fn reply_for_another_command_is_rejected() {
    let (mut reader, _) = reader_with(&[
        request_ok(),
        Reply::success(CommandCode::Select, vec![0x08]),
    ]);
    let mut session = CardSession::new();
    session.request(&mut reader).unwrap();
    assert!(matches!(
        session.anticollision(&mut reader),
        Err(Error::UnexpectedResponse {
            expected: 0x0202,
            actual: 0x0203
        })
    ));
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn new_request_restarts_session() {
    let mut replies = session_prefix();
    replies.push(request_no_card());
    let (mut reader, _) = reader_with(&replies);

    let mut session = CardSession::new();
    session.request(&mut reader).unwrap();
    session.anticollision(&mut reader).unwrap();
    session.select(&mut reader).unwrap();
    session.authenticate(&mut reader, 1).unwrap();
    assert_eq!(session.state(), SessionState::Authenticated);

    assert!(!session.request(&mut reader).unwrap());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.authenticated_block(), None);
}
