// libsl500-rs/libsl500/src/transport/mock.rs

use std::cell::{Ref, RefCell, RefMut};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::protocol::Reply;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and serves
/// queued reply bytes.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub incoming: VecDeque<u8>,
    /// Number of `bytes_available` calls, i.e. header polling iterations
    pub polls: usize,
    /// Number of `reset` calls
    pub resets: usize,
    /// Last line speed requested through `set_baud_rate`
    pub baud_rate: Option<u32>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw bytes as if the reader had sent them.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.incoming.extend(bytes.iter().copied());
    }

    /// Queue an encoded reply frame.
    pub fn push_reply(&mut self, reply: &Reply) {
        self.push_bytes(&reply.to_bytes());
    }

    /// Take back the most recently sent frame.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Turn the mock into a clonable handle so a test can keep inspecting
    /// it after a `Reader` took ownership of the transport.
    pub fn into_shared(self) -> SharedMockTransport {
        SharedMockTransport {
            inner: Rc::new(RefCell::new(self)),
        }
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive_byte(&mut self, _timeout_ms: u64) -> Result<u8> {
        self.incoming.pop_front().ok_or(Error::ReadTimeout)
    }

    fn bytes_available(&mut self) -> Result<usize> {
        self.polls += 1;
        Ok(self.incoming.len())
    }

    fn reset(&mut self) -> Result<()> {
        self.resets += 1;
        self.incoming.clear();
        Ok(())
    }

    fn set_baud_rate(&mut self, bits_per_second: u32) -> Result<()> {
        self.baud_rate = Some(bits_per_second);
        Ok(())
    }
}

/// Transport wrapper that delegates into `Rc<RefCell<MockTransport>>`
#[derive(Debug, Clone)]
pub struct SharedMockTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedMockTransport {
    pub fn borrow(&self) -> Ref<'_, MockTransport> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, MockTransport> {
        self.inner.borrow_mut()
    }
}

impl Transport for SharedMockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().send(data)
    }

    fn receive_byte(&mut self, timeout_ms: u64) -> Result<u8> {
        self.inner.borrow_mut().receive_byte(timeout_ms)
    }

    fn bytes_available(&mut self) -> Result<usize> {
        self.inner.borrow_mut().bytes_available()
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.borrow_mut().reset()
    }

    fn set_baud_rate(&mut self, bits_per_second: u32) -> Result<()> {
        self.inner.borrow_mut().set_baud_rate(bits_per_second)
    }
}
