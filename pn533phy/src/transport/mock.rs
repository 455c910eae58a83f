// pn533-phy/pn533phy/src/transport/mock.rs

//! In-memory `Bus` with scripted results.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::transport::traits::Bus;
use crate::{Error, Result};

/// One scripted answer to a `read` call.
#[derive(Debug, Clone)]
enum ReadScript {
    /// Copy these bytes and report exactly their count.
    Exact(Vec<u8>),
    /// Copy these bytes, zero the rest of the buffer, report a full read.
    Padded(Vec<u8>),
    Fail(Error),
}

#[derive(Debug, Default)]
struct MockState {
    writes: Vec<Vec<u8>>,
    write_results: VecDeque<Result<usize>>,
    reads: VecDeque<ReadScript>,
    read_calls: usize,
    io_forbidden: bool,
}

/// Mock bus for unit tests. It records written frames and answers reads
/// from a queue.
///
/// Clones share the same script and log, so a test can keep one handle
/// after moving another into a `Phy`.
///
/// With nothing queued, writes are fully accepted and reads return an
/// all-zero buffer (READY clear), which is what an idle chip answers.
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    state: Arc<Mutex<MockState>>,
}

impl MockBus {
    /// Mock with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue the result of the next `write` call.
    pub fn push_write_result(&self, result: Result<usize>) {
        self.lock().write_results.push_back(result);
    }

    /// Queue raw bytes for the next `read`; the reported count is their
    /// length, so a shorter vector simulates a short transfer.
    pub fn push_read(&self, bytes: Vec<u8>) {
        self.lock().reads.push_back(ReadScript::Exact(bytes));
    }

    /// Queue a full-length read whose status byte has READY set, followed
    /// by `frame` and zero padding.
    pub fn push_ready_frame(&self, frame: &[u8]) {
        let mut bytes = Vec::with_capacity(frame.len() + 1);
        bytes.push(crate::constants::READY_BIT);
        bytes.extend_from_slice(frame);
        self.lock().reads.push_back(ReadScript::Padded(bytes));
    }

    /// Queue a full-length read with READY clear.
    pub fn push_not_ready(&self) {
        self.lock().reads.push_back(ReadScript::Padded(vec![0x00]));
    }

    /// Fail the next `read` with `err`.
    pub fn push_read_error(&self, err: Error) {
        self.lock().reads.push_back(ReadScript::Fail(err));
    }

    /// Testing hook: any further bus access panics, failing the test.
    pub fn forbid_io(&self) {
        self.lock().io_forbidden = true;
    }

    /// Every buffer passed to `write`, failed attempts included.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.lock().writes.clone()
    }

    /// Number of `write` calls so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes.len()
    }

    /// Number of `read` calls so far.
    pub fn read_count(&self) -> usize {
        self.lock().read_calls
    }
}

impl Bus for MockBus {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let mut state = self.lock();
        if state.io_forbidden {
            drop(state);
            panic!("bus write issued while I/O is forbidden");
        }
        state.writes.push(data.to_vec());
        state.write_results.pop_front().unwrap_or(Ok(data.len()))
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut state = self.lock();
        if state.io_forbidden {
            drop(state);
            panic!("bus read issued while I/O is forbidden");
        }
        state.read_calls += 1;
        match state.reads.pop_front() {
            None => {
                buf.fill(0);
                Ok(buf.len())
            }
            Some(ReadScript::Exact(bytes)) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                Ok(n)
            }
            Some(ReadScript::Padded(bytes)) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                buf[n..].fill(0);
                Ok(buf.len())
            }
            Some(ReadScript::Fail(err)) => Err(err),
        }
    }
}
