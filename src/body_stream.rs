// awsrest: Rust client for Amazon S3, SQS and SimpleDB style services
// Copyright 2025 The awsrest Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Pull-based reader over a response body that is still being transferred
//!
//! [`BodyStream`] keeps the bytes received so far in a growable buffer and
//! hands them out from the front. Asking for more data than is buffered
//! calls [`BodyStream::pump`], which blocks until the transfer delivers the
//! next chunk or finishes. That is the only place a read can block; the
//! [`Read`] and [`BufRead`] implementations call it and nothing else does.

use bytes::{Buf, Bytes, BytesMut};
use std::cmp::min;
use std::fmt;
use std::io::{self, BufRead, Read};

/// Size of the chunk requested from the transfer by one pump.
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferState {
    /// More bytes may still arrive.
    InFlight,
    /// The transfer ended (or failed) and its handle was released.
    Complete,
}

pub struct BodyStream {
    source: Option<Box<dyn Read + Send>>,
    buffer: BytesMut,
    state: TransferState,
    chunk_size: usize,
    received: u64,
}

impl BodyStream {
    pub fn new(source: Box<dyn Read + Send>) -> Self {
        Self {
            source: Some(source),
            buffer: BytesMut::new(),
            state: TransferState::InFlight,
            chunk_size: DEFAULT_CHUNK_SIZE,
            received: 0,
        }
    }

    /// A stream with no transfer behind it, as returned for `HEAD` requests.
    pub fn empty() -> Self {
        Self {
            source: None,
            buffer: BytesMut::new(),
            state: TransferState::Complete,
            chunk_size: DEFAULT_CHUNK_SIZE,
            received: 0,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TransferState::Complete
    }

    /// Bytes received but not yet read.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Total bytes received from the transfer so far.
    pub fn received(&self) -> u64 {
        self.received
    }

    /// Pulls at most one chunk from the transfer into the buffer.
    ///
    /// Blocks until the transfer delivers data or ends. Returns the number of
    /// bytes added; zero means the transfer is complete. A transfer error
    /// completes the stream and is returned to the caller.
    pub fn pump(&mut self) -> io::Result<usize> {
        let Some(source) = self.source.as_mut() else {
            self.state = TransferState::Complete;
            return Ok(0);
        };

        let start = self.buffer.len();
        self.buffer.resize(start + self.chunk_size, 0);
        loop {
            match source.read(&mut self.buffer[start..]) {
                Ok(0) => {
                    self.buffer.truncate(start);
                    self.finish();
                    return Ok(0);
                }
                Ok(n) => {
                    self.buffer.truncate(start + n);
                    self.received += n as u64;
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.buffer.truncate(start);
                    log::debug!("body transfer aborted after {} bytes: {}", self.received, e);
                    self.finish();
                    return Err(e);
                }
            }
        }
    }

    /// Pumps until the transfer completes and returns everything not yet read.
    pub fn drain_to_end(&mut self) -> io::Result<Bytes> {
        while self.pump()? > 0 {}
        Ok(self.buffer.split().freeze())
    }

    /// Releases the transfer handle and discards buffered bytes.
    pub fn close(&mut self) {
        self.finish();
        self.buffer.clear();
    }

    fn finish(&mut self) {
        self.state = TransferState::Complete;
        self.source = None;
    }
}

impl Read for BodyStream {
    /// Reads buffered bytes, pumping the transfer when the buffer is empty.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.buffer.is_empty() {
            if self.pump()? == 0 {
                return Ok(0);
            }
        }
        let n = min(buf.len(), self.buffer.len());
        buf[..n].copy_from_slice(&self.buffer[..n]);
        self.buffer.advance(n);
        Ok(n)
    }
}

impl BufRead for BodyStream {
    /// Returns the buffered bytes, pumping the transfer when there are none.
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        while self.buffer.is_empty() {
            if self.pump()? == 0 {
                break;
            }
        }
        Ok(&self.buffer[..])
    }

    fn consume(&mut self, amt: usize) {
        let amt = min(amt, self.buffer.len());
        self.buffer.advance(amt);
    }
}

impl fmt::Debug for BodyStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyStream")
            .field("state", &self.state)
            .field("buffered", &self.buffer.len())
            .field("received", &self.received)
            .finish()
    }
}

impl Drop for BodyStream {
    fn drop(&mut self) {
        if self.source.is_some() {
            log::trace!(
                "closing body stream with transfer in flight after {} bytes",
                self.received
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{Receiver, Sender, channel};

    /// Delivers whatever the sender pushes; ends when the sender is dropped.
    struct ChannelReader {
        rx: Receiver<Vec<u8>>,
        pending: Vec<u8>,
    }

    impl Read for ChannelReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pending.is_empty() {
                match self.rx.recv() {
                    Ok(chunk) => self.pending = chunk,
                    Err(_) => return Ok(0),
                }
            }
            let n = min(buf.len(), self.pending.len());
            buf[..n].copy_from_slice(&self.pending[..n]);
            self.pending.drain(..n);
            Ok(n)
        }
    }

    fn channel_stream() -> (Sender<Vec<u8>>, BodyStream) {
        let (tx, rx) = channel();
        let reader = ChannelReader {
            rx,
            pending: Vec::new(),
        };
        (tx, BodyStream::new(Box::new(reader)))
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer"))
        }
    }

    #[test]
    fn test_read_before_transfer_completes() {
        let (tx, mut stream) = channel_stream();
        tx.send(b"hello".to_vec()).unwrap();

        let mut buf = [0u8; 64];
        let n = stream.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"hello");
        assert_eq!(stream.state(), TransferState::InFlight);

        tx.send(b" world".to_vec()).unwrap();
        drop(tx);
        let mut rest = String::new();
        stream.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " world");
        assert!(stream.is_complete());
        assert_eq!(stream.received(), 11);
    }

    #[test]
    fn test_pump_pulls_one_chunk() {
        let (tx, stream) = channel_stream();
        let mut stream = stream.with_chunk_size(4);
        tx.send(b"abcdefgh".to_vec()).unwrap();
        drop(tx);

        assert_eq!(stream.pump().unwrap(), 4);
        assert_eq!(stream.buffered(), 4);
        assert_eq!(stream.pump().unwrap(), 4);
        assert_eq!(stream.buffered(), 8);
        assert_eq!(stream.pump().unwrap(), 0);
        assert!(stream.is_complete());
    }

    #[test]
    fn test_drain_to_end_returns_unread_bytes() {
        let (tx, mut stream) = channel_stream();
        tx.send(b"<Error>".to_vec()).unwrap();
        tx.send(b"</Error>".to_vec()).unwrap();
        drop(tx);

        let mut first = [0u8; 1];
        stream.read_exact(&mut first).unwrap();
        let rest = stream.drain_to_end().unwrap();
        assert_eq!(&rest[..], b"Error></Error>");
    }

    #[test]
    fn test_buf_read_lines() {
        let (tx, stream) = channel_stream();
        let mut stream = stream.with_chunk_size(3);
        tx.send(b"one\ntwo\nthree".to_vec()).unwrap();
        drop(tx);
        let lines: Vec<String> = stream.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_transfer_error_completes_stream() {
        let mut stream = BodyStream::new(Box::new(FailingReader));
        let err = stream.read(&mut [0u8; 8]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        assert!(stream.is_complete());
        assert_eq!(stream.read(&mut [0u8; 8]).unwrap(), 0);
    }

    #[test]
    fn test_empty_stream() {
        let mut stream = BodyStream::empty();
        assert!(stream.is_complete());
        assert_eq!(stream.read(&mut [0u8; 8]).unwrap(), 0);
        assert!(stream.fill_buf().unwrap().is_empty());
    }
}
