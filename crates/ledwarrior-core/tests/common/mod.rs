#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

use ledwarrior_core::protocol::{FrameDecoder, Message, layout, parse_message, stuff};
use ledwarrior_core::{BackwardFrame, DaliCommand, ForwardFrame, Timing, Transport};

/// Frame the bridge sends `after` the request was written.
pub struct Scheduled {
    pub after: Duration,
    pub payload: Vec<u8>,
}

pub fn now(payload: &[u8]) -> Scheduled {
    Scheduled {
        after: Duration::ZERO,
        payload: payload.to_vec(),
    }
}

pub fn at(ms: u64, payload: &[u8]) -> Scheduled {
    Scheduled {
        after: Duration::from_millis(ms),
        payload: payload.to_vec(),
    }
}

pub fn timeframe_expired(status: u8) -> Vec<u8> {
    vec![layout::HEADER_TIMEFRAME_EXPIRED, status]
}

pub fn invalid_dali_frame(status: u8) -> Vec<u8> {
    vec![layout::HEADER_INVALID_DALI_FRAME, status]
}

pub fn backward_frame(value: u8) -> Vec<u8> {
    vec![
        layout::HEADER_DALI_RCV_1BYTE,
        layout::STATUS_VALID_REPLY | layout::STATUS_RCV_1BYTE,
        value,
    ]
}

/// Bridge stand-in that answers each written DALI command with a script.
///
/// Echo requests are answered immediately so a driver can be constructed.
#[derive(Default)]
pub struct ScriptedTransport {
    scripts: VecDeque<Vec<Scheduled>>,
    pending: VecDeque<(Instant, u8)>,
    pub written: Vec<Vec<u8>>,
    pub cleared: bool,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer to the next DALI command.
    pub fn then(mut self, script: Vec<Scheduled>) -> Self {
        self.scripts.push_back(script);
        self
    }

    /// Unstuffed payloads of every DALI command written so far.
    pub fn commands(&self) -> Vec<Vec<u8>> {
        self.written
            .iter()
            .filter_map(|bytes| unstuff(bytes))
            .filter(|payload| payload.first() == Some(&layout::HEADER_DALI_COMMAND))
            .collect()
    }

    fn schedule(&mut self, script: Vec<Scheduled>) {
        let written_at = Instant::now();
        for Scheduled { after, payload } in script {
            let due = written_at + after;
            self.pending
                .extend(stuff(&payload).into_iter().map(|byte| (due, byte)));
        }
    }
}

impl Transport for ScriptedTransport {
    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        let Some(&(due, byte)) = self.pending.front() else {
            thread::sleep(timeout);
            return Ok(None);
        };
        let now = Instant::now();
        if due > now {
            let wait = due - now;
            if wait > timeout {
                thread::sleep(timeout);
                return Ok(None);
            }
            thread::sleep(wait);
        }
        self.pending.pop_front();
        Ok(Some(byte))
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.written.push(bytes.to_vec());
        let Some(payload) = unstuff(bytes) else {
            return Ok(());
        };
        match parse_message(&payload) {
            Ok(Message::Echo { byte }) => {
                self.schedule(vec![now(&[layout::HEADER_ECHO, byte])]);
            }
            Ok(Message::DaliCommand) => {
                let script = self.scripts.pop_front().unwrap_or_default();
                self.schedule(script);
            }
            _ => {}
        }
        Ok(())
    }

    fn clear_buffers(&mut self) -> io::Result<()> {
        self.cleared = true;
        self.pending.clear();
        Ok(())
    }
}

/// Wire that returns every written byte.
#[derive(Default)]
pub struct Loopback {
    buffer: VecDeque<u8>,
}

impl Transport for Loopback {
    fn read_byte(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        match self.buffer.pop_front() {
            Some(byte) => Ok(Some(byte)),
            None => {
                thread::sleep(timeout);
                Ok(None)
            }
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.buffer.extend(bytes);
        Ok(())
    }
}

pub fn unstuff(bytes: &[u8]) -> Option<Vec<u8>> {
    let mut decoder = FrameDecoder::new();
    bytes.iter().find_map(|byte| decoder.feed(*byte))
}

/// Timing stretched well past scheduler jitter, keeping the DALI proportions.
pub fn relaxed_timing() -> Timing {
    Timing {
        settle_window: Duration::from_millis(100),
        reply_window: Duration::from_millis(400),
        ..Timing::default()
    }
}

/// COMPARE: yes/no query used during random address search.
pub struct Compare;

impl DaliCommand for Compare {
    type Response = bool;

    fn frame(&self) -> ForwardFrame {
        ForwardFrame::from_bytes([0xA9, 0x00])
    }

    fn is_query(&self) -> bool {
        true
    }

    fn collision_is_affirmative(&self) -> bool {
        true
    }

    fn response(&self, reply: Option<BackwardFrame>) -> bool {
        reply.is_some()
    }
}

pub struct QueryActualLevel(pub u8);

impl DaliCommand for QueryActualLevel {
    type Response = Option<u8>;

    fn frame(&self) -> ForwardFrame {
        ForwardFrame::from_bytes([(self.0 << 1) | 1, 0xA0])
    }

    fn is_query(&self) -> bool {
        true
    }

    fn response(&self, reply: Option<BackwardFrame>) -> Option<u8> {
        reply.map(BackwardFrame::value)
    }
}

pub struct Reset(pub u8);

impl DaliCommand for Reset {
    type Response = ();

    fn frame(&self) -> ForwardFrame {
        ForwardFrame::from_bytes([(self.0 << 1) | 1, 0x20])
    }

    fn is_config(&self) -> bool {
        true
    }

    fn response(&self, _reply: Option<BackwardFrame>) {}
}

pub struct Off(pub u8);

impl DaliCommand for Off {
    type Response = ();

    fn frame(&self) -> ForwardFrame {
        ForwardFrame::from_bytes([(self.0 << 1) | 1, 0x00])
    }

    fn response(&self, _reply: Option<BackwardFrame>) {}
}
