//! Shared test infrastructure: a transport that records every frame

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, Waker};

use ws2812b_pwm::{PulseTransport, PwmChannel, StopFlag, TransferComplete};

/// Error returned by [`MockTransport`] when `fail_start` is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Transport that copies every started frame and optionally completes at once
pub struct MockTransport<'a> {
    completion: &'a TransferComplete,
    /// Raise the completion as soon as a transfer starts
    pub auto_complete: bool,
    /// Refuse to start transfers
    pub fail_start: bool,
    /// Every started frame, in order
    pub frames: Vec<Vec<u16>>,
    /// Channel of every started frame
    pub channels: Vec<PwmChannel>,
    /// Number of `stop` calls
    pub stops: usize,
    /// Raise `stop_flag` once this many frames were started
    stop_after: Option<(usize, &'a StopFlag)>,
    /// Counter outliving the transport, bumped on every `stop`
    stop_counter: Option<&'a Cell<usize>>,
}

impl<'a> MockTransport<'a> {
    pub fn new(completion: &'a TransferComplete) -> Self {
        Self {
            completion,
            auto_complete: true,
            fail_start: false,
            frames: Vec::new(),
            channels: Vec::new(),
            stops: 0,
            stop_after: None,
            stop_counter: None,
        }
    }

    /// Transport that never reports completion on its own
    pub fn stalled(completion: &'a TransferComplete) -> Self {
        Self {
            auto_complete: false,
            ..Self::new(completion)
        }
    }

    /// Raise `flag` after `frames` transfers were started
    pub fn stop_after(mut self, frames: usize, flag: &'a StopFlag) -> Self {
        self.stop_after = Some((frames, flag));
        self
    }

    /// Also count `stop` calls in `counter`
    pub fn count_stops_in(mut self, counter: &'a Cell<usize>) -> Self {
        self.stop_counter = Some(counter);
        self
    }

    pub fn last_frame(&self) -> &[u16] {
        self.frames.last().expect("no frame sent")
    }
}

impl PulseTransport for MockTransport<'_> {
    type Error = MockError;

    fn start(&mut self, channel: PwmChannel, pulses: &[u16]) -> Result<(), MockError> {
        if self.fail_start {
            return Err(MockError);
        }
        self.frames.push(pulses.to_vec());
        self.channels.push(channel);

        if let Some((frames, flag)) = self.stop_after {
            if self.frames.len() >= frames {
                flag.stop();
            }
        }
        if self.auto_complete {
            self.completion.signal();
        }
        Ok(())
    }

    fn stop(&mut self, _channel: PwmChannel) {
        self.stops += 1;
        if let Some(counter) = self.stop_counter {
            counter.set(counter.get() + 1);
        }
    }
}

/// Duty values for a 24-bit GRB word with the default 68/32 timing
pub fn word_pulses(word: u32) -> Vec<u16> {
    (0..24)
        .rev()
        .map(|bit| if word & (1 << bit) != 0 { 68 } else { 32 })
        .collect()
}

/// Decode the GRB words of a frame with the default timing
pub fn decode_words(frame: &[u16], leds: usize) -> Vec<u32> {
    frame[..leds * 24]
        .chunks(24)
        .map(|bits| {
            bits.iter()
                .fold(0u32, |word, &duty| (word << 1) | u32::from(duty == 68))
        })
        .collect()
}

/// Poll a future exactly once, then drop it
pub fn poll_once<F: Future>(fut: F) -> Poll<F::Output> {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    fut.as_mut().poll(&mut cx)
}
