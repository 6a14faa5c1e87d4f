//! Notifications shared between the driver and interrupt handlers.
//!
//! Both types are `Sync` and meant to live in a `static`, so the interrupt
//! handler of the transport and the task calling [`Ws2812b::send`] can reach
//! the same instance.
//!
//! [`Ws2812b::send`]: crate::Ws2812b::send

use core::cell::Cell;

use critical_section::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Completion notification for a pulse transfer.
///
/// The transport raises it exactly once per started sequence, typically from
/// the DMA transfer-complete or PWM pulse-finished interrupt. The driver
/// consumes it before accepting the next frame.
pub struct TransferComplete {
    inner: Signal<CriticalSectionRawMutex, ()>,
}

impl TransferComplete {
    /// Create a new, unraised notification.
    pub const fn new() -> Self {
        Self {
            inner: Signal::new(),
        }
    }

    /// Report that the current transfer finished.
    ///
    /// Safe to call from interrupt context.
    pub fn signal(&self) {
        self.inner.signal(());
    }

    /// Check whether a completion is pending without consuming it.
    pub fn is_raised(&self) -> bool {
        self.inner.signaled()
    }

    /// Wait for the completion and consume it.
    pub(crate) async fn wait(&self) {
        self.inner.wait().await;
    }

    /// Drop a stale completion, if any.
    pub(crate) fn reset(&self) {
        self.inner.reset();
    }
}

impl Default for TransferComplete {
    fn default() -> Self {
        Self::new()
    }
}

/// Stop request for long running animations.
///
/// Checked once per frame by [`FadeController::run`](crate::FadeController::run);
/// a frame already in progress always finishes.
pub struct StopFlag {
    inner: Mutex<Cell<bool>>,
}

impl StopFlag {
    /// Create a new, cleared flag.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(false)),
        }
    }

    /// Request a stop.
    pub fn stop(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).set(true));
    }

    /// Clear a previous stop request.
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).set(false));
    }

    /// Check whether a stop was requested.
    pub fn is_stopped(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl Default for StopFlag {
    fn default() -> Self {
        Self::new()
    }
}
