//! Fitting the grid to its container.
//!
//! Container size changes arrive in bursts while a window is dragged. The
//! [`ResizeDebouncer`] coalesces them so only the last size of a burst is
//! applied once the container has been still for the quiet period.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::config::ForgeConfig;

/// Rows and columns of whole cells that fit a container, clamped to the
/// configured range.
pub fn dimensions_for_container(width_px: f64, height_px: f64, config: &ForgeConfig) -> (usize, usize) {
    let cell = f64::from(config.cell_size);
    let fit = |px: f64| {
        let cells = if px.is_finite() && px > 0.0 {
            (px / cell).floor() as usize
        } else {
            0
        };
        config.clamp_dimension(cells)
    };
    (fit(height_px), fit(width_px))
}

/// Handle to a running debounce task.
///
/// The task stops when this handle is dropped.
pub struct ResizeDebouncer {
    requests: mpsc::UnboundedSender<(usize, usize)>,
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl ResizeDebouncer {
    /// Spawns the debounce task on the current tokio runtime.
    ///
    /// Returns the handle and the receiver of settled `(rows, cols)` sizes.
    pub fn spawn(quiet: Duration) -> (Self, mpsc::UnboundedReceiver<(usize, usize)>) {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<(usize, usize)>();
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let (cancel_tx, mut cancel_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut pending = None;
            loop {
                tokio::select! {
                    request = request_rx.recv() => match request {
                        Some(size) => pending = Some(size),
                        None => break, // Handle dropped
                    },
                    _ = tokio::time::sleep(quiet), if pending.is_some() => {
                        if let Some(size) = pending.take() {
                            log::debug!("resize settled at {}x{}", size.0, size.1);
                            if settled_tx.send(size).is_err() {
                                break; // Receiver dropped
                            }
                        }
                    }
                    _ = &mut cancel_rx => {
                        break; // Cancelled
                    }
                }
            }
        });

        (
            Self {
                requests: request_tx,
                cancel_tx: Some(cancel_tx),
            },
            settled_rx,
        )
    }

    /// Records a new size; restarts the quiet period.
    pub fn request(&self, rows: usize, cols: usize) {
        let _ = self.requests.send((rows, cols));
    }

    /// Stops the task. Pending sizes are discarded.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for ResizeDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
