use crate::bridge::{CaptureCompletionBridge, PendingCapture};
use crate::config::SchedulerConfig;
use crate::session::CaptureRequest;
use crate::traits::{CaptureSurface, ImageObserver};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Where the loop currently is within a capture cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    /// Not capturing and nothing scheduled (not started, or no session).
    Idle,
    /// A request is out, waiting for the surface.
    Capturing,
    Decoding,
    /// The observer is handling the image.
    Classifying,
    /// Sleeping until the next trigger.
    Waiting,
    /// Torn down; nothing will be triggered again.
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchedulerStatus {
    pub state: SchedulerState,
    /// Capture cycles whose image reached the observer.
    pub cycles: u64,
}

/// Repeatedly captures a photo, hands it to an observer, then waits.
///
/// Cycles never overlap: the next request is only issued after the previous
/// photo was delivered, the observer returned and the interval elapsed.
pub struct CaptureScheduler<S> {
    surface: S,
    config: SchedulerConfig,
    sequence: u64,
}

impl<S: CaptureSurface> CaptureScheduler<S> {
    pub fn new(surface: S, config: SchedulerConfig) -> Self {
        Self {
            surface,
            config,
            sequence: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Issue one capture request against the running session.
    ///
    /// Returns `None`, without touching the surface, if the session is
    /// missing or not running.
    pub fn trigger_capture(&mut self) -> Option<PendingCapture> {
        match self.surface.session() {
            Some(session) if session.is_running() => {}
            Some(_) => {
                log::warn!("capture session not running, no capture triggered");
                return None;
            }
            None => {
                log::warn!("capture session not configured, no capture triggered");
                return None;
            }
        }

        self.sequence += 1;
        let request = CaptureRequest::new(self.sequence, self.config.settings());
        let (completion, pending) = CaptureCompletionBridge::open(request.sequence());
        log::debug!("capture #{} triggered", request.sequence());
        self.surface.capture_photo(request, completion);
        Some(pending)
    }
}

impl<S: CaptureSurface + 'static> CaptureScheduler<S> {
    /// Start the loop on the current `LocalSet`.
    ///
    /// The scheduler, and with it the surface, moves into the loop task and
    /// is dropped on teardown.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a `tokio::task::LocalSet`.
    pub fn start<O: ImageObserver + 'static>(self, observer: O) -> SchedulerHandle {
        let cancel = Arc::new(AtomicBool::new(false));
        let (status, _) = watch::channel(SchedulerStatus {
            state: SchedulerState::Idle,
            cycles: 0,
        });
        let status = Arc::new(status);

        let task = tokio::task::spawn_local(self.run(
            observer,
            Arc::clone(&cancel),
            Arc::clone(&status),
        ));

        SchedulerHandle {
            cancel,
            status,
            task: Some(task),
        }
    }

    async fn run<O: ImageObserver>(
        mut self,
        mut observer: O,
        cancel: Arc<AtomicBool>,
        status: Arc<watch::Sender<SchedulerStatus>>,
    ) {
        let set_state = |state| status.send_modify(|s| s.state = state);

        if !self.config.initial_delay().is_zero() {
            set_state(SchedulerState::Waiting);
            tokio::time::sleep(self.config.initial_delay()).await;
        }

        loop {
            if cancel.load(Ordering::Acquire) {
                break;
            }

            set_state(SchedulerState::Capturing);
            let Some(pending) = self.trigger_capture() else {
                // not retried: without a session the loop stays idle
                set_state(SchedulerState::Idle);
                return;
            };

            let sequence = pending.sequence();
            let outcome = pending.outcome().await;

            set_state(SchedulerState::Decoding);
            let image = CaptureCompletionBridge::decode(sequence, outcome);
            if image.is_empty() {
                log::debug!("capture #{} produced no image", sequence);
            }

            set_state(SchedulerState::Classifying);
            observer.image_captured(image).await;
            status.send_modify(|s| s.cycles += 1);

            if cancel.load(Ordering::Acquire) {
                break;
            }

            set_state(SchedulerState::Waiting);
            tokio::time::sleep(self.config.interval()).await;
        }

        set_state(SchedulerState::Stopped);
    }
}

/// Owner's handle on a running loop. Dropping it tears the loop down.
pub struct SchedulerHandle {
    cancel: Arc<AtomicBool>,
    status: Arc<watch::Sender<SchedulerStatus>>,
    task: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    pub fn status(&self) -> SchedulerStatus {
        *self.status.borrow()
    }

    /// Receiver that sees every state change of the loop.
    pub fn subscribe(&self) -> watch::Receiver<SchedulerStatus> {
        self.status.subscribe()
    }

    pub fn is_torn_down(&self) -> bool {
        self.task.is_none()
    }

    /// Stop the loop. A pending delayed trigger never fires.
    ///
    /// Calling this more than once is harmless.
    pub fn teardown(&mut self) {
        self.cancel.store(true, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
            self.status.send_modify(|s| s.state = SchedulerState::Stopped);
            log::info!("capture loop torn down");
        }
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}
