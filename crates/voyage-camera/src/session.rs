/// Pipeline preset a session is configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPreset {
    /// Full-resolution still photos.
    Photo,
}

/// Live capture pipeline (input device, photo output, preview) of one surface.
///
/// A surface creates exactly one session and starts it once. The session is
/// never stopped while the surface lives; it ends when the surface is dropped.
#[derive(Debug)]
pub struct CaptureSession {
    preset: SessionPreset,
    running: bool,
}

impl CaptureSession {
    pub fn new(preset: SessionPreset) -> Self {
        Self {
            preset,
            running: false,
        }
    }

    /// Mark the session as running. Starting a running session does nothing.
    pub fn start(&mut self) {
        if self.running {
            log::debug!("capture session already running");
            return;
        }
        self.running = true;
        log::info!("capture session started ({:?})", self.preset);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn preset(&self) -> SessionPreset {
        self.preset
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhotoFormat {
    #[default]
    Jpeg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashMode {
    #[default]
    Off,
    Auto,
    On,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptureSettings {
    pub format: PhotoFormat,
    pub flash: FlashMode,
}

/// "Capture exactly one photo now."
///
/// A fresh request is built for every trigger. The sequence number only
/// identifies the request in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureRequest {
    sequence: u64,
    settings: CaptureSettings,
}

impl CaptureRequest {
    pub fn new(sequence: u64, settings: CaptureSettings) -> Self {
        Self { sequence, settings }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn settings(&self) -> CaptureSettings {
        self.settings
    }
}

/// What the hardware produced for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Encoded photo bytes, not yet decoded.
    Image(Vec<u8>),
    NoImage,
}
