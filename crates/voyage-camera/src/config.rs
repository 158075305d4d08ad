use crate::session::CaptureSettings;
use std::time::Duration;

/// Delay between capture cycles unless configured otherwise.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// Configuration for the capture device behind a surface.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    device: String,
    width: u32,
    height: u32,
    buffer_count: u32,
    warmup_frames: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            buffer_count: 2,
            warmup_frames: 3,
        }
    }
}

impl CameraConfig {
    /// Set the device path (e.g., "/dev/video0").
    pub fn with_device(mut self, device: String) -> Self {
        self.device = device;
        self
    }

    /// Set the capture width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the capture height in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the number of driver buffers used for a single capture.
    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    /// Set how many frames are discarded after the stream starts, while
    /// exposure settles.
    pub fn with_warmup_frames(mut self, warmup_frames: u32) -> Self {
        self.warmup_frames = warmup_frames;
        self
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }

    pub fn warmup_frames(&self) -> u32 {
        self.warmup_frames
    }
}

/// Timing of the capture loop.
#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    interval: Duration,
    initial_delay: Duration,
    settings: CaptureSettings,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            initial_delay: DEFAULT_INTERVAL,
            settings: CaptureSettings::default(),
        }
    }
}

impl SchedulerConfig {
    /// Set the delay between the end of one cycle and the next trigger.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the delay between `start` and the first trigger.
    pub fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    /// Set the settings every capture request is issued with.
    pub fn with_settings(mut self, settings: CaptureSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    pub fn settings(&self) -> CaptureSettings {
        self.settings
    }
}
