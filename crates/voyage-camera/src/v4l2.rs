use crate::bridge::CaptureCompletion;
use crate::session::{CaptureRequest, CaptureSession, FlashMode, SessionPreset};
use crate::{CameraConfig, CameraError, CaptureSurface};
use std::path::Path;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

type Job = (CaptureRequest, CaptureCompletion);

/// Still-photo surface on top of a V4L2 webcam.
///
/// Every request opens a short MJPEG stream on a dedicated worker thread,
/// discards the warm-up frames and returns the next frame's JPEG bytes. The
/// worker exits when the surface is dropped.
pub struct V4l2Surface {
    config: CameraConfig,
    session: CaptureSession,
    jobs: Option<mpsc::Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Surface")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("worker", &self.worker.is_some())
            .finish()
    }
}

impl V4l2Surface {
    /// Open the device at `config.device()` and start its capture session.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::ConfigurationMissing` if there is no device at
    /// that path, and `CameraError::Device` if it cannot be opened or does
    /// not deliver MJPEG at the requested size.
    pub fn open(config: CameraConfig) -> Result<Self, CameraError> {
        if !Path::new(config.device()).exists() {
            return Err(CameraError::ConfigurationMissing(format!(
                "no capture device at {}",
                config.device()
            )));
        }

        let device = Device::with_path(config.device())?;

        let format = Format::new(config.width(), config.height(), FourCC::new(b"MJPG"));
        let format = Capture::set_format(&device, &format)?;
        if format.fourcc != FourCC::new(b"MJPG") {
            return Err(CameraError::Device(format!(
                "{} does not support MJPEG",
                config.device()
            )));
        }
        log::info!(
            "{} configured for {}x{} MJPEG",
            config.device(),
            format.width,
            format.height
        );

        let (jobs, queue) = mpsc::channel::<Job>();
        let buffer_count = config.buffer_count().max(1);
        let warmup_frames = config.warmup_frames();
        let worker = thread::spawn(move || {
            for (request, completion) in queue {
                match Self::capture_one(&device, buffer_count, warmup_frames) {
                    Ok(jpeg) => completion.on_capture_finished(Some(jpeg), None),
                    Err(e) => completion.on_capture_finished(None, Some(e)),
                }
                log::debug!("capture #{} done", request.sequence());
            }
        });

        let mut session = CaptureSession::new(SessionPreset::Photo);
        session.start();

        Ok(Self {
            config,
            session,
            jobs: Some(jobs),
            worker: Some(worker),
        })
    }

    fn capture_one(
        device: &Device,
        buffer_count: u32,
        warmup_frames: u32,
    ) -> Result<Vec<u8>, CameraError> {
        let mut stream = MmapStream::with_buffers(device, Type::VideoCapture, buffer_count)?;

        for _ in 0..warmup_frames {
            CaptureStream::next(&mut stream)?;
        }

        // the buffer is only valid until the next call, copy it out
        let (data, meta) = CaptureStream::next(&mut stream)?;
        let used = match meta.bytesused as usize {
            0 => data.len(),
            n => n.min(data.len()),
        };
        if used == 0 {
            return Err(CameraError::Stream("driver returned an empty frame".to_string()));
        }
        Ok(data[..used].to_vec())
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}

impl CaptureSurface for V4l2Surface {
    fn session(&self) -> Option<&CaptureSession> {
        Some(&self.session)
    }

    fn capture_photo(&mut self, request: CaptureRequest, completion: CaptureCompletion) {
        if request.settings().flash != FlashMode::Off {
            log::debug!("V4L2 devices have no flash, ignoring {:?}", request.settings().flash);
        }

        match &self.jobs {
            Some(jobs) => {
                // a send error hands the completion back, and dropping it reports NoImage
                if jobs.send((request, completion)).is_err() {
                    log::error!("capture worker for {} has exited", self.config.device());
                }
            }
            None => drop(completion),
        }
    }
}

impl Drop for V4l2Surface {
    fn drop(&mut self) {
        // closing the queue ends the worker loop
        drop(self.jobs.take());

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}
