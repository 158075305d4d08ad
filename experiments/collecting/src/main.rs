use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::LocalSet;
use voyage_base::log::{self, LevelFilter};
use voyage_camera::{CameraConfig, SchedulerConfig};
use voyage_classify::Labels;
use voyage_collect::{CollectConfig, CollectingLoop};
use voyage_overlay::{OverlayHistory, draw_order};

/// Photograph the scene every few seconds, classify it and stack an overlay
/// for every recognized object.
#[derive(Parser, Debug)]
#[command(name = "collecting")]
struct Args {
    /// Capture device
    #[arg(long, default_value = "/dev/video0")]
    device: String,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Delay between the end of one capture cycle and the next photo
    #[arg(long, default_value_t = 3000)]
    interval_ms: u64,

    /// Delay before the first photo [default: the interval]
    #[arg(long)]
    initial_delay_ms: Option<u64>,

    /// ONNX image classifier
    #[arg(long)]
    model: Option<PathBuf>,

    /// Class names, one per line in model output order
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Predictions kept per photo
    #[arg(long, default_value_t = 5)]
    top_k: usize,

    /// Write date-named log files here instead of logging to stdout
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn collect_config(&self) -> CollectConfig {
        let interval = Duration::from_millis(self.interval_ms);
        let initial_delay = self
            .initial_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(interval);

        let mut config = CollectConfig::default()
            .with_camera(
                CameraConfig::default()
                    .with_device(self.device.clone())
                    .with_width(self.width)
                    .with_height(self.height),
            )
            .with_scheduler(
                SchedulerConfig::default()
                    .with_interval(interval)
                    .with_initial_delay(initial_delay),
            )
            .with_top_k(self.top_k);

        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(labels) = &self.labels {
            config = config.with_labels(labels);
        }
        if let Some(dir) = &self.log_dir {
            config = config.with_log_dir(dir);
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = args.collect_config();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        voyage_base::default_level()
    };
    match config.log_dir() {
        Some(dir) => voyage_base::init_file_logger(dir, level)?,
        None => voyage_base::init_stdout_logger(level),
    }

    if let Err(e) = config.validate() {
        voyage_base::log_fatal!("Invalid configuration: {}", e);
    }
    let labels = config.load_labels()?;

    log::info!("Collecting");
    log::info!(
        "Camera: {} at {}x{}",
        config.camera().device(),
        config.camera().width(),
        config.camera().height()
    );

    // scheduling and overlay state stay on this one thread
    LocalSet::new().run_until(run(config, labels)).await
}

#[cfg(all(feature = "v4l2", feature = "onnx"))]
async fn run(config: CollectConfig, labels: Option<Labels>) -> Result<(), Box<dyn std::error::Error>> {
    use voyage_camera::{CameraError, V4l2Surface};
    use voyage_classify::OnnxClassifier;

    let (Some(model), Some(labels)) = (config.model(), labels) else {
        return Err("--model and --labels are required".into());
    };

    let surface = match V4l2Surface::open(config.camera().clone()) {
        Ok(surface) => surface,
        Err(CameraError::ConfigurationMissing(msg)) => {
            log::error!("{}, nothing will be captured", msg);
            return wait_for_interrupt().await;
        }
        Err(e) => return Err(e.into()),
    };

    let mut classifier = OnnxClassifier::from_file(model, labels)?;
    if let Some(top_k) = config.top_k() {
        classifier = classifier.with_top_k(top_k);
    }

    let collecting = CollectingLoop::start(surface, classifier, config.scheduler().clone());
    show_overlay(collecting).await
}

#[cfg(not(all(feature = "v4l2", feature = "onnx")))]
async fn run(_config: CollectConfig, _labels: Option<Labels>) -> Result<(), Box<dyn std::error::Error>> {
    log::error!("built without the v4l2 and onnx features, nothing will be captured");
    wait_for_interrupt().await
}

#[cfg_attr(not(all(feature = "v4l2", feature = "onnx")), allow(dead_code))]
async fn show_overlay(mut collecting: CollectingLoop) -> Result<(), Box<dyn std::error::Error>> {
    let mut overlay = collecting.overlay();
    log_overlay(&overlay.borrow_and_update());

    loop {
        tokio::select! {
            changed = overlay.changed() => {
                if changed.is_err() {
                    break;
                }
                log_overlay(&overlay.borrow_and_update());
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                log::info!("Interrupted");
                break;
            }
        }
    }

    collecting.teardown();
    Ok(())
}

#[cfg_attr(not(all(feature = "v4l2", feature = "onnx")), allow(dead_code))]
fn log_overlay(history: &OverlayHistory) {
    let stack: Vec<String> = draw_order(history)
        .iter()
        .map(|layer| format!("{}@{}", layer.asset, layer.z_index))
        .collect();
    log::info!("Overlay: {}", stack.join(" "));
}

async fn wait_for_interrupt() -> Result<(), Box<dyn std::error::Error>> {
    tokio::signal::ctrl_c().await?;
    log::info!("Interrupted");
    Ok(())
}
