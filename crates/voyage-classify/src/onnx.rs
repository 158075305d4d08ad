use crate::error::{ClassifyError, Result};
use crate::labels::Labels;
use crate::prediction::Prediction;
use crate::preprocess::Preprocess;
use crate::ranking::{rank, softmax};
use crate::traits::ImageClassifier;
use ndarray::ArrayD;
use ort::{inputs, session::Session, value::TensorRef};
use std::path::Path;
use std::sync::{Arc, Mutex};
use voyage_image::Image;

/// Single-input, single-output ONNX image classifier.
///
/// Inference runs on tokio's blocking pool; the session is shared with that
/// task behind a mutex because `ort` needs it mutably.
pub struct OnnxClassifier {
    session: Arc<Mutex<Session>>,
    input_name: String,
    output_name: String,
    labels: Arc<Labels>,
    preprocess: Preprocess,
    top_k: usize,
    softmax: bool,
}

impl OnnxClassifier {
    pub fn from_file(model: impl AsRef<Path>, labels: Labels) -> Result<Self> {
        let model = model.as_ref();
        let session = Session::builder()
            .map_err(|e| ClassifyError::Model(format!("failed to create session builder: {}", e)))?
            .commit_from_file(model)
            .map_err(|e| {
                ClassifyError::Model(format!("failed to load {}: {}", model.display(), e))
            })?;

        let input_name = session
            .inputs()
            .first()
            .map(|input| input.name().to_string())
            .ok_or_else(|| ClassifyError::Model("model has no inputs".to_string()))?;
        let output_name = session
            .outputs()
            .first()
            .map(|output| output.name().to_string())
            .ok_or_else(|| ClassifyError::Model("model has no outputs".to_string()))?;

        log::info!(
            "loaded {} ({} -> {}, {} labels)",
            model.display(),
            input_name,
            output_name,
            labels.len()
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            output_name,
            labels: Arc::new(labels),
            preprocess: Preprocess::default(),
            top_k: 5,
            softmax: true,
        })
    }

    pub fn with_preprocess(mut self, preprocess: Preprocess) -> Self {
        self.preprocess = preprocess;
        self
    }

    /// Number of predictions returned per image.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    /// Whether the model output is logits that still need a softmax.
    pub fn with_softmax(mut self, softmax: bool) -> Self {
        self.softmax = softmax;
        self
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    fn infer(
        session: &Mutex<Session>,
        input_name: &str,
        output_name: &str,
        input: ArrayD<f32>,
    ) -> Result<Vec<f32>> {
        let mut session = session
            .lock()
            .map_err(|e| ClassifyError::Runtime(format!("session lock poisoned: {}", e)))?;

        let tensor_ref = TensorRef::from_array_view(input.view())
            .map_err(|e| ClassifyError::Runtime(format!("failed to create tensor ref: {}", e)))?;
        let outputs = session
            .run(inputs![input_name => tensor_ref])
            .map_err(|e| ClassifyError::Runtime(format!("inference failed: {}", e)))?;

        let scores = outputs[output_name].try_extract_array::<f32>().map_err(|e| {
            ClassifyError::Model(format!("output '{}' is not f32: {}", output_name, e))
        })?;
        Ok(scores.iter().copied().collect())
    }
}

impl ImageClassifier for OnnxClassifier {
    async fn make_predictions(&self, image: &Image) -> Result<Vec<Prediction>> {
        let tensor = self.preprocess.to_nchw(image)?;
        let input = ArrayD::from_shape_vec(tensor.shape, tensor.data)
            .map_err(|e| ClassifyError::Input(format!("failed to create ndarray: {}", e)))?;

        let session = Arc::clone(&self.session);
        let input_name = self.input_name.clone();
        let output_name = self.output_name.clone();
        let scores = tokio::task::spawn_blocking(move || {
            Self::infer(&session, &input_name, &output_name, input)
        })
        .await
        .map_err(|e| ClassifyError::Runtime(format!("inference task failed: {}", e)))??;

        let scores = if self.softmax { softmax(&scores) } else { scores };
        rank(&scores, &self.labels, self.top_k)
    }
}
