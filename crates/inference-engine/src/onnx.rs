//! ONNX Classifier Backend (tract)

use crate::classifier::{argmax, Classifier};
use crate::InferenceError;
use std::path::{Path, PathBuf};
use tract_onnx::prelude::*;
use tracing::{debug, info};

type OnnxPlan = TypedRunnableModel<TypedModel>;

/// Classifier exported to ONNX
///
/// The graph takes one `[1, width]` f32 input. An i64 first output is read as
/// the class index; an f32 first output is treated as per-class scores.
pub struct OnnxClassifier {
    plan: OnnxPlan,
    input_width: usize,
    n_classes: usize,
    model_path: PathBuf,
}

impl OnnxClassifier {
    /// Load and optimize an ONNX graph
    pub fn load(
        path: impl AsRef<Path>,
        input_width: usize,
        n_classes: usize,
    ) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        info!("Loading ONNX classifier from {}", path.display());

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    InferenceFact::dt_shape(f32::datum_type(), tvec!(1, input_width)),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            plan,
            input_width,
            n_classes,
            model_path: path.to_path_buf(),
        })
    }

    /// Path the graph was loaded from
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

fn failed(e: impl std::fmt::Display) -> InferenceError {
    InferenceError::InferenceFailed(e.to_string())
}

/// Read the class index from the first graph output
fn class_index(output: &Tensor) -> Result<usize, InferenceError> {
    match output.datum_type() {
        DatumType::I64 => {
            let view = output.to_array_view::<i64>().map_err(failed)?;
            let raw = view
                .iter()
                .next()
                .copied()
                .ok_or_else(|| failed("empty label output"))?;
            usize::try_from(raw).map_err(|_| failed(format!("negative class index {raw}")))
        }
        DatumType::F32 => {
            let view = output.to_array_view::<f32>().map_err(failed)?;
            argmax(view.iter().map(|&v| v as f64))
        }
        other => Err(failed(format!("unsupported output type {other:?}"))),
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f64]) -> Result<usize, InferenceError> {
        if features.len() != self.input_width {
            return Err(InferenceError::InvalidInputShape {
                expected: self.input_width,
                actual: features.len(),
            });
        }

        let data: Vec<f32> = features.iter().map(|&v| v as f32).collect();
        let input = Tensor::from_shape(&[1, self.input_width], &data).map_err(failed)?;
        let outputs = self.plan.run(tvec!(input.into())).map_err(failed)?;
        let output = outputs
            .first()
            .ok_or_else(|| failed("model produced no outputs"))?;

        let index = class_index(output)?;

        debug!("ONNX classifier predicted class {}", index);
        Ok(index)
    }

    fn n_classes(&self) -> usize {
        self.n_classes
    }

    fn input_width(&self) -> usize {
        self.input_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_file() {
        let result = OnnxClassifier::load("does/not/exist.onnx", 398, 6);
        assert!(matches!(result, Err(InferenceError::ModelLoadError(_))));
    }

    #[test]
    fn test_label_output_is_class_index() {
        assert_eq!(class_index(&tensor1(&[3i64])).unwrap(), 3);
    }

    #[test]
    fn test_score_output_is_argmaxed() {
        assert_eq!(class_index(&tensor2(&[[0.1f32, 0.9, 0.0]])).unwrap(), 1);
    }

    #[test]
    fn test_negative_label_rejected() {
        assert!(matches!(
            class_index(&tensor1(&[-1i64])),
            Err(InferenceError::InferenceFailed(_))
        ));
    }

    #[test]
    fn test_empty_label_output_rejected() {
        assert!(class_index(&tensor1::<i64>(&[])).is_err());
    }

    #[test]
    fn test_unsupported_output_type() {
        assert!(matches!(
            class_index(&tensor1(&[0.5f64, 0.5])),
            Err(InferenceError::InferenceFailed(_))
        ));
    }
}
