use super::kind::ExerciseKind;
use super::metrics::{Classification, ExerciseMetrics};
use super::reps::RepCounter;
use crate::config::AnalyzerConfig;
use crate::pose::{KeypointSmoother, Pose};

/// Judges one frame for `kind`.
///
/// When a landmark the exercise reads is below `min_confidence` the frame
/// is not classified: the verdict keeps the previous phase and accuracy and
/// asks the user to get into view.
pub fn classify_frame(
    kind: ExerciseKind,
    pose: &Pose,
    previous: &ExerciseMetrics,
    min_confidence: f32,
) -> Classification {
    let missing = pose.missing(kind.required_keypoints(), min_confidence);
    if !missing.is_empty() {
        tracing::debug!(exercise = %kind, ?missing, "required keypoints not visible");
        return Classification::out_of_view(previous.phase, previous.form_accuracy);
    }
    kind.classify(pose)
}

/// Produces the metrics following `previous` for one pose. Pure.
pub fn analyze(
    kind: ExerciseKind,
    pose: &Pose,
    previous: &ExerciseMetrics,
    min_confidence: f32,
) -> ExerciseMetrics {
    let verdict = classify_frame(kind, pose, previous, min_confidence);

    let mut counter = RepCounter::resume(previous.rep_count, previous.phase);
    counter.observe(verdict.phase);

    ExerciseMetrics {
        rep_count: counter.count(),
        form_accuracy: verdict.form_accuracy,
        feedback: verdict.feedback.to_string(),
        status: verdict.status,
        phase: verdict.phase,
    }
}

/// Owns the metrics of one workout session across frames
pub struct ExerciseAnalyzer {
    min_confidence: f32,
    smoother: KeypointSmoother,
    metrics: ExerciseMetrics,
}

impl ExerciseAnalyzer {
    pub fn new(min_confidence: f32, smoothing: f32) -> Self {
        Self {
            min_confidence,
            smoother: KeypointSmoother::new(smoothing),
            metrics: ExerciseMetrics::default(),
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.min_confidence, config.smoothing)
    }

    pub fn update(&mut self, kind: ExerciseKind, pose: &Pose) -> &ExerciseMetrics {
        let pose = self.smoother.apply(pose);
        let next = analyze(kind, &pose, &self.metrics, self.min_confidence);
        if next.rep_count > self.metrics.rep_count {
            tracing::debug!(exercise = %kind, reps = next.rep_count, "rep completed");
        }
        self.metrics = next;
        &self.metrics
    }

    /// Like `update`, keyed by exercise id. An unknown id leaves the
    /// metrics untouched.
    pub fn update_named(&mut self, exercise: &str, pose: &Pose) -> &ExerciseMetrics {
        match ExerciseKind::parse(exercise) {
            Some(kind) => self.update(kind, pose),
            None => {
                tracing::debug!(exercise, "unknown exercise, frame ignored");
                &self.metrics
            }
        }
    }

    pub fn metrics(&self) -> &ExerciseMetrics {
        &self.metrics
    }

    pub fn reset(&mut self) {
        self.smoother.reset();
        self.metrics = ExerciseMetrics::default();
    }
}

impl Default for ExerciseAnalyzer {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}
