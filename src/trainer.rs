//! Workout session: camera, pose source and analyzer wired together.

use std::time::{Duration, Instant};

use crate::camera::{Camera, CameraError};
use crate::config::{AnalyzerConfig, TrainerConfig};
use crate::exercise::{ExerciseAnalyzer, ExerciseKind, ExerciseMetrics, UnknownExercise};
use crate::pose::PoseSource;

#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    #[error("start the camera before starting a workout")]
    CameraOff,
    #[error("exercise cannot change while a workout is running")]
    WorkoutRunning,
    #[error(transparent)]
    Camera(#[from] CameraError),
}

/// Stopwatch that only advances while running
#[derive(Debug, Clone, Default)]
pub struct WorkoutTimer {
    accumulated: Duration,
    started: Option<Instant>,
}

impl WorkoutTimer {
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if let Some(t) = self.started.take() {
            self.accumulated += t.elapsed();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.started.map(|t| t.elapsed()).unwrap_or_default()
    }
}

/// "MM:SS"; minutes keep counting past 59
pub fn format_mm_ss(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub struct Trainer {
    camera: Box<dyn Camera>,
    source: Box<dyn PoseSource>,
    analyzer: ExerciseAnalyzer,
    exercise: ExerciseKind,
    target_reps: u32,
    timer: WorkoutTimer,
    running: bool,
}

impl Trainer {
    pub fn new(
        camera: Box<dyn Camera>,
        source: Box<dyn PoseSource>,
        analyzer: ExerciseAnalyzer,
        exercise: ExerciseKind,
        target_reps: u32,
    ) -> Self {
        Self {
            camera,
            source,
            analyzer,
            exercise,
            target_reps: target_reps.max(1),
            timer: WorkoutTimer::default(),
            running: false,
        }
    }

    pub fn from_config(
        trainer: &TrainerConfig,
        analyzer: &AnalyzerConfig,
        camera: Box<dyn Camera>,
        source: Box<dyn PoseSource>,
    ) -> Result<Self, UnknownExercise> {
        let exercise: ExerciseKind = trainer.exercise.parse()?;
        Ok(Self::new(
            camera,
            source,
            ExerciseAnalyzer::from_config(analyzer),
            exercise,
            trainer.target_reps,
        ))
    }

    pub fn start_camera(&mut self) -> Result<(u32, u32), TrainerError> {
        Ok(self.camera.open()?)
    }

    /// Stopping the camera pauses a running workout
    pub fn stop_camera(&mut self) {
        if self.running {
            self.pause();
        }
        self.camera.close();
    }

    pub fn is_camera_on(&self) -> bool {
        self.camera.is_open()
    }

    /// Starts from zero: timer and rep count are cleared
    pub fn start_workout(&mut self) -> Result<(), TrainerError> {
        if !self.camera.is_open() {
            return Err(TrainerError::CameraOff);
        }
        self.analyzer.reset();
        self.timer.reset();
        self.timer.start();
        self.running = true;
        tracing::info!(exercise = %self.exercise, target = self.target_reps, "workout started");
        Ok(())
    }

    pub fn pause(&mut self) {
        self.running = false;
        self.timer.pause();
        tracing::info!(reps = self.analyzer.metrics().rep_count, "workout paused");
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.timer.reset();
        self.analyzer.reset();
    }

    /// Switches exercise, discarding the current metrics
    pub fn select_exercise(&mut self, exercise: ExerciseKind) -> Result<(), TrainerError> {
        if self.running {
            return Err(TrainerError::WorkoutRunning);
        }
        if exercise != self.exercise {
            self.exercise = exercise;
            self.analyzer.reset();
        }
        Ok(())
    }

    /// Processes one frame. Returns `None` unless a workout is running with
    /// the camera on.
    pub fn tick(&mut self) -> Option<&ExerciseMetrics> {
        if !self.running || !self.camera.is_open() {
            return None;
        }
        let pose = self.source.produce_frame();
        Some(self.analyzer.update(self.exercise, &pose))
    }

    pub fn metrics(&self) -> &ExerciseMetrics {
        self.analyzer.metrics()
    }

    pub fn exercise(&self) -> ExerciseKind {
        self.exercise
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn target_reps(&self) -> u32 {
        self.target_reps
    }

    pub fn set_target_reps(&mut self, target: u32) {
        self.target_reps = target.max(1);
    }

    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    pub fn format_elapsed(&self) -> String {
        format_mm_ss(self.elapsed())
    }

    /// Reps done as a percentage of the target, capped at 100
    pub fn progress(&self) -> f32 {
        let pct = self.metrics().rep_count as f32 / self.target_reps as f32 * 100.0;
        pct.min(100.0)
    }

    pub fn is_target_reached(&self) -> bool {
        self.metrics().rep_count >= self.target_reps
    }
}
