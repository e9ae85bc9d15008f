use anyhow::{Context, Result};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use form_coach::camera::SimulatedCamera;
use form_coach::config::Config;
use form_coach::exercise::{ExerciseAnalyzer, ExerciseKind};
use form_coach::pose::{KeypointIndex, Pose, PoseSource, ScriptedPoseSource, SyntheticPoseSource};
use form_coach::trainer::Trainer;

const CONFIG_PATH: &str = "config.toml";
const DEFAULT_FRAMES: usize = 40;
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Usage: form-coach [frames] [exercise]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load_or_default(CONFIG_PATH);
    let args: Vec<String> = std::env::args().collect();

    let frames = match args.get(1) {
        Some(n) => n.parse::<usize>().with_context(|| format!("invalid frame count: {}", n))?,
        None => DEFAULT_FRAMES,
    };
    let exercise: ExerciseKind = match args.get(2) {
        Some(id) => id.parse()?,
        None => config.trainer.exercise.parse()?,
    };

    let (width, height) = (config.trainer.camera_width, config.trainer.camera_height);
    let info = exercise.info();

    println!("=== Form Coach {} ===", env!("GIT_VERSION"));
    println!("{} ({}, {})", info.name, info.difficulty, info.target);
    println!("target: {} reps", config.trainer.target_reps);
    println!();

    let source = ScriptedPoseSource::new(rep_cycle(exercise, width, height));
    let mut trainer = Trainer::new(
        Box::new(SimulatedCamera::new(width, height)),
        Box::new(source),
        ExerciseAnalyzer::from_config(&config.analyzer),
        exercise,
        config.trainer.target_reps,
    );

    trainer.start_camera()?;
    trainer.start_workout()?;

    for frame in 0..frames {
        if let Some(m) = trainer.tick() {
            println!(
                "[{:3}] {:<5} {:<10} reps={:<3} form={:3}%  {}",
                frame,
                format!("{:?}", m.phase),
                format!("{:?}", m.status),
                m.rep_count,
                m.form_accuracy,
                m.feedback
            );
        }
        if trainer.is_target_reached() {
            println!("target reached!");
            break;
        }
        thread::sleep(FRAME_INTERVAL);
    }

    trainer.pause();
    trainer.stop_camera();

    println!();
    println!(
        "time {}  reps {}/{}  progress {:.0}%",
        trainer.format_elapsed(),
        trainer.metrics().rep_count,
        trainer.target_reps(),
        trainer.progress()
    );
    Ok(())
}

/// Two-frame loop (bottom, top) built on the synthetic skeleton by moving
/// only the landmarks the exercise reads. Planks hold a single pose.
fn rep_cycle(kind: ExerciseKind, width: u32, height: u32) -> Vec<Pose> {
    use KeypointIndex::*;

    let base = SyntheticPoseSource::new(width, height).produce_frame();
    let with_y = |overrides: &[(KeypointIndex, f32)]| {
        let mut pose = base.clone();
        for &(idx, y) in overrides {
            pose.keypoints[idx as usize].y = y;
        }
        pose
    };

    match kind {
        ExerciseKind::PushUps => vec![
            with_y(&[(LeftShoulder, 200.0), (LeftWrist, 320.0), (LeftHip, 230.0)]),
            with_y(&[(LeftShoulder, 200.0), (LeftWrist, 260.0), (LeftHip, 210.0)]),
        ],
        ExerciseKind::Squats => vec![
            with_y(&[(LeftHip, 300.0), (LeftKnee, 390.0), (LeftAnkle, 420.0)]),
            with_y(&[(LeftHip, 300.0), (LeftKnee, 360.0), (LeftAnkle, 420.0)]),
        ],
        ExerciseKind::Planks => vec![with_y(&[
            (LeftShoulder, 240.0),
            (LeftHip, 250.0),
            (LeftAnkle, 260.0),
        ])],
        ExerciseKind::Lunges => vec![
            with_y(&[(LeftHip, 200.0), (LeftKnee, 320.0), (RightKnee, 330.0)]),
            with_y(&[(LeftHip, 200.0), (LeftKnee, 280.0), (RightKnee, 290.0)]),
        ],
        ExerciseKind::Burpees => vec![
            with_y(&[(LeftShoulder, 250.0), (LeftHip, 260.0), (LeftWrist, 380.0)]),
            with_y(&[(LeftShoulder, 400.0), (LeftHip, 250.0), (LeftWrist, 380.0)]),
        ],
    }
}
