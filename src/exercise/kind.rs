use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::metrics::Classification;
use super::{burpee, lunge, plank, push_up, squat};
use crate::pose::{KeypointIndex, Pose};

/// Exercises the analyzer knows how to judge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseKind {
    PushUps,
    Squats,
    Planks,
    Lunges,
    Burpees,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown exercise: {0}")]
pub struct UnknownExercise(pub String);

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 5] = [
        Self::PushUps,
        Self::Squats,
        Self::Planks,
        Self::Lunges,
        Self::Burpees,
    ];

    /// Stable identifier, e.g. `"push-ups"`
    pub fn id(&self) -> &'static str {
        match self {
            Self::PushUps => "push-ups",
            Self::Squats => "squats",
            Self::Planks => "planks",
            Self::Lunges => "lunges",
            Self::Burpees => "burpees",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id.trim())
    }

    /// Landmarks the rule for this exercise reads
    pub fn required_keypoints(&self) -> &'static [KeypointIndex] {
        match self {
            Self::PushUps => &push_up::REQUIRED,
            Self::Squats => &squat::REQUIRED,
            Self::Planks => &plank::REQUIRED,
            Self::Lunges => &lunge::REQUIRED,
            Self::Burpees => &burpee::REQUIRED,
        }
    }

    pub fn classify(&self, pose: &Pose) -> Classification {
        match self {
            Self::PushUps => push_up::classify(pose),
            Self::Squats => squat::classify(pose),
            Self::Planks => plank::classify(pose),
            Self::Lunges => lunge::classify(pose),
            Self::Burpees => burpee::classify(pose),
        }
    }

    pub fn info(&self) -> &'static ExerciseInfo {
        // CATALOG is ordered like ALL
        &CATALOG[*self as usize]
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExerciseKind {
    type Err = UnknownExercise;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownExercise(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

/// Display data for the exercise picker
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseInfo {
    pub kind: ExerciseKind,
    pub name: &'static str,
    pub difficulty: Difficulty,
    /// Muscle groups worked
    pub target: &'static str,
}

pub const CATALOG: &[ExerciseInfo] = &[
    ExerciseInfo {
        kind: ExerciseKind::PushUps,
        name: "Push-ups",
        difficulty: Difficulty::Beginner,
        target: "Chest, Arms",
    },
    ExerciseInfo {
        kind: ExerciseKind::Squats,
        name: "Squats",
        difficulty: Difficulty::Beginner,
        target: "Legs, Glutes",
    },
    ExerciseInfo {
        kind: ExerciseKind::Planks,
        name: "Planks",
        difficulty: Difficulty::Intermediate,
        target: "Core",
    },
    ExerciseInfo {
        kind: ExerciseKind::Lunges,
        name: "Lunges",
        difficulty: Difficulty::Intermediate,
        target: "Legs, Glutes",
    },
    ExerciseInfo {
        kind: ExerciseKind::Burpees,
        name: "Burpees",
        difficulty: Difficulty::Advanced,
        target: "Full Body",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for kind in ExerciseKind::ALL {
            assert_eq!(ExerciseKind::parse(kind.id()), Some(kind));
            assert_eq!(kind.id().parse::<ExerciseKind>(), Ok(kind));
        }
        assert_eq!(ExerciseKind::parse(" squats "), Some(ExerciseKind::Squats));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(ExerciseKind::parse("jumping-jacks"), None);
        assert_eq!(
            "Push-Ups".parse::<ExerciseKind>(),
            Err(UnknownExercise("Push-Ups".to_string()))
        );
    }

    #[test]
    fn test_catalog_matches_kind_order() {
        assert_eq!(CATALOG.len(), ExerciseKind::ALL.len());
        for kind in ExerciseKind::ALL {
            assert_eq!(kind.info().kind, kind);
        }
        assert_eq!(ExerciseKind::Burpees.info().difficulty, Difficulty::Advanced);
        assert_eq!(ExerciseKind::Planks.info().target, "Core");
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&ExerciseKind::PushUps).unwrap();
        assert_eq!(json, "\"push-ups\"");
    }
}
