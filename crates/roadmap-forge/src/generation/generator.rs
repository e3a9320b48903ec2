//! Template-based roadmap generation.
//!
//! Deterministic: the same topic and level always produce the same steps.
//! Phrases come from the [catalog](super::catalog) and are cycled when the
//! level asks for more steps than there are phrases.

use super::catalog::base_phrases;
use super::resources::resources_for;
use super::validator::ValidTopic;
use crate::model::{Level, Roadmap, RoadmapStep};
use serde::{Deserialize, Serialize};

/// How many steps a roadmap has at each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCounts {
    pub beginner: u32,
    pub intermediate: u32,
    pub advanced: u32,
}

impl Default for StepCounts {
    fn default() -> Self {
        Self {
            beginner: 10,
            intermediate: 12,
            advanced: 15,
        }
    }
}

impl StepCounts {
    pub fn for_level(&self, level: Level) -> u32 {
        match level {
            Level::Beginner => self.beginner,
            Level::Intermediate => self.intermediate,
            Level::Advanced => self.advanced,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoadmapGenerator {
    counts: StepCounts,
}

impl RoadmapGenerator {
    pub fn new(counts: StepCounts) -> Self {
        Self { counts }
    }

    pub fn step_count(&self, level: Level) -> u32 {
        self.counts.for_level(level)
    }

    pub fn generate(&self, topic: &ValidTopic, level: Level) -> Roadmap {
        let phrases = base_phrases(topic.as_str());
        let steps = phrases
            .iter()
            .cycle()
            .zip(1..=self.step_count(level))
            .map(|(phrase, step_number)| build_step(phrase, step_number, level))
            .collect();

        Roadmap {
            topic: topic.to_string(),
            level,
            steps,
        }
    }
}

fn build_step(phrase: &str, step_number: u32, level: Level) -> RoadmapStep {
    RoadmapStep {
        step_number,
        title: format!("{phrase} - {step_number}"),
        description: format!(
            "Learn the fundamentals of {phrase}. Understand core concepts, best practices, and common patterns."
        ),
        estimated_time: level.estimated_time().to_string(),
        resources: resources_for(phrase),
    }
}

/// Generates with the default step counts.
pub fn generate(topic: &ValidTopic, level: Level) -> Roadmap {
    RoadmapGenerator::default().generate(topic, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::validate_topic;

    #[test]
    fn step_counts_follow_level() {
        let topic = validate_topic("Rust").unwrap();
        for (level, expected) in [
            (Level::Beginner, 10),
            (Level::Intermediate, 12),
            (Level::Advanced, 15),
        ] {
            assert_eq!(generate(&topic, level).steps.len(), expected);
        }
    }

    #[test]
    fn custom_counts_are_honored() {
        let generator = RoadmapGenerator::new(StepCounts {
            beginner: 3,
            intermediate: 4,
            advanced: 25,
        });
        let topic = validate_topic("Python").unwrap();
        let roadmap = generator.generate(&topic, Level::Advanced);
        assert_eq!(roadmap.steps.len(), 25);
        assert_eq!(roadmap.steps[24].step_number, 25);
        assert_eq!(roadmap.steps[24].title, "File Handling - 25");
    }

    #[test]
    fn step_fields_are_formatted() {
        let topic = validate_topic("Cybersecurity").unwrap();
        let step = &generate(&topic, Level::Intermediate).steps[2];
        assert_eq!(step.step_number, 3);
        assert_eq!(step.title, "Cryptography - 3");
        assert_eq!(
            step.description,
            "Learn the fundamentals of Cryptography. Understand core concepts, best practices, and common patterns."
        );
        assert_eq!(step.estimated_time, "1-2 weeks");
        assert_eq!(step.resources.len(), 4);
    }

    #[test]
    fn keeps_the_topic_as_typed() {
        let topic = validate_topic("  Quantum Macrame ").unwrap();
        let roadmap = generate(&topic, Level::Beginner);
        assert_eq!(roadmap.topic, "Quantum Macrame");
        assert_eq!(roadmap.level, Level::Beginner);
    }
}
