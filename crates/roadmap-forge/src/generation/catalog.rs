//! Curated phrase sets for well-known topics.
//!
//! Tracks are tried in declaration order and the first one whose key occurs in
//! the lower-cased topic wins, so "JavaScript for Web Development" picks the
//! web development track.

/// Number of phrases every track (and the generic fallback) provides.
pub const PHRASES_PER_TRACK: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicTrack {
    /// Lower-case key matched as a substring of the topic.
    pub key: &'static str,
    pub phrases: [&'static str; PHRASES_PER_TRACK],
}

impl TopicTrack {
    pub fn matches(&self, lowered_topic: &str) -> bool {
        lowered_topic.contains(self.key)
    }
}

pub const TRACKS: [TopicTrack; 6] = [
    TopicTrack {
        key: "web development",
        phrases: [
            "HTML & CSS Fundamentals",
            "JavaScript Basics",
            "Responsive Design",
            "Version Control (Git)",
            "Frontend Framework (React/Vue/Angular)",
            "APIs and Fetching Data",
            "State Management",
            "Testing",
            "Deployment",
            "Advanced Patterns",
        ],
    },
    TopicTrack {
        key: "javascript",
        phrases: [
            "JavaScript Syntax and Basics",
            "Functions and Scope",
            "Objects and Prototypes",
            "DOM Manipulation",
            "Async Programming (Promises, Async/Await)",
            "ES6+ Features",
            "Modules and Bundling",
            "Testing JavaScript",
            "Node.js Introduction",
            "Frameworks (React, Vue, Angular)",
        ],
    },
    TopicTrack {
        key: "python",
        phrases: [
            "Python Syntax and Basics",
            "Data Structures",
            "Functions and Modules",
            "Object-Oriented Programming",
            "File Handling",
            "Error Handling",
            "Libraries and Packages",
            "Web Development (Django/Flask)",
            "Database Integration",
            "Testing and Best Practices",
        ],
    },
    TopicTrack {
        key: "data science",
        phrases: [
            "Statistics Fundamentals",
            "Python for Data Science",
            "Data Manipulation (Pandas)",
            "Data Visualization",
            "SQL for Data Analysis",
            "Machine Learning Basics",
            "Data Cleaning",
            "Model Evaluation",
            "Deep Learning Introduction",
            "Big Data Concepts",
        ],
    },
    TopicTrack {
        key: "ai engineering",
        phrases: [
            "Mathematics for AI",
            "Python Programming",
            "Machine Learning Fundamentals",
            "Neural Networks",
            "Deep Learning",
            "Natural Language Processing",
            "Computer Vision",
            "Reinforcement Learning",
            "MLOps",
            "AI Ethics",
        ],
    },
    TopicTrack {
        key: "cybersecurity",
        phrases: [
            "Networking Fundamentals",
            "Operating Systems",
            "Cryptography",
            "Security Principles",
            "Vulnerability Assessment",
            "Penetration Testing",
            "Incident Response",
            "Compliance and Standards",
            "Forensics",
            "Cloud Security",
        ],
    },
];

/// First track whose key occurs in `topic` (case-insensitive).
pub fn find_track(topic: &str) -> Option<&'static TopicTrack> {
    let lowered = topic.to_lowercase();
    TRACKS.iter().find(|track| track.matches(&lowered))
}

/// Template phrases for topics no track covers.
pub fn generic_phrases(topic: &str) -> Vec<String> {
    vec![
        format!("{topic} Fundamentals"),
        format!("Introduction to {topic}"),
        format!("Core Concepts in {topic}"),
        format!("Advanced {topic} Techniques"),
        format!("Best Practices for {topic}"),
        format!("{topic} Tools and Frameworks"),
        format!("Building Projects with {topic}"),
        format!("{topic} in Real-world Applications"),
        format!("Debugging and Troubleshooting {topic}"),
        format!("Future Trends in {topic}"),
    ]
}

/// The phrases a roadmap for `topic` cycles through.
pub fn base_phrases(topic: &str) -> Vec<String> {
    match find_track(topic) {
        Some(track) => track.phrases.iter().map(|p| p.to_string()).collect(),
        None => generic_phrases(topic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declared_track_wins() {
        let track = find_track("JavaScript for Web Development").unwrap();
        assert_eq!(track.key, "web development");
        assert_eq!(find_track("Data Science with Python").unwrap().key, "python");
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(find_track("CYBERSECURITY").unwrap().key, "cybersecurity");
    }

    #[test]
    fn unknown_topics_fall_back_to_templates() {
        assert!(find_track("Quantum Macrame").is_none());
        let phrases = base_phrases("Quantum Macrame");
        assert_eq!(phrases.len(), PHRASES_PER_TRACK);
        assert_eq!(phrases[0], "Quantum Macrame Fundamentals");
        assert_eq!(phrases[9], "Future Trends in Quantum Macrame");
    }
}
