//! Fixed rule tables turning scores into guidance text.
//! Every rule is evaluated independently, in table order.

use crate::types::{Category, LearningPath, Recommendation, Scores, WiscarDimension};

/// Scalar a rule looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Category(Category),
    Wiscar(WiscarDimension),
}

impl Metric {
    pub fn read(&self, scores: &Scores) -> u8 {
        match self {
            Metric::Category(Category::Psychometric) => scores.psychometric,
            Metric::Category(Category::Technical) => scores.technical,
            Metric::Category(Category::Aptitude) => scores.aptitude,
            Metric::Category(Category::Wiscar) => scores.wiscar.average().round() as u8,
            Metric::Wiscar(dimension) => scores.wiscar.get(*dimension),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    AtLeast(u8),
    Below(u8),
}

impl Threshold {
    pub fn holds(&self, value: u8) -> bool {
        match self {
            Threshold::AtLeast(min) => value >= *min,
            Threshold::Below(max) => value < *max,
        }
    }
}

pub struct InsightRule {
    pub metric: Metric,
    pub threshold: Threshold,
    pub message: &'static str,
}

impl InsightRule {
    pub fn fires(&self, scores: &Scores) -> bool {
        self.threshold.holds(self.metric.read(scores))
    }
}

pub static INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        metric: Metric::Category(Category::Psychometric),
        threshold: Threshold::AtLeast(75),
        message: "Your personality profile shows strong alignment with edge cloud architecture roles.",
    },
    InsightRule {
        metric: Metric::Category(Category::Technical),
        threshold: Threshold::AtLeast(70),
        message: "You demonstrate solid technical understanding of edge computing concepts.",
    },
    InsightRule {
        metric: Metric::Category(Category::Technical),
        threshold: Threshold::Below(50),
        message: "Consider building foundational knowledge in networking and distributed systems.",
    },
    InsightRule {
        metric: Metric::Wiscar(WiscarDimension::Interest),
        threshold: Threshold::AtLeast(80),
        message: "Your strong interest in edge technologies is a significant advantage.",
    },
    InsightRule {
        metric: Metric::Wiscar(WiscarDimension::Cognitive),
        threshold: Threshold::AtLeast(75),
        message: "Your problem-solving approach is well-suited for complex system design.",
    },
];

pub fn insights(scores: &Scores) -> Vec<String> {
    INSIGHT_RULES
        .iter()
        .filter(|rule| rule.fires(scores))
        .map(|rule| rule.message.to_string())
        .collect()
}

const NEXT_STEPS_YES: &[&str] = &[
    "Begin with edge computing fundamentals and networking courses",
    "Set up a home lab with Raspberry Pi or edge devices",
    "Explore Azure IoT Edge or AWS IoT Greengrass",
    "Join edge computing communities and forums",
];

const NEXT_STEPS_MAYBE: &[&str] = &[
    "Strengthen foundational skills in networking and cloud computing",
    "Complete introductory courses in distributed systems",
    "Gain hands-on experience with Linux and containerization",
    "Reassess in 2-3 months after building these skills",
];

const NEXT_STEPS_NO: &[&str] = &[
    "Consider starting with general cloud computing or DevOps",
    "Build programming and system administration skills",
    "Explore related fields that match your strengths better",
];

pub fn next_steps(recommendation: Recommendation) -> Vec<String> {
    let steps = match recommendation {
        Recommendation::Yes => NEXT_STEPS_YES,
        Recommendation::Maybe => NEXT_STEPS_MAYBE,
        Recommendation::No => NEXT_STEPS_NO,
    };
    steps.iter().map(|s| s.to_string()).collect()
}

/// Role pairs offered when a metric clears its threshold, in order.
static CONDITIONAL_ROLES: &[(Metric, Threshold, [&str; 2])] = &[
    (
        Metric::Category(Category::Technical),
        Threshold::AtLeast(60),
        ["Cloud Solutions Architect", "DevOps Engineer"],
    ),
    (
        Metric::Category(Category::Psychometric),
        Threshold::AtLeast(70),
        ["IoT Product Manager", "Technical Project Manager"],
    ),
];

const BASE_ROLES: [&str; 2] = ["Site Reliability Engineer", "Network Engineer"];

pub fn alternative_roles(scores: &Scores) -> Vec<String> {
    CONDITIONAL_ROLES
        .iter()
        .filter(|(metric, threshold, _)| threshold.holds(metric.read(scores)))
        .flat_map(|(_, _, roles)| roles.iter())
        .chain(BASE_ROLES.iter())
        .map(|r| r.to_string())
        .collect()
}

const BEGINNER: &[&str] = &[
    "Cloud Computing Fundamentals",
    "Networking Basics (TCP/IP, DNS)",
    "Linux Command Line Essentials",
    "Introduction to Containerization",
];

const INTERMEDIATE: &[&str] = &[
    "Distributed Systems Architecture",
    "Edge Computing with AWS/Azure",
    "Kubernetes and Container Orchestration",
    "IoT Device Management",
];

const ADVANCED: &[&str] = &[
    "Real-time Systems Design",
    "Edge AI and Machine Learning",
    "5G Network Integration",
    "Edge Security Architecture",
];

/// Curriculum suggestion. Currently the same for every score profile.
pub fn learning_path(_scores: &Scores) -> LearningPath {
    let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
    LearningPath {
        beginner: owned(BEGINNER),
        intermediate: owned(INTERMEDIATE),
        advanced: owned(ADVANCED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_insights_for_middling_scores() {
        let scores = Scores {
            psychometric: 60,
            technical: 60,
            ..Scores::default()
        };
        assert!(insights(&scores).is_empty());
    }

    #[test]
    fn technical_insights_are_exclusive() {
        let high = Scores {
            technical: 70,
            ..Scores::default()
        };
        let low = Scores {
            technical: 49,
            ..Scores::default()
        };
        assert_eq!(
            insights(&high),
            vec!["You demonstrate solid technical understanding of edge computing concepts."]
        );
        assert_eq!(
            insights(&low),
            vec!["Consider building foundational knowledge in networking and distributed systems."]
        );
    }

    #[test]
    fn next_step_counts_per_tier() {
        assert_eq!(next_steps(Recommendation::Yes).len(), 4);
        assert_eq!(next_steps(Recommendation::Maybe).len(), 4);
        assert_eq!(next_steps(Recommendation::No).len(), 3);
    }

    #[test]
    fn base_roles_always_last() {
        let roles = alternative_roles(&Scores::default());
        assert_eq!(roles, vec!["Site Reliability Engineer", "Network Engineer"]);
    }

    #[test]
    fn conditional_roles_prepended_in_order() {
        let scores = Scores {
            technical: 60,
            psychometric: 70,
            ..Scores::default()
        };
        let roles = alternative_roles(&scores);
        assert_eq!(roles.len(), 6);
        assert_eq!(roles[0], "Cloud Solutions Architect");
        assert_eq!(roles[2], "IoT Product Manager");
        assert_eq!(roles[5], "Network Engineer");
    }

    #[test]
    fn learning_path_is_constant() {
        let low = learning_path(&Scores::default());
        let high = learning_path(&Scores {
            overall: 100,
            ..Scores::default()
        });
        assert_eq!(low, high);
        assert_eq!(low.beginner[0], "Cloud Computing Fundamentals");
        assert_eq!(low.advanced.len(), 4);
    }
}
