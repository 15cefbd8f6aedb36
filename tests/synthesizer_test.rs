use techfit::synthesizer::{overall_score, recommend};
use techfit::{
    synthesize, Answer, AnswerSet, AnswerValue, QuestionCatalog, QuestionType, Recommendation,
    Scores, WiscarScores,
};

/// Answer every question: likert questions with `likert`, choice questions with
/// the option at `pick(question_id)`.
fn answer_all(catalog: &QuestionCatalog, likert: f64, pick: impl Fn(&str) -> usize) -> AnswerSet {
    catalog
        .questions()
        .iter()
        .map(|q| match q.question_type {
            QuestionType::Likert => Answer::new(q.id.as_str(), likert),
            _ => Answer::new(q.id.as_str(), q.options[pick(&q.id)].as_str()),
        })
        .collect()
}

fn best_option(id: &str) -> usize {
    match id {
        "psych_3" | "tech_1" | "tech_2" | "tech_3" => 1,
        "aptitude_1" => 2,
        _ => 0,
    }
}

#[test]
fn strong_profile_recommends_yes() {
    let catalog = QuestionCatalog::builtin().unwrap();
    let answers = answer_all(&catalog, 5.0, best_option);
    let results = synthesize(&catalog, &answers);

    // psychometric: (120 + 100 + 110.5 + 150 + 126) / 6.4 = 94.77
    assert_eq!(results.scores.psychometric, 95);
    assert_eq!(results.scores.technical, 100);
    assert_eq!(results.scores.aptitude, 100);
    assert_eq!(results.scores.wiscar.real_world, 100);
    // 23.75 + 30 + 20 + 25
    assert_eq!(results.scores.overall, 99);
    assert_eq!(results.recommendation, Recommendation::Yes);
    assert_eq!(results.confidence, 95);
    assert_eq!(results.insights.len(), 4);
    assert!(results.alternative_roles.is_none());
    assert_eq!(results.next_steps[0], "Begin with edge computing fundamentals and networking courses");
}

#[test]
fn weak_technical_profile_recommends_maybe() {
    let catalog = QuestionCatalog::builtin().unwrap();
    let answers = answer_all(&catalog, 5.0, |id| match id {
        "tech_1" | "tech_2" => 2,
        "tech_3" => 3,
        other => best_option(other),
    });
    let results = synthesize(&catalog, &answers);

    // (15 + 13 + 48) / 4.4 = 17.27
    assert_eq!(results.scores.technical, 17);
    // 23.75 + 5.1 + 20 + 25 = 73.85
    assert_eq!(results.scores.overall, 74);
    assert_eq!(results.recommendation, Recommendation::Maybe);
    assert_eq!(results.confidence, 74);
    assert_eq!(
        results.insights,
        vec![
            "Your personality profile shows strong alignment with edge cloud architecture roles.",
            "Consider building foundational knowledge in networking and distributed systems.",
            "Your strong interest in edge technologies is a significant advantage.",
            "Your problem-solving approach is well-suited for complex system design.",
        ]
    );
    assert!(results.alternative_roles.is_none());
    assert_eq!(results.next_steps.len(), 4);
}

#[test]
fn neutral_profile_recommends_no() {
    let catalog = QuestionCatalog::builtin().unwrap();
    let answers = answer_all(&catalog, 3.0, |_| 0);
    let results = synthesize(&catalog, &answers);

    // (60 + 50 + 97.5 + 75 + 126) / 6.4 = 63.83
    assert_eq!(results.scores.psychometric, 64);
    // (30 + 0 + 32) / 4.4 = 14.09
    assert_eq!(results.scores.technical, 14);
    assert_eq!(results.scores.aptitude, 0);
    assert_eq!(
        results.scores.wiscar,
        WiscarScores {
            will: 50,
            interest: 74,
            skill: 100,
            cognitive: 100,
            ability: 50,
            real_world: 100,
        }
    );
    // 16 + 4.2 + 0 + 19.75 = 39.95
    assert_eq!(results.scores.overall, 40);
    assert_eq!(results.recommendation, Recommendation::No);
    assert_eq!(results.confidence, 60);
    assert_eq!(results.insights.len(), 2);
    assert_eq!(
        results.alternative_roles,
        Some(vec![
            "Site Reliability Engineer".to_string(),
            "Network Engineer".to_string()
        ])
    );
    assert_eq!(results.next_steps.len(), 3);
}

#[test]
fn synthesis_is_deterministic() {
    let catalog = QuestionCatalog::builtin().unwrap();
    let answers = answer_all(&catalog, 4.0, |_| 1);
    let first = synthesize(&catalog, &answers);
    let second = synthesize(&catalog, &answers);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn alternative_roles_present_only_for_no() {
    let catalog = QuestionCatalog::builtin().unwrap();
    for likert in [1.0, 2.0, 3.0, 4.0, 5.0] {
        for pick in 0..4 {
            let answers = answer_all(&catalog, likert, |_| pick);
            let results = synthesize(&catalog, &answers);
            assert_eq!(
                results.alternative_roles.is_some(),
                results.recommendation == Recommendation::No
            );
            assert!((30..=95).contains(&results.confidence));
            assert!(results.scores.overall <= 100);
        }
    }
}

#[test]
fn recomputing_after_change_yields_new_record() {
    let catalog = QuestionCatalog::builtin().unwrap();
    let mut answers = answer_all(&catalog, 3.0, |_| 0);
    let before = synthesize(&catalog, &answers);
    answers.upsert(Answer::new("aptitude_1", "50ms"));
    let after = synthesize(&catalog, &answers);
    assert_eq!(before.scores.aptitude, 0);
    assert_eq!(after.scores.aptitude, 100);
    assert_ne!(before, after);
    assert_eq!(answers.value("aptitude_1"), Some(&AnswerValue::from("50ms")));
}

#[test]
fn tier_table() {
    assert_eq!(recommend(75), (Recommendation::Yes, 85));
    assert_eq!(recommend(74), (Recommendation::Maybe, 74));
    assert_eq!(recommend(55), (Recommendation::Maybe, 55));
    assert_eq!(recommend(54), (Recommendation::No, 46));
    assert_eq!(recommend(80), (Recommendation::Yes, 90));
    assert_eq!(recommend(0), (Recommendation::No, 95));
}

#[test]
fn overall_is_function_of_scores() {
    let scores = Scores {
        psychometric: 80,
        technical: 60,
        aptitude: 40,
        wiscar: WiscarScores {
            will: 60,
            interest: 60,
            skill: 60,
            cognitive: 60,
            ability: 60,
            real_world: 60,
        },
        overall: 0,
    };
    // 20 + 18 + 8 + 15
    assert_eq!(overall_score(&scores), 61);
}
