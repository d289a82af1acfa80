//! Behavioural checks for the recommendation engine through the public rubric API.

use std::sync::Arc;
use std::thread;

use coach_journal::rubric::{
    evaluate, Category, EvaluationValues, RubricDefinition, RubricStore, Rule,
};

fn coaching_rubric() -> RubricDefinition {
    RubricDefinition::from_json_str(
        r#"{
            "categories": [
                {"key": "batting", "label": "Batting", "rules": [
                    {"max_score": 3, "text": "Focus on contact"},
                    {"max_score": 10, "text": "Work on power"}
                ]},
                {"key": "running", "label": "Running", "rules": [
                    {"max_score": 5, "text": "Improve acceleration"}
                ]}
            ]
        }"#,
    )
    .expect("rubric parses")
}

fn scores(entries: &[(&str, i32)]) -> EvaluationValues {
    entries
        .iter()
        .map(|(key, score)| (key.to_string(), *score))
        .collect()
}

#[test]
fn coach_scenario_reports_only_matching_categories() {
    let output = evaluate(
        &coaching_rubric(),
        &scores(&[("batting", 2), ("running", 8), ("iq", 9)]),
    );

    assert_eq!(output, vec!["Batting: Focus on contact".to_string()]);
}

#[test]
fn every_category_reported_when_all_scores_match() {
    let output = evaluate(&coaching_rubric(), &scores(&[("running", 5), ("batting", 9)]));

    assert_eq!(
        output,
        vec![
            "Batting: Work on power".to_string(),
            "Running: Improve acceleration".to_string(),
        ]
    );
}

#[test]
fn output_never_exceeds_category_count() {
    let rubric = RubricDefinition::standard();
    let all = scores(&[
        ("batting", 1),
        ("throwing", 4),
        ("catching", 7),
        ("running", 8),
        ("iq", 10),
        ("pitching", 3),
    ]);

    let output = evaluate(&rubric, &all);

    assert_eq!(output.len(), rubric.categories.len());
    assert!(output[0].starts_with("Batting: "));
    assert!(output[4].starts_with("Baseball IQ: "));
}

#[test]
fn concurrent_readers_see_whole_definitions() {
    let store = RubricStore::new(coaching_rubric());
    let values = Arc::new(scores(&[("batting", 2), ("running", 1)]));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            let values = Arc::clone(&values);
            thread::spawn(move || {
                (0..200)
                    .map(|_| evaluate(&store.current(), &values).len())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for round in 0..50 {
        let next = if round % 2 == 0 {
            RubricDefinition::new(vec![Category::new(
                "batting",
                "Batting",
                vec![Rule::new(10, "Swing")],
            )])
        } else {
            coaching_rubric()
        };
        store.replace(next);
    }

    for reader in readers {
        let lengths = reader.join().expect("reader thread");
        assert!(lengths.iter().all(|len| *len == 1 || *len == 2));
    }
}
