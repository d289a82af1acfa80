use clap::Args;
use coach_journal::error::AppError;
use coach_journal::rubric::{evaluate, EvaluationValues, RubricDefinition, RubricSource};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RubricEvaluateArgs {
    /// Rubric JSON file (defaults to the built-in baseball rubric)
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
    /// Category score as key=value, repeatable
    #[arg(long = "score", value_parser = parse_score)]
    pub(crate) scores: Vec<(String, i32)>,
}

#[derive(Args, Debug)]
pub(crate) struct RubricShowArgs {
    /// Rubric JSON file (defaults to the built-in baseball rubric)
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
}

pub(crate) fn parse_score(raw: &str) -> Result<(String, i32), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing category key in '{raw}'"));
    }
    let score = value
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid score in '{raw}' ({err})"))?;
    Ok((key.to_string(), score))
}

pub(crate) fn run_rubric_evaluate(args: RubricEvaluateArgs) -> Result<(), AppError> {
    let rubric = RubricSource::from_optional_path(args.rubric).load()?;
    let values: EvaluationValues = args.scores.into_iter().collect();
    print!("{}", render_recommendations(&evaluate(&rubric, &values)));
    Ok(())
}

pub(crate) fn run_rubric_show(args: RubricShowArgs) -> Result<(), AppError> {
    let rubric = RubricSource::from_optional_path(args.rubric).load()?;
    print!("{}", render_rubric(&rubric));
    Ok(())
}

fn render_recommendations(recommendations: &[String]) -> String {
    if recommendations.is_empty() {
        return "no recommendations\n".to_string();
    }
    recommendations
        .iter()
        .map(|line| format!("- {line}\n"))
        .collect()
}

fn render_rubric(rubric: &RubricDefinition) -> String {
    if rubric.is_empty() {
        return "rubric has no categories\n".to_string();
    }

    let mut out = String::new();
    for category in &rubric.categories {
        let _ = writeln!(out, "{} ({})", category.label, category.key);
        if category.rules.is_empty() {
            let _ = writeln!(out, "  (no rules)");
        }
        for rule in &category.rules {
            let _ = writeln!(out, "  <= {:>3}  {}", rule.max_score, rule.text);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_journal::rubric::{Category, Rule};

    #[test]
    fn parse_score_splits_key_and_value() {
        assert_eq!(parse_score("iq= 7"), Ok(("iq".to_string(), 7)));
        assert!(parse_score("=4").is_err());
        assert!(parse_score("batting=high").is_err());
    }

    #[test]
    fn renders_empty_recommendations() {
        assert_eq!(render_recommendations(&[]), "no recommendations\n");
        assert_eq!(
            render_recommendations(&["Batting: Focus on contact".to_string()]),
            "- Batting: Focus on contact\n"
        );
    }

    #[test]
    fn renders_rubric_rules_in_declared_order() {
        let rubric = RubricDefinition::new(vec![Category::new(
            "running",
            "Running",
            vec![Rule::new(5, "Improve acceleration"), Rule::new(10, "Run it out")],
        )]);

        let rendered = render_rubric(&rubric);

        assert_eq!(
            rendered,
            "Running (running)\n  <=   5  Improve acceleration\n  <=  10  Run it out\n"
        );
    }
}
