use super::{Category, RubricDefinition, Rule};

impl RubricDefinition {
    /// Built-in baseball skill rubric. Levels run from 10 (just starting) down to 1
    /// (advanced), so the tightest bound holds the most advanced drills.
    pub fn standard() -> Self {
        Self::new(vec![
            Category::new(
                "batting",
                "Batting",
                vec![
                    Rule::new(3, "Power and speed: one-minute max-speed dry swings"),
                    Rule::new(
                        7,
                        "Full swing and contact: target swings and slow-motion swing path checks",
                    ),
                    Rule::new(
                        10,
                        "Swing foundation: grip and stance checks in the mirror, rolled-paper ball hitting",
                    ),
                ],
            ),
            Category::new(
                "throwing",
                "Throwing",
                vec![
                    Rule::new(3, "Arm strength: fingertip snaps for backspin, 100 reps"),
                    Rule::new(
                        7,
                        "Accuracy and arm path: towel throws and ten-ball target net",
                    ),
                    Rule::new(
                        10,
                        "Grip and control: seam grip drills and wall step-through form",
                    ),
                ],
            ),
            Category::new(
                "catching",
                "Catching",
                vec![
                    Rule::new(3, "Game reactions: double-play footwork and over-the-shoulder flies"),
                    Rule::new(7, "Range: side-to-side grounders and getting under fly balls"),
                    Rule::new(10, "Ready position: eyes on the ball, two-hand rolled grounders"),
                ],
            ),
            Category::new(
                "running",
                "Running",
                vec![
                    Rule::new(3, "Base running judgment: leads, tag-ups, and reading the ball"),
                    Rule::new(7, "Turns and slides: hitting the base corner and sliding safely"),
                    Rule::new(10, "Run it out: sprint through first base on every hit"),
                ],
            ),
            Category::new(
                "iq",
                "Baseball IQ",
                vec![
                    Rule::new(3, "Leadership: explain tricky rules and help younger players"),
                    Rule::new(7, "Game rules: force versus tag plays and defensive positions"),
                    Rule::new(10, "Team habits: greetings, gear care, and balls-strikes-outs"),
                ],
            ),
        ])
    }
}
