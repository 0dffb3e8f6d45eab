// ===== fitradar/src/catalog/standard.rs =====
use super::category::Category;
use super::metric::{MetricDefinition, Unit};
use crate::config::Calibration;
use crate::scorer::rules::{ScoringRule, BACKBEND_TOKENS, SHOULDER_TOKENS};

/// Builds the metric groups in canonical category order.
pub fn build(cal: &Calibration) -> Vec<(Category, Vec<MetricDefinition>)> {
    vec![
        (Category::Strength, strength(cal)),
        (Category::Aesthetics, aesthetics()),
        (Category::Flexibility, flexibility()),
        (Category::Coordination, coordination()),
        (Category::Easiness, easiness()),
    ]
}

fn strength(cal: &Calibration) -> Vec<MetricDefinition> {
    vec![
        MetricDefinition::new(
            "pushups",
            "Push-ups",
            Unit::Reps,
            "Max reps in one set",
            ScoringRule::ascending(0.0, 50.0),
        ),
        MetricDefinition::new(
            "pullups",
            "Pull-ups",
            Unit::Reps,
            "Max reps in one set",
            ScoringRule::ascending(0.0, 15.0),
        ),
        MetricDefinition::new(
            "plank",
            "Plank hold",
            Unit::Seconds,
            "Time in seconds",
            ScoringRule::ascending(cal.plank_min_secs, cal.plank_max_secs),
        ),
        MetricDefinition::new(
            "wallsit",
            "Wall sit",
            Unit::Seconds,
            "Time in seconds",
            ScoringRule::ascending(cal.wallsit_min_secs, cal.wallsit_max_secs),
        ),
    ]
}

fn aesthetics() -> Vec<MetricDefinition> {
    vec![
        MetricDefinition::new(
            "bodyfat",
            "Body Fat %",
            Unit::Percent,
            "Smart scale / US Navy Method",
            ScoringRule::descending(12.0, 25.0),
        ),
        MetricDefinition::new(
            "bmi",
            "BMI",
            Unit::Index,
            "Weight ÷ height²",
            ScoringRule::plateau(18.5, 21.0, 23.0, 30.0),
        ),
        // Anything under the plateau is a cliff, not a ramp.
        MetricDefinition::new(
            "whr",
            "Waist-to-Height Ratio",
            Unit::Ratio,
            "Waist ÷ Height",
            ScoringRule::plateau(0.45, 0.45, 0.49, 0.55),
        ),
        MetricDefinition::new(
            "musclemass",
            "Muscle Mass %",
            Unit::Percent,
            "Smart scale or DEXA scan",
            ScoringRule::ascending(30.0, 38.0),
        ),
        MetricDefinition::new(
            "stw",
            "Shoulder-to-Waist Ratio",
            Unit::Ratio,
            "Shoulder ÷ Waist",
            ScoringRule::ascending(1.2, 1.6),
        ),
    ]
}

fn flexibility() -> Vec<MetricDefinition> {
    vec![
        MetricDefinition::new(
            "sidesplit",
            "Side splits distance",
            Unit::Centimeters,
            "Cm from floor",
            ScoringRule::descending(0.0, 50.0),
        ),
        MetricDefinition::new(
            "forwardfold",
            "Seated forward fold reach",
            Unit::Centimeters,
            "Cm past toes",
            ScoringRule::ascending(0.0, 15.0),
        ),
        MetricDefinition::new(
            "shouldermobility",
            "Shoulder mobility",
            Unit::PassFailAngle,
            "Wall test or stick rotation",
            ScoringRule::Categorical {
                tokens: SHOULDER_TOKENS,
                numeric_pass: Some(90.0),
            },
        )
        .with_hint("e.g., pass, fail, 45"),
        MetricDefinition::new(
            "hamstring",
            "Hamstring raise angle",
            Unit::Degrees,
            "Straight leg raise angle (°)",
            ScoringRule::ascending(40.0, 90.0),
        ),
        MetricDefinition::new(
            "backbend",
            "Backbend depth",
            Unit::Description,
            "Cobra pose or wheel photo",
            ScoringRule::Categorical {
                tokens: BACKBEND_TOKENS,
                numeric_pass: None,
            },
        )
        .with_hint("e.g., minimal_lift, cobra_touch_feet, head_to_feet"),
    ]
}

fn coordination() -> Vec<MetricDefinition> {
    vec![
        MetricDefinition::new(
            "onelegbalance",
            "One-leg balance",
            Unit::Seconds,
            "Seconds held (eyes closed)",
            ScoringRule::ascending(5.0, 60.0),
        ),
        MetricDefinition::new(
            "reflex",
            "Reflex test",
            Unit::Milliseconds,
            "Ruler drop test or app (ms)",
            ScoringRule::descending(150.0, 400.0),
        ),
    ]
}

fn easiness() -> Vec<MetricDefinition> {
    vec![
        MetricDefinition::new(
            "breathhold",
            "Breath Holding Time",
            Unit::Seconds,
            "Time after normal inhale",
            ScoringRule::ascending(30.0, 90.0),
        ),
        MetricDefinition::new(
            "vo2max",
            "VO2 Max Estimate",
            Unit::Value,
            "Fitness band or Cooper test",
            ScoringRule::ascending(30.0, 50.0),
        ),
        MetricDefinition::new(
            "restinghr",
            "Resting Heart Rate",
            Unit::Bpm,
            "Morning pulse (bpm)",
            ScoringRule::descending(60.0, 85.0),
        ),
    ]
}
