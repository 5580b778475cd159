//! Progression advice from logged performance.
//!
//! Turns one logged set record into a natural-language recommendation:
//! - High RIR (easy): add reps, then add weight
//! - RIR 1-2 (appropriately hard): small rep or weight increments
//! - RIR 0 or below (failure): back the weight off

use crate::PerformanceLog;

/// Average the reps figure out of a logged string
///
/// Hyphen-joined values ("8-10", but also per-set logs like "8-8-7")
/// are split and averaged across every token; anything unparseable
/// falls back to 8.
fn average_reps(reps_achieved: &str) -> f64 {
    if reps_achieved.contains('-') {
        let parsed: std::result::Result<Vec<i64>, _> = reps_achieved
            .split('-')
            .map(|token| token.trim().parse::<i64>())
            .collect();
        match parsed {
            Ok(values) if !values.is_empty() => {
                values.iter().sum::<i64>() as f64 / values.len() as f64
            }
            _ => 8.0,
        }
    } else {
        reps_achieved.trim().parse::<i64>().map(|n| n as f64).unwrap_or(8.0)
    }
}

/// Suggest the next progression step for an exercise
///
/// Missing log fields default individually (3 sets, "8" reps, 50kg,
/// RIR 2); a missing log yields the baseline message. Never fails.
pub fn suggest_progression(log: Option<&PerformanceLog>) -> String {
    let Some(log) = log else {
        return "No previous data for this exercise. Start with a baseline.".to_string();
    };

    let name = log.exercise_name.as_str();
    let reps_achieved = log.reps_achieved.as_deref().unwrap_or("8");
    let weight = log.weight_lifted.unwrap_or(50.0);
    let rir_achieved = log.rir_achieved.unwrap_or(2);

    let avg_reps = average_reps(reps_achieved);

    tracing::debug!(
        "Progression input for {}: avg reps {:.1}, {}kg, RIR {}",
        name,
        avg_reps,
        weight,
        rir_achieved
    );

    // Priority: 1. Reps, 2. Weight, 3. Sets (less frequent)
    if rir_achieved >= 3 {
        // Plenty in the tank - push reps first, then load
        if avg_reps < 12.0 {
            format!(
                "For {}: Good job! Try to increase reps to {}-{} at {}kg. Or, if form is solid, increase weight slightly.",
                name,
                (avg_reps + 1.0) as i64,
                (avg_reps + 2.0) as i64,
                weight
            )
        } else {
            format!(
                "For {}: Great! Increase weight by 2.5-5kg and aim for the lower end of your rep target (e.g., 8 reps).",
                name
            )
        }
    } else if rir_achieved == 1 || rir_achieved == 2 {
        if avg_reps < 10.0 {
            format!(
                "For {}: Solid effort! Aim for {} reps at {}kg. Focus on form.",
                name,
                (avg_reps + 1.0) as i64,
                weight
            )
        } else {
            format!(
                "For {}: Well done! Maintain {}kg and try to hit the higher end of your rep range, or consider a small weight increase if RIR was 2.",
                name, weight
            )
        }
    } else {
        // Hit failure - protect form before chasing load
        format!(
            "For {}: That was tough! Consider reducing weight by 5-10% to ensure good form and hit your target reps. Or, maintain weight and aim for slightly fewer reps with perfect form.",
            name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn log(name: &str, reps: &str, weight: f64, rir: i32) -> PerformanceLog {
        PerformanceLog {
            id: Uuid::new_v4(),
            exercise_name: name.into(),
            logged_at: Utc::now(),
            sets_completed: Some(3),
            reps_achieved: Some(reps.into()),
            weight_lifted: Some(weight),
            rir_achieved: Some(rir),
            notes: None,
        }
    }

    #[test]
    fn test_no_log_gives_baseline_message() {
        let suggestion = suggest_progression(None);
        assert_eq!(
            suggestion,
            "No previous data for this exercise. Start with a baseline."
        );
    }

    #[test]
    fn test_per_set_log_averaged_like_a_range() {
        // "8-8-7" averages to ~7.67; RIR 2 with avg < 10 adds one rep
        let entry = log("Bench Press", "8-8-7", 80.0, 2);
        let suggestion = suggest_progression(Some(&entry));
        assert_eq!(
            suggestion,
            "For Bench Press: Solid effort! Aim for 8 reps at 80kg. Focus on form."
        );
    }

    #[test]
    fn test_failure_recommends_backing_off() {
        let entry = log("Leg Press", "6-5-4", 120.0, 0);
        let suggestion = suggest_progression(Some(&entry));
        assert!(suggestion.contains("reducing weight by 5-10%"));
    }

    #[test]
    fn test_easy_set_below_rep_ceiling_adds_reps() {
        let entry = log("Dumbbell Curls", "10", 10.0, 4);
        let suggestion = suggest_progression(Some(&entry));
        assert!(suggestion.contains("increase reps to 11-12 at 10kg"));
    }

    #[test]
    fn test_easy_set_at_rep_ceiling_adds_weight() {
        let entry = log("Dumbbell Curls", "15-15-15", 10.0, 4);
        let suggestion = suggest_progression(Some(&entry));
        assert!(suggestion.contains("Increase weight by 2.5-5kg"));
    }

    #[test]
    fn test_hard_set_with_high_reps_maintains() {
        let entry = log("Lat Pulldowns", "11-12", 55.0, 2);
        let suggestion = suggest_progression(Some(&entry));
        assert!(suggestion.contains("Maintain 55kg"));
    }

    #[test]
    fn test_missing_fields_default_individually() {
        let entry = PerformanceLog {
            id: Uuid::new_v4(),
            exercise_name: "Squats".into(),
            logged_at: Utc::now(),
            sets_completed: None,
            reps_achieved: None,
            weight_lifted: None,
            rir_achieved: None,
            notes: None,
        };
        // Defaults: reps "8", weight 50, RIR 2 - the "add one rep" branch
        let suggestion = suggest_progression(Some(&entry));
        assert_eq!(
            suggestion,
            "For Squats: Solid effort! Aim for 9 reps at 50kg. Focus on form."
        );
    }

    #[test]
    fn test_average_reps_parsing() {
        assert_eq!(average_reps("8"), 8.0);
        assert_eq!(average_reps("8-10"), 9.0);
        assert!((average_reps("8-8-7") - 7.666).abs() < 0.01);
        // Unparseable values fall back to 8
        assert_eq!(average_reps("a few"), 8.0);
        assert_eq!(average_reps("8-x"), 8.0);
        assert_eq!(average_reps(""), 8.0);
    }

    #[test]
    fn test_negative_rir_treated_as_failure() {
        let entry = log("Squats", "5", 100.0, -1);
        let suggestion = suggest_progression(Some(&entry));
        assert!(suggestion.contains("That was tough!"));
    }
}
