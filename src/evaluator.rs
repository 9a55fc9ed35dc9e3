use std::fmt;

/// Status category derived from the efficiency score.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Status {
    Excellent,
    Good,
    Warning,
}

impl Status {
    /// Canned message printed with the verdict.
    pub fn message(self) -> &'static str {
        match self {
            Status::Excellent => "Status: Excellent - the project is running very efficiently!",
            Status::Good => "Status: Good - still on a healthy track.",
            Status::Warning => "Status: Warning - project management needs attention.",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Excellent => "Excellent",
            Status::Good => "Good",
            Status::Warning => "Warning",
        })
    }
}

/// Compute the efficiency score and its status category.
///
/// The score combines the progress ratio with an inverse team-size factor
/// and is capped at 1.0. There is no lower clamp: a negative progress
/// value yields a negative score, classified `Warning`.
///
/// `team_size` must be at least 1; the caller enforces this at the
/// boundary.
pub fn evaluate(team_size: u32, progress: i32) -> (f64, Status) {
    let efficiency = (f64::from(progress) / 100.0) * (10.0 / f64::from(team_size));
    let efficiency = efficiency.min(1.0);
    let status = if efficiency > 0.8 {
        Status::Excellent
    } else if efficiency > 0.5 {
        Status::Good
    } else {
        Status::Warning
    };
    (efficiency, status)
}

#[test]
fn test_evaluate_clamps_upper_bound() {
    // 0.7 * 2.5 = 1.75, capped
    assert_eq!(evaluate(4, 70), (1.0, Status::Excellent));
    // 0.6 * 5 = 3.0, capped
    assert_eq!(evaluate(2, 60), (1.0, Status::Excellent));
}

#[test]
fn test_evaluate_unclamped_scores() {
    assert_eq!(evaluate(10, 100), (1.0, Status::Excellent));
    assert_eq!(evaluate(10, 40), (0.4, Status::Warning));
    assert_eq!(evaluate(10, 60), (0.6, Status::Good));
}

#[test]
fn test_thresholds_are_strict() {
    assert_eq!(evaluate(10, 80), (0.8, Status::Good));
    assert_eq!(evaluate(10, 50), (0.5, Status::Warning));
}

#[test]
fn test_efficiency_bounded_over_widget_ranges() {
    for team_size in 1..=10 {
        for progress in 0..=100 {
            let (efficiency, _) = evaluate(team_size, progress);
            assert!(efficiency <= 1.0, "{team_size}/{progress} -> {efficiency}");
        }
    }
}

#[test]
fn test_negative_progress_has_no_lower_clamp() {
    let (efficiency, status) = evaluate(5, -50);
    assert!(efficiency < 0.0);
    assert_eq!(status, Status::Warning);
}
