use chrono::NaiveDate;

/// A project described through the form. Built fresh for each evaluation
/// and discarded once the verdict has been displayed.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub deadline: NaiveDate,
    pub team_size: u32,
    pub progress: i32,
}

impl Project {
    /// One-line summary printed above the verdict.
    pub fn summary(&self) -> String {
        format!(
            "Project: {} | team: {} | deadline: {}",
            self.name, self.team_size, self.deadline
        )
    }
}

#[test]
fn test_summary() {
    let p = Project {
        name: "AI Startup Booster".into(),
        deadline: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        team_size: 4,
        progress: 70,
    };
    assert_eq!(
        p.summary(),
        "Project: AI Startup Booster | team: 4 | deadline: 2026-12-31"
    );
}
