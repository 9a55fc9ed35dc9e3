use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::evaluator::Status;
use crate::model::Project;

/// Short textual sweep shown while the verdict is "computed". Purely
/// cosmetic, carries no data dependency on the evaluation.
pub fn animate_analysis() {
    print!("Analyzing project data");
    let _ = io::stdout().flush();
    for _ in 0..5 {
        thread::sleep(Duration::from_millis(120));
        print!(".");
        let _ = io::stdout().flush();
    }
    println!();
}

pub fn display_verdict(project: &Project, status: Status, insight: Option<&str>) {
    println!("{}", project.summary());
    println!("{}", status.message());
    if let Some(insight) = insight {
        println!("{insight}");
    }
}
