use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser};
use eyre::Result;
use std::path::PathBuf;
use tracing::{Level, debug, info};

use crate::config::Config;
use crate::model::Project;

mod config;
mod display;
mod evaluator;
mod insights;
mod model;

#[derive(Parser)]
#[command(version, about = "Evaluate the efficiency of a startup project")]
struct Args {
    /// Project name
    #[arg(long, default_value = "AI Startup Booster")]
    name: String,
    /// Project deadline (YYYY-MM-DD), today when omitted
    #[arg(long)]
    deadline: Option<NaiveDate>,
    /// Number of team members
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=10))]
    team_size: u32,
    /// Current progress in percent
    #[arg(long, default_value_t = 70, value_parser = clap::value_parser!(i32).range(0..=100))]
    progress: i32,
    /// Use FILE instead of the built-in presentation defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Skip the cosmetic analysis animation
    #[arg(long)]
    no_animation: bool,
    /// Set verbosity level
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
    let config = match &args.config {
        Some(file) => Config::load(file)?,
        None => Config::default(),
    };
    let project = Project {
        name: args.name,
        deadline: args.deadline.unwrap_or_else(|| Local::now().date_naive()),
        team_size: args.team_size,
        progress: args.progress,
    };
    info!(
        name = %project.name,
        team_size = project.team_size,
        progress = project.progress,
        "evaluating project"
    );
    if config.display.animation && !args.no_animation {
        display::animate_analysis();
    }
    let (efficiency, status) = evaluator::evaluate(project.team_size, project.progress);
    debug!(efficiency, %status, "efficiency computed");
    display::display_verdict(&project, status, insights::pick(&config.display.insights));
    Ok(())
}
