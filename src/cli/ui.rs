use colored::*;

use preflight::models::check::CheckOutcome;
use preflight::models::verdict::Verdict;

/// Print a banner line
pub fn print_banner(title: &str) {
    println!("{}", format!("--- {} ---", title).bold());
}

/// Print an evaluated check with its verdict color
pub fn print_check_outcome(outcome: &CheckOutcome) {
    let line = outcome.to_string();
    match outcome.verdict {
        Verdict::Pass => println!("{}", line.green().bold()),
        Verdict::Warn => println!("{}", line.yellow().bold()),
        Verdict::Fail => println!("{}", line.red().bold()),
    }
}
