use crate::model::{JobApplication, JobStatus};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Read, Write};

/// Format a status with color coding
pub fn format_status(status: JobStatus) -> colored::ColoredString {
    match status {
        JobStatus::Saved => "Saved".white(),
        JobStatus::Applied => "Applied".blue(),
        JobStatus::Interviewing => "Interviewing".yellow(),
        JobStatus::Offer => "Offer".green(),
        JobStatus::Rejected => "Rejected".red(),
    }
}

/// Short id shown in listings; full ids still work everywhere.
pub fn short_id(job: &JobApplication) -> String {
    job.id.to_string()[..8].to_string()
}

/// Print a single application with details
pub fn print_job(job: &JobApplication) {
    println!("{} {}", short_id(job).cyan().bold(), job.role.bold());
    println!("Company:  {}", job.company);
    println!("Status:   {}", format_status(job.status));
    println!("Applied:  {}", job.date_applied);

    if let Some(ref salary) = job.salary {
        println!("Salary:   {}", salary);
    }
    if let Some(ref link) = job.link {
        println!("Link:     {}", link.underline());
    }
    println!(
        "Updated:  {}",
        job.updated_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
    );

    if let Some(ref notes) = job.notes {
        println!("\n{}", notes);
    }
}

/// Print a list of applications (compact format)
pub fn print_job_list(jobs: &[&JobApplication]) {
    if jobs.is_empty() {
        println!("No applications found.");
        return;
    }

    for job in jobs {
        println!(
            "{} {} {} @ {}",
            short_id(job).cyan(),
            format_status(job.status),
            job.role,
            job.company
        );
    }
}

/// Ask a yes/no question on the terminal, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Resolve an argument value, substituting stdin for '-'.
pub fn resolve_text(value: String) -> Result<String> {
    if value == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content.trim().to_string());
    }
    Ok(value)
}

/// Today's date in the document's free-form date format.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Empty string clears an optional field, anything else sets it.
pub fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| if v.is_empty() { None } else { Some(v) })
}
