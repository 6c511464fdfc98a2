use crate::ai::CustomizeClient;
use crate::cli::commands::ResumeAction;
use crate::model::WorkExperience;
use crate::remote::RestResumeStore;
use crate::resume::ResumeSession;
use anyhow::{Context, Result};
use colored::Colorize;
use secrecy::SecretString;
use std::sync::Arc;
use uuid::Uuid;

use super::CommandContext;
use super::utils::{confirm, resolve_text};

/// Environment variable holding the OpenAI key for customization. The key
/// is forwarded with each request and never stored.
const OPENAI_KEY_ENV: &str = "OPENAI_API_KEY";

pub fn handle_resume(ctx: &CommandContext, action: ResumeAction) -> Result<()> {
    let api_key = ctx.config.remote.api_key()?;
    let store = RestResumeStore::new(&ctx.config.remote.base_url, api_key)?;
    let mut session = ResumeSession::new(Arc::new(store));

    tokio::runtime::Runtime::new()?.block_on(async {
        match action {
            ResumeAction::List { json } => list(&mut session, json).await,
            ResumeAction::Upload { title, file, json } => {
                upload(&mut session, title, file, json).await
            }
            ResumeAction::Show { id, json } => show(&mut session, &id, json).await,
            ResumeAction::Edit { id, description } => edit(&mut session, &id, description).await,
            ResumeAction::Reset { resume, id } => reset(&mut session, &resume, &id).await,
            ResumeAction::Customize {
                resume,
                id,
                job_file,
                job_title,
                apply,
            } => customize(ctx, &mut session, &resume, &id, job_file, job_title, apply).await,
            ResumeAction::Delete { id, force } => delete(&mut session, &id, force).await,
        }
    })
}

fn parse_id(id: &str) -> Result<Uuid> {
    id.parse::<Uuid>()
        .with_context(|| format!("'{}' is not a valid id", id))
}

async fn list(session: &mut ResumeSession, json: bool) -> Result<()> {
    let resumes = session.fetch_resumes().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(resumes)?);
        return Ok(());
    }

    if resumes.is_empty() {
        println!("No resumes stored.");
        return Ok(());
    }
    for resume in resumes {
        println!(
            "{} {} {}",
            resume.id.to_string().cyan(),
            resume.title.bold(),
            resume
                .updated_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .dimmed()
        );
    }
    Ok(())
}

async fn upload(session: &mut ResumeSession, title: String, file: String, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read resume from {}", file))?;

    let resume = session.upload(title, content).await?;
    let id = resume.id;
    let title = resume.title.clone();
    let count = session.experiences().len();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "resume": session.current(),
                "experiences": session.experiences(),
            }))?
        );
    } else {
        println!(
            "{} {} ({} work experiences extracted)",
            "Uploaded".green(),
            title.bold(),
            count
        );
        println!("  Id: {}", id.to_string().cyan());
    }
    Ok(())
}

async fn show(session: &mut ResumeSession, id: &str, json: bool) -> Result<()> {
    let resume_id = parse_id(id)?;
    session.fetch_resumes().await?;
    let resume = session.select(resume_id).await?;
    let title = resume.title.clone();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "resume": session.current(),
                "experiences": session.experiences(),
            }))?
        );
        return Ok(());
    }

    println!("{}\n", title.bold());
    if session.experiences().is_empty() {
        println!("No work experiences extracted.");
    }
    for experience in session.experiences() {
        print_experience(experience);
        println!();
    }
    Ok(())
}

fn print_experience(experience: &WorkExperience) {
    let modified = if experience.is_modified() {
        " (edited)".yellow().to_string()
    } else {
        String::new()
    };
    println!(
        "{} {} @ {}{}",
        experience.id.to_string().cyan(),
        experience.title.bold(),
        experience.company,
        modified
    );
    if !experience.start_date.is_empty() || !experience.end_date.is_empty() {
        println!("  {} - {}", experience.start_date, experience.end_date);
    }
    if !experience.description.is_empty() {
        for line in experience.description.lines() {
            println!("  {}", line);
        }
    }
}

async fn edit(session: &mut ResumeSession, id: &str, description: String) -> Result<()> {
    let experience_id = parse_id(id)?;
    let description = resolve_text(description)?;

    let updated = session
        .update_description(experience_id, &description)
        .await?;
    println!(
        "{} description of {} @ {}",
        "Updated".green(),
        updated.title,
        updated.company
    );
    Ok(())
}

async fn reset(session: &mut ResumeSession, resume: &str, id: &str) -> Result<()> {
    let resume_id = parse_id(resume)?;
    let experience_id = parse_id(id)?;

    session.fetch_resumes().await?;
    session.select(resume_id).await?;

    let restored = session.reset_description(experience_id).await?;
    println!(
        "{} description of {} @ {}",
        "Restored".green(),
        restored.title,
        restored.company
    );
    Ok(())
}

async fn customize(
    ctx: &CommandContext,
    session: &mut ResumeSession,
    resume: &str,
    id: &str,
    job_file: String,
    job_title: String,
    apply: bool,
) -> Result<()> {
    let resume_id = parse_id(resume)?;
    let experience_id = parse_id(id)?;

    let openai_key = std::env::var(OPENAI_KEY_ENV)
        .map(SecretString::from)
        .with_context(|| format!("Environment variable '{}' is not set", OPENAI_KEY_ENV))?;

    let job_description = std::fs::read_to_string(&job_file)
        .with_context(|| format!("Failed to read job description from {}", job_file))?;

    session.fetch_resumes().await?;
    session.select(resume_id).await?;
    let experience = session
        .experiences()
        .iter()
        .find(|e| e.id == experience_id)
        .with_context(|| format!("No experience {} in resume {}", experience_id, resume_id))?;

    let client = CustomizeClient::new(ctx.config.remote.customize_endpoint())?;
    // The rewrite always starts from the creation-time text, not the live
    // (possibly edited) description.
    let customized = client
        .customize(
            &openai_key,
            &experience.original_description,
            &job_description,
            &job_title,
        )
        .await?;

    if apply {
        let updated = session
            .update_description(experience_id, &customized)
            .await?;
        println!(
            "{} description of {} @ {}",
            "Customized".green(),
            updated.title,
            updated.company
        );
    } else {
        println!("{}", customized);
    }
    Ok(())
}

async fn delete(session: &mut ResumeSession, id: &str, force: bool) -> Result<()> {
    let resume_id = parse_id(id)?;

    if !force {
        if !confirm(&format!(
            "Delete resume {} and its experiences?",
            id.cyan()
        ))? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    session.delete_resume(resume_id).await?;
    println!("{} resume {}", "Deleted".red(), id.cyan());
    Ok(())
}
