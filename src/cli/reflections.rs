//! CLI `reflections` commands.

use anyhow::{Context, Result};

use momento::api::Backend;
use momento::config::MomentoConfig;
use momento::model::{ReflectionDraft, ReflectionType};

pub async fn list(config: &MomentoConfig, reflection_type: Option<ReflectionType>) -> Result<()> {
    let (_conn, ctx) = super::open_session(config)?;
    let profile_id = super::require_profile(&ctx)?;
    let client = super::client(config)?;

    let reflections = client
        .reflections(&profile_id, reflection_type)
        .await
        .context("could not load reflections")?;

    if reflections.is_empty() {
        println!("No reflections yet. Start with `momento reflections prompts`.");
        return Ok(());
    }

    for r in &reflections {
        println!(
            "{} reflection  {}",
            r.reflection_type.label(),
            r.created_at.as_deref().unwrap_or("")
        );
        println!("  mood          {}", r.mood_score.dots());
        println!("  productivity  {}", r.productivity_score.dots());
        for (prompt, response) in r.prompts.iter().zip(&r.responses) {
            println!("  {prompt}");
            println!("    {response}");
        }
        println!();
    }
    Ok(())
}

pub fn prompts(reflection_type: ReflectionType) {
    println!("{} reflection", reflection_type.label());
    for (i, prompt) in reflection_type.prompts().iter().enumerate() {
        println!("  {}. {prompt}", i + 1);
    }
}

pub async fn add(
    config: &MomentoConfig,
    reflection_type: ReflectionType,
    mood: u8,
    productivity: u8,
    responses: &[String],
) -> Result<()> {
    let (_conn, ctx) = super::open_session(config)?;
    let profile_id = super::require_profile(&ctx)?;

    let draft = ReflectionDraft::new(profile_id, reflection_type, mood, productivity, responses)?;
    anyhow::ensure!(
        !draft.responses.is_empty(),
        "answer at least one prompt with --response"
    );

    let client = super::client(config)?;
    let saved = client
        .create_reflection(&draft)
        .await
        .context("could not save reflection")?;

    println!("Saved {} reflection {}", saved.reflection_type.label().to_lowercase(), saved.id);
    Ok(())
}
