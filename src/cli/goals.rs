//! CLI `goals` commands.

use anyhow::{Context, Result};

use momento::api::Backend;
use momento::config::MomentoConfig;
use momento::model::{Goal, GoalCategory, GoalDraft, GoalPriority, GoalStatus};

/// Arguments for `goals add`.
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub priority: GoalPriority,
    pub target_date: Option<String>,
}

pub async fn list(config: &MomentoConfig, status: Option<GoalStatus>) -> Result<()> {
    let (_conn, ctx) = super::open_session(config)?;
    let profile_id = super::require_profile(&ctx)?;
    let client = super::client(config)?;

    let goals = client
        .goals(&profile_id, status)
        .await
        .context("could not load goals")?;

    if goals.is_empty() {
        match status {
            Some(status) => println!("No {} goals.", status.label().to_lowercase()),
            None => println!("No goals yet. Add one with `momento goals add --title ...`."),
        }
        return Ok(());
    }

    for goal in &goals {
        print_goal(goal);
    }
    Ok(())
}

pub async fn add(config: &MomentoConfig, input: NewGoal) -> Result<()> {
    let (_conn, ctx) = super::open_session(config)?;
    let profile_id = super::require_profile(&ctx)?;

    // Validate before touching the network.
    let draft = GoalDraft::new(
        profile_id,
        &input.title,
        &input.description,
        input.category,
        input.priority,
        input.target_date.as_deref(),
    )?;

    let client = super::client(config)?;
    let goal = client
        .create_goal(&draft)
        .await
        .context("could not create goal")?;

    tracing::info!(goal_id = %goal.id, category = %goal.category, "goal created");
    println!("Created goal {}", goal.id);
    print_goal(&goal);
    Ok(())
}

/// Fetch the goal from the user's list, then PUT it back with the new status.
pub async fn set_status(config: &MomentoConfig, id: &str, status: GoalStatus) -> Result<()> {
    let (_conn, ctx) = super::open_session(config)?;
    let profile_id = super::require_profile(&ctx)?;
    let client = super::client(config)?;

    let goals = client
        .goals(&profile_id, None)
        .await
        .context("could not load goals")?;
    let goal = goals
        .iter()
        .find(|g| g.id == id)
        .with_context(|| format!("no goal with id {id}"))?;

    let mut draft = GoalDraft::from_goal(goal);
    draft.status = status;
    let updated = client
        .update_goal(id, &draft)
        .await
        .context("could not update goal")?;

    println!("Goal {} is now {}", updated.id, updated.status.label());
    Ok(())
}

fn print_goal(goal: &Goal) {
    println!(
        "[{}] {} ({}, {} priority)",
        goal.status.label(),
        goal.title,
        goal.category.label(),
        goal.priority.label()
    );
    println!("  id: {}", goal.id);
    if !goal.description.is_empty() {
        println!("  {}", goal.description);
    }
    if let Some(date) = goal.target_date {
        println!("  target: {date}");
    }
}
