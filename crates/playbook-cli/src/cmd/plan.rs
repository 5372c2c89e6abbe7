use super::{Context, PlanArgs};
use crate::output::{format_effort, print_json, print_table};
use anyhow::Context as _;
use playbook_core::plan::DraftPlan;
use playbook_core::types::{PlayRow, COL_EFFORT, COL_MONTH_LABEL, COL_PRIORITY, COL_STRATEGY};
use std::path::Path;

pub fn run(ctx: &Context, args: &PlanArgs, export: Option<&Path>) -> anyhow::Result<()> {
    let (loaded, plan) = ctx.prepare(args)?;

    if let Some(path) = export {
        let yaml = serde_yaml::to_string(&plan.plays)?;
        playbook_core::io::atomic_write(path, yaml.as_bytes())
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "exported play table");
    }

    if ctx.json {
        print_json(&serde_json::json!({
            "source": loaded.source.label(),
            "plan": plan,
            "effort": plan.effort_summary(),
        }))?;
        return Ok(());
    }

    print_plan(&plan, loaded.source.label());
    if let Some(path) = export {
        println!();
        println!("Exported table to {}", path.display());
    }
    Ok(())
}

pub fn print_plan(plan: &DraftPlan, source: &str) {
    println!("Using play pack: {source}");
    println!("Profile: {} ({})", plan.profile_label, plan.profile_key);
    if !plan.profile_description.is_empty() {
        println!("Notes:   {}", plan.profile_description);
    }
    let active = plan.flags.describe();
    if active.is_empty() {
        println!("Overrides: none");
    } else {
        println!("Overrides:");
        for line in active {
            println!("  - {line}");
        }
    }
    println!();
    print_table(
        &[COL_MONTH_LABEL, COL_PRIORITY, COL_STRATEGY, COL_EFFORT],
        &table_rows(&plan.plays),
    );
    println!();
    println!("{}", format_effort(&plan.effort_summary()));
}

fn table_rows(plays: &[PlayRow]) -> Vec<Vec<String>> {
    plays
        .iter()
        .map(|p| {
            vec![
                p.month_label(),
                p.priority_order.to_string(),
                p.strategy_name.clone(),
                p.allocated_effort_minutes.to_string(),
            ]
        })
        .collect()
}
