use super::{display_path, Context, PlanArgs};
use crate::output::{format_effort, print_json};
use anyhow::Context as _;
use playbook_core::types::PlayRow;
use std::path::PathBuf;

pub struct RenderInputs {
    pub client: Option<String>,
    pub plays: Option<PathBuf>,
    pub topics: Option<PathBuf>,
    pub out: Option<PathBuf>,
}

pub fn run(ctx: &Context, args: &PlanArgs, inputs: RenderInputs) -> anyhow::Result<()> {
    let (_, mut plan) = ctx.prepare(args)?;

    if let Some(path) = &inputs.plays {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("could not read '{}'", path.display()))?;
        let rows: Vec<PlayRow> = serde_yaml::from_str(&data)
            .with_context(|| format!("invalid play table '{}'", path.display()))?;
        plan.apply_edits(rows)
            .with_context(|| format!("rejected edits in '{}'", path.display()))?;
    }

    let enrichment = inputs
        .topics
        .as_deref()
        .map(super::topics::load)
        .transpose()?;

    let config = ctx.config()?;
    let client = inputs
        .client
        .unwrap_or_else(|| config.client_name.clone());
    let report = plan
        .render(&client, enrichment.as_ref())
        .context("failed to render action plan")?;

    let out_dir = inputs
        .out
        .unwrap_or_else(|| config.output_path(&ctx.root));
    let dest = out_dir.join(&report.file_name);
    playbook_core::io::atomic_write(&dest, &report.bytes)
        .with_context(|| format!("failed to write '{}'", dest.display()))?;
    tracing::info!(path = %dest.display(), bytes = report.bytes.len(), "wrote action plan");

    if ctx.json {
        print_json(&serde_json::json!({
            "file_name": report.file_name,
            "path": dest.display().to_string(),
            "bytes": report.bytes.len(),
            "effort": plan.effort_summary(),
            "document": report.document,
        }))?;
    } else {
        println!("Wrote {}", display_path(&ctx.root, &dest));
        println!("{}", format_effort(&plan.effort_summary()));
    }
    Ok(())
}
