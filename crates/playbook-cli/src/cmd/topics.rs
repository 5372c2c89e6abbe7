use super::Context;
use crate::output::{print_json, print_table};
use anyhow::Context as _;
use playbook_core::enrichment::{EnrichmentTable, SCREEN_PREVIEW_ROWS};
use std::path::Path;

pub fn load(path: &Path) -> anyhow::Result<EnrichmentTable> {
    let bytes = playbook_core::io::read_bytes(path)
        .with_context(|| format!("could not read '{}'", path.display()))?;
    EnrichmentTable::from_csv_bytes(&bytes)
        .with_context(|| format!("invalid keyword/topic CSV '{}'", path.display()))
}

pub fn run(ctx: &Context, path: &Path) -> anyhow::Result<()> {
    let table = load(path)?;
    let preview = table.preview(SCREEN_PREVIEW_ROWS);

    if ctx.json {
        print_json(&serde_json::json!({
            "headers": table.headers,
            "total_rows": table.rows.len(),
            "rows": preview,
        }))?;
        return Ok(());
    }

    let headers: Vec<&str> = table.headers.iter().map(String::as_str).collect();
    print_table(&headers, preview);
    if table.rows.len() > preview.len() {
        println!("... {} more rows", table.rows.len() - preview.len());
    }
    Ok(())
}
