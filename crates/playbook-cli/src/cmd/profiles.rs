use super::Context;
use crate::output::{print_json, print_table};

pub fn run(ctx: &Context) -> anyhow::Result<()> {
    let loaded = ctx.load_playpack()?;

    if ctx.json {
        let profiles: Vec<serde_json::Value> = loaded
            .pack
            .profiles
            .iter()
            .map(|p| {
                serde_json::json!({
                    "key": p.key,
                    "name": p.display_name,
                    "description": p.description,
                    "plays": p.plays.len(),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "source": loaded.source.label(),
            "profiles": profiles,
        }))?;
        return Ok(());
    }

    println!("Using play pack: {}", loaded.source);
    println!();
    let rows: Vec<Vec<String>> = loaded
        .pack
        .profiles
        .iter()
        .map(|p| {
            vec![
                p.key.clone(),
                p.display_name.clone(),
                p.plays.len().to_string(),
                p.description.clone(),
            ]
        })
        .collect();
    print_table(&["KEY", "NAME", "PLAYS", "DESCRIPTION"], &rows);
    Ok(())
}
