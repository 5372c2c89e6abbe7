pub mod config;
pub mod plan;
pub mod profiles;
pub mod render;
pub mod topics;

use anyhow::Context as _;
use clap::Args;
use playbook_core::config::PlaybookConfig;
use playbook_core::plan::{load_playpack, DraftPlan, LoadedPlayPack};
use playbook_core::types::OverrideFlags;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Everything a subcommand needs from the global flags. playbook.yaml is
/// read on first use, so commands that never consult it are unaffected by a
/// broken file.
pub struct Context {
    pub root: PathBuf,
    pub playpack: Option<PathBuf>,
    pub json: bool,
    config: OnceCell<PlaybookConfig>,
}

impl Context {
    pub fn new(root: PathBuf, playpack: Option<PathBuf>, json: bool) -> Self {
        Self {
            root,
            playpack,
            json,
            config: OnceCell::new(),
        }
    }

    pub fn config(&self) -> anyhow::Result<&PlaybookConfig> {
        if let Some(config) = self.config.get() {
            return Ok(config);
        }
        let config = PlaybookConfig::load(&self.root).context("failed to load playbook.yaml")?;
        Ok(self.config.get_or_init(|| config))
    }

    /// Load the override workbook when `--playpack` is given, otherwise the
    /// configured default.
    pub fn load_playpack(&self) -> anyhow::Result<LoadedPlayPack> {
        let override_bytes = match &self.playpack {
            Some(path) => Some(
                playbook_core::io::read_bytes(path)
                    .with_context(|| format!("could not read play pack '{}'", path.display()))?,
            ),
            None => None,
        };
        load_playpack(&self.config()?.default_playpack_path(&self.root), override_bytes)
            .context("could not load play pack")
    }

    pub fn prepare(&self, args: &PlanArgs) -> anyhow::Result<(LoadedPlayPack, DraftPlan)> {
        let loaded = self.load_playpack()?;
        let flags = args.flags(self.config()?.overrides);
        let plan = DraftPlan::prepare(&loaded.pack, &args.profile, flags).with_context(|| {
            format!("available profiles: {}", loaded.pack.keys().join(", "))
        })?;
        Ok((loaded, plan))
    }
}

// ---------------------------------------------------------------------------
// PlanArgs
// ---------------------------------------------------------------------------

/// Profile selection and audit override toggles. Unset toggles fall back to
/// the `overrides` section of playbook.yaml.
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Profile key (worksheet name)
    #[arg(long, short = 'p')]
    pub profile: String,

    /// Tech blocker present (indexing/crawl)
    #[arg(long, overrides_with = "no_tech_blocker")]
    pub tech_blocker: bool,
    #[arg(long, overrides_with = "tech_blocker", hide = true)]
    pub no_tech_blocker: bool,

    /// Local/GBP priority
    #[arg(long, overrides_with = "no_local_priority")]
    pub local_priority: bool,
    /// Local/GBP is not a priority
    #[arg(long, overrides_with = "local_priority")]
    pub no_local_priority: bool,

    /// Content gaps present
    #[arg(long, overrides_with = "no_content_gap")]
    pub content_gap: bool,
    /// No content gaps
    #[arg(long, overrides_with = "content_gap")]
    pub no_content_gap: bool,
}

impl PlanArgs {
    pub fn flags(&self, defaults: OverrideFlags) -> OverrideFlags {
        OverrideFlags {
            tech_blocker_present: toggle(
                self.tech_blocker,
                self.no_tech_blocker,
                defaults.tech_blocker_present,
            ),
            local_priority: toggle(
                self.local_priority,
                self.no_local_priority,
                defaults.local_priority,
            ),
            content_gap_present: toggle(
                self.content_gap,
                self.no_content_gap,
                defaults.content_gap_present,
            ),
        }
    }
}

fn toggle(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_fall_back_to_config() {
        assert!(toggle(false, false, true));
        assert!(!toggle(false, false, false));
        assert!(toggle(true, false, false));
        assert!(!toggle(false, true, true));
    }
}
