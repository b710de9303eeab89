use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VitaeError};
use crate::nav::SectionId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub nav: NavConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            scroll: ScrollConfig::default(),
            nav: NavConfig::default(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("VITAE_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        // No config dir means no global config; run on defaults.
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("vitae/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| VitaeError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| VitaeError::Config(format!("parse config {}: {err}", path.display())))?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.ui {
            self.ui.merge(patch);
        }
        if let Some(patch) = patch.scroll {
            self.scroll.merge(patch);
        }
        if let Some(patch) = patch.nav {
            self.nav.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_u64("VITAE_TICK_MS")? {
            self.ui.tick = Duration::from_millis(value);
        }
        if let Some(value) = env_string("VITAE_ACCENT") {
            self.ui.accent = value;
        }
        if let Some(value) = env_bool("VITAE_UNICODE") {
            self.ui.unicode = value;
        }

        if let Some(value) = env_u64("VITAE_SCROLL_MS")? {
            self.scroll.duration = Duration::from_millis(value);
        }
        if let Some(value) = env_u16("VITAE_SCROLL_STEP")? {
            self.scroll.step = value;
        }

        if let Some(value) = env_bool("VITAE_FOLLOW_SCROLL") {
            self.nav.follow_scroll = value;
        }
        if let Some(values) = env_list("VITAE_HIDDEN_SECTIONS")? {
            self.nav.hidden = parse_section_list(&values)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.ui.tick.is_zero() {
            return Err(VitaeError::Config(
                "ui.tick must be greater than zero".to_string(),
            ));
        }
        if !is_hex_color(&self.ui.accent) {
            return Err(VitaeError::Config(format!(
                "ui.accent {} is not a #rrggbb color",
                self.ui.accent
            )));
        }
        if self.scroll.step == 0 {
            return Err(VitaeError::Config(
                "scroll.step must be at least 1".to_string(),
            ));
        }
        if SectionId::ALL.iter().all(|id| self.nav.hidden.contains(id)) {
            return Err(VitaeError::Config(
                "nav.hidden excludes every section".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop heartbeat; also the animation frame budget.
    #[serde(default, with = "humantime_serde")]
    pub tick: Duration,
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub unicode: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            accent: "#3b82f6".to_string(),
            unicode: true,
        }
    }
}

impl UiConfig {
    fn merge(&mut self, patch: UiPatch) {
        if let Some(value) = patch.tick {
            self.tick = value;
        }
        if let Some(value) = patch.accent {
            self.accent = value;
        }
        if let Some(value) = patch.unicode {
            self.unicode = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Smooth-scroll animation length. Zero makes every jump instant.
    #[serde(default, with = "humantime_serde")]
    pub duration: Duration,
    /// Rows moved per free-scroll key press.
    #[serde(default)]
    pub step: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            step: 3,
        }
    }
}

impl ScrollConfig {
    fn merge(&mut self, patch: ScrollPatch) {
        if let Some(value) = patch.duration {
            self.duration = value;
        }
        if let Some(value) = patch.step {
            self.step = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Resync the active section while the user free-scrolls.
    #[serde(default)]
    pub follow_scroll: bool,
    /// Sections left out of the rendered document. Jumps to them no-op.
    #[serde(default)]
    pub hidden: Vec<SectionId>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            follow_scroll: true,
            hidden: Vec::new(),
        }
    }
}

impl NavConfig {
    fn merge(&mut self, patch: NavPatch) {
        if let Some(value) = patch.follow_scroll {
            self.follow_scroll = value;
        }
        if let Some(values) = patch.hidden {
            self.hidden = values;
        }
    }

    #[must_use]
    pub fn is_visible(&self, id: SectionId) -> bool {
        !self.hidden.contains(&id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub ui: Option<UiPatch>,
    pub scroll: Option<ScrollPatch>,
    pub nav: Option<NavPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct UiPatch {
    #[serde(default, with = "humantime_serde")]
    pub tick: Option<Duration>,
    pub accent: Option<String>,
    pub unicode: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ScrollPatch {
    #[serde(default, with = "humantime_serde")]
    pub duration: Option<Duration>,
    pub step: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct NavPatch {
    pub follow_scroll: Option<bool>,
    pub hidden: Option<Vec<SectionId>>,
}

fn parse_section_list(values: &[String]) -> Result<Vec<SectionId>> {
    values
        .iter()
        .map(|value| {
            value.parse::<SectionId>().map_err(|_| {
                VitaeError::Config(format!(
                    "invalid section id {value} (expected home|about|experience|skills|education|contact)"
                ))
            })
        })
        .collect()
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_u16(key: &str) -> Result<Option<u16>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u16>().map(Some).map_err(|err| {
            VitaeError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u64>().map(Some).map_err(|err| {
            VitaeError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_list(key: &str) -> Result<Option<Vec<String>>> {
    match std::env::var(key) {
        Ok(value) => {
            let list = value
                .split(',')
                .map(|entry| entry.trim())
                .filter(|entry| !entry.is_empty())
                .map(|entry| entry.to_string())
                .collect::<Vec<_>>();
            Ok(Some(list))
        }
        Err(_) => Ok(None),
    }
}
