//! Preferences
//!
//! User settings persisted as TOML in the platform config directory: the last
//! selected view, UI locale, data file, image directory and playback duration.

use crate::constants::{DEFAULT_DATA_PATH, DEFAULT_IMAGE_DIR, DEFAULT_PLAYBACK_SECS, SETTINGS_FILE};
use crate::domain::view_mode::ViewMode;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::app::entities::AppEntities;
use gpui::{App, AppContext};
use locale_config::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info, warn};

/// Supported UI locales
pub const LOCALES: [&str; 2] = ["en", "zh"];

fn get_settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE))
}

/// Persisted user preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    view: Option<String>,
    locale: Option<String>,
    data_path: Option<PathBuf>,
    asset_dir: Option<PathBuf>,
    duration_secs: Option<f64>,
    /// System language, used when `locale` is unset
    #[serde(skip)]
    detected_locale: Option<String>,
}

impl Preferences {
    /// Load preferences from the config directory
    pub fn try_load() -> Result<Self> {
        let path = get_settings_path()?;
        info!(path = ?path, "Loading settings file");
        let mut prefs = Self::load_from(&path)?;
        prefs.detected_locale = detect_locale();
        Ok(prefs)
    }

    /// Load preferences from `path`; a missing or blank file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let prefs: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;
        Ok(prefs)
    }

    /// Write preferences to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    // ==================== Getters ====================

    /// Persisted view, or `rtu` when unset or unrecognized
    pub fn view_mode(&self) -> ViewMode {
        if let Some(value) = self.view.as_deref()
            && value.parse::<ViewMode>().is_err()
        {
            warn!(value, "Ignoring unknown persisted view");
        }
        ViewMode::from_persisted(self.view.as_deref())
    }

    /// Configured locale, else the system one, else `en`
    pub fn locale(&self) -> &str {
        [self.locale.as_deref(), self.detected_locale.as_deref()]
            .into_iter()
            .flatten()
            .find(|locale| LOCALES.contains(locale))
            .unwrap_or("en")
    }

    pub fn data_path(&self) -> PathBuf {
        self.data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    pub fn asset_dir(&self) -> PathBuf {
        self.asset_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_DIR))
    }

    /// Wall-clock length of one full playback pass
    pub fn playback_duration(&self) -> Duration {
        let default = Duration::from_secs_f64(DEFAULT_PLAYBACK_SECS);
        match self.duration_secs {
            Some(secs) if secs > 0.0 => Duration::try_from_secs_f64(secs).unwrap_or_else(|e| {
                warn!(secs, error = %e, "Ignoring out-of-range playback duration");
                default
            }),
            Some(secs) => {
                warn!(secs, "Ignoring non-positive playback duration");
                default
            }
            None => default,
        }
    }

    // ==================== Setters ====================

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = Some(view.as_str().to_string());
    }
}

/// Language part of the system locale, if it is one we translate
fn detect_locale() -> Option<String> {
    let current = Locale::current().to_string();
    let lang = current.split_once('-').map_or(current.as_str(), |(lang, _)| lang);
    LOCALES.contains(&lang).then(|| lang.to_string())
}

// ==================== Persistence ====================

/// Save preferences to the config directory
pub fn save_preferences(prefs: &Preferences) -> Result<()> {
    prefs.save_to(&get_settings_path()?)
}

/// Update preferences and save to disk asynchronously
pub fn update_preferences_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut Preferences) + Send + 'static,
{
    let prefs = cx.global::<AppEntities>().preferences.clone();

    cx.spawn(async move |cx| {
        let current = prefs.update(cx, |prefs, cx| {
            mutation(prefs);
            cx.notify();
            prefs.clone()
        });

        if let Ok(prefs) = current {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_preferences(&prefs) {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.view_mode(), ViewMode::Rtu);
        assert_eq!(prefs.locale(), "en");
        assert_eq!(prefs.data_path(), PathBuf::from("assets/rtu.csv"));
        assert_eq!(prefs.asset_dir(), PathBuf::from("assets/images"));
        assert_eq!(prefs.playback_duration(), Duration::from_secs(60));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rtu-dashboard.toml");

        let mut prefs: Preferences =
            toml::from_str("locale = \"zh\"\nduration_secs = 90.0\n").expect("parsed");
        prefs.set_view(ViewMode::Ev);
        prefs.save_to(&path).expect("saved");

        let loaded = Preferences::load_from(&path).expect("loaded");
        assert_eq!(loaded, prefs);
        assert_eq!(loaded.view_mode(), ViewMode::Ev);
        assert_eq!(loaded.locale(), "zh");
        assert_eq!(loaded.playback_duration(), Duration::from_secs(90));
    }

    #[test]
    fn test_missing_and_blank_files_give_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rtu-dashboard.toml");
        assert_eq!(Preferences::load_from(&path).expect("missing"), Preferences::default());

        std::fs::write(&path, "  \n").expect("write");
        assert_eq!(Preferences::load_from(&path).expect("blank"), Preferences::default());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let prefs: Preferences = toml::from_str(
            r#"
            view = "heatmap"
            locale = "fr"
            duration_secs = -3.0
            data_path = "/srv/july.csv"
            "#,
        )
        .expect("parsed");

        assert_eq!(prefs.view_mode(), ViewMode::Rtu);
        assert_eq!(prefs.locale(), "en");
        assert_eq!(prefs.playback_duration(), Duration::from_secs(60));
        assert_eq!(prefs.data_path(), PathBuf::from("/srv/july.csv"));
    }

    #[test]
    fn test_unrepresentable_duration_falls_back() {
        for secs in [1e20, f64::INFINITY, f64::NAN] {
            let prefs = Preferences {
                duration_secs: Some(secs),
                ..Preferences::default()
            };
            assert_eq!(prefs.playback_duration(), Duration::from_secs(60));
        }

        let prefs = Preferences {
            duration_secs: Some(90.0),
            ..Preferences::default()
        };
        assert_eq!(prefs.playback_duration(), Duration::from_secs(90));
    }

    #[test]
    fn test_system_locale_is_fallback_only() {
        let detected = Preferences {
            detected_locale: Some("zh".to_string()),
            ..Default::default()
        };
        assert_eq!(detected.locale(), "zh");

        let configured = Preferences {
            locale: Some("en".to_string()),
            detected_locale: Some("zh".to_string()),
            ..Default::default()
        };
        assert_eq!(configured.locale(), "en");

        // Detection never reaches the settings file
        assert!(!toml::to_string(&detected).expect("serialized").contains("zh"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rtu-dashboard.toml");
        std::fs::write(&path, "view = [").expect("write");
        assert!(Preferences::load_from(&path).is_err());
    }
}
