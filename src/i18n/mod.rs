//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Language code stored in the settings file
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en",
            Locale::ZhCN => "zh",
        }
    }

    /// Parse a settings code; anything unknown is English
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Locale::ZhCN,
            _ => Locale::EnUS,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> =
    OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("RTU Coordination Dashboard", "屋顶机组协调看板"));

    // Chart titles
    map.insert("chart-title-base", ("Base Building", "基础建筑"));
    map.insert("chart-title-rtu-coord", ("RTU Coordination", "RTU 协调"));
    map.insert("chart-title-base-ev", ("Base Building + EVs", "基础建筑 + 电动汽车"));
    map.insert(
        "chart-title-rtu-coord-ev-ess",
        ("RTU Coordination + EVs + ESS", "RTU 协调 + 电动汽车 + 储能"),
    );

    // Axes
    map.insert("axis-time", ("TIME (JULY 3RD)", "时间（7月3日）"));
    map.insert("axis-kw", ("kW", "kW"));

    // Views
    map.insert("view-rtu", ("RTU", "RTU"));
    map.insert("view-ev", ("EV + ESS", "电动汽车 + 储能"));

    // Playback
    map.insert("action-play", ("Play", "播放"));
    map.insert("action-pause", ("Pause", "暂停"));
    map.insert(
        "playback-hint",
        ("Space: play/pause  ←/→: step", "空格：播放/暂停  ←/→：单步"),
    );

    // Status
    map.insert("status-loading", ("Loading data...", "正在加载数据..."));
    map.insert("status-load-failed", ("Could not load data file", "无法加载数据文件"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
