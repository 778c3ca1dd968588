use crate::i18n::Language;

pub const LANGUAGE_STORAGE_KEY: &str = "rb_lang";
pub const DEFAULT_LANGUAGE: Language = Language::Es;

pub const BRAND: &str = "RB Group Solutions LLC";
pub const SUITE: &str = "RB Field Pro 360";
pub const CONTACT_EMAIL: &str = "info@rbgroupsolutions.com";
pub const CONTACT_PHONE: &str = "+1 (773) 263-7256";
pub const CONTACT_LOCATION: &str = "Norridge / Chicago, IL";

/// The three externally hosted applications the page links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalApp {
    SnapLog,
    FuelTrack,
    Field360,
}

impl ExternalApp {
    pub const ALL: [ExternalApp; 3] = [ExternalApp::SnapLog, ExternalApp::FuelTrack, ExternalApp::Field360];

    pub fn label(self) -> &'static str {
        match self {
            ExternalApp::SnapLog => "RB SnapLog 360",
            ExternalApp::FuelTrack => "RB FuelTrack 360",
            ExternalApp::Field360 => "RB Field360",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ExternalApp::SnapLog => "📦",
            ExternalApp::FuelTrack => "⛽",
            ExternalApp::Field360 => "📊",
        }
    }

    /// Anchor id of the detail block for this app.
    pub fn anchor(self) -> &'static str {
        match self {
            ExternalApp::SnapLog => "snaplog",
            ExternalApp::FuelTrack => "fueltrack",
            ExternalApp::Field360 => "field360",
        }
    }

    /// Build-time overridable so staging deploys can point at staging apps.
    pub fn url(self) -> &'static str {
        match self {
            ExternalApp::SnapLog => option_env!("RB_SNAPLOG_URL").unwrap_or("https://sl360.rbgroupsolutions.com"),
            ExternalApp::FuelTrack => option_env!("RB_FUELTRACK_URL").unwrap_or("https://gas360.rbgroupsolutions.com"),
            ExternalApp::Field360 => option_env!("RB_FIELD360_URL").unwrap_or("https://field360.rbgroupsolutions.com"),
        }
    }
}

pub fn get_log_level() -> log::Level {
    option_env!("RB_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(if cfg!(debug_assertions) {
            log::Level::Info
        } else {
            log::Level::Warn
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_app_has_an_https_url_and_unique_anchor() {
        for app in ExternalApp::ALL {
            assert!(app.url().starts_with("https://"), "{:?}", app);
        }
        let anchors: Vec<_> = ExternalApp::ALL.iter().map(|a| a.anchor()).collect();
        assert_eq!(anchors, vec!["snaplog", "fueltrack", "field360"]);
    }
}
