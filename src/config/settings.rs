pub struct AnalysisSettings {
    /// Max events to scan ahead inside the same possession
    pub look_ahead: usize,
    /// Only credit shots within this many seconds of the pass
    pub time_ahead_seconds: i64,
    /// Shot quality is clipped to this cap before blending
    pub xg_cap: f64,
    pub structural_weight: f64,
    pub xg_weight: f64,
    pub preview_rows: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            look_ahead: 5,
            time_ahead_seconds: 30,
            xg_cap: 1.0,
            structural_weight: 0.85,
            xg_weight: 0.15,
            preview_rows: 20,
        }
    }
}

pub struct FetcherSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub base_url: &'static str,
}

impl Default for FetcherSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 100, // 10 req/sec
            user_agent: "PassImportance/1.0",
            timeout_secs: 30,
            base_url: "https://raw.githubusercontent.com/statsbomb/open-data/master",
        }
    }
}

pub struct AppConfig {
    pub analysis: AnalysisSettings,
    pub fetcher: FetcherSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            analysis: AnalysisSettings::default(),
            fetcher: FetcherSettings::default(),
        }
    }
}

// Constants are fixed via Default rather than runtime flags; the config
// is passed explicitly (Dependency Injection) rather than held globally.
