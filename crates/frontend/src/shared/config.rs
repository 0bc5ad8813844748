use contracts::shared::performance::InsightConfig;

/// Configuration bundled into the wasm binary at build time
const BUNDLED_CONFIG: &str = include_str!("../../insights.toml");

/// Load the insight configuration
///
/// Falls back to the built-in defaults when the bundled file is invalid,
/// so a bad edit degrades the narratives instead of breaking the page.
pub fn load_insight_config() -> InsightConfig {
    parse_or_default(BUNDLED_CONFIG)
}

fn parse_or_default(contents: &str) -> InsightConfig {
    match InsightConfig::from_toml_str(contents) {
        Ok(config) => {
            log::debug!("Loaded bundled insight config");
            config
        }
        Err(e) => {
            log::warn!("Invalid insights.toml, using defaults: {:#}", e);
            InsightConfig::default()
        }
    }
}
