//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Names the log directory of this run. Generated when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8, min: 3)
    /// - `BATTLE_SESSION_ID` - Log directory name for this run
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(height) = lookup("CLI_MESSAGE_PANEL_HEIGHT").and_then(|v| v.parse::<u16>().ok())
        {
            config.ui.message_panel_height = height.max(UiConfig::MIN_MESSAGE_PANEL_HEIGHT);
        }
        config.session_id = lookup("BATTLE_SESSION_ID").filter(|id| !id.trim().is_empty());

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl UiConfig {
    pub const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.ui.message_panel_height, 8);
        assert_eq!(config.session_id, None);
    }

    #[test]
    fn panel_height_is_clamped() {
        let config = config_from(&[("CLI_MESSAGE_PANEL_HEIGHT", "1")]);
        assert_eq!(config.ui.message_panel_height, 3);

        let config = config_from(&[("CLI_MESSAGE_PANEL_HEIGHT", "12")]);
        assert_eq!(config.ui.message_panel_height, 12);
    }

    #[test]
    fn blank_session_id_is_ignored() {
        assert_eq!(config_from(&[("BATTLE_SESSION_ID", "  ")]).session_id, None);
        assert_eq!(
            config_from(&[("BATTLE_SESSION_ID", "duel")]).session_id.as_deref(),
            Some("duel")
        );
    }
}
