use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::customers::{ApiError, CustomerApiClient};

/// Console theme values as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub primary_font: String,
    pub secondary_font: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub primary_font_size: String,
    pub secondary_font_size: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_font: "Coolvetica".to_string(),
            secondary_font: "Urbanist".to_string(),
            primary_color: "#F26B23".to_string(),
            secondary_color: "#FFFFFF".to_string(),
            background_color: "#F9F9F9".to_string(),
            primary_font_size: "48px".to_string(),
            secondary_font_size: "14px".to_string(),
        }
    }
}

impl CustomerApiClient {
    pub async fn theme_settings(&self) -> Result<ThemeSettings, ApiError> {
        let url = format!("{}/theme-settings", self.base_url);
        debug!("Fetching theme settings: GET {url}");

        let theme = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<ThemeSettings>()
            .await?;
        Ok(theme)
    }

    /// Theme fetch that never fails: the console has to render even when
    /// the backend is unreachable, so any error falls back to the stock
    /// palette.
    pub async fn theme_settings_or_default(&self) -> ThemeSettings {
        match self.theme_settings().await {
            Ok(theme) => theme,
            Err(e) => {
                warn!("Failed to fetch theme settings, using defaults: {e}");
                ThemeSettings::default()
            }
        }
    }

    pub async fn update_theme_settings(&self, theme: &ThemeSettings) -> Result<(), ApiError> {
        let url = format!("{}/theme-settings", self.base_url);
        debug!("Updating theme settings: PATCH {url}");

        self.client
            .patch(&url)
            .json(theme)
            .send()
            .await?
            .error_for_status()?;

        info!("Theme settings updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = ThemeSettings::default();
        assert_eq!(theme.primary_color, "#F26B23");
        assert_eq!(theme.primary_font, "Coolvetica");
        assert_eq!(theme.secondary_font_size, "14px");
    }

    #[test]
    fn test_theme_roundtrips_snake_case() {
        let theme = ThemeSettings::default();
        let json = serde_json::to_value(&theme).unwrap();
        assert!(json.get("background_color").is_some());
        let back: ThemeSettings = serde_json::from_value(json).unwrap();
        assert_eq!(back, theme);
    }
}
