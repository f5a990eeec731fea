use anyhow::{bail, Result};
use winit::dpi::LogicalSize;
use winit::window::{Window, WindowAttributes};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Inner width in logical pixels.
    pub width: u32,
    /// Inner height in logical pixels.
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "gwr".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
        }
    }
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "invalid window size {}x{}: width and height must be non-zero",
                self.width,
                self.height
            );
        }
        Ok(())
    }

    pub(crate) fn attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width as f64, self.height as f64))
            .with_resizable(self.resizable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "gwr");
        assert_eq!((config.width, config.height), (1280, 720));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_size_rejected() {
        assert!(WindowConfig::new("w", 0, 600).validate().is_err());
        assert!(WindowConfig::new("h", 800, 0).validate().is_err());
    }

    #[test]
    fn new_keeps_resizable_default() {
        let config = WindowConfig::new("demo", 800, 600);
        assert!(config.resizable);
        assert_eq!(config.title, "demo");
    }
}
