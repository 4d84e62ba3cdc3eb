//! Suite configuration.
//!
//! Base URL, headless toggle, device emulation profile and wait budgets.
//! Everything can be overridden from the environment so the same suite runs
//! headed on a workstation and headless in CI.

use crate::result::{ComprarError, ComprarResult};
use crate::wait::WaitOptions;
use serde::Serialize;

/// Default target site
pub const DEFAULT_BASE_URL: &str = "https://automationexercise.com";

/// Device emulation profile
#[derive(Debug, Clone, Serialize)]
pub struct DeviceProfile {
    /// Profile name
    pub name: &'static str,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Device scale factor
    pub device_scale_factor: f64,
    /// Is mobile device
    pub is_mobile: bool,
    /// User agent string
    pub user_agent: &'static str,
}

impl DeviceProfile {
    /// Desktop Chrome
    pub const DESKTOP_CHROME: Self = Self {
        name: "Desktop Chrome",
        viewport_width: 1920,
        viewport_height: 1080,
        device_scale_factor: 1.0,
        is_mobile: false,
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/120.0.0.0",
    };

    /// iPhone 13 emulation
    pub const IPHONE_13: Self = Self {
        name: "iPhone 13",
        viewport_width: 390,
        viewport_height: 844,
        device_scale_factor: 3.0,
        is_mobile: true,
        user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 15_0 like Mac OS X) AppleWebKit/605.1.15",
    };

    /// Look a profile up by name (case-insensitive, dashes and spaces
    /// interchangeable).
    pub fn by_name(name: &str) -> ComprarResult<Self> {
        let key = name.to_ascii_lowercase().replace(['-', '_'], " ");
        match key.trim() {
            "desktop chrome" | "desktop" | "chromium" => Ok(Self::DESKTOP_CHROME),
            "iphone 13" | "mobile safari" | "mobile" => Ok(Self::IPHONE_13),
            _ => Err(ComprarError::Config {
                message: format!("unknown device profile {name:?}"),
            }),
        }
    }
}

/// Configuration for one suite run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteConfig {
    /// Base URL of the target storefront
    pub base_url: String,
    /// Run the browser headless
    pub headless: bool,
    /// Chromium sandbox (disable in containers)
    pub sandbox: bool,
    /// Path to the chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Device emulation profile
    pub device: DeviceProfile,
    /// Timeout for navigations, in milliseconds
    pub navigation_timeout_ms: u64,
    /// Timeout for interactions and assertions, in milliseconds
    pub action_timeout_ms: u64,
    /// Polling interval, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headless: true,
            sandbox: true,
            chromium_path: None,
            device: DeviceProfile::DESKTOP_CHROME,
            navigation_timeout_ms: 30_000,
            action_timeout_ms: crate::wait::DEFAULT_TIMEOUT_MS,
            poll_interval_ms: crate::wait::DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl SuiteConfig {
    /// Build a config from the process environment.
    ///
    /// Recognized variables: `COMPRAR_BASE_URL`, `COMPRAR_HEADED`,
    /// `COMPRAR_NO_SANDBOX`, `COMPRAR_CHROMIUM_PATH`, `COMPRAR_DEVICE`.
    pub fn from_env() -> ComprarResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source (testable seam).
    pub fn from_vars<F>(var: F) -> ComprarResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = var("COMPRAR_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(headed) = var("COMPRAR_HEADED") {
            config.headless = !parse_bool(&headed)?;
        }
        if let Some(no_sandbox) = var("COMPRAR_NO_SANDBOX") {
            config.sandbox = !parse_bool(&no_sandbox)?;
        }
        if let Some(path) = var("COMPRAR_CHROMIUM_PATH") {
            config.chromium_path = Some(path);
        }
        if let Some(device) = var("COMPRAR_DEVICE") {
            config.device = DeviceProfile::by_name(&device)?;
        }
        Ok(config)
    }

    /// Set the base URL (trailing slashes trimmed)
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Disable the chromium sandbox
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Set the device profile
    #[must_use]
    pub const fn with_device(mut self, device: DeviceProfile) -> Self {
        self.device = device;
        self
    }

    /// Wait budget for interactions and assertions
    #[must_use]
    pub const fn action_waits(&self) -> WaitOptions {
        WaitOptions {
            timeout_ms: self.action_timeout_ms,
            poll_interval_ms: self.poll_interval_ms,
        }
    }

    /// Wait budget for navigations
    #[must_use]
    pub const fn navigation_waits(&self) -> WaitOptions {
        WaitOptions {
            timeout_ms: self.navigation_timeout_ms,
            poll_interval_ms: self.poll_interval_ms,
        }
    }
}

fn parse_bool(raw: &str) -> ComprarResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ComprarError::Config {
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SuiteConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.headless);
        assert!(config.sandbox);
        assert_eq!(config.device.name, "Desktop Chrome");
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = SuiteConfig::from_vars(|key| match key {
            "COMPRAR_BASE_URL" => Some("https://staging.example.com/".to_string()),
            "COMPRAR_HEADED" => Some("true".to_string()),
            "COMPRAR_NO_SANDBOX" => Some("1".to_string()),
            "COMPRAR_DEVICE" => Some("iphone-13".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.base_url, "https://staging.example.com");
        assert!(!config.headless);
        assert!(!config.sandbox);
        assert!(config.device.is_mobile);
    }

    #[test]
    fn test_from_vars_rejects_bad_bool() {
        let result = SuiteConfig::from_vars(|key| {
            (key == "COMPRAR_HEADED").then(|| "sometimes".to_string())
        });
        assert!(matches!(result, Err(ComprarError::Config { .. })));
    }

    #[test]
    fn test_device_by_name() {
        assert!(!DeviceProfile::by_name("Desktop Chrome").unwrap().is_mobile);
        assert!(DeviceProfile::by_name("Mobile Safari").unwrap().is_mobile);
        assert!(DeviceProfile::by_name("quest 3").is_err());
    }

    #[test]
    fn test_wait_budgets() {
        let config = SuiteConfig::default();
        assert_eq!(config.action_waits().timeout_ms, config.action_timeout_ms);
        assert_eq!(
            config.navigation_waits().timeout_ms,
            config.navigation_timeout_ms
        );
    }
}
