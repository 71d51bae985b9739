//! Build environment flags.
//!
//! The mode comes from the `IMGPRESS_MODE` variable at compile time
//! (`development`, `production` or `test`), falling back to the build profile:
//! debug builds are development, release builds are production.

use std::fmt;

use thiserror::Error;

/// Compile-time override for the build mode.
const MODE_VAR: Option<&str> = option_env!("IMGPRESS_MODE");

/// Errors reported by [`EnvFlags::validate`].
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Invalid environment: {0}")]
    Invalid(String),
}

/// The environment the application was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
    Test,
}

impl Mode {
    /// Parse a mode name, case-insensitively. Accepts the short forms `dev` and `prod`.
    pub fn parse(value: &str) -> Option<Mode> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Mode::Development),
            "production" | "prod" => Some(Mode::Production),
            "test" => Some(Mode::Test),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
            Mode::Test => "test",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only environment flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvFlags {
    mode: Mode,
}

impl EnvFlags {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Flags for the environment this crate was compiled in.
    pub fn detect() -> Self {
        Self::resolve(MODE_VAR, cfg!(debug_assertions))
    }

    /// Flags for a named mode, or `None` if the name is not recognised.
    pub fn from_mode_str(value: &str) -> Option<Self> {
        Mode::parse(value).map(Self::new)
    }

    fn resolve(var: Option<&str>, debug_build: bool) -> Self {
        let mode = var.and_then(Mode::parse).unwrap_or(if debug_build {
            Mode::Development
        } else {
            Mode::Production
        });
        Self::new(mode)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_development(&self) -> bool {
        self.mode == Mode::Development
    }

    pub fn is_production(&self) -> bool {
        self.mode == Mode::Production
    }

    /// Check the environment is usable. Every mode is accepted for now.
    pub fn validate(&self) -> Result<(), EnvError> {
        Ok(())
    }
}

impl Default for EnvFlags {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(Mode::parse("development"), Some(Mode::Development));
        assert_eq!(Mode::parse("DEV"), Some(Mode::Development));
        assert_eq!(Mode::parse(" Production "), Some(Mode::Production));
        assert_eq!(Mode::parse("prod"), Some(Mode::Production));
        assert_eq!(Mode::parse("test"), Some(Mode::Test));
        assert_eq!(Mode::parse("staging"), None);
    }

    #[test]
    fn test_flags_are_exclusive() {
        let dev = EnvFlags::new(Mode::Development);
        assert!(dev.is_development());
        assert!(!dev.is_production());

        let prod = EnvFlags::new(Mode::Production);
        assert!(!prod.is_development());
        assert!(prod.is_production());

        let test = EnvFlags::new(Mode::Test);
        assert!(!test.is_development());
        assert!(!test.is_production());
    }

    #[test]
    fn test_resolve_prefers_variable() {
        assert_eq!(
            EnvFlags::resolve(Some("production"), true).mode(),
            Mode::Production
        );
        assert_eq!(EnvFlags::resolve(Some("test"), false).mode(), Mode::Test);
    }

    #[test]
    fn test_resolve_falls_back_to_profile() {
        assert_eq!(EnvFlags::resolve(None, true).mode(), Mode::Development);
        assert_eq!(EnvFlags::resolve(None, false).mode(), Mode::Production);
        assert_eq!(
            EnvFlags::resolve(Some("nonsense"), false).mode(),
            Mode::Production
        );
    }

    #[test]
    fn test_from_mode_str() {
        assert!(EnvFlags::from_mode_str("dev").unwrap().is_development());
        assert!(EnvFlags::from_mode_str("qa").is_none());
    }

    #[test]
    fn test_validate_accepts_all_modes() {
        for mode in [Mode::Development, Mode::Production, Mode::Test] {
            assert!(EnvFlags::new(mode).validate().is_ok());
        }
    }

    #[test]
    fn test_detect_matches_build() {
        let flags = EnvFlags::detect();
        if MODE_VAR.is_none() {
            assert_eq!(flags.is_development(), cfg!(debug_assertions));
        }
    }
}
