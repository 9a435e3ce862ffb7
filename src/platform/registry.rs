use crate::error::{Error, Result};

use super::{LinuxNotifySend, MacOsNotification, PlatformStrategy, WindowsBalloonTip};

/// Fixed-priority table of platform strategies. Built once by whoever
/// composes the system; tests substitute their own set.
pub struct PlatformRegistry {
    strategies: Vec<Box<dyn PlatformStrategy>>,
}

impl PlatformRegistry {
    /// The standard table. Order is the resolution priority.
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(MacOsNotification),
            Box::new(WindowsBalloonTip),
            Box::new(LinuxNotifySend),
        ])
    }

    /// Build a registry over an explicit strategy set
    pub fn with_strategies(strategies: Vec<Box<dyn PlatformStrategy>>) -> Self {
        Self { strategies }
    }

    /// First strategy that applies to the running OS
    pub fn resolve(&self) -> Result<&dyn PlatformStrategy> {
        self.strategies
            .iter()
            .map(|strategy| strategy.as_ref())
            .find(|strategy| strategy.is_supported())
            .ok_or_else(|| Error::UnsupportedPlatform {
                os: std::env::consts::OS.to_string(),
            })
    }

    pub fn is_any_supported(&self) -> bool {
        self.resolve().is_ok()
    }

    /// Sound markers across all strategies, for the status heuristic
    pub(crate) fn sound_markers(&self) -> Vec<&'static str> {
        self.strategies
            .iter()
            .filter_map(|strategy| strategy.sound_marker())
            .collect()
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;

    #[derive(Debug)]
    struct StaticPlatform {
        supported: bool,
        platform: Platform,
    }

    impl PlatformStrategy for StaticPlatform {
        fn is_supported(&self) -> bool {
            self.supported
        }

        fn platform_id(&self) -> Platform {
            self.platform
        }

        fn create_command(&self, event_action: &str, _with_sound: bool) -> Result<String> {
            Ok(format!("echo '{}'", event_action))
        }
    }

    #[test]
    fn resolves_the_first_supported_strategy() {
        let registry = PlatformRegistry::with_strategies(vec![
            Box::new(StaticPlatform { supported: false, platform: Platform::MacOs }),
            Box::new(StaticPlatform { supported: true, platform: Platform::Windows }),
            Box::new(StaticPlatform { supported: true, platform: Platform::Linux }),
        ]);
        assert_eq!(registry.resolve().unwrap().platform_id(), Platform::Windows);
        assert!(registry.is_any_supported());
    }

    #[test]
    fn reports_unsupported_when_nothing_matches() {
        let registry = PlatformRegistry::with_strategies(vec![Box::new(StaticPlatform {
            supported: false,
            platform: Platform::MacOs,
        })]);
        let err = registry.resolve().unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform { .. }));
        assert!(!registry.is_any_supported());
    }

    #[test]
    fn standard_table_covers_the_test_host() {
        // macOS, Windows, and Linux are all present, so whichever OS runs
        // the tests should resolve
        assert!(PlatformRegistry::new().is_any_supported());
    }

    #[test]
    fn sound_markers_come_from_the_strategies() {
        let markers = PlatformRegistry::new().sound_markers();
        assert_eq!(markers, vec!["sound name"]);
    }
}
