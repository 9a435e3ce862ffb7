pub mod linux;
pub mod macos;
pub mod registry;
pub mod safety;
pub mod sanitize;
pub mod windows;

pub use linux::LinuxNotifySend;
pub use macos::MacOsNotification;
pub use registry::PlatformRegistry;
pub use windows::WindowsBalloonTip;

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Title shown on every desktop notification
pub const NOTIFICATION_TITLE: &str = "Claude Code";

/// Identifier for a supported operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One per-OS way of turning an event message into a notification command
pub trait PlatformStrategy: fmt::Debug {
    /// True iff this strategy applies to the OS chime is running on
    fn is_supported(&self) -> bool;

    fn platform_id(&self) -> Platform;

    /// Whether the platform command can ask for an audible alert
    fn supports_sound(&self) -> bool {
        false
    }

    /// Substring whose presence in a stored command means sound is on
    fn sound_marker(&self) -> Option<&'static str> {
        None
    }

    /// Build the complete, safety-checked shell command for one event.
    /// The sound clause is emitted only when `with_sound` is set and the
    /// platform supports it.
    fn create_command(&self, event_action: &str, with_sound: bool) -> Result<String>;
}

/// Caller-contract check shared by every strategy: the event action must be
/// a non-blank string before any sanitizing happens.
pub(crate) fn require_event_action(event_action: &str) -> Result<()> {
    if event_action.trim().is_empty() {
        return Err(Error::CommandBuild {
            reason: "event action must be a non-empty string".to_string(),
        });
    }
    Ok(())
}
