use crate::error::{Error, Result};

use super::safety::{command_is_safe, MACOS_PREFIX};
use super::sanitize::sanitize_applescript;
use super::{require_event_action, Platform, PlatformStrategy, NOTIFICATION_TITLE};

/// Marker embedded in a command when the alert sound is on
pub(crate) const SOUND_MARKER: &str = "sound name";

const SOUND_NAME: &str = "Glass";

/// Notification Center via `osascript`, with an optional alert sound
#[derive(Debug)]
pub struct MacOsNotification;

impl PlatformStrategy for MacOsNotification {
    fn is_supported(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn platform_id(&self) -> Platform {
        Platform::MacOs
    }

    fn supports_sound(&self) -> bool {
        true
    }

    fn sound_marker(&self) -> Option<&'static str> {
        Some(SOUND_MARKER)
    }

    fn create_command(&self, event_action: &str, with_sound: bool) -> Result<String> {
        require_event_action(event_action)?;

        let message = sanitize_applescript(event_action);
        let mut script = format!(
            r#"display notification "{}" with title "{}""#,
            message, NOTIFICATION_TITLE
        );
        if with_sound {
            script.push_str(&format!(r#" {} "{}""#, SOUND_MARKER, SOUND_NAME));
        }

        let command = format!("{}{}'", MACOS_PREFIX, script);
        if !command_is_safe(Platform::MacOs, &command) {
            return Err(Error::CommandRejected { command });
        }
        Ok(command)
    }
}
