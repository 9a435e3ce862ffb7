use crate::error::{Error, Result};

use super::safety::command_is_safe;
use super::sanitize::sanitize_message;
use super::{require_event_action, Platform, PlatformStrategy, NOTIFICATION_TITLE};

/// Desktop notifications via `notify-send` (libnotify). The tool has no
/// portable sound switch, so the sound flag is ignored here.
#[derive(Debug)]
pub struct LinuxNotifySend;

impl PlatformStrategy for LinuxNotifySend {
    fn is_supported(&self) -> bool {
        cfg!(target_os = "linux")
    }

    fn platform_id(&self) -> Platform {
        Platform::Linux
    }

    fn create_command(&self, event_action: &str, _with_sound: bool) -> Result<String> {
        require_event_action(event_action)?;

        let message = sanitize_message(event_action);
        let command = format!("notify-send '{}' '{}'", NOTIFICATION_TITLE, message);
        if !command_is_safe(Platform::Linux, &command) {
            return Err(Error::CommandRejected { command });
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_quoted_notify_send_command() {
        let command = LinuxNotifySend.create_command("Task completed", false).unwrap();
        assert_eq!(command, "notify-send 'Claude Code' 'Task completed'");
    }

    #[test]
    fn sound_flag_changes_nothing() {
        let with = LinuxNotifySend.create_command("Task completed", true).unwrap();
        let without = LinuxNotifySend.create_command("Task completed", false).unwrap();
        assert_eq!(with, without);
        assert_eq!(LinuxNotifySend.sound_marker(), None);
        assert!(!LinuxNotifySend.supports_sound());
    }

    #[test]
    fn message_is_reduced_to_safe_characters() {
        let command = LinuxNotifySend
            .create_command("done'; rm -rf $HOME | nc", false)
            .unwrap();
        assert_eq!(command, "notify-send 'Claude Code' 'done rm -rf HOME  nc'");
    }

    #[test]
    fn empty_action_is_a_caller_error() {
        let err = LinuxNotifySend.create_command("", false).unwrap_err();
        assert!(matches!(err, Error::CommandBuild { .. }));
    }
}
