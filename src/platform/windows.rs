use crate::error::{Error, Result};

use super::safety::{command_is_safe, WINDOWS_PREFIX};
use super::sanitize::sanitize_powershell;
use super::{require_event_action, Platform, PlatformStrategy, NOTIFICATION_TITLE};

const BALLOON_TIMEOUT_MS: u32 = 5000;

/// Tray balloon tip via PowerShell and Windows Forms. Each statement after a
/// semicolon starts with `$` or `[` so the chained-command check stays happy.
#[derive(Debug)]
pub struct WindowsBalloonTip;

impl PlatformStrategy for WindowsBalloonTip {
    fn is_supported(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn platform_id(&self) -> Platform {
        Platform::Windows
    }

    fn create_command(&self, event_action: &str, _with_sound: bool) -> Result<String> {
        require_event_action(event_action)?;

        let message = sanitize_powershell(event_action);
        let script = format!(
            "Add-Type -AssemblyName System.Windows.Forms; \
             $icon = New-Object System.Windows.Forms.NotifyIcon; \
             $icon.Icon = [System.Drawing.SystemIcons]::Information; \
             $icon.Visible = $true; \
             $icon.ShowBalloonTip({}, '{}', '{}', [System.Windows.Forms.ToolTipIcon]::Info)",
            BALLOON_TIMEOUT_MS, NOTIFICATION_TITLE, message
        );

        let command = format!("{}{}\"", WINDOWS_PREFIX, script);
        if !command_is_safe(Platform::Windows, &command) {
            return Err(Error::CommandRejected { command });
        }
        Ok(command)
    }
}
