use crate::domain::HookPreference;
use crate::error::Result;
use crate::platform::PlatformStrategy;
use serde_json::{json, Map, Value};

/// Build the hook groups for every event the user enabled, keyed by event
/// name and shaped the way the runner's settings file expects them. The
/// result feeds straight into `SettingsStore::merge_hooks`.
pub fn build_hook_map(
    preference: &HookPreference,
    strategy: &dyn PlatformStrategy,
) -> Result<Map<String, Value>> {
    let mut hooks = Map::new();
    for (event, with_sound) in preference.selections() {
        let command = strategy.create_command(event.message(), with_sound)?;
        let groups = json!([
            {
                "hooks": [
                    { "type": "command", "command": command }
                ]
            }
        ]);
        hooks.insert(event.key().to_string(), groups);
    }
    Ok(hooks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{LinuxNotifySend, MacOsNotification};

    #[test]
    fn builds_groups_for_enabled_events_only() {
        let preference = HookPreference {
            on_completion: true,
            completion_sound: true,
            on_stop: false,
            stop_sound: false,
        };
        let hooks = build_hook_map(&preference, &MacOsNotification).unwrap();

        assert_eq!(hooks.len(), 1);
        let entry = &hooks.get("Notification").unwrap()[0]["hooks"][0];
        assert_eq!(entry["type"], "command");
        let command = entry["command"].as_str().unwrap();
        assert!(command.contains("Task completed"));
        assert!(command.contains("sound name"));
    }

    #[test]
    fn stop_event_carries_its_own_message() {
        let preference = HookPreference {
            on_completion: false,
            completion_sound: false,
            on_stop: true,
            stop_sound: false,
        };
        let hooks = build_hook_map(&preference, &LinuxNotifySend).unwrap();
        let command = hooks.get("Stop").unwrap()[0]["hooks"][0]["command"]
            .as_str()
            .unwrap();
        assert!(command.contains("Task stopped"));
    }

    #[test]
    fn empty_preference_builds_an_empty_map() {
        let hooks = build_hook_map(&HookPreference::default(), &LinuxNotifySend).unwrap();
        assert!(hooks.is_empty());
    }
}
