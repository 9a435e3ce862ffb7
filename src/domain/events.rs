use serde::Serialize;

/// Runner lifecycle events a notification hook can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HookEvent {
    /// The runner finished a task and wants attention
    Notification,
    /// The runner stopped a session
    Stop,
}

impl HookEvent {
    /// Every event chime knows how to install, in install order
    pub const ALL: [HookEvent; 2] = [HookEvent::Notification, HookEvent::Stop];

    /// Key for this event under "hooks" in the settings document
    pub fn key(&self) -> &'static str {
        match self {
            Self::Notification => "Notification",
            Self::Stop => "Stop",
        }
    }

    /// Message shown in the desktop notification
    pub fn message(&self) -> &'static str {
        match self {
            Self::Notification => "Task completed",
            Self::Stop => "Task stopped",
        }
    }

    /// Parse a settings key like "Stop"
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Notification" => Some(Self::Notification),
            "Stop" => Some(Self::Stop),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips() {
        for event in HookEvent::ALL {
            assert_eq!(HookEvent::from_key(event.key()), Some(event));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(HookEvent::from_key("PreToolUse"), None);
        assert_eq!(HookEvent::from_key("notification"), None);
    }
}
