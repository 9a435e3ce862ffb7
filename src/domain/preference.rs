use crate::domain::HookEvent;

/// What the user asked to install, resolved from CLI flags or the selector.
/// Consumed once to build hook groups; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookPreference {
    pub on_completion: bool,
    pub completion_sound: bool,
    pub on_stop: bool,
    pub stop_sound: bool,
}

impl HookPreference {
    /// Enabled events paired with their sound flag, in install order
    pub fn selections(&self) -> Vec<(HookEvent, bool)> {
        let mut selections = Vec::new();
        if self.on_completion {
            selections.push((HookEvent::Notification, self.completion_sound));
        }
        if self.on_stop {
            selections.push((HookEvent::Stop, self.stop_sound));
        }
        selections
    }

    /// True when no event is enabled at all
    pub fn is_empty(&self) -> bool {
        !self.on_completion && !self.on_stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_follow_enabled_flags() {
        let preference = HookPreference {
            on_completion: true,
            completion_sound: true,
            on_stop: false,
            stop_sound: true,
        };
        assert_eq!(preference.selections(), vec![(HookEvent::Notification, true)]);
        assert!(!preference.is_empty());
    }

    #[test]
    fn default_preference_is_empty() {
        let preference = HookPreference::default();
        assert!(preference.is_empty());
        assert!(preference.selections().is_empty());
    }
}
