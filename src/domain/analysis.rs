use crate::domain::HookEvent;
use crate::platform::Platform;
use serde::Serialize;

/// Installed state of a single event hook
#[derive(Debug, Clone, Serialize)]
pub struct HookStatus {
    pub event: HookEvent,
    pub installed: bool,
    /// Heuristic: the stored command text carries a sound clause
    pub sound: bool,
}

/// Snapshot of the installed hooks, as reported by `chime status`
#[derive(Debug, Clone, Serialize)]
pub struct ConfigAnalysis {
    /// None when no strategy matches the running OS
    pub platform: Option<Platform>,
    pub platform_supports_sound: bool,
    pub hooks: Vec<HookStatus>,
}
