pub mod analysis;
pub mod events;
pub mod preference;

pub use analysis::{ConfigAnalysis, HookStatus};
pub use events::HookEvent;
pub use preference::HookPreference;
