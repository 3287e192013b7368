//! Application State: zentrale Datenhaltung.

mod app_state;
mod dialogs;
mod toolbar;

pub use app_state::AppState;
pub use dialogs::{UiState, WeightDialogState};
pub use toolbar::ToolbarState;
