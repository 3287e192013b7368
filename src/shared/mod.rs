//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem externen Renderer geteilt
//! werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{DUPLICATE_OFFSET, HIT_THRESHOLD};
pub use render_scene::{RenderCurve, RenderScene};
