//! Curve Editor Library.
//! Kurven-Kernel, Kurvensammlung und modales Werkzeug-System als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, ToolControl, ToolState, UiState};
pub use core::{
    Curve, CurveCollection, CurveKind, CurveRecord, JoinMethod, NodeSpacing, Point,
    RecomputeMode, ReorderMode,
};
pub use shared::{EditorOptions, RenderScene};
