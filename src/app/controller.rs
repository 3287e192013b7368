//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Werkzeuge ===
            AppCommand::ToolPointer { event } => handlers::tool::pointer(state, event),
            AppCommand::SetTool { control } => handlers::tool::set_tool(state, control),
            AppCommand::ResetTool => handlers::tool::reset(state),

            // === Kurven ===
            AppCommand::CreateCurve { kind } => handlers::curves::create(state, kind),
            AppCommand::SelectCurve { index } => handlers::curves::select(state, index),
            AppCommand::ClearSelection => handlers::curves::clear_selection(state),
            AppCommand::RemoveSelectedCurve => handlers::curves::remove_selected(state),
            AppCommand::TranslateSelected { delta } => handlers::curves::translate(state, delta),
            AppCommand::ScaleSelected { factor } => handlers::curves::scale(state, factor),
            AppCommand::RotateSelected { degrees } => handlers::curves::rotate(state, degrees),
            AppCommand::SetResolution { resolution } => {
                handlers::curves::set_resolution(state, resolution)
            }
            AppCommand::RaiseDegree { by } => handlers::curves::raise_degree(state, by),
            AppCommand::ReduceDegree => handlers::curves::reduce_degree(state),
            AppCommand::ReverseNodes => handlers::curves::reverse_nodes(state),
            AppCommand::SetSpacing { spacing } => handlers::curves::set_spacing(state, spacing),
            AppCommand::ToggleHidden => handlers::curves::toggle_hidden(state),
            AppCommand::ToggleNodes => handlers::curves::toggle_nodes(state),
            AppCommand::ToggleHull => handlers::curves::toggle_hull(state),

            // === Dialoge ===
            AppCommand::SetNodeWeight {
                curve,
                node,
                weight,
            } => handlers::dialog::set_node_weight(state, curve, node, weight)?,
            AppCommand::CloseWeightDialog => handlers::dialog::close_weight_dialog(state),

            // === Datei-I/O ===
            AppCommand::NewCollection => handlers::curves::new_collection(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
