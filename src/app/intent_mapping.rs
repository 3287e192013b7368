//! Mapping von UI-Intents auf mutierende App-Commands.

use super::tools::PointerEvent;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Commands, die Kurven einfügen, entfernen oder ersetzen, werden von
/// `ResetTool` und `CloseWeightDialog` eingeleitet, damit weder Werkzeug noch
/// Gewichts-Dialog einen veralteten Kurvenindex halten.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => vec![AppCommand::ToolPointer {
            event: PointerEvent::Press(pos),
        }],
        AppIntent::PointerMoved { pos } => vec![AppCommand::ToolPointer {
            event: PointerEvent::Move(pos),
        }],
        AppIntent::PointerReleased { pos } => vec![AppCommand::ToolPointer {
            event: PointerEvent::Release(pos),
        }],
        AppIntent::ToolToggled { control, checked } => {
            if checked {
                vec![AppCommand::SetTool { control }]
            } else if state.toolbar.is_checked(control) {
                vec![AppCommand::ResetTool]
            } else {
                vec![]
            }
        }

        AppIntent::CreateCurveRequested { kind } => {
            changing_curves(AppCommand::CreateCurve { kind })
        }
        AppIntent::SelectCurveRequested { index: Some(index) } => {
            vec![AppCommand::SelectCurve { index }]
        }
        AppIntent::SelectCurveRequested { index: None } => vec![AppCommand::ClearSelection],
        AppIntent::RemoveSelectedCurveRequested => {
            changing_curves(AppCommand::RemoveSelectedCurve)
        }

        AppIntent::TranslateSelectedRequested { delta } => {
            vec![AppCommand::TranslateSelected { delta }]
        }
        AppIntent::ScaleSelectedRequested { factor } => vec![AppCommand::ScaleSelected { factor }],
        AppIntent::RotateSelectedRequested { degrees } => {
            vec![AppCommand::RotateSelected { degrees }]
        }
        AppIntent::ResolutionChanged { resolution } => {
            vec![AppCommand::SetResolution { resolution }]
        }
        AppIntent::RaiseDegreeRequested { by } => vec![AppCommand::RaiseDegree { by }],
        AppIntent::ReduceDegreeRequested => vec![AppCommand::ReduceDegree],
        AppIntent::ReverseNodesRequested => vec![AppCommand::ReverseNodes],
        AppIntent::SpacingChanged { spacing } => vec![AppCommand::SetSpacing { spacing }],

        AppIntent::ToggleHiddenRequested => vec![AppCommand::ToggleHidden],
        AppIntent::ToggleNodesRequested => vec![AppCommand::ToggleNodes],
        AppIntent::ToggleHullRequested => vec![AppCommand::ToggleHull],

        AppIntent::WeightDialogConfirmed { weight } => match state.ui.weight_dialog.target() {
            Some((curve, node)) => vec![
                AppCommand::SetNodeWeight {
                    curve,
                    node,
                    weight,
                },
                AppCommand::CloseWeightDialog,
            ],
            None => vec![AppCommand::CloseWeightDialog],
        },
        AppIntent::WeightDialogCancelled => vec![AppCommand::CloseWeightDialog],

        AppIntent::NewCollectionRequested => {
            changing_curves(AppCommand::NewCollection)
        }
        AppIntent::FileSelected { path } => {
            changing_curves(AppCommand::LoadFile { path })
        }
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }
    }
}

/// Stellt einem kurvenverändernden Command die Aufräum-Commands voran.
fn changing_curves(command: AppCommand) -> Vec<AppCommand> {
    vec![AppCommand::ResetTool, AppCommand::CloseWeightDialog, command]
}
