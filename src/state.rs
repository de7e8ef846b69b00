use crate::camera::OrbitCamera;
use crate::data::classify::{self, ClassifyError};
use crate::data::model::BlockModel;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Outcome of the last user action, shown in the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Error(String),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded block model (None until user loads a file).
    pub model: Option<BlockModel>,

    /// Column selected as the block value.
    pub value_column: Option<String>,

    /// Column selected as the extraction cost.
    pub cost_column: Option<String>,

    /// Color markers by profit magnitude instead of the two series colors.
    pub color_by_profit: bool,

    /// Orbit camera for the 3D scene.
    pub camera: OrbitCamera,

    /// Status / error message shown in the UI.
    pub status: Option<Status>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            model: None,
            value_column: None,
            cost_column: None,
            color_by_profit: false,
            camera: OrbitCamera::default(),
            status: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded model, initialise column selections and camera.
    pub fn set_model(&mut self, model: BlockModel) {
        // Default selections: first two columns, matching the order the
        // selectors present them in.
        self.value_column = model.column_names.first().cloned();
        self.cost_column = model
            .column_names
            .get(1)
            .or_else(|| model.column_names.first())
            .cloned();

        self.camera = OrbitCamera::default();
        self.model = Some(model);
        self.status = None;
    }

    /// Run the UPL classification with the current column selections.
    pub fn run_classification(&mut self) {
        let Some(model) = &mut self.model else {
            return;
        };
        let (Some(value_col), Some(cost_col)) =
            (self.value_column.clone(), self.cost_column.clone())
        else {
            return;
        };

        match classify::classify(model, &value_col, &cost_col) {
            Ok(()) => {
                log::info!(
                    "Classified {} blocks (value='{value_col}', cost='{cost_col}')",
                    model.len()
                );
                self.status = Some(Status::Success("UPL computation completed".to_string()));
            }
            Err(err @ ClassifyError::UnknownColumn(_)) => {
                log::error!("Classification rejected: {err}");
                self.status = Some(Status::Error(format!(
                    "Invalid column selection: {err}. Please check your dataset."
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::classify::is_classified;
    use crate::data::model::{AttrValue, Block};

    fn sample_model() -> BlockModel {
        let mut attributes = BTreeMap::new();
        attributes.insert("cost".to_string(), AttrValue::Float(40.0));
        attributes.insert("value".to_string(), AttrValue::Float(100.0));
        BlockModel::from_blocks(vec![Block {
            position: [0.0; 3],
            attributes,
        }])
    }

    #[test]
    fn set_model_defaults_to_the_first_two_columns() {
        let mut state = AppState::default();
        state.set_model(sample_model());
        assert_eq!(state.value_column.as_deref(), Some("cost"));
        assert_eq!(state.cost_column.as_deref(), Some("value"));
        assert_eq!(state.status, None);
    }

    #[test]
    fn run_classification_reports_success() {
        let mut state = AppState::default();
        state.set_model(sample_model());
        state.value_column = Some("value".to_string());
        state.cost_column = Some("cost".to_string());

        state.run_classification();
        assert!(matches!(state.status, Some(Status::Success(_))));
        assert!(is_classified(state.model.as_ref().unwrap()));
    }

    #[test]
    fn stale_selection_surfaces_an_error_and_leaves_the_model_alone() {
        let mut state = AppState::default();
        state.set_model(sample_model());
        state.value_column = Some("vanished".to_string());
        state.cost_column = Some("cost".to_string());

        state.run_classification();
        assert!(matches!(state.status, Some(Status::Error(_))));
        assert!(!is_classified(state.model.as_ref().unwrap()));
    }

    #[test]
    fn run_classification_without_a_model_is_a_no_op() {
        let mut state = AppState::default();
        state.run_classification();
        assert_eq!(state.status, None);
    }
}
