//! Export session: the state behind the layer-selection dialog.
//!
//! Built from the viewer's bounds and layer list when the dialog opens and
//! dropped when it closes. Subset layers get their file stem prefixed with
//! the parent data layer's label and inherit the parent's default
//! isosurface level.

use crate::worker::{self, CancelToken, ExportJob, ExportPlan};
use isoexport_core::{FormatSelection, GridBounds, LayerColor, VolumeLayer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Default smoothing strength in voxels.
pub const DEFAULT_SMOOTHING_SIGMA: f64 = 1.0;

/// One row of the selection dialog.
#[derive(Clone)]
pub struct ExportEntry {
    /// Output file stem (`<parent>_<label>` for subsets).
    pub stem: String,
    /// Isosurface level to contour at.
    pub level: f64,
    /// Display color, carried into OBJ materials.
    pub color: LayerColor,
    /// Whether the row's checkbox is ticked.
    pub included: bool,
    /// The layer to resample.
    pub source: Arc<dyn VolumeLayer>,
}

/// State for one opening of the export dialog.
pub struct ExportSession {
    bounds: GridBounds,
    formats: FormatSelection,
    smoothing_sigma: f64,
    save_path: Option<PathBuf>,
    entries: Vec<ExportEntry>,
}

impl ExportSession {
    /// Enumerate the viewer's layers into export entries.
    ///
    /// Every layer starts included. A subset layer's default level comes
    /// from its parent data layer's range minimum; if the parent is not in
    /// the list the subset falls back to its own range.
    pub fn from_layers(bounds: GridBounds, layers: &[Arc<dyn VolumeLayer>]) -> Self {
        let mut entries = Vec::with_capacity(layers.len());
        for layer in layers {
            let (stem, level) = match layer.parent_label() {
                Some(parent) => {
                    let level = layers
                        .iter()
                        .find(|candidate| candidate.label() == parent)
                        .map(|parent_layer| parent_layer.value_range().min)
                        .unwrap_or_else(|| layer.value_range().min);
                    (format!("{}_{}", parent, layer.label()), level)
                }
                None => (layer.label(), layer.value_range().min),
            };

            entries.push(ExportEntry {
                stem,
                level,
                color: layer.color(),
                included: true,
                source: Arc::clone(layer),
            });
        }

        Self {
            bounds,
            formats: FormatSelection::default(),
            smoothing_sigma: DEFAULT_SMOOTHING_SIGMA,
            save_path: None,
            entries,
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn entries(&self) -> &[ExportEntry] {
        &self.entries
    }

    pub fn formats(&self) -> FormatSelection {
        self.formats
    }

    pub fn set_formats(&mut self, formats: FormatSelection) {
        self.formats = formats;
    }

    pub fn set_stl(&mut self, enabled: bool) {
        self.formats.stl = enabled;
    }

    pub fn set_obj(&mut self, enabled: bool) {
        self.formats.obj = enabled;
    }

    pub fn smoothing_sigma(&self) -> f64 {
        self.smoothing_sigma
    }

    pub fn set_smoothing_sigma(&mut self, sigma: f64) {
        self.smoothing_sigma = sigma;
    }

    pub fn save_path(&self) -> Option<&PathBuf> {
        self.save_path.as_ref()
    }

    pub fn set_save_path(&mut self, path: Option<PathBuf>) {
        self.save_path = path;
    }

    /// Tick or untick an entry's checkbox.
    pub fn set_included(&mut self, index: usize, included: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.included = included;
        }
    }

    /// Update an entry's isosurface level, only when it actually changed.
    pub fn update_level(&mut self, index: usize, level: f64) {
        if let Some(entry) = self.entries.get_mut(index) {
            if entry.level != level {
                entry.level = level;
            }
        }
    }

    /// The entries whose checkboxes are ticked.
    pub fn selected_entries(&self) -> Vec<ExportEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.included)
            .cloned()
            .collect()
    }

    /// Dialog-title fragment for the chosen formats ("STL and OBJ " etc.).
    pub fn describe_formats(&self) -> String {
        self.formats.describe()
    }

    /// Start the background export of the selected entries.
    ///
    /// Returns `None` when no destination directory was chosen (the
    /// cancelled-folder-prompt case), a silent no-op with nothing written.
    pub fn start(&self) -> Option<ExportJob> {
        self.start_with_cancel(CancelToken::new())
    }

    /// Like [`start`](Self::start) with a caller-supplied stop flag.
    pub fn start_with_cancel(&self, cancel: CancelToken) -> Option<ExportJob> {
        let directory = self.save_path.clone()?;
        let entries = self.selected_entries();
        info!(
            "Starting export of {} layers to {}",
            entries.len(),
            directory.display()
        );

        Some(worker::spawn_with_cancel(
            ExportPlan {
                entries,
                bounds: self.bounds,
                formats: self.formats,
                smoothing_sigma: self.smoothing_sigma,
                directory,
            },
            cancel,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isoexport_core::{ExportError, Result, ScalarField, ValueRange};

    struct StubLayer {
        label: String,
        parent: Option<String>,
        range: ValueRange,
    }

    impl StubLayer {
        fn data(label: &str, min: f64, max: f64) -> Arc<dyn VolumeLayer> {
            Arc::new(Self {
                label: label.to_string(),
                parent: None,
                range: ValueRange::new(min, max),
            })
        }

        fn subset(label: &str, parent: &str) -> Arc<dyn VolumeLayer> {
            Arc::new(Self {
                label: label.to_string(),
                parent: Some(parent.to_string()),
                range: ValueRange::new(-999.0, 999.0),
            })
        }
    }

    impl VolumeLayer for StubLayer {
        fn label(&self) -> String {
            self.label.clone()
        }

        fn value_range(&self) -> ValueRange {
            self.range
        }

        fn color(&self) -> LayerColor {
            LayerColor::default()
        }

        fn parent_label(&self) -> Option<String> {
            self.parent.clone()
        }

        fn attribute_buffer(&self, _bounds: &GridBounds) -> Result<ScalarField> {
            Err(ExportError::Resample {
                layer: self.label.clone(),
                reason: "stub".to_string(),
            })
        }
    }

    fn bounds() -> GridBounds {
        GridBounds::cube(0.0, 16.0, 16)
    }

    #[test]
    fn subset_entries_derive_stem_and_level_from_parent() {
        let layers = vec![
            StubLayer::data("perseus", 2.5, 80.0),
            StubLayer::subset("core", "perseus"),
        ];
        let session = ExportSession::from_layers(bounds(), &layers);

        let entries = session.entries();
        assert_eq!(entries[0].stem, "perseus");
        assert_eq!(entries[0].level, 2.5);
        assert_eq!(entries[1].stem, "perseus_core");
        assert_eq!(entries[1].level, 2.5);
    }

    #[test]
    fn orphan_subset_falls_back_to_own_range() {
        let layers = vec![StubLayer::subset("blob", "missing")];
        let session = ExportSession::from_layers(bounds(), &layers);
        assert_eq!(session.entries()[0].stem, "missing_blob");
        assert_eq!(session.entries()[0].level, -999.0);
    }

    #[test]
    fn selection_filter_follows_checkboxes() {
        let layers = vec![
            StubLayer::data("a", 0.0, 1.0),
            StubLayer::data("b", 0.0, 1.0),
            StubLayer::data("c", 0.0, 1.0),
        ];
        let mut session = ExportSession::from_layers(bounds(), &layers);
        assert_eq!(session.selected_entries().len(), 3);

        session.set_included(1, false);
        let selected = session.selected_entries();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].stem, "a");
        assert_eq!(selected[1].stem, "c");
    }

    #[test]
    fn update_level_changes_only_the_target_entry() {
        let layers = vec![
            StubLayer::data("a", 0.0, 1.0),
            StubLayer::data("b", 0.0, 1.0),
        ];
        let mut session = ExportSession::from_layers(bounds(), &layers);
        session.update_level(0, 7.0);
        assert_eq!(session.entries()[0].level, 7.0);
        assert_eq!(session.entries()[1].level, 0.0);
    }

    #[test]
    fn start_without_save_path_is_a_no_op() {
        let layers = vec![StubLayer::data("a", 0.0, 1.0)];
        let session = ExportSession::from_layers(bounds(), &layers);
        assert!(session.save_path().is_none());
        assert!(session.start().is_none());
    }

    #[test]
    fn format_toggles_feed_the_description() {
        let mut session = ExportSession::from_layers(bounds(), &[]);
        assert_eq!(session.describe_formats(), "STL ");

        session.set_obj(true);
        assert_eq!(session.describe_formats(), "STL and OBJ ");

        session.set_stl(false);
        assert_eq!(session.describe_formats(), "OBJ ");
    }
}
