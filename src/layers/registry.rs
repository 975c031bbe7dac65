//! Layer manifests and per-pose visibility planning
//!
//! A manifest binds graphical layer identifiers to export specifications,
//! one `<layer-id> = <spec>` line per layer. Blank lines and lines starting
//! with `#` are ignored. The registry indexes bindings by finger so that a
//! pose translates directly into the layers to show and hide.

use crate::hand::{Finger, Pose};
use crate::io::configuration::{MANIFEST_ASSIGNMENT, MANIFEST_COMMENT_PREFIX};
use crate::io::error::{PoseError, Result, WithContext};
use crate::layers::spec::{ExportSpec, parse_export_specs};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::debug;

/// A layer and the finger states it depicts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    /// Identifier of the layer in the source document
    pub id: String,
    /// Finger states this layer is exported for
    pub specs: Vec<ExportSpec>,
}

/// One layer bound to one state of a finger
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerBinding {
    /// Identifier of the bound layer
    pub layer_id: String,
    /// Finger and state in which the layer is shown
    pub spec: ExportSpec,
}

/// Layers to show and hide for a single pose
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityPlan {
    /// Layers depicting a state the pose holds
    pub show: Vec<String>,
    /// Layers depicting a state the pose does not hold
    pub hide: Vec<String>,
}

impl VisibilityPlan {
    /// Final visibility of a layer; a hide request wins over a show request
    pub fn is_visible(&self, layer_id: &str) -> bool {
        self.show.iter().any(|id| id == layer_id) && !self.hide.iter().any(|id| id == layer_id)
    }
}

/// Layers indexed by the finger they depict
#[derive(Clone, Debug, Default)]
pub struct LayerRegistry {
    layers: Vec<Layer>,
    bindings: BTreeMap<Finger, Vec<LayerBinding>>,
}

impl LayerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a layer under every finger its specs name
    pub fn add_layer(&mut self, layer: Layer) {
        for spec in &layer.specs {
            self.bindings
                .entry(spec.finger)
                .or_default()
                .push(LayerBinding {
                    layer_id: layer.id.clone(),
                    spec: *spec,
                });
        }
        self.layers.push(layer);
    }

    /// Parse a manifest
    ///
    /// # Errors
    ///
    /// Returns `InvalidManifestLine` for a line without `=`, an empty or
    /// duplicate layer identifier, and `InvalidSpecification` carrying the
    /// line number for a malformed spec.
    pub fn from_manifest(manifest: &str) -> Result<Self> {
        let mut registry = Self::new();
        let mut seen_ids = HashSet::new();

        for (offset, raw_line) in manifest.lines().enumerate() {
            let line = offset + 1;
            let trimmed = raw_line.trim();
            if trimmed.is_empty() || trimmed.starts_with(MANIFEST_COMMENT_PREFIX) {
                continue;
            }

            let Some((id, spec)) = trimmed.split_once(MANIFEST_ASSIGNMENT) else {
                return Err(PoseError::InvalidManifestLine {
                    line,
                    reason: format!("expected '<layer-id> {MANIFEST_ASSIGNMENT} <spec>'"),
                });
            };

            let id = id.trim();
            if id.is_empty() {
                return Err(PoseError::InvalidManifestLine {
                    line,
                    reason: "layer identifier is empty".to_string(),
                });
            }
            if !seen_ids.insert(id.to_string()) {
                return Err(PoseError::InvalidManifestLine {
                    line,
                    reason: format!("layer '{id}' is declared more than once"),
                });
            }

            let specs = parse_export_specs(spec).with_line(line)?;
            if specs.is_empty() {
                debug!(layer = id, "Skipping layer without exports");
                continue;
            }

            debug!(layer = id, exports = specs.len(), "Found valid layer");
            registry.add_layer(Layer {
                id: id.to_string(),
                specs,
            });
        }

        Ok(registry)
    }

    /// Read and parse a manifest file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, or any error of
    /// [`LayerRegistry::from_manifest`].
    pub fn load(path: &Path) -> Result<Self> {
        let manifest = std::fs::read_to_string(path).with_path(path, "read manifest")?;
        Self::from_manifest(&manifest)
    }

    /// Registered layers in manifest order
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layers bound to `finger`, in manifest order
    pub fn bindings(&self, finger: Finger) -> &[LayerBinding] {
        self.bindings.get(&finger).map(Vec::as_slice).unwrap_or_default()
    }

    /// Translate a pose into show and hide instructions
    ///
    /// # Errors
    ///
    /// Returns `UnboundFinger` if a finger of the pose has no bound layer.
    pub fn plan(&self, pose: &Pose) -> Result<VisibilityPlan> {
        let mut plan = VisibilityPlan::default();

        for assignment in pose.assignments() {
            let bindings = self.bindings(assignment.finger);
            if bindings.is_empty() {
                return Err(PoseError::UnboundFinger {
                    finger: assignment.finger,
                });
            }

            for binding in bindings {
                if binding.spec.matches(*assignment) {
                    plan.show.push(binding.layer_id.clone());
                } else {
                    plan.hide.push(binding.layer_id.clone());
                }
            }
        }

        Ok(plan)
    }
}
