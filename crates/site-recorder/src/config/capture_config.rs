use serde::{Deserialize, Serialize};
use site_recorder_core::CaptureSettings;

/// How the browser window is found and captured in OBS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Scene receiving the capture source.
    pub scene_name: String,
    /// Executable name searched for in OBS window descriptors.
    pub process_identifier: String,
    /// OBS input kind.
    pub source_kind: String,
    /// OBS window match priority.
    pub match_priority: String,
    /// Prefix for generated source names.
    pub source_name_prefix: String,
}

impl CaptureConfig {
    /// Core capture settings.
    pub fn to_settings(&self) -> CaptureSettings {
        CaptureSettings {
            scene_name: self.scene_name.clone(),
            process_identifier: self.process_identifier.clone(),
            source_kind: self.source_kind.clone(),
            match_priority: self.match_priority.clone(),
            source_name_prefix: self.source_name_prefix.clone(),
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        let settings = CaptureSettings::default();
        Self {
            scene_name: settings.scene_name,
            process_identifier: settings.process_identifier,
            source_kind: settings.source_kind,
            match_priority: settings.match_priority,
            source_name_prefix: settings.source_name_prefix,
        }
    }
}
