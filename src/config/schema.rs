use std::fmt;

use serde::Serialize;

/// Upscaling algorithm applied by the renderer
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpscaleMethod {
    Fsr,
    Nis,
}

impl UpscaleMethod {
    /// Case-insensitive lookup, `None` for anything but `fsr` or `nis`
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "fsr" => Some(Self::Fsr),
            "nis" => Some(Self::Nis),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fsr => "FSR",
            Self::Nis => "NIS",
        }
    }
}

impl fmt::Display for UpscaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upscaling section of the configuration
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpscaleSettings {
    pub enabled: bool,
    pub method: UpscaleMethod,
    /// Ratio of rendered resolution to display resolution
    pub render_scale: f32,
    pub sharpness: f32,
    pub radius: f32,
    /// Bias texture LOD selection to compensate for the lower render resolution
    pub apply_mip_bias: bool,
}

impl UpscaleSettings {
    pub const DEFAULT: Self = Self {
        enabled: false,
        method: UpscaleMethod::Fsr,
        render_scale: 1.0,
        sharpness: 0.7,
        radius: 0.6,
        apply_mip_bias: true,
    };
}

impl Default for UpscaleSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete configuration snapshot
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub upscaling: UpscaleSettings,
    pub debug_mode: bool,
}

impl Settings {
    pub const DEFAULT: Self = Self {
        upscaling: UpscaleSettings::DEFAULT,
        debug_mode: false,
    };
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
