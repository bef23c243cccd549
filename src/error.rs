//! Error types for setup.
//!
//! The simulation and presenter never fail; everything here happens before the
//! frame loop starts and is treated as fatal by the binaries.

use std::fmt;

/// Errors that can occur while loading or validating settings.
#[derive(Debug)]
pub enum SettingsError {
    /// Failed to read the settings file.
    Io(std::io::Error),
    /// Settings file is not valid JSON for [`crate::Settings`].
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with.
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl SettingsError {
    pub fn invalid(field: &'static str, reason: &'static str) -> Self {
        SettingsError::Invalid { field, reason }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            SettingsError::Invalid { field, reason } => {
                write!(f, "Invalid setting `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Setup failures of the WebGPU canvas surface.
#[derive(Debug)]
pub enum GpuError {
    /// The canvas could not be turned into a wgpu surface.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// The browser offered no adapter able to present to the canvas.
    NoAdapter,
    /// The adapter refused to open a device with WebGL2-level limits.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "canvas cannot be drawn with WebGPU: {}", e),
            GpuError::NoAdapter => write!(f, "no WebGPU adapter can present to the canvas"),
            GpuError::DeviceCreation(e) => write!(f, "WebGPU device request rejected: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let GpuError::SurfaceCreation(e) = self {
            return Some(e);
        }
        if let GpuError::DeviceCreation(e) = self {
            return Some(e);
        }
        None
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}
