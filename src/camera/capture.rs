use super::Camera;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("camera is not available")]
    Unavailable,
    #[error("camera access denied")]
    PermissionDenied,
}

/// Camera stand-in that "streams" at a fixed resolution
#[derive(Debug, Clone)]
pub struct SimulatedCamera {
    width: u32,
    height: u32,
    open: bool,
    failure: Option<CameraError>,
}

impl SimulatedCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            open: false,
            failure: None,
        }
    }

    /// A camera whose `open` always fails with `error`
    pub fn failing(error: CameraError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for SimulatedCamera {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl Camera for SimulatedCamera {
    fn open(&mut self) -> Result<(u32, u32), CameraError> {
        if let Some(err) = &self.failure {
            tracing::error!(error = %err, "error accessing camera");
            return Err(err.clone());
        }
        self.open = true;
        tracing::info!(width = self.width, height = self.height, "camera streaming");
        Ok(self.resolution())
    }

    fn close(&mut self) {
        if self.open {
            tracing::info!("camera stopped");
        }
        self.open = false;
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
