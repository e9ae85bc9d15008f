pub mod capture;

pub use capture::{CameraError, SimulatedCamera};

/// Video input the trainer switches on and off
pub trait Camera {
    /// Starts streaming; returns the actual resolution
    fn open(&mut self) -> Result<(u32, u32), CameraError>;
    /// Stops streaming. Closing a closed camera is a no-op.
    fn close(&mut self);
    fn is_open(&self) -> bool;
}
