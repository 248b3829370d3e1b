//! Capability contracts for pin-level I/O.
//!
//! Consumers depend on these traits only; concrete providers (a hardware
//! binding, or [`SoftController`](crate::SoftController) in tests) are
//! injected through [`AggregateProvider`].

use std::sync::Arc;

use crate::{DeviceError, DriveMode, PinValue, SharingMode};

/// An open pin.
///
/// The pin stays claimed for as long as the value lives; dropping it
/// releases the claim.
pub trait PinProvider: Send + Sync {
    /// The pin number this provider was opened on.
    fn pin_number(&self) -> usize;

    /// Reads the current logic level.
    fn read(&self) -> Result<PinValue, DeviceError>;

    /// Latches a logic level onto the pin.
    fn write(&mut self, value: PinValue) -> Result<(), DeviceError>;

    /// The currently configured drive mode.
    fn drive_mode(&self) -> DriveMode;

    /// Reconfigures the drive mode.
    ///
    /// # Errors
    ///
    /// [`DeviceError::UnsupportedDriveMode`] when the provider cannot
    /// drive the pin that way.
    fn set_drive_mode(&mut self, mode: DriveMode) -> Result<(), DeviceError>;

    /// Whether the provider can drive the pin in the given mode.
    fn is_drive_mode_supported(&self, mode: DriveMode) -> bool;

    /// The sharing mode the pin was opened with.
    fn sharing_mode(&self) -> SharingMode;
}

/// A pin controller: a numbered bank of pins that can be opened.
pub trait ControllerProvider: Send + Sync {
    /// Number of pins the controller exposes, numbered `0..pin_count()`.
    fn pin_count(&self) -> usize;

    /// Opens a pin.
    ///
    /// # Errors
    ///
    /// [`DeviceError::PinUnavailable`] when the pin number is out of
    /// range or the pin cannot be claimed in the requested sharing mode.
    fn open_pin(
        &self,
        pin_number: usize,
        sharing_mode: SharingMode,
    ) -> Result<Box<dyn PinProvider>, DeviceError>;
}

/// Bundle of the low-level device providers handed to consumers.
///
/// The runtime constructs one aggregate at startup and passes it down;
/// nothing in this crate holds a global instance.
pub struct AggregateProvider {
    controller: Arc<dyn ControllerProvider>,
}

impl AggregateProvider {
    /// Bundles a controller provider.
    pub fn new(controller: Arc<dyn ControllerProvider>) -> Self {
        AggregateProvider { controller }
    }

    /// The controller provider.
    pub fn controller(&self) -> &dyn ControllerProvider {
        self.controller.as_ref()
    }
}
