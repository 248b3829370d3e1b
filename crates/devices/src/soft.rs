//! In-memory controller for tests and hosts without hardware.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{ControllerProvider, DeviceError, DriveMode, PinProvider, PinValue, SharingMode};

/// Latched state of one pin.
#[derive(Debug, Clone, Copy, Default)]
struct PinState {
    value: PinValue,
    drive_mode: DriveMode,
    exclusive: bool,
    holders: usize,
}

/// A [`ControllerProvider`] backed by plain memory.
///
/// Pin levels are latched: a write stores the level and a read returns
/// the last stored one. Exclusive opens are tracked, so double-opening a
/// pin behaves the way a hardware provider would.
///
/// # Example
///
/// ```
/// use tinyrt_devices::{ControllerProvider, PinValue, SharingMode, SoftController};
///
/// let controller = SoftController::new(16);
/// let mut pin = controller.open_pin(0, SharingMode::Exclusive).unwrap();
/// pin.write(PinValue::High).unwrap();
/// assert_eq!(pin.read().unwrap(), PinValue::High);
/// ```
pub struct SoftController {
    pins: Arc<Mutex<Vec<PinState>>>,
}

impl SoftController {
    /// Creates a controller with `pin_count` pins, all low, all inputs.
    pub fn new(pin_count: usize) -> Self {
        SoftController {
            pins: Arc::new(Mutex::new(vec![PinState::default(); pin_count])),
        }
    }
}

/// Drive modes the soft controller can model (no open-drain/open-source
/// electronics in memory).
fn soft_supports(mode: DriveMode) -> bool {
    matches!(
        mode,
        DriveMode::Input | DriveMode::Output | DriveMode::InputPullUp | DriveMode::InputPullDown
    )
}

fn lock(pins: &Mutex<Vec<PinState>>) -> MutexGuard<'_, Vec<PinState>> {
    // Pin state stays consistent even if a holder panicked mid-test.
    pins.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ControllerProvider for SoftController {
    fn pin_count(&self) -> usize {
        lock(&self.pins).len()
    }

    fn open_pin(
        &self,
        pin_number: usize,
        sharing_mode: SharingMode,
    ) -> Result<Box<dyn PinProvider>, DeviceError> {
        let mut pins = lock(&self.pins);
        let state = pins
            .get_mut(pin_number)
            .ok_or(DeviceError::PinUnavailable)?;
        if state.exclusive || (sharing_mode == SharingMode::Exclusive && state.holders > 0) {
            return Err(DeviceError::PinUnavailable);
        }
        state.holders += 1;
        state.exclusive = sharing_mode == SharingMode::Exclusive;
        Ok(Box::new(SoftPin {
            pin_number,
            sharing_mode,
            pins: Arc::clone(&self.pins),
        }))
    }
}

/// An open pin on a [`SoftController`]. Dropping it releases the claim.
pub struct SoftPin {
    pin_number: usize,
    sharing_mode: SharingMode,
    pins: Arc<Mutex<Vec<PinState>>>,
}

impl PinProvider for SoftPin {
    fn pin_number(&self) -> usize {
        self.pin_number
    }

    fn read(&self) -> Result<PinValue, DeviceError> {
        Ok(lock(&self.pins)[self.pin_number].value)
    }

    fn write(&mut self, value: PinValue) -> Result<(), DeviceError> {
        if self.sharing_mode == SharingMode::SharedReadOnly {
            return Err(DeviceError::PinNotOpen);
        }
        lock(&self.pins)[self.pin_number].value = value;
        Ok(())
    }

    fn drive_mode(&self) -> DriveMode {
        lock(&self.pins)[self.pin_number].drive_mode
    }

    fn set_drive_mode(&mut self, mode: DriveMode) -> Result<(), DeviceError> {
        if self.sharing_mode == SharingMode::SharedReadOnly {
            return Err(DeviceError::PinNotOpen);
        }
        if !soft_supports(mode) {
            return Err(DeviceError::UnsupportedDriveMode);
        }
        lock(&self.pins)[self.pin_number].drive_mode = mode;
        Ok(())
    }

    fn is_drive_mode_supported(&self, mode: DriveMode) -> bool {
        soft_supports(mode)
    }

    fn sharing_mode(&self) -> SharingMode {
        self.sharing_mode
    }
}

impl Drop for SoftPin {
    fn drop(&mut self) {
        let mut pins = lock(&self.pins);
        let state = &mut pins[self.pin_number];
        state.holders -= 1;
        if self.sharing_mode == SharingMode::Exclusive {
            state.exclusive = false;
        }
    }
}
