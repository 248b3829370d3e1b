//! Device provider contracts for the tinyrt runtime support library.
//!
//! This crate defines the capability boundary the rest of the runtime
//! programs against for pin-level byte I/O: the [`PinProvider`] and
//! [`ControllerProvider`] traits, the [`AggregateProvider`] bundle that
//! carries a controller into consumers, and an in-memory
//! [`SoftController`] for tests and hosts without hardware. Nothing in
//! this crate performs hardware I/O.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tinyrt_devices::{AggregateProvider, PinValue, SharingMode, SoftController};
//!
//! let controller = Arc::new(SoftController::new(8));
//! let devices = AggregateProvider::new(controller);
//! let mut pin = devices
//!     .controller()
//!     .open_pin(3, SharingMode::Exclusive)
//!     .unwrap();
//! pin.write(PinValue::High).unwrap();
//! assert_eq!(pin.read().unwrap(), PinValue::High);
//! ```

use thiserror::Error;

mod provider;
mod soft;
mod types;

pub use provider::{AggregateProvider, ControllerProvider, PinProvider};
pub use soft::{SoftController, SoftPin};
pub use types::{DriveMode, PinValue, SharingMode};

/// Error type for device provider operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// The pin does not exist or is already held exclusively.
    #[error("PIN_UNAVAILABLE")]
    PinUnavailable,
    /// The pin is not open for this operation (writes and reconfiguration
    /// need an exclusive open).
    #[error("PIN_NOT_OPEN")]
    PinNotOpen,
    /// The provider does not support the requested drive mode.
    #[error("UNSUPPORTED_DRIVE_MODE")]
    UnsupportedDriveMode,
    /// The provider has been disposed.
    #[error("DISPOSED")]
    Disposed,
    /// The byte is not a valid pin value (only 0 and 1 are).
    #[error("INVALID_PIN_VALUE")]
    InvalidPinValue,
}
