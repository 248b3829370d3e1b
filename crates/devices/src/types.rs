//! Value types shared by the provider contracts.

use crate::DeviceError;

/// Logic level of a pin, the unit of byte-level I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinValue {
    /// Logic low (0).
    #[default]
    Low,
    /// Logic high (1).
    High,
}

impl From<PinValue> for u8 {
    fn from(value: PinValue) -> u8 {
        match value {
            PinValue::Low => 0,
            PinValue::High => 1,
        }
    }
}

impl TryFrom<u8> for PinValue {
    type Error = DeviceError;

    fn try_from(value: u8) -> Result<PinValue, DeviceError> {
        match value {
            0 => Ok(PinValue::Low),
            1 => Ok(PinValue::High),
            _ => Err(DeviceError::InvalidPinValue),
        }
    }
}

/// How a pin may be shared between holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SharingMode {
    /// The pin is held by a single owner.
    #[default]
    Exclusive,
    /// Any number of holders, reads only.
    SharedReadOnly,
}

/// Electrical configuration of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriveMode {
    /// High-impedance input.
    #[default]
    Input,
    /// Push-pull output.
    Output,
    /// Input with the pull-up resistor engaged.
    InputPullUp,
    /// Input with the pull-down resistor engaged.
    InputPullDown,
    /// Open-drain output.
    OutputOpenDrain,
    /// Open-drain output with the pull-up resistor engaged.
    OutputOpenDrainPullUp,
    /// Open-source output.
    OutputOpenSource,
    /// Open-source output with the pull-down resistor engaged.
    OutputOpenSourcePullDown,
}
