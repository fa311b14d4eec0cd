//! Core Types für Sensor-Blöcke
//!
//! Datenstrukturen ohne Hardware-Dependencies: Rohwerte, Pins,
//! Richtungen und Gesten.

use crate::error::SensorError;

/// Unskalierter Analogwert eines Eingangs, immer in [0, 1023]
///
/// Wird vom [`AnalogSampler`](crate::traits::AnalogSampler) geliefert und
/// sofort klassifiziert. Der Konstruktor garantiert den Wertebereich,
/// daher sind alle Klassifizierer auf `RawSample` total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RawSample(u16);

impl RawSample {
    /// Größter gültiger Rohwert (10-Bit ADC)
    pub const MAX: u16 = 1023;

    /// Erstellt einen Rohwert, Werte außerhalb von [0, 1023] sind ein Fehler
    pub const fn new(value: i32) -> Result<Self, SensorError> {
        if value < 0 || value > Self::MAX as i32 {
            return Err(SensorError::OutOfDomain(value));
        }
        Ok(Self(value as u16))
    }

    /// Erstellt einen Rohwert und klemmt auf [0, 1023]
    pub const fn saturating(value: i32) -> Self {
        if value < 0 {
            Self(0)
        } else if value > Self::MAX as i32 {
            Self(Self::MAX)
        } else {
            Self(value as u16)
        }
    }

    /// Skaliert einen 12-Bit ADC-Wert (0-4095) auf den 10-Bit Bereich
    pub const fn from_adc12(raw: u16) -> Self {
        let scaled = raw >> 2;
        if scaled > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(scaled)
        }
    }

    pub const fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<i32> for RawSample {
    type Error = SensorError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RawSample> for u16 {
    fn from(sample: RawSample) -> Self {
        sample.0
    }
}

// ============================================================================
// Pins
// ============================================================================

/// Analoge Sensor-Eingänge des Shields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitialPin {
    P0,
    P1,
    P2,
}

/// Alle Edge-Pins des Boards (digital und analog nutzbar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgePin {
    P0,
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
    P9,
    P10,
    P11,
    P12,
    P13,
    P14,
    P15,
    P16,
    P19,
    P20,
}

impl EdgePin {
    /// Pin-Nummer wie auf dem Board beschriftet
    pub const fn number(self) -> u8 {
        match self {
            EdgePin::P0 => 0,
            EdgePin::P1 => 1,
            EdgePin::P2 => 2,
            EdgePin::P3 => 3,
            EdgePin::P4 => 4,
            EdgePin::P5 => 5,
            EdgePin::P6 => 6,
            EdgePin::P7 => 7,
            EdgePin::P8 => 8,
            EdgePin::P9 => 9,
            EdgePin::P10 => 10,
            EdgePin::P11 => 11,
            EdgePin::P12 => 12,
            EdgePin::P13 => 13,
            EdgePin::P14 => 14,
            EdgePin::P15 => 15,
            EdgePin::P16 => 16,
            EdgePin::P19 => 19,
            EdgePin::P20 => 20,
        }
    }
}

impl From<InitialPin> for EdgePin {
    fn from(pin: InitialPin) -> Self {
        match pin {
            InitialPin::P0 => EdgePin::P0,
            InitialPin::P1 => EdgePin::P1,
            InitialPin::P2 => EdgePin::P2,
        }
    }
}

/// Pins, auf die der Audio-Ausgang gelegt werden kann
///
/// `P8` ist der interne Lautsprecher-Anschluss des Shields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioOutputPin {
    #[default]
    P8,
    P0,
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P9,
    P10,
    P11,
    P12,
    P13,
    P14,
    P15,
    P16,
    P19,
    P20,
}

impl From<AudioOutputPin> for EdgePin {
    fn from(pin: AudioOutputPin) -> Self {
        match pin {
            AudioOutputPin::P8 => EdgePin::P8,
            AudioOutputPin::P0 => EdgePin::P0,
            AudioOutputPin::P1 => EdgePin::P1,
            AudioOutputPin::P2 => EdgePin::P2,
            AudioOutputPin::P3 => EdgePin::P3,
            AudioOutputPin::P4 => EdgePin::P4,
            AudioOutputPin::P5 => EdgePin::P5,
            AudioOutputPin::P6 => EdgePin::P6,
            AudioOutputPin::P7 => EdgePin::P7,
            AudioOutputPin::P9 => EdgePin::P9,
            AudioOutputPin::P10 => EdgePin::P10,
            AudioOutputPin::P11 => EdgePin::P11,
            AudioOutputPin::P12 => EdgePin::P12,
            AudioOutputPin::P13 => EdgePin::P13,
            AudioOutputPin::P14 => EdgePin::P14,
            AudioOutputPin::P15 => EdgePin::P15,
            AudioOutputPin::P16 => EdgePin::P16,
            AudioOutputPin::P19 => EdgePin::P19,
            AudioOutputPin::P20 => EdgePin::P20,
        }
    }
}

/// Servo-Ausgänge des Shields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoPin {
    P13,
    P14,
    P15,
}

impl ServoPin {
    pub const ALL: [ServoPin; 3] = [ServoPin::P13, ServoPin::P14, ServoPin::P15];

    /// Index in Arrays mit einem Eintrag pro Servo-Ausgang
    pub const fn index(self) -> usize {
        match self {
            ServoPin::P13 => 0,
            ServoPin::P14 => 1,
            ServoPin::P15 => 2,
        }
    }
}

impl From<ServoPin> for EdgePin {
    fn from(pin: ServoPin) -> Self {
        match pin {
            ServoPin::P13 => EdgePin::P13,
            ServoPin::P14 => EdgePin::P14,
            ServoPin::P15 => EdgePin::P15,
        }
    }
}

/// Pull-Widerstand eines Digital-Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinPull {
    Up,
    Down,
    None,
}

// ============================================================================
// Block-Parameter
// ============================================================================

/// Drehrichtung eines Continuous-Rotation-Servos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoDirection {
    Clockwise,
    Counterclockwise,
}

impl ServoDirection {
    /// Vorzeichen für die Winkelberechnung: im Uhrzeigersinn → -1
    pub const fn sign(self) -> i32 {
        match self {
            ServoDirection::Clockwise => -1,
            ServoDirection::Counterclockwise => 1,
        }
    }
}

/// Ein/Aus-Status für LED- und Audio-Blöcke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperationStatus {
    TurnOn,
    TurnOff,
}

impl OperationStatus {
    /// Pegel, der auf den Pin geschrieben wird
    pub const fn is_high(self) -> bool {
        matches!(self, OperationStatus::TurnOn)
    }
}

/// Einheit für den Potentiometer-Block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PotentiometerUnit {
    /// Winkel in Grad (0-300)
    Angle,
    /// Rohwert (0-1023)
    Number,
}

// ============================================================================
// Gesten
// ============================================================================

/// Gesten, wie sie im Block angeboten werden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorGesture {
    None,
    Right,
    Left,
    Up,
    Down,
    Forward,
    Backward,
    Clockwise,
    Anticlockwise,
    Wave,
}

/// Gesten-Codes des Gesture-Sensor-Treibers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GroveGesture {
    None = 0,
    Right = 1,
    Left = 2,
    Up = 3,
    Down = 4,
    Forward = 5,
    Backward = 6,
    Clockwise = 7,
    Anticlockwise = 8,
    Wave = 9,
}

impl GroveGesture {
    /// Numerischer Code, den der Treiber erwartet
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<SensorGesture> for GroveGesture {
    fn from(gesture: SensorGesture) -> Self {
        match gesture {
            SensorGesture::None => GroveGesture::None,
            SensorGesture::Right => GroveGesture::Right,
            SensorGesture::Left => GroveGesture::Left,
            SensorGesture::Up => GroveGesture::Up,
            SensorGesture::Down => GroveGesture::Down,
            SensorGesture::Forward => GroveGesture::Forward,
            SensorGesture::Backward => GroveGesture::Backward,
            SensorGesture::Clockwise => GroveGesture::Clockwise,
            SensorGesture::Anticlockwise => GroveGesture::Anticlockwise,
            SensorGesture::Wave => GroveGesture::Wave,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for RawSample {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "RawSample({})", self.0)
    }
}
