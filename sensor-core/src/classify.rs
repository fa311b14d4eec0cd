//! Bereichs-Klassifizierung für Feuchte-, Licht- und Schall-Sensoren
//!
//! Jeder Klassifizierer teilt [0, 1023] lückenlos in Bänder auf. Die
//! Obergrenze eines Bandes gehört jeweils noch zu diesem Band.

use crate::error::SensorError;
use crate::sampling::PeakHold;
use crate::traits::AnalogSampler;
use crate::types::{InitialPin, RawSample};

/// Obergrenzen der Feuchte-Bänder (trocken, nass)
pub const MOISTURE_BOUNDS: [u16; 2] = [300, 600];

/// Obergrenzen der Licht-Bänder (sehr hell, hell, Schatten, dunkel)
pub const LIGHT_BOUNDS: [u16; 4] = [102, 409, 613, 920];

/// Obergrenzen der Schall-Bänder (leise, mittel)
pub const SOUND_BOUNDS: [u16; 2] = [114, 265];

/// Bodenfeuchte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoistureRange {
    Dry,
    Wet,
    Saturated,
}

impl MoistureRange {
    pub const fn from_sample(sample: RawSample) -> Self {
        let value = sample.value();
        if value <= MOISTURE_BOUNDS[0] {
            MoistureRange::Dry
        } else if value <= MOISTURE_BOUNDS[1] {
            MoistureRange::Wet
        } else {
            MoistureRange::Saturated
        }
    }

    /// Klassifiziert einen ungeprüften Wert
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use sensor_core::{MoistureRange, SensorError};
    /// assert_eq!(MoistureRange::classify(300), Ok(MoistureRange::Dry));
    /// assert_eq!(MoistureRange::classify(301), Ok(MoistureRange::Wet));
    /// assert_eq!(MoistureRange::classify(2000), Err(SensorError::OutOfDomain(2000)));
    /// ```
    pub fn classify(value: i32) -> Result<Self, SensorError> {
        RawSample::new(value).map(Self::from_sample)
    }
}

/// Umgebungshelligkeit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightRange {
    VeryClear,
    Clear,
    Shadow,
    Dark,
    VeryDark,
}

impl LightRange {
    pub const fn from_sample(sample: RawSample) -> Self {
        let value = sample.value();
        if value <= LIGHT_BOUNDS[0] {
            LightRange::VeryClear
        } else if value <= LIGHT_BOUNDS[1] {
            LightRange::Clear
        } else if value <= LIGHT_BOUNDS[2] {
            LightRange::Shadow
        } else if value <= LIGHT_BOUNDS[3] {
            LightRange::Dark
        } else {
            LightRange::VeryDark
        }
    }

    pub fn classify(value: i32) -> Result<Self, SensorError> {
        RawSample::new(value).map(Self::from_sample)
    }
}

/// Lautstärke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SoundRange {
    Low,
    Medium,
    High,
}

impl SoundRange {
    pub const fn from_sample(sample: RawSample) -> Self {
        let value = sample.value();
        if value <= SOUND_BOUNDS[0] {
            SoundRange::Low
        } else if value <= SOUND_BOUNDS[1] {
            SoundRange::Medium
        } else {
            SoundRange::High
        }
    }

    pub fn classify(value: i32) -> Result<Self, SensorError> {
        RawSample::new(value).map(Self::from_sample)
    }
}

// ============================================================================
// Block-Prädikate ("Feuchte an Pin X ist ...?")
// ============================================================================

/// Liest den Feuchte-Sensor einmal und vergleicht mit `range`
pub fn moisture_is<S: AnalogSampler>(sampler: &mut S, pin: InitialPin, range: MoistureRange) -> bool {
    MoistureRange::from_sample(sampler.read_analog(pin)) == range
}

/// Liest den Licht-Sensor einmal und vergleicht mit `range`
pub fn light_is<S: AnalogSampler>(sampler: &mut S, pin: InitialPin, range: LightRange) -> bool {
    LightRange::from_sample(sampler.read_analog(pin)) == range
}

/// Misst den Spitzenwert des Schall-Sensors und vergleicht mit `range`
///
/// Ein einzelner Messwert trifft fast nie die Amplitude, daher wird
/// mit [`PeakHold::default()`] (101 Messungen) gemessen.
pub fn sound_is<S: AnalogSampler>(sampler: &mut S, pin: InitialPin, range: SoundRange) -> bool {
    let peak = PeakHold::default().sample(sampler, pin);
    SoundRange::from_sample(peak) == range
}
