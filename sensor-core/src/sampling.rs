//! Spitzenwert-Messung (Max-Hold)
//!
//! Misst einen Kanal N-mal direkt hintereinander und behält den größten
//! Wert. Zwischen den Messungen gibt es keine Pause.

use crate::traits::AnalogSampler;
use crate::types::{InitialPin, RawSample};

/// Anzahl der Messungen für den Schall-Sensor
pub const SOUND_PEAK_SAMPLES: usize = 101;

/// Max-Hold-Strategie mit fester Anzahl Messungen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakHold {
    samples: usize,
}

impl PeakHold {
    /// `samples` wird auf mindestens 1 angehoben
    pub const fn new(samples: usize) -> Self {
        Self {
            samples: if samples == 0 { 1 } else { samples },
        }
    }

    pub const fn samples(&self) -> usize {
        self.samples
    }

    /// Liest `samples` Werte von `pin` und liefert den größten
    pub fn sample<S: AnalogSampler>(&self, sampler: &mut S, pin: InitialPin) -> RawSample {
        let mut highest = sampler.read_analog(pin);
        for _ in 1..self.samples {
            let value = sampler.read_analog(pin);
            if value > highest {
                highest = value;
            }
        }
        highest
    }
}

impl Default for PeakHold {
    fn default() -> Self {
        Self::new(SOUND_PEAK_SAMPLES)
    }
}
