// ADC Sampler - Analoge Eingänge P0/P1/P2 über ADC1
//
// Implementiert sensor_core::AnalogSampler. Der ESP32-C6 misst mit
// 12 Bit, die Sensor-Logik erwartet 10 Bit (0-1023).
//
// `read_oneshot` startet die Wandlung beim ersten Aufruf und meldet
// `WouldBlock`, bis sie fertig ist. Eine abgebrochene Wandlung blockiert
// den ADC für alle anderen Pins, deshalb wird immer bis zum Ende gewartet.

use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO0, GPIO1, GPIO2};
use sensor_core::{AnalogSampler, InitialPin, RawSample};

/// Analog-Sampler für die drei Sensor-Eingänge des Shields
///
/// Meldet der ADC einen echten Fehler, wird der letzte gültige Wert des
/// Pins zurückgegeben.
pub struct AdcSampler<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    p0: AdcPin<GPIO0<'d>, ADC1<'d>>,
    p1: AdcPin<GPIO1<'d>, ADC1<'d>>,
    p2: AdcPin<GPIO2<'d>, ADC1<'d>>,
    last: [RawSample; 3],
}

impl<'d> AdcSampler<'d> {
    /// Erstellt den Sampler
    ///
    /// # Parameter
    /// - `adc1`: ADC1 Peripheral
    /// - `gpio0`..`gpio2`: Eingänge P0..P2 (11 dB Dämpfung, volle 3,3 V)
    pub fn new(adc1: ADC1<'d>, gpio0: GPIO0<'d>, gpio1: GPIO1<'d>, gpio2: GPIO2<'d>) -> Self {
        let mut config = AdcConfig::new();
        let p0 = config.enable_pin(gpio0, Attenuation::_11dB);
        let p1 = config.enable_pin(gpio1, Attenuation::_11dB);
        let p2 = config.enable_pin(gpio2, Attenuation::_11dB);
        let adc = Adc::new(adc1, config);

        Self {
            adc,
            p0,
            p1,
            p2,
            last: [RawSample::default(); 3],
        }
    }

    fn read_raw(&mut self, pin: InitialPin) -> Option<u16> {
        let result = match pin {
            InitialPin::P0 => nb::block!(self.adc.read_oneshot(&mut self.p0)),
            InitialPin::P1 => nb::block!(self.adc.read_oneshot(&mut self.p1)),
            InitialPin::P2 => nb::block!(self.adc.read_oneshot(&mut self.p2)),
        };
        result.ok()
    }
}

fn slot(pin: InitialPin) -> usize {
    match pin {
        InitialPin::P0 => 0,
        InitialPin::P1 => 1,
        InitialPin::P2 => 2,
    }
}

impl AnalogSampler for AdcSampler<'_> {
    fn read_analog(&mut self, pin: InitialPin) -> RawSample {
        match self.read_raw(pin) {
            Some(raw) => {
                let sample = RawSample::from_adc12(raw);
                self.last[slot(pin)] = sample;
                sample
            }
            None => {
                defmt::warn!("ADC read failed on {}, using last value", pin);
                self.last[slot(pin)]
            }
        }
    }
}
