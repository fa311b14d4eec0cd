// LED-Strip Treiber über RMT Peripheral
//
// Implementiert sensor_core::LedStrip für WS2812/Neopixel LEDs.
// Die Helligkeit wird in Software auf jede Farbe angewendet.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use sensor_core::{ActuatorError, LedStrip, scale_color};
use smart_leds_trait::SmartLedsWrite;

use crate::config::LED_COUNT;

/// RMT-Buffer-Größe: 24 Bit pro LED + 1 Reset-Puls
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware LED Strip
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
/// und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedStrip<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    brightness: u8,
}

impl<'a> RmtLedStrip<'a> {
    /// Erstellt einen neuen RmtLedStrip
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(LED_COUNT) Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, esp_hal::rmt::Error> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))?;
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { led, brightness: 0 })
    }
}

impl LedStrip for RmtLedStrip<'_> {
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn show_color(&mut self, color: RGB8) -> Result<(), ActuatorError> {
        let scaled = scale_color(color, self.brightness);
        self.led
            .write(core::iter::repeat_n(scaled, LED_COUNT))
            .map_err(|_| ActuatorError::WriteFailed)
    }
}
