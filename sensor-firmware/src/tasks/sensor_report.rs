// Sensor Report Task - Meldet die Bodenfeuchte und zeigt sie am LED-Strip
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal_smartled::smart_led_buffer;
use rgb::RGB8;
use sensor_core::io::set_strip_brightness;
use sensor_core::{AnalogSampler, LedStrip, MoistureRange};

use crate::SharedSampler;
use crate::config::{LED_BRIGHTNESS, LED_COUNT, MOISTURE_PIN, REPORT_INTERVAL_SECS, RMT_CLOCK_MHZ};
use crate::hal::RmtLedStrip;

/// Anzeigefarbe je Feuchte-Bereich
pub fn moisture_color(range: MoistureRange) -> RGB8 {
    match range {
        MoistureRange::Dry => RGB8 { r: 255, g: 0, b: 0 },
        MoistureRange::Wet => RGB8 { r: 0, g: 255, b: 0 },
        MoistureRange::Saturated => RGB8 { r: 0, g: 0, b: 255 },
    }
}

/// Sensor Report Logic
///
/// Liest periodisch den Feuchte-Sensor, klassifiziert und färbt den Strip.
pub async fn sensor_report_logic<L: LedStrip>(mut strip: L, sampler: &'static SharedSampler) {
    let brightness = set_strip_brightness(&mut strip, LED_BRIGHTNESS);
    info!("LED strip brightness: {}", brightness);

    loop {
        let sample = sampler.lock().await.read_analog(MOISTURE_PIN);
        let range = MoistureRange::from_sample(sample);
        info!("Moisture: {} ({})", range, sample);

        if let Err(e) = strip.show_color(moisture_color(range)) {
            error!("LED strip write failed: {}", e);
        }

        Timer::after(Duration::from_secs(REPORT_INTERVAL_SECS)).await;
    }
}

/// Sensor Report Task - übernimmt die LED-Initialisierung
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `sampler`: geteilter ADC-Sampler
#[embassy_executor::task]
pub async fn sensor_report_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    sampler: &'static SharedSampler,
) {
    // Buffer für SmartLED Daten erstellen
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    match RmtLedStrip::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(strip) => sensor_report_logic(strip, sampler).await,
        Err(_) => error!("RMT init failed, sensor report disabled"),
    }
}
