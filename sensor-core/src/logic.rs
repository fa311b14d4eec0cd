//! Pure Business Logic Functions
//!
//! Skalierungen und Umrechnungen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::RawSample;

/// Maximale Helligkeit des LED-Strips
pub const STRIP_MAX_BRIGHTNESS: u8 = 50;

/// Maximale Helligkeitsstufe der 4-Digit-Anzeige
pub const DISPLAY_MAX_LEVEL: u8 = 7;

/// Drehbereich des Potentiometers in Grad
pub const POTENTIOMETER_MAX_ANGLE: i32 = 300;

/// Skaliert eine Farbe mit einer Helligkeit (0-255)
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use sensor_core::scale_color;
/// let color = scale_color(RGB8 { r: 255, g: 100, b: 0 }, 51);
/// assert_eq!(color, RGB8 { r: 51, g: 20, b: 0 });
/// ```
pub fn scale_color(color: RGB8, brightness: u8) -> RGB8 {
    let scale = |channel: u8| ((channel as u16 * brightness as u16) / 255) as u8;
    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Lineare Abbildung von [from_low, from_high] auf [to_low, to_high]
///
/// Ganzzahlig, der Nachkommaanteil wird abgeschnitten. `from_low` und
/// `from_high` dürfen nicht gleich sein.
pub(crate) const fn map_range(value: i32, from_low: i32, from_high: i32, to_low: i32, to_high: i32) -> i32 {
    (value - from_low) * (to_high - to_low) / (from_high - from_low) + to_low
}

/// Potentiometer-Rohwert als Winkel in [0, 300] Grad
pub const fn potentiometer_angle(sample: RawSample) -> u16 {
    map_range(sample.value() as i32, 0, RawSample::MAX as i32, 0, POTENTIOMETER_MAX_ANGLE) as u16
}

/// Temperatur in °C aus dem Rohwert eines analogen Temperatursensors
///
/// 3,2 V Referenz, 10 mV/°C und 500 mV Offset bei 0 °C; `offset`
/// korrigiert Exemplarstreuung.
pub const fn temperature_from_raw(sample: RawSample, offset: i32) -> i32 {
    let millivolts = sample.value() as i32 * 3200 / RawSample::MAX as i32;
    ((millivolts - 500) / 10) + offset
}

/// Klemmt eine Strip-Helligkeit auf [0, 50]
pub const fn clamp_strip_brightness(brightness: i32) -> u8 {
    if brightness > STRIP_MAX_BRIGHTNESS as i32 {
        STRIP_MAX_BRIGHTNESS
    } else if brightness < 0 {
        0
    } else {
        brightness as u8
    }
}

/// Klemmt eine Anzeige-Helligkeitsstufe auf [0, 7]
pub const fn clamp_display_level(level: i32) -> u8 {
    if level >= DISPLAY_MAX_LEVEL as i32 {
        DISPLAY_MAX_LEVEL
    } else if level <= 0 {
        0
    } else {
        level as u8
    }
}
