//! Block-Operationen für digitale Sensoren, LEDs, Anzeige und Audio
//!
//! Dünne Schicht über den Traits: Parameter klemmen, Pegel
//! interpretieren, an die Hardware weiterreichen.

use crate::logic::{clamp_display_level, clamp_strip_brightness, potentiometer_angle, temperature_from_raw};
use crate::error::SensorError;
use crate::traits::{
    AnalogSampler, AudioOutput, DigitalPins, GestureSensor, LedStrip, RangeFinder, SegmentDisplay,
};
use crate::types::{
    AudioOutputPin, EdgePin, GroveGesture, InitialPin, OperationStatus, PinPull, PotentiometerUnit,
    SensorGesture,
};

// ============================================================================
// LED-Strip und Anzeige
// ============================================================================

/// Setzt die Strip-Helligkeit, geklemmt auf [0, 50]
pub fn set_strip_brightness<L: LedStrip>(strip: &mut L, brightness: i32) -> u8 {
    let brightness = clamp_strip_brightness(brightness);
    strip.set_brightness(brightness);
    brightness
}

pub fn strip_brightness<L: LedStrip>(strip: &L) -> u8 {
    strip.brightness()
}

/// Setzt die Helligkeitsstufe der Anzeige, geklemmt auf [0, 7]
pub fn set_display_brightness<D: SegmentDisplay>(display: &mut D, level: i32) -> u8 {
    let level = clamp_display_level(level);
    display.set_level(level);
    level
}

pub fn show_number<D: SegmentDisplay>(display: &mut D, number: i32) {
    display.show(number);
}

// ============================================================================
// Digitale Ausgänge
// ============================================================================

/// Schaltet eine LED an einem Digital-Pin ein oder aus
pub fn turn_on_off_led<P: DigitalPins>(pins: &mut P, status: OperationStatus, pin: EdgePin) {
    pins.read_digital(pin);
    pins.set_pull(pin, PinPull::Up);
    pins.write_digital(pin, status.is_high());
}

/// Schaltet den Audio-Ausgang auf `pin` ein oder aus
///
/// Beim Ausschalten läuft die "Power Down"-Melodie im Hintergrund, danach
/// wird der Pin auf Pull-Down gelegt, damit der Lautsprecher still bleibt.
pub fn turn_on_off_audio_output<A, P>(audio: &mut A, pins: &mut P, status: OperationStatus, pin: AudioOutputPin)
where
    A: AudioOutput,
    P: DigitalPins,
{
    let pin = EdgePin::from(pin);
    match status {
        OperationStatus::TurnOn => audio.set_pitch_pin(pin),
        OperationStatus::TurnOff => {
            audio.play_power_down();
            pins.read_digital(pin);
            pins.set_pull(pin, PinPull::Down);
        }
    }
}

// ============================================================================
// Digitale Sensoren
// ============================================================================

/// Liest einen Digital-Sensor und löst danach den Pull-Widerstand
fn is_sensor_on<P: DigitalPins>(pins: &mut P, pin: EdgePin) -> bool {
    let level = pins.read_digital(pin);
    pins.set_pull(pin, PinPull::None);
    level
}

pub fn is_button_pressed<P: DigitalPins>(pins: &mut P, pin: EdgePin) -> bool {
    is_sensor_on(pins, pin)
}

pub fn is_touch_sensor_on<P: DigitalPins>(pins: &mut P, pin: EdgePin) -> bool {
    is_sensor_on(pins, pin)
}

pub fn is_motion_sensor_on<P: DigitalPins>(pins: &mut P, pin: EdgePin) -> bool {
    is_sensor_on(pins, pin)
}

/// Crash-Sensor ist active-low: 0 = gedrückt
pub fn is_crash_sensor_pressed<P: DigitalPins>(pins: &mut P, pin: EdgePin) -> bool {
    !is_sensor_on(pins, pin)
}

/// `true` wenn der Sensor über der Linie steht
///
/// Der Sensor meldet high, wenn er neben der Linie ist.
pub fn is_line_follower_on<P: DigitalPins>(pins: &mut P, pin: EdgePin) -> bool {
    !is_sensor_on(pins, pin)
}

// ============================================================================
// Analoge Messwerte
// ============================================================================

/// Potentiometer als Winkel (0-300) oder Rohwert (0-1023)
pub fn potentiometer_value<S: AnalogSampler>(sampler: &mut S, pin: InitialPin, unit: PotentiometerUnit) -> u16 {
    let sample = sampler.read_analog(pin);
    match unit {
        PotentiometerUnit::Angle => potentiometer_angle(sample),
        PotentiometerUnit::Number => sample.value(),
    }
}

/// Temperatur in °C mit Korrektur-Offset
pub fn temperature_celsius<S: AnalogSampler>(sampler: &mut S, pin: InitialPin, offset: i32) -> i32 {
    temperature_from_raw(sampler.read_analog(pin), offset)
}

/// Entfernung in Zentimetern vom Ultraschall-Sensor
pub fn distance_cm<R: RangeFinder>(finder: &mut R, pin: EdgePin) -> u32 {
    finder.measure_cm(pin)
}

// ============================================================================
// Gesten
// ============================================================================

/// Registriert `listener` für eine Geste des Gesten-Sensors
///
/// Die Block-Geste wird vorher auf den Treiber-Code abgebildet, der
/// zurückgegeben wird.
pub fn on_gesture<G: GestureSensor>(
    sensor: &mut G,
    gesture: SensorGesture,
    listener: G::Listener,
) -> Result<GroveGesture, SensorError> {
    let code = GroveGesture::from(gesture);
    sensor.subscribe(code, listener)?;
    Ok(code)
}
