//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung. Jede Operation bekommt ihr Handle
//! explizit übergeben, es gibt keinen globalen Hardware-Zustand.
//!
//! # Implementierungen
//! - **Production:** `sensor-firmware` (ESP32-C6 ADC, LEDC, RMT)
//! - **Testing:** Mocks in `sensor-tests` (in-memory)

use rgb::RGB8;

use crate::error::SensorError;
use crate::joystick::JoystickDirection;
use crate::types::{EdgePin, GroveGesture, InitialPin, PinPull, RawSample, ServoPin};

/// Fehler-Typ für Aktor-Operationen (Servo, LED-Strip)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    WriteFailed,
}

/// Analoge Eingänge lesen
pub trait AnalogSampler {
    /// Liest einen Rohwert in [0, 1023]
    ///
    /// Kann die Hardware nicht lesen, liefert die Implementierung den
    /// letzten gültigen Wert statt eines Fehlers.
    fn read_analog(&mut self, pin: InitialPin) -> RawSample;
}

/// Digitale Ein- und Ausgänge
pub trait DigitalPins {
    /// Liest den Pegel, `true` = high
    fn read_digital(&mut self, pin: EdgePin) -> bool;

    fn write_digital(&mut self, pin: EdgePin, high: bool);

    fn set_pull(&mut self, pin: EdgePin, pull: PinPull);
}

/// Servo-Ausgänge (Winkel-Servos und Continuous-Rotation-Servos)
pub trait ServoActuator {
    /// Schreibt einen Winkel in [0, 180]
    ///
    /// # Fehlerbehandlung
    /// Gibt `ActuatorError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write_angle(&mut self, pin: ServoPin, angle: u8) -> Result<(), ActuatorError>;

    /// Gibt den Pin frei (kein PWM-Signal mehr, Servo im Leerlauf)
    fn release(&mut self, pin: ServoPin) -> Result<(), ActuatorError>;
}

/// Adressierbarer LED-Strip (WS2812/Neopixel)
pub trait LedStrip {
    fn set_brightness(&mut self, brightness: u8);

    fn brightness(&self) -> u8;

    /// Setzt alle LEDs auf eine Farbe, Helligkeit wird vom Strip angewendet
    fn show_color(&mut self, color: RGB8) -> Result<(), ActuatorError>;
}

/// 4-stellige 7-Segment-Anzeige (TM1637)
pub trait SegmentDisplay {
    fn show(&mut self, number: i32);

    /// Helligkeitsstufe in [0, 7]
    fn set_level(&mut self, level: u8);
}

/// Audio-Ausgang des Boards
pub trait AudioOutput {
    /// Leitet die Tonausgabe auf einen Pin um
    fn set_pitch_pin(&mut self, pin: EdgePin);

    /// Spielt die "Power Down"-Melodie im Hintergrund ab
    fn play_power_down(&mut self);
}

/// Ultraschall-Entfernungsmesser
pub trait RangeFinder {
    /// Entfernung in Zentimetern
    fn measure_cm(&mut self, pin: EdgePin) -> u32;
}

/// Gesten-Sensor, der Listener pro Gesten-Code verwaltet
///
/// Der Treiber ruft alle Listener einer erkannten Geste in
/// Registrierungsreihenfolge auf. Gesten vor der Registrierung gehen
/// verloren.
pub trait GestureSensor {
    type Listener;

    /// # Fehlerbehandlung
    /// `SensorError::RegistryFull` wenn der Treiber keinen Platz mehr hat
    fn subscribe(&mut self, gesture: GroveGesture, listener: Self::Listener) -> Result<(), SensorError>;
}

/// Empfänger für Joystick-Richtungen
///
/// Wird vom [`JoystickPoller`](crate::joystick::JoystickPoller) einmal pro
/// Zyklus aufgerufen.
pub trait DirectionSink {
    fn signal(&mut self, direction: JoystickDirection);
}
