// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Schwellwerte und Polling-Timing der Sensoren liegen in sensor-core
// (dort, wo die Logik sie braucht). Hier steht nur die Board-Verdrahtung.

use sensor_core::{InitialPin, ServoPin};

// ============================================================================
// Analoge Eingänge (ADC1)
// ============================================================================
//
// Shield-Pin → ESP32-C6 GPIO:
//   P0 → GPIO0 (ADC1_CH0)
//   P1 → GPIO1 (ADC1_CH1)
//   P2 → GPIO2 (ADC1_CH2)

/// Joystick X-Achse (links/rechts)
pub const JOYSTICK_PIN_X: InitialPin = InitialPin::P0;

/// Joystick Y-Achse (unten/oben)
pub const JOYSTICK_PIN_Y: InitialPin = InitialPin::P1;

/// Bodenfeuchte-Sensor
pub const MOISTURE_PIN: InitialPin = InitialPin::P2;

// ============================================================================
// Servo Konfiguration (LEDC)
// ============================================================================
//
// Shield-Pin → ESP32-C6 GPIO:
//   P13 → GPIO18, P14 → GPIO19, P15 → GPIO20

/// PWM-Frequenz für Servos in Hz (20 ms Periode)
pub const SERVO_PWM_FREQ_HZ: u32 = 50;

/// PWM-Periode in Mikrosekunden
pub const SERVO_PERIOD_US: u32 = 20_000;

/// Pulsbreite bei 0° in Mikrosekunden
pub const SERVO_PULSE_MIN_US: u32 = 500;

/// Pulsbreite bei 180° in Mikrosekunden
pub const SERVO_PULSE_MAX_US: u32 = 2500;

/// Linkes Antriebsrad (Continuous-Servo)
pub const LEFT_WHEEL: ServoPin = ServoPin::P13;

/// Rechtes Antriebsrad (Continuous-Servo, spiegelverkehrt montiert)
pub const RIGHT_WHEEL: ServoPin = ServoPin::P14;

/// Fahrgeschwindigkeit bei Joystick-Steuerung in Prozent
pub const DRIVE_SPEED_PERCENT: i32 = 100;

/// Geschwindigkeit beim Drehen auf der Stelle in Prozent
pub const TURN_SPEED_PERCENT: i32 = 40;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für den RGB LED-Strip (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Gewünschte Strip-Helligkeit (wird auf 0-50 geklemmt)
pub const LED_BRIGHTNESS: i32 = 20;

// ============================================================================
// Tasks
// ============================================================================

/// Intervall für den Sensor-Report in Sekunden
pub const REPORT_INTERVAL_SECS: u64 = 2;

/// GPIO des BOOT-Tasters (stoppt das Joystick-Polling)
pub const STOP_BUTTON_GPIO_PIN: u8 = 9;
