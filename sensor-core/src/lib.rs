//! Sensor Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits, Wert-Typen und Pure Functions für die
//! Sensor- und Aktor-Blöcke (Feuchte, Licht, Schall, Joystick, Servos, LEDs).

#![no_std]

pub mod classify;
pub mod error;
pub mod io;
pub mod joystick;
pub mod logic;
pub mod sampling;
pub mod servo;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use classify::{LightRange, MoistureRange, SoundRange, light_is, moisture_is, sound_is};
pub use error::SensorError;
pub use joystick::{
    JoystickDirection, JoystickPoller, ListenerRegistry, StopFlag, joystick_direction,
};
pub use logic::{potentiometer_angle, scale_color, temperature_from_raw};
pub use sampling::PeakHold;
pub use servo::{
    ServoCommand, clamp_angle, clamp_speed, continuous_servo_write, drive_angle, release_all,
    servo_write_angle, speed_band,
};
pub use traits::{
    ActuatorError, AnalogSampler, AudioOutput, DigitalPins, DirectionSink, GestureSensor, LedStrip,
    RangeFinder, SegmentDisplay, ServoActuator,
};
pub use types::{
    AudioOutputPin, EdgePin, GroveGesture, InitialPin, OperationStatus, PinPull,
    PotentiometerUnit, RawSample, SensorGesture, ServoDirection, ServoPin,
};

#[cfg(feature = "legacy-servo-transform")]
pub use servo::legacy_drive_value;
