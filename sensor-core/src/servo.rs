//! Servo-Berechnungen
//!
//! Continuous-Rotation-Servos werden über einen "Winkel" gesteuert:
//! 90° steht still, Abweichungen nach unten/oben drehen im/gegen den
//! Uhrzeigersinn, je weiter weg desto schneller.

use crate::traits::{ActuatorError, ServoActuator};
use crate::types::{ServoDirection, ServoPin};

/// Neutraler Winkel: Continuous-Servo steht still
pub const SERVO_STOP_ANGLE: u8 = 90;

/// Größter Servo-Winkel
pub const SERVO_MAX_ANGLE: u8 = 180;

/// Stufen der Geschwindigkeits-Quantisierung: (Untergrenze in %, Band)
const SPEED_BANDS: [(u8, u8); 6] = [(0, 3), (15, 5), (30, 10), (45, 15), (60, 20), (80, 100)];

/// Kommando für einen Continuous-Rotation-Servo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoCommand {
    /// Stillstand: 90° schreiben, danach Pin freigeben
    Stop,
    /// Drehen mit dem angegebenen Winkel
    Drive(u8),
}

impl ServoCommand {
    pub const fn angle(self) -> u8 {
        match self {
            ServoCommand::Stop => SERVO_STOP_ANGLE,
            ServoCommand::Drive(angle) => angle,
        }
    }
}

/// Klemmt eine Geschwindigkeit in Prozent auf [0, 100]
pub const fn clamp_speed(speed_percent: i32) -> u8 {
    if speed_percent < 0 {
        0
    } else if speed_percent > 100 {
        100
    } else {
        speed_percent as u8
    }
}

/// Quantisiert eine (geklemmte) Geschwindigkeit auf eines von sechs Bändern
pub const fn speed_band(speed_percent: u8) -> u8 {
    let mut band = SPEED_BANDS[0].1;
    let mut i = 1;
    while i < SPEED_BANDS.len() {
        if speed_percent >= SPEED_BANDS[i].0 {
            band = SPEED_BANDS[i].1;
        }
        i += 1;
    }
    band
}

/// Berechnet das Servo-Kommando für Geschwindigkeit und Richtung
///
/// Nur eine Geschwindigkeit von exakt 0 ist [`ServoCommand::Stop`] und läuft
/// nicht durch die Band-Tabelle. Negative Werte werden erst danach auf 0
/// geklemmt und landen im untersten Band.
///
/// # Beispiele
///
/// ```
/// # use sensor_core::{drive_angle, ServoCommand, ServoDirection};
/// assert_eq!(drive_angle(100, ServoDirection::Counterclockwise), ServoCommand::Drive(180));
/// assert_eq!(drive_angle(100, ServoDirection::Clockwise), ServoCommand::Drive(0));
/// assert_eq!(drive_angle(0, ServoDirection::Clockwise), ServoCommand::Stop);
/// assert_eq!(drive_angle(-20, ServoDirection::Clockwise), ServoCommand::Drive(88));
/// ```
pub const fn drive_angle(speed_percent: i32, direction: ServoDirection) -> ServoCommand {
    if speed_percent == 0 {
        return ServoCommand::Stop;
    }
    let speed = clamp_speed(speed_percent);
    let offset = speed_band(speed) as i32 * 90 / 100;
    let angle = SERVO_STOP_ANGLE as i32 + direction.sign() * offset;
    ServoCommand::Drive(angle as u8)
}

/// Simulator-Transformation des Antriebswerts, bit-genau
///
/// Die Formel hängt nur von der Richtung ab und verwirft die Geschwindigkeit
/// komplett. Nur für Vergleiche mit alten Simulator-Aufzeichnungen gedacht.
#[cfg(feature = "legacy-servo-transform")]
pub const fn legacy_drive_value(_speed_percent: i32, direction: ServoDirection) -> i32 {
    let sign = direction.sign();
    // 180 * sign: erste halbe Umdrehung, 360 * 3: drei volle Umdrehungen
    ((180 * sign) + 360 * 3) * sign
}

/// Klemmt einen Winkel auf [0, 180]
pub const fn clamp_angle(angle: i32) -> u8 {
    if angle <= 0 {
        0
    } else if angle > SERVO_MAX_ANGLE as i32 {
        SERVO_MAX_ANGLE
    } else {
        angle as u8
    }
}

/// Lässt einen Continuous-Servo mit Geschwindigkeit (0-100 %) drehen
///
/// Bei Geschwindigkeit 0 wird 90° geschrieben und der Pin danach
/// freigegeben, damit der Servo nicht gegen die Mittelstellung zittert.
pub fn continuous_servo_write<A: ServoActuator>(
    actuator: &mut A,
    pin: ServoPin,
    direction: ServoDirection,
    speed_percent: i32,
) -> Result<ServoCommand, ActuatorError> {
    let command = drive_angle(speed_percent, direction);
    actuator.write_angle(pin, command.angle())?;
    if command == ServoCommand::Stop {
        actuator.release(pin)?;
    }
    Ok(command)
}

/// Gibt alle drei Servo-Ausgänge frei
///
/// Bricht beim ersten Fehler ab.
pub fn release_all<A: ServoActuator>(actuator: &mut A) -> Result<(), ActuatorError> {
    for pin in ServoPin::ALL {
        actuator.release(pin)?;
    }
    Ok(())
}

/// Dreht einen Positions-Servo auf `angle` (geklemmt auf [0, 180])
pub fn servo_write_angle<A: ServoActuator>(
    actuator: &mut A,
    pin: ServoPin,
    angle: i32,
) -> Result<u8, ActuatorError> {
    let angle = clamp_angle(angle);
    actuator.write_angle(pin, angle)?;
    Ok(angle)
}
