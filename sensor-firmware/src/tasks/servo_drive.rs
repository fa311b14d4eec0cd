// Servo Drive Task - Fährt zwei Continuous-Servos nach Joystick-Richtung
use defmt::{error, info};
use embassy_sync::pubsub::WaitResult;
use sensor_core::{
    JoystickDirection, ServoActuator, ServoDirection, continuous_servo_write, release_all,
};

use crate::JoystickSubscriber;
use crate::config::{DRIVE_SPEED_PERCENT, LEFT_WHEEL, RIGHT_WHEEL, TURN_SPEED_PERCENT};
use crate::hal::LedcServos;

/// Rad-Kommandos (links, rechts) für eine Joystick-Richtung
///
/// Das rechte Rad ist spiegelverkehrt montiert: "vorwärts" heißt links
/// gegen und rechts im Uhrzeigersinn. Geschwindigkeit 0 hält das Rad an.
pub fn wheel_commands(direction: JoystickDirection) -> [(ServoDirection, i32); 2] {
    use ServoDirection::{Clockwise as Cw, Counterclockwise as Ccw};

    let (drive, turn) = (DRIVE_SPEED_PERCENT, TURN_SPEED_PERCENT);
    match direction {
        JoystickDirection::None => [(Ccw, 0), (Cw, 0)],
        JoystickDirection::Up => [(Ccw, drive), (Cw, drive)],
        JoystickDirection::Down => [(Cw, drive), (Ccw, drive)],
        JoystickDirection::Left => [(Cw, turn), (Cw, turn)],
        JoystickDirection::Right => [(Ccw, turn), (Ccw, turn)],
        JoystickDirection::UpLeft => [(Ccw, turn), (Cw, drive)],
        JoystickDirection::UpRight => [(Ccw, drive), (Cw, turn)],
        JoystickDirection::DownLeft => [(Cw, turn), (Ccw, drive)],
        JoystickDirection::DownRight => [(Cw, drive), (Ccw, turn)],
    }
}

/// Servo Drive Logic
///
/// Wartet auf Joystick-Richtungen und schreibt nur bei Änderungen auf die
/// Servos (der Joystick meldet jeden Zyklus).
pub async fn servo_drive_logic<A: ServoActuator>(mut servos: A, mut subscriber: JoystickSubscriber) {
    let mut current: Option<JoystickDirection> = None;

    if let Err(e) = release_all(&mut servos) {
        error!("Servo release failed: {}", e);
    }

    loop {
        let direction = match subscriber.next_message().await {
            WaitResult::Message(direction) => direction,
            WaitResult::Lagged(missed) => {
                info!("Servo drive lagged, {} directions skipped", missed);
                continue;
            }
        };

        if current == Some(direction) {
            continue;
        }
        current = Some(direction);
        info!("Drive: {}", direction);

        let [left, right] = wheel_commands(direction);
        for (pin, (rotation, speed)) in [(LEFT_WHEEL, left), (RIGHT_WHEEL, right)] {
            if let Err(e) = continuous_servo_write(&mut servos, pin, rotation, speed) {
                error!("Servo {} write failed: {}", pin, e);
            }
        }
    }
}

/// Servo Drive Task - Embassy Task für parallele Ausführung
#[embassy_executor::task]
pub async fn servo_drive_task(servos: LedcServos<'static>, subscriber: JoystickSubscriber) {
    servo_drive_logic(servos, subscriber).await;
}
