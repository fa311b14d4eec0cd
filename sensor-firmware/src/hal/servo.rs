// Servo-Treiber über LEDC PWM
//
// Drei Servo-Ausgänge (P13/P14/P15) teilen sich einen 50 Hz Timer.
// Standard-Timing: 0.5 ms = 0°, 1.5 ms = 90°, 2.5 ms = 180°

use esp_hal::gpio::DriveMode;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{Ledc, LowSpeed};
use esp_hal::time::Rate;
use sensor_core::{ActuatorError, ServoActuator, ServoPin, clamp_angle};

use crate::config::{SERVO_PERIOD_US, SERVO_PULSE_MAX_US, SERVO_PULSE_MIN_US, SERVO_PWM_FREQ_HZ};

/// PWM-Auflösung (14 Bit → ~1.2 µs Schritte bei 20 ms Periode)
const DUTY_RESOLUTION: timer::config::Duty = timer::config::Duty::Duty14Bit;

/// Maximaler Duty-Wert bei 14 Bit
const DUTY_MAX: u32 = 1 << 14;

/// Berechnet den LEDC Duty-Wert für einen Winkel
fn angle_to_duty(angle: u8) -> u32 {
    let angle = clamp_angle(angle as i32) as u32;
    let pulse_us = SERVO_PULSE_MIN_US + ((SERVO_PULSE_MAX_US - SERVO_PULSE_MIN_US) * angle) / 180;
    (pulse_us * DUTY_MAX) / SERVO_PERIOD_US
}

/// Konfiguriert den gemeinsamen LEDC-Timer für alle Servos
///
/// Der Timer muss 'static sein (StaticCell), weil die Kanäle ihn referenzieren.
pub fn init_timer<'a>(ledc: &'a Ledc<'a>) -> Result<timer::Timer<'a, LowSpeed>, timer::Error> {
    let mut timer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    timer.configure(timer::config::Config {
        duty: DUTY_RESOLUTION,
        clock_source: timer::LSClockSource::APBClk,
        frequency: Rate::from_hz(SERVO_PWM_FREQ_HZ),
    })?;
    Ok(timer)
}

fn init_channel<'a>(
    ledc: &'a Ledc<'a>,
    number: channel::Number,
    pin: impl PeripheralOutput<'a>,
    timer: &'a timer::Timer<'a, LowSpeed>,
) -> Result<channel::Channel<'a, LowSpeed>, channel::Error> {
    let mut channel = ledc.channel(number, pin);
    channel.configure(channel::config::Config {
        timer,
        duty_pct: 0,
        drive_mode: DriveMode::PushPull,
    })?;
    Ok(channel)
}

/// Die drei Servo-Ausgänge des Shields
pub struct LedcServos<'a> {
    channels: [channel::Channel<'a, LowSpeed>; 3],
}

impl<'a> LedcServos<'a> {
    /// Erstellt die Servo-Kanäle 0-2 auf dem gemeinsamen Timer
    ///
    /// Alle Ausgänge starten ohne Signal (freigegeben).
    pub fn new(
        ledc: &'a Ledc<'a>,
        timer: &'a timer::Timer<'a, LowSpeed>,
        p13: impl PeripheralOutput<'a>,
        p14: impl PeripheralOutput<'a>,
        p15: impl PeripheralOutput<'a>,
    ) -> Result<Self, channel::Error> {
        Ok(Self {
            channels: [
                init_channel(ledc, channel::Number::Channel0, p13, timer)?,
                init_channel(ledc, channel::Number::Channel1, p14, timer)?,
                init_channel(ledc, channel::Number::Channel2, p15, timer)?,
            ],
        })
    }
}

impl ServoActuator for LedcServos<'_> {
    fn write_angle(&mut self, pin: ServoPin, angle: u8) -> Result<(), ActuatorError> {
        self.channels[pin.index()].set_duty_hw(angle_to_duty(angle));
        Ok(())
    }

    fn release(&mut self, pin: ServoPin) -> Result<(), ActuatorError> {
        self.channels[pin.index()]
            .set_duty(0)
            .map_err(|_| ActuatorError::WriteFailed)
    }
}
