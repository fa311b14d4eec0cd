// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von sensor-core
pub use sensor_core::{DirectionSink, JoystickDirection};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};
use embassy_sync::signal::Signal;

use crate::hal::AdcSampler;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Publisher<'static, NoopRawMutex, JoystickDirection, 4, 4, 1>
// Nutze:  JoystickPublisher

/// PubSubChannel für Joystick-Richtungen
/// - 4: Nachrichten-Kapazität im Queue
/// - 4: Maximale Anzahl Subscribers (Servo-Task + Reserve)
/// - 1: Publisher (nur der Joystick-Task)
pub type JoystickChannel = PubSubChannel<NoopRawMutex, JoystickDirection, 4, 4, 1>;

/// Publisher für Joystick-Richtungen
pub type JoystickPublisher = Publisher<'static, NoopRawMutex, JoystickDirection, 4, 4, 1>;

/// Subscriber für Joystick-Richtungen
pub type JoystickSubscriber = Subscriber<'static, NoopRawMutex, JoystickDirection, 4, 4, 1>;

/// ADC-Sampler, geteilt zwischen Joystick- und Report-Task
pub type SharedSampler = Mutex<NoopRawMutex, AdcSampler<'static>>;

/// Stopp-Signal für den Joystick-Task
pub type StopSignal = Signal<NoopRawMutex, ()>;

/// Leitet Joystick-Richtungen an alle Subscriber des Channels weiter
///
/// Subscriber, die erst später dazukommen, bekommen ältere Meldungen nicht.
/// Ist ein Subscriber zu langsam, wird seine älteste Meldung verworfen.
pub struct DirectionPublisher {
    publisher: JoystickPublisher,
}

impl DirectionPublisher {
    pub fn new(publisher: JoystickPublisher) -> Self {
        Self { publisher }
    }
}

impl DirectionSink for DirectionPublisher {
    fn signal(&mut self, direction: JoystickDirection) {
        self.publisher.publish_immediate(direction);
    }
}
