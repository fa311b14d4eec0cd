//! Joystick: Richtungs-Klassifizierung und Polling
//!
//! Zwei analoge Achsen werden in je drei Zonen eingeteilt (niedrig,
//! Mitte, hoch) und zu einer von neun Richtungen kombiniert. Der
//! [`JoystickPoller`] liest beide Achsen zyklisch und meldet jede
//! Richtung an einen [`DirectionSink`].

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::delay::DelayNs;

use crate::error::SensorError;
use crate::traits::{AnalogSampler, DirectionSink};
use crate::types::InitialPin;

/// Unterhalb dieses Werts ist eine Achse "niedrig"
pub const AXIS_LOW: u16 = 400;

/// Oberhalb dieses Werts ist eine Achse "hoch"
pub const AXIS_HIGH: u16 = 624;

/// Pause zwischen zwei Polling-Zyklen in Millisekunden
pub const POLL_PAUSE_MS: u32 = 175;

/// Zusätzliche Feinwartezeit pro Zyklus in Mikrosekunden
pub const POLL_FINE_WAIT_US: u32 = 15_000;

/// Joystick-Position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JoystickDirection {
    None,
    Up,
    Down,
    Right,
    Left,
    UpRight,
    DownRight,
    UpLeft,
    DownLeft,
}

/// Klassifiziert zwei Achsenwerte (x = links/rechts, y = unten/oben)
///
/// Diagonalen werden zuerst geprüft, `None` ist der Rest. Die Zonen
/// sind bewusst asymmetrisch: "links" verlangt y strikt zwischen 400
/// und 624, alle anderen Richtungen schließen 400 und 624 in die Mitte ein.
///
/// # Beispiele
///
/// ```
/// # use sensor_core::{joystick_direction, JoystickDirection};
/// assert_eq!(joystick_direction(200, 200), JoystickDirection::DownLeft);
/// assert_eq!(joystick_direction(500, 700), JoystickDirection::Up);
/// assert_eq!(joystick_direction(500, 500), JoystickDirection::None);
/// ```
pub const fn joystick_direction(x: u16, y: u16) -> JoystickDirection {
    let x_mid = x >= AXIS_LOW && x <= AXIS_HIGH;
    let y_mid = y >= AXIS_LOW && y <= AXIS_HIGH;

    if y < AXIS_LOW && x < AXIS_LOW {
        JoystickDirection::DownLeft
    } else if y < AXIS_LOW && x > AXIS_HIGH {
        JoystickDirection::DownRight
    } else if y > AXIS_HIGH && x < AXIS_LOW {
        JoystickDirection::UpLeft
    } else if y > AXIS_HIGH && x > AXIS_HIGH {
        JoystickDirection::UpRight
    } else if (y > AXIS_LOW && y < AXIS_HIGH) && x < AXIS_LOW {
        JoystickDirection::Left
    } else if y_mid && x > AXIS_HIGH {
        JoystickDirection::Right
    } else if y < AXIS_LOW && x_mid {
        JoystickDirection::Down
    } else if y > AXIS_HIGH && x_mid {
        JoystickDirection::Up
    } else {
        JoystickDirection::None
    }
}

// ============================================================================
// Listener-Registry
// ============================================================================

/// Listener, jeweils für genau eine Richtung registriert
///
/// Eine gemeldete Richtung geht an alle Listener dieser Richtung, in der
/// Reihenfolge der Registrierung. Meldungen vor der Registrierung gehen
/// verloren.
pub struct ListenerRegistry<L, const N: usize> {
    listeners: heapless::Vec<(JoystickDirection, L), N>,
}

impl<L: DirectionSink, const N: usize> ListenerRegistry<L, N> {
    pub const fn new() -> Self {
        Self {
            listeners: heapless::Vec::new(),
        }
    }

    /// Registriert `listener` für `direction`
    ///
    /// # Fehlerbehandlung
    /// Gibt `SensorError::RegistryFull` zurück wenn alle `N` Plätze belegt sind
    pub fn subscribe(&mut self, direction: JoystickDirection, listener: L) -> Result<(), SensorError> {
        self.listeners
            .push((direction, listener))
            .map_err(|_| SensorError::RegistryFull)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Zugriff auf die registrierten Listener (z.B. für Auswertungen in Tests)
    pub fn listeners(&self) -> impl Iterator<Item = &L> {
        self.listeners.iter().map(|(_, listener)| listener)
    }
}

impl<L: DirectionSink, const N: usize> Default for ListenerRegistry<L, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: DirectionSink, const N: usize> DirectionSink for ListenerRegistry<L, N> {
    fn signal(&mut self, direction: JoystickDirection) {
        for (wanted, listener) in self.listeners.iter_mut() {
            if *wanted == direction {
                listener.signal(direction);
            }
        }
    }
}

// ============================================================================
// Polling
// ============================================================================

/// Stopp-Signal für einen laufenden Poller
///
/// Kann aus einem anderen Kontext (Interrupt, anderer Task) gesetzt werden.
#[derive(Debug, Default)]
pub struct StopFlag(AtomicBool);

impl StopFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Setzt das Signal zurück, damit der Poller erneut laufen kann
    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Liest zwei Achsen zyklisch und meldet jede Richtung
///
/// Es wird in jedem Zyklus gemeldet, auch wenn sich die Richtung nicht
/// geändert hat.
#[derive(Debug, Clone)]
pub struct JoystickPoller {
    pin_x: InitialPin,
    pin_y: InitialPin,
    cycles: u32,
}

impl JoystickPoller {
    pub const fn new(pin_x: InitialPin, pin_y: InitialPin) -> Self {
        Self {
            pin_x,
            pin_y,
            cycles: 0,
        }
    }

    /// Anzahl bisher ausgeführter Zyklen
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Ein Zyklus: X lesen, Y lesen, klassifizieren, melden
    pub fn poll_once<S, K>(&mut self, sampler: &mut S, sink: &mut K) -> JoystickDirection
    where
        S: AnalogSampler,
        K: DirectionSink,
    {
        let x = sampler.read_analog(self.pin_x);
        let y = sampler.read_analog(self.pin_y);
        let direction = joystick_direction(x.value(), y.value());
        sink.signal(direction);
        self.cycles = self.cycles.wrapping_add(1);
        direction
    }

    /// Blockierende Polling-Schleife bis `stop` gesetzt wird
    ///
    /// Wartet nach jedem Zyklus [`POLL_PAUSE_MS`] plus [`POLL_FINE_WAIT_US`].
    /// Gibt die Anzahl der in diesem Aufruf ausgeführten Zyklen zurück.
    pub fn run<S, K, D>(&mut self, sampler: &mut S, sink: &mut K, delay: &mut D, stop: &StopFlag) -> u32
    where
        S: AnalogSampler,
        K: DirectionSink,
        D: DelayNs,
    {
        let mut executed = 0;
        while !stop.is_stopped() {
            self.poll_once(sampler, sink);
            executed += 1;
            delay.delay_ms(POLL_PAUSE_MS);
            delay.delay_us(POLL_FINE_WAIT_US);
        }
        executed
    }
}
