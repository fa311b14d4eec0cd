// Joystick Task - Liest beide Achsen zyklisch und veröffentlicht die Richtung
use defmt::{debug, info};
use embassy_futures::select::{Either, select};
use embassy_time::Timer;
use sensor_core::joystick::{POLL_FINE_WAIT_US, POLL_PAUSE_MS};
use sensor_core::{DirectionSink, JoystickDirection, JoystickPoller};

use crate::config::{JOYSTICK_PIN_X, JOYSTICK_PIN_Y};
use crate::{DirectionPublisher, JoystickPublisher, SharedSampler, StopSignal};

/// Joystick Polling Logic
///
/// Pro Zyklus: X lesen, Y lesen, klassifizieren, veröffentlichen, dann
/// 175 ms + 15 ms warten. Die Wartezeit wird abgebrochen, sobald `stop`
/// signalisiert wird. Nach dem Stopp wird einmal `None` veröffentlicht,
/// damit Listener ihre Aktoren anhalten.
///
/// # Parameter
/// - `sampler`: geteilter ADC-Sampler
/// - `sink`: Empfänger der Richtungen (Channel oder Mock)
/// - `stop`: Stopp-Signal
pub async fn joystick_poll_logic<K: DirectionSink>(
    sampler: &'static SharedSampler,
    mut sink: K,
    stop: &'static StopSignal,
) {
    let mut poller = JoystickPoller::new(JOYSTICK_PIN_X, JOYSTICK_PIN_Y);
    info!("Joystick polling started");

    loop {
        let direction = {
            let mut adc = sampler.lock().await;
            poller.poll_once(&mut *adc, &mut sink)
        };
        debug!("Joystick: {}", direction);

        let pause = async {
            Timer::after_millis(POLL_PAUSE_MS as u64).await;
            Timer::after_micros(POLL_FINE_WAIT_US as u64).await;
        };

        if let Either::First(()) = select(stop.wait(), pause).await {
            break;
        }
    }

    sink.signal(JoystickDirection::None);
    info!("Joystick polling stopped after {} cycles", poller.cycles());
}

/// Joystick Task - Embassy Task für parallele Ausführung
#[embassy_executor::task]
pub async fn joystick_task(
    sampler: &'static SharedSampler,
    publisher: JoystickPublisher,
    stop: &'static StopSignal,
) {
    joystick_poll_logic(sampler, DirectionPublisher::new(publisher), stop).await;
}
