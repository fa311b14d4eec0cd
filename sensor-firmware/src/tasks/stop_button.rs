// Stop Button Task - BOOT-Taster beendet das Joystick-Polling
use defmt::info;
use esp_hal::gpio::Input;

use crate::StopSignal;

#[embassy_executor::task]
pub async fn stop_button_task(mut button: Input<'static>, stop: &'static StopSignal) {
    button.wait_for_falling_edge().await;
    info!("Stop button pressed");
    stop.signal(());
}
