// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed, timer};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module
use sensor_firmware::hal::{AdcSampler, LedcServos, servo};
use sensor_firmware::tasks::{
    joystick_task, sensor_report_task, servo_drive_task, stop_button_task,
};
use sensor_firmware::{JoystickChannel, SharedSampler, StopSignal};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // ADC für P0/P1/P2, geteilt zwischen Joystick- und Report-Task
    static SAMPLER: static_cell::StaticCell<SharedSampler> = static_cell::StaticCell::new();
    let sampler = &*SAMPLER.init(Mutex::new(AdcSampler::new(
        peripherals.ADC1,
        peripherals.GPIO0,
        peripherals.GPIO1,
        peripherals.GPIO2,
    )));

    // LEDC für die Servos: Controller und Timer müssen 'static sein
    static LEDC: static_cell::StaticCell<Ledc<'static>> = static_cell::StaticCell::new();
    let ledc = LEDC.init(Ledc::new(peripherals.LEDC));
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
    let ledc: &'static Ledc<'static> = ledc;

    static SERVO_TIMER: static_cell::StaticCell<timer::Timer<'static, LowSpeed>> =
        static_cell::StaticCell::new();
    let servo_timer =
        SERVO_TIMER.init(servo::init_timer(ledc).expect("Failed to configure servo timer"));

    let servos = LedcServos::new(
        ledc,
        servo_timer,
        peripherals.GPIO18,
        peripherals.GPIO19,
        peripherals.GPIO20,
    )
    .expect("Failed to configure servo channels");

    // Joystick-Channel: Joystick-Task → Servo-Task
    // Params: <Mutex, Message, Capacity, MaxSubscribers, MaxPublishers>
    static JOYSTICK_CHANNEL: static_cell::StaticCell<JoystickChannel> =
        static_cell::StaticCell::new();
    let joystick_channel = &*JOYSTICK_CHANNEL.init(JoystickChannel::new());

    // Stopp-Signal: BOOT-Taster → Joystick-Task
    static STOP: static_cell::StaticCell<StopSignal> = static_cell::StaticCell::new();
    let stop = &*STOP.init(StopSignal::new());

    // Listener zuerst spawnen, damit keine Richtung verloren geht
    spawner
        .spawn(servo_drive_task(servos, joystick_channel.subscriber().unwrap()))
        .unwrap();

    spawner
        .spawn(joystick_task(
            sampler,
            joystick_channel.publisher().unwrap(),
            stop,
        ))
        .unwrap();

    spawner
        .spawn(sensor_report_task(peripherals.GPIO8, peripherals.RMT, sampler))
        .unwrap();

    let button = Input::new(
        peripherals.GPIO9,
        InputConfig::default().with_pull(Pull::Up),
    );
    spawner.spawn(stop_button_task(button, stop)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
