//! Integration Tests für Sensor Logic
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Implementierungen
//! aller Hardware-Traits.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use proptest::prelude::*;
use rgb::RGB8;
use sensor_core::io::{
    is_button_pressed, is_crash_sensor_pressed, is_line_follower_on, potentiometer_value,
    set_display_brightness, set_strip_brightness, show_number, strip_brightness,
    on_gesture, temperature_celsius, turn_on_off_audio_output, turn_on_off_led,
};
use sensor_core::joystick::{POLL_FINE_WAIT_US, POLL_PAUSE_MS};
use sensor_core::{
    ActuatorError, AnalogSampler, AudioOutput, AudioOutputPin, DigitalPins, DirectionSink, EdgePin,
    GestureSensor, GroveGesture, InitialPin, JoystickDirection, JoystickPoller, LedStrip, LightRange, ListenerRegistry,
    MoistureRange, OperationStatus, PeakHold, PinPull, PotentiometerUnit, RawSample,
    SegmentDisplay, SensorError, ServoActuator, ServoCommand, ServoDirection, ServoPin,
    SensorGesture, SoundRange, StopFlag, continuous_servo_write, drive_angle, legacy_drive_value,
    light_is, moisture_is, release_all, servo_write_angle, sound_is,
};

// ============================================================================
// Mocks
// ============================================================================

/// Liefert pro Pin vorgegebene Werte, danach immer den letzten Wert
#[derive(Default)]
pub struct MockSampler {
    queued: HashMap<InitialPin, VecDeque<u16>>,
    last: HashMap<InitialPin, u16>,
    pub read_count: usize,
}

impl MockSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(pin: InitialPin, values: &[u16]) -> Self {
        let mut sampler = Self::new();
        sampler.queue(pin, values);
        sampler
    }

    pub fn queue(&mut self, pin: InitialPin, values: &[u16]) {
        self.queued.entry(pin).or_default().extend(values.iter().copied());
    }
}

impl AnalogSampler for MockSampler {
    fn read_analog(&mut self, pin: InitialPin) -> RawSample {
        self.read_count += 1;
        let value = match self.queued.get_mut(&pin).and_then(VecDeque::pop_front) {
            Some(value) => value,
            None => self.last.get(&pin).copied().unwrap_or(0),
        };
        self.last.insert(pin, value);
        RawSample::saturating(value as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServoOp {
    Write(ServoPin, u8),
    Release(ServoPin),
}

#[derive(Default)]
pub struct MockServo {
    pub ops: Vec<ServoOp>,
    pub fail_next_write: bool,
}

impl ServoActuator for MockServo {
    fn write_angle(&mut self, pin: ServoPin, angle: u8) -> Result<(), ActuatorError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(ActuatorError::WriteFailed);
        }
        self.ops.push(ServoOp::Write(pin, angle));
        Ok(())
    }

    fn release(&mut self, pin: ServoPin) -> Result<(), ActuatorError> {
        self.ops.push(ServoOp::Release(pin));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockStrip {
    brightness: u8,
    pub last_color: Option<RGB8>,
}

impl LedStrip for MockStrip {
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn show_color(&mut self, color: RGB8) -> Result<(), ActuatorError> {
        self.last_color = Some(color);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDisplay {
    pub number: Option<i32>,
    pub level: Option<u8>,
}

impl SegmentDisplay for MockDisplay {
    fn show(&mut self, number: i32) {
        self.number = Some(number);
    }

    fn set_level(&mut self, level: u8) {
        self.level = Some(level);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOp {
    Read(EdgePin),
    Write(EdgePin, bool),
    Pull(EdgePin, PinPull),
}

#[derive(Default)]
pub struct MockDigitalPins {
    pub levels: HashMap<EdgePin, bool>,
    pub ops: Vec<PinOp>,
}

impl DigitalPins for MockDigitalPins {
    fn read_digital(&mut self, pin: EdgePin) -> bool {
        self.ops.push(PinOp::Read(pin));
        self.levels.get(&pin).copied().unwrap_or(false)
    }

    fn write_digital(&mut self, pin: EdgePin, high: bool) {
        self.ops.push(PinOp::Write(pin, high));
        self.levels.insert(pin, high);
    }

    fn set_pull(&mut self, pin: EdgePin, pull: PinPull) {
        self.ops.push(PinOp::Pull(pin, pull));
    }
}

#[derive(Default)]
pub struct MockAudio {
    pub pitch_pin: Option<EdgePin>,
    pub power_down_played: usize,
}

impl AudioOutput for MockAudio {
    fn set_pitch_pin(&mut self, pin: EdgePin) {
        self.pitch_pin = Some(pin);
    }

    fn play_power_down(&mut self) {
        self.power_down_played += 1;
    }
}

/// Zählt Wartezeiten und setzt nach `stop_after` Pausen das Stopp-Signal
pub struct MockDelay<'a> {
    pub pauses_ms: Vec<u32>,
    pub waits_us: Vec<u32>,
    stop_after: usize,
    stop: &'a StopFlag,
}

impl<'a> MockDelay<'a> {
    pub fn new(stop_after: usize, stop: &'a StopFlag) -> Self {
        Self {
            pauses_ms: Vec::new(),
            waits_us: Vec::new(),
            stop_after,
            stop,
        }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_us(&mut self, us: u32) {
        self.waits_us.push(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.pauses_ms.push(ms);
        if self.pauses_ms.len() >= self.stop_after {
            self.stop.stop();
        }
    }
}

type Log = Rc<RefCell<Vec<(u8, JoystickDirection)>>>;

/// Listener, der jede Meldung mit seiner Kennung protokolliert
pub struct Recorder {
    id: u8,
    log: Log,
}

impl Recorder {
    pub fn new(id: u8, log: &Log) -> Self {
        Self {
            id,
            log: Rc::clone(log),
        }
    }
}

impl DirectionSink for Recorder {
    fn signal(&mut self, direction: JoystickDirection) {
        self.log.borrow_mut().push((self.id, direction));
    }
}

/// Gesten-Sensor mit fester Kapazität, `detect` simuliert eine erkannte Geste
pub struct MockGestureSensor {
    listeners: Vec<(GroveGesture, Box<dyn FnMut()>)>,
    capacity: usize,
}

impl MockGestureSensor {
    pub fn new(capacity: usize) -> Self {
        Self {
            listeners: Vec::new(),
            capacity,
        }
    }

    pub fn detect(&mut self, gesture: GroveGesture) {
        for (code, listener) in &mut self.listeners {
            if *code == gesture {
                listener();
            }
        }
    }
}

impl GestureSensor for MockGestureSensor {
    type Listener = Box<dyn FnMut()>;

    fn subscribe(&mut self, gesture: GroveGesture, listener: Self::Listener) -> Result<(), SensorError> {
        if self.listeners.len() >= self.capacity {
            return Err(SensorError::RegistryFull);
        }
        self.listeners.push((gesture, listener));
        Ok(())
    }
}

// ============================================================================
// Tests: Klassifizierung
// ============================================================================

#[test]
fn test_moisture_predicate_reads_once() {
    let mut sampler = MockSampler::with_values(InitialPin::P0, &[450]);
    assert!(moisture_is(&mut sampler, InitialPin::P0, MoistureRange::Wet));
    assert_eq!(sampler.read_count, 1);
}

#[test]
fn test_light_predicate() {
    let mut sampler = MockSampler::with_values(InitialPin::P1, &[614]);
    assert!(light_is(&mut sampler, InitialPin::P1, LightRange::Dark));
    assert!(!light_is(&mut sampler, InitialPin::P1, LightRange::Shadow));
}

#[test]
fn test_sound_predicate_uses_peak_of_101_reads() {
    let mut values = vec![50u16; 101];
    values[73] = 300;
    let mut sampler = MockSampler::with_values(InitialPin::P2, &values);
    assert!(sound_is(&mut sampler, InitialPin::P2, SoundRange::High));
    assert_eq!(sampler.read_count, 101);
}

#[test]
fn test_sound_predicate_ignores_values_after_window() {
    let mut values = vec![50u16; 101];
    values.push(1000);
    let mut sampler = MockSampler::with_values(InitialPin::P0, &values);
    assert!(sound_is(&mut sampler, InitialPin::P0, SoundRange::Low));
}

#[test]
fn test_classify_rejects_out_of_domain() {
    assert_eq!(MoistureRange::classify(1024), Err(SensorError::OutOfDomain(1024)));
    assert_eq!(LightRange::classify(-5), Err(SensorError::OutOfDomain(-5)));
}

// ============================================================================
// Tests: Servos
// ============================================================================

#[test]
fn test_continuous_servo_drive() {
    let mut servo = MockServo::default();
    let command =
        continuous_servo_write(&mut servo, ServoPin::P13, ServoDirection::Counterclockwise, 50)
            .unwrap();
    assert_eq!(command, ServoCommand::Drive(103));
    assert_eq!(servo.ops, vec![ServoOp::Write(ServoPin::P13, 103)]);
}

#[test]
fn test_continuous_servo_stop_releases_pin() {
    for direction in [ServoDirection::Clockwise, ServoDirection::Counterclockwise] {
        let mut servo = MockServo::default();
        let command = continuous_servo_write(&mut servo, ServoPin::P14, direction, 0).unwrap();
        assert_eq!(command, ServoCommand::Stop);
        assert_eq!(
            servo.ops,
            vec![ServoOp::Write(ServoPin::P14, 90), ServoOp::Release(ServoPin::P14)]
        );
    }
}

#[test]
fn test_continuous_servo_negative_speed_keeps_driving() {
    let mut servo = MockServo::default();
    let cw = continuous_servo_write(&mut servo, ServoPin::P13, ServoDirection::Clockwise, -20);
    let ccw =
        continuous_servo_write(&mut servo, ServoPin::P14, ServoDirection::Counterclockwise, -20);
    assert_eq!(cw, Ok(ServoCommand::Drive(88)));
    assert_eq!(ccw, Ok(ServoCommand::Drive(92)));
    assert_eq!(
        servo.ops,
        vec![ServoOp::Write(ServoPin::P13, 88), ServoOp::Write(ServoPin::P14, 92)]
    );
}

#[test]
fn test_continuous_servo_write_error_propagates() {
    let mut servo = MockServo {
        fail_next_write: true,
        ..Default::default()
    };
    let result = continuous_servo_write(&mut servo, ServoPin::P15, ServoDirection::Clockwise, 0);
    assert_eq!(result, Err(ActuatorError::WriteFailed));
    assert!(servo.ops.is_empty());
}

#[test]
fn test_servo_write_angle_clamps() {
    let mut servo = MockServo::default();
    assert_eq!(servo_write_angle(&mut servo, ServoPin::P13, -10), Ok(0));
    assert_eq!(servo_write_angle(&mut servo, ServoPin::P14, 200), Ok(180));
    assert_eq!(servo_write_angle(&mut servo, ServoPin::P15, 90), Ok(90));
    assert_eq!(
        servo.ops,
        vec![
            ServoOp::Write(ServoPin::P13, 0),
            ServoOp::Write(ServoPin::P14, 180),
            ServoOp::Write(ServoPin::P15, 90),
        ]
    );
}

#[test]
fn test_release_all_servos() {
    let mut servo = MockServo::default();
    assert_eq!(release_all(&mut servo), Ok(()));
    assert_eq!(
        servo.ops,
        vec![
            ServoOp::Release(ServoPin::P13),
            ServoOp::Release(ServoPin::P14),
            ServoOp::Release(ServoPin::P15),
        ]
    );
}

#[test]
fn test_legacy_drive_value_ignores_speed() {
    assert_eq!(legacy_drive_value(10, ServoDirection::Clockwise), -900);
    assert_eq!(legacy_drive_value(100, ServoDirection::Clockwise), -900);
    assert_eq!(legacy_drive_value(10, ServoDirection::Counterclockwise), 1260);
}

// ============================================================================
// Tests: Joystick
// ============================================================================

#[test]
fn test_poller_signals_every_cycle_in_order() {
    let mut sampler = MockSampler::new();
    sampler.queue(InitialPin::P0, &[500, 700, 200]);
    sampler.queue(InitialPin::P1, &[700, 700, 500]);

    let log: Log = Rc::default();
    let mut sink = Recorder::new(0, &log);
    let mut poller = JoystickPoller::new(InitialPin::P0, InitialPin::P1);

    for _ in 0..3 {
        poller.poll_once(&mut sampler, &mut sink);
    }

    let directions: Vec<_> = log.borrow().iter().map(|(_, d)| *d).collect();
    assert_eq!(
        directions,
        vec![JoystickDirection::Up, JoystickDirection::UpRight, JoystickDirection::Left]
    );
    assert_eq!(poller.cycles(), 3);
}

#[test]
fn test_poller_run_until_stopped() {
    const CYCLES: usize = 5;
    let stop = StopFlag::new();
    let mut delay = MockDelay::new(CYCLES, &stop);
    let mut sampler = MockSampler::new();
    sampler.queue(InitialPin::P1, &[200]);
    sampler.queue(InitialPin::P2, &[500]);

    let log: Log = Rc::default();
    let mut sink = Recorder::new(0, &log);
    let mut poller = JoystickPoller::new(InitialPin::P1, InitialPin::P2);

    let executed = poller.run(&mut sampler, &mut sink, &mut delay, &stop);

    assert_eq!(executed as usize, CYCLES);
    assert_eq!(log.borrow().len(), CYCLES);
    assert!(log.borrow().iter().all(|(_, d)| *d == JoystickDirection::Left));
    assert_eq!(delay.pauses_ms, vec![POLL_PAUSE_MS; CYCLES]);
    assert_eq!(delay.waits_us, vec![POLL_FINE_WAIT_US; CYCLES]);
}

#[test]
fn test_poller_does_not_run_when_already_stopped() {
    let stop = StopFlag::new();
    stop.stop();
    let mut delay = MockDelay::new(1, &stop);
    let mut sampler = MockSampler::new();
    let log: Log = Rc::default();
    let mut sink = Recorder::new(0, &log);

    let executed =
        JoystickPoller::new(InitialPin::P0, InitialPin::P1).run(&mut sampler, &mut sink, &mut delay, &stop);

    assert_eq!(executed, 0);
    assert_eq!(sampler.read_count, 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_registry_dispatches_in_registration_order() {
    let log: Log = Rc::default();
    let mut registry: ListenerRegistry<Recorder, 4> = ListenerRegistry::new();
    registry.subscribe(JoystickDirection::Up, Recorder::new(1, &log)).unwrap();
    registry.subscribe(JoystickDirection::Down, Recorder::new(2, &log)).unwrap();
    registry.subscribe(JoystickDirection::Up, Recorder::new(3, &log)).unwrap();

    registry.signal(JoystickDirection::Up);
    registry.signal(JoystickDirection::None);

    assert_eq!(
        *log.borrow(),
        vec![(1, JoystickDirection::Up), (3, JoystickDirection::Up)]
    );
}

#[test]
fn test_registry_full() {
    let log: Log = Rc::default();
    let mut registry: ListenerRegistry<Recorder, 1> = ListenerRegistry::new();
    assert!(registry.subscribe(JoystickDirection::Left, Recorder::new(1, &log)).is_ok());
    assert_eq!(
        registry.subscribe(JoystickDirection::Right, Recorder::new(2, &log)),
        Err(SensorError::RegistryFull)
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_late_subscriber_misses_earlier_signals() {
    let log: Log = Rc::default();
    let mut sampler = MockSampler::new();
    sampler.queue(InitialPin::P0, &[500]);
    sampler.queue(InitialPin::P1, &[200]);
    let mut registry: ListenerRegistry<Recorder, 2> = ListenerRegistry::new();
    let mut poller = JoystickPoller::new(InitialPin::P0, InitialPin::P1);

    poller.poll_once(&mut sampler, &mut registry);
    registry.subscribe(JoystickDirection::Down, Recorder::new(7, &log)).unwrap();
    poller.poll_once(&mut sampler, &mut registry);

    assert_eq!(*log.borrow(), vec![(7, JoystickDirection::Down)]);
}

// ============================================================================
// Tests: Gesten
// ============================================================================

#[test]
fn test_on_gesture_subscribes_with_driver_code() {
    let log: Rc<RefCell<Vec<u8>>> = Rc::default();
    let mut sensor = MockGestureSensor::new(4);

    let first = Rc::clone(&log);
    let code = on_gesture(&mut sensor, SensorGesture::Clockwise, Box::new(move || first.borrow_mut().push(1)));
    let second = Rc::clone(&log);
    on_gesture(&mut sensor, SensorGesture::Wave, Box::new(move || second.borrow_mut().push(2))).unwrap();
    let third = Rc::clone(&log);
    on_gesture(&mut sensor, SensorGesture::Clockwise, Box::new(move || third.borrow_mut().push(3))).unwrap();

    assert_eq!(code, Ok(GroveGesture::Clockwise));
    assert_eq!(GroveGesture::Clockwise.code(), 7);

    sensor.detect(GroveGesture::Clockwise);
    assert_eq!(*log.borrow(), vec![1, 3]);

    sensor.detect(GroveGesture::Anticlockwise);
    assert_eq!(*log.borrow(), vec![1, 3]);
}

#[test]
fn test_on_gesture_registry_full() {
    let mut sensor = MockGestureSensor::new(1);
    assert!(on_gesture(&mut sensor, SensorGesture::Up, Box::new(|| {})).is_ok());
    assert_eq!(
        on_gesture(&mut sensor, SensorGesture::Down, Box::new(|| {})),
        Err(SensorError::RegistryFull)
    );
}

// ============================================================================
// Tests: Digitale Sensoren und Ausgänge
// ============================================================================

#[test]
fn test_turn_on_led() {
    let mut pins = MockDigitalPins::default();
    turn_on_off_led(&mut pins, OperationStatus::TurnOn, EdgePin::P3);
    assert_eq!(
        pins.ops,
        vec![
            PinOp::Read(EdgePin::P3),
            PinOp::Pull(EdgePin::P3, PinPull::Up),
            PinOp::Write(EdgePin::P3, true),
        ]
    );
}

#[test]
fn test_audio_output_on_and_off() {
    let mut audio = MockAudio::default();
    let mut pins = MockDigitalPins::default();

    turn_on_off_audio_output(&mut audio, &mut pins, OperationStatus::TurnOn, AudioOutputPin::default());
    assert_eq!(audio.pitch_pin, Some(EdgePin::P8));
    assert!(pins.ops.is_empty());

    turn_on_off_audio_output(&mut audio, &mut pins, OperationStatus::TurnOff, AudioOutputPin::P1);
    assert_eq!(audio.power_down_played, 1);
    assert_eq!(
        pins.ops,
        vec![PinOp::Read(EdgePin::P1), PinOp::Pull(EdgePin::P1, PinPull::Down)]
    );
}

#[test]
fn test_digital_sensor_polarity() {
    let mut pins = MockDigitalPins::default();
    pins.levels.insert(EdgePin::P5, true);

    assert!(is_button_pressed(&mut pins, EdgePin::P5));
    assert!(!is_crash_sensor_pressed(&mut pins, EdgePin::P5));
    assert!(!is_line_follower_on(&mut pins, EdgePin::P5));
    assert_eq!(pins.ops[1], PinOp::Pull(EdgePin::P5, PinPull::None));

    pins.levels.insert(EdgePin::P5, false);
    assert!(is_crash_sensor_pressed(&mut pins, EdgePin::P5));
    assert!(is_line_follower_on(&mut pins, EdgePin::P5));
}

// ============================================================================
// Tests: LED-Strip, Anzeige, analoge Messwerte
// ============================================================================

#[test]
fn test_strip_brightness_clamped() {
    let mut strip = MockStrip::default();
    assert_eq!(set_strip_brightness(&mut strip, 120), 50);
    assert_eq!(strip_brightness(&strip), 50);
    assert_eq!(set_strip_brightness(&mut strip, -1), 0);
    assert_eq!(strip_brightness(&strip), 0);
}

#[test]
fn test_display_level_clamped() {
    let mut display = MockDisplay::default();
    assert_eq!(set_display_brightness(&mut display, 12), 7);
    assert_eq!(display.level, Some(7));
    show_number(&mut display, 1234);
    assert_eq!(display.number, Some(1234));
}

#[test]
fn test_potentiometer_units() {
    let mut sampler = MockSampler::with_values(InitialPin::P2, &[1023]);
    assert_eq!(potentiometer_value(&mut sampler, InitialPin::P2, PotentiometerUnit::Angle), 300);
    assert_eq!(potentiometer_value(&mut sampler, InitialPin::P2, PotentiometerUnit::Number), 1023);
}

#[test]
fn test_temperature_with_offset() {
    let mut sampler = MockSampler::with_values(InitialPin::P0, &[240]);
    assert_eq!(temperature_celsius(&mut sampler, InitialPin::P0, 3), 28);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn moisture_partition_is_exhaustive(value in 0i32..=1023) {
        let range = MoistureRange::classify(value).unwrap();
        let expected = if value <= 300 {
            MoistureRange::Dry
        } else if value <= 600 {
            MoistureRange::Wet
        } else {
            MoistureRange::Saturated
        };
        prop_assert_eq!(range, expected);
    }

    #[test]
    fn light_partition_is_monotonic(a in 0i32..=1023, b in 0i32..=1023) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let rank = |r: LightRange| r as u8;
        prop_assert!(rank(LightRange::classify(low).unwrap()) <= rank(LightRange::classify(high).unwrap()));
    }

    #[test]
    fn sound_classify_total_on_domain(value in 0i32..=1023) {
        prop_assert!(SoundRange::classify(value).is_ok());
    }

    #[test]
    fn out_of_domain_is_error(value in prop_oneof![i32::MIN..0i32, 1024i32..=i32::MAX]) {
        prop_assert_eq!(MoistureRange::classify(value), Err(SensorError::OutOfDomain(value)));
        prop_assert_eq!(SoundRange::classify(value), Err(SensorError::OutOfDomain(value)));
    }

    #[test]
    fn speed_above_100_behaves_like_100(speed in 100i32..=i32::MAX, cw in any::<bool>()) {
        let direction = if cw { ServoDirection::Clockwise } else { ServoDirection::Counterclockwise };
        prop_assert_eq!(drive_angle(speed, direction), drive_angle(100, direction));
    }

    #[test]
    fn negative_speed_drives_slowest_band(speed in i32::MIN..0i32) {
        prop_assert_eq!(drive_angle(speed, ServoDirection::Clockwise), ServoCommand::Drive(88));
        prop_assert_eq!(drive_angle(speed, ServoDirection::Counterclockwise), ServoCommand::Drive(92));
    }

    #[test]
    fn drive_directions_are_mirrored(speed in 1i32..=100) {
        let cw = drive_angle(speed, ServoDirection::Clockwise).angle() as i32;
        let ccw = drive_angle(speed, ServoDirection::Counterclockwise).angle() as i32;
        prop_assert_eq!(90 - cw, ccw - 90);
        prop_assert!(cw < 90 && ccw > 90);
    }

    #[test]
    fn peak_hold_independent_of_position(
        peak in 1u16..=1023,
        position in 0usize..101,
        noise in proptest::collection::vec(0u16..1023, 101),
    ) {
        let mut values: Vec<u16> = noise.iter().map(|v| v % peak).collect();
        values[position] = peak;
        let mut sampler = MockSampler::with_values(InitialPin::P0, &values);

        let sampled = PeakHold::default().sample(&mut sampler, InitialPin::P0);

        prop_assert_eq!(sampled.value(), peak);
        prop_assert_eq!(
            SoundRange::from_sample(sampled),
            SoundRange::classify(peak as i32).unwrap()
        );
    }

    #[test]
    fn angle_clamp_stays_in_servo_range(angle in any::<i32>()) {
        let mut servo = MockServo::default();
        let written = servo_write_angle(&mut servo, ServoPin::P13, angle).unwrap();
        prop_assert!(written <= 180);
        if (0..=180).contains(&angle) {
            prop_assert_eq!(written as i32, angle);
        }
    }
}
