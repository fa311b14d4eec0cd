// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels (Joystick → Servo) und teilen
// sich den ADC über einen Mutex.

pub mod joystick;
pub mod sensor_report;
pub mod servo_drive;
pub mod stop_button;

// Re-export Tasks für einfachen Import
pub use joystick::joystick_task;
pub use sensor_report::sensor_report_task;
pub use servo_drive::servo_drive_task;
pub use stop_button::stop_button_task;
