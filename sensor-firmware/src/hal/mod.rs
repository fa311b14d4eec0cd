// Hardware Abstraction Layer (HAL) Module
//
// Konkrete ESP32-C6 Implementierungen der sensor-core Traits.

pub mod adc_sampler;
pub mod led_strip;
pub mod servo;

pub use adc_sampler::AdcSampler;
pub use led_strip::{LED_BUFFER_SIZE, RmtLedStrip};
pub use servo::LedcServos;
