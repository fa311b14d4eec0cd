//! Fehler-Typen für Sensor-Logik
//!
//! Numerische Parameter (Geschwindigkeit, Winkel, Helligkeit) werden immer
//! geklemmt und erzeugen nie einen Fehler. Fehler gibt es nur für Eingaben,
//! die sich nicht sinnvoll klemmen lassen.

/// Fehler-Typ für Klassifizierung und Listener-Verwaltung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Rohwert liegt außerhalb von [0, 1023]
    OutOfDomain(i32),
    /// Listener-Registry hat keine freien Plätze mehr
    RegistryFull,
}
