use serde::Serialize;

/// Lunar phase on a given date, as published by the source page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoonPhase {
    /// Phase name, e.g. "Waxing Gibbous".
    pub phase: String,
    /// Illumination as printed by the source, e.g. "87%".
    pub illumination: String,
    pub source_url: String,
}
