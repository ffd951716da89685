//! Per-fact outcome wrapper.

use serde::Serialize;

/// A fetched fact, or the reason it could not be produced.
///
/// Each scraped fact is wrapped individually so a failing source only blanks
/// its own line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Fact<T> {
    Available { value: T },
    Unavailable { reason: String },
}

impl<T> Fact<T> {
    pub fn available(value: T) -> Self {
        Self::Available { value }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Available { value } => Some(value),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Available { .. } => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Fact<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::available(value),
            Err(e) => Self::unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Fact<u32> = Ok::<_, String>(3).into();
        assert_eq!(ok.value(), Some(&3));
        assert!(ok.is_available());

        let err: Fact<u32> = Err::<u32, _>("boom").into();
        assert_eq!(err.reason(), Some("boom"));
        assert!(err.value().is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Fact::available(7)).unwrap();
        assert_eq!(json["status"], "available");
        assert_eq!(json["value"], 7);

        let json = serde_json::to_value(Fact::<u8>::unavailable("offline")).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["reason"], "offline");
    }
}
