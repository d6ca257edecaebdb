use serde::{Deserialize, Serialize};

/// Scores at or above this are [`Status::Good`].
pub const GOOD_THRESHOLD: f64 = 80.0;

/// Scores at or above this, but below [`GOOD_THRESHOLD`], are
/// [`Status::Warning`].
pub const WARNING_THRESHOLD: f64 = 50.0;

/// Severity tier of an EAI score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Good,
    Warning,
    Bad,
    Unknown,
}

/// Maps a score to its severity tier.
///
/// Boundary values belong to the higher tier: 80.0 is good, 50.0 is
/// warning. An absent score is unknown. This is the only place the
/// thresholds live; tables, cards and chart colors all go through here.
pub fn classify(eai: Option<f64>) -> Status {
    match eai {
        None => Status::Unknown,
        Some(score) if score >= GOOD_THRESHOLD => Status::Good,
        Some(score) if score >= WARNING_THRESHOLD => Status::Warning,
        Some(_) => Status::Bad,
    }
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Good => "good",
            Status::Warning => "warning",
            Status::Bad => "bad",
            Status::Unknown => "unknown",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            Status::Good => "Good",
            Status::Warning => "Warning",
            Status::Bad => "Bad",
            Status::Unknown => "Unknown",
        }
    }

    pub fn label_vi(&self) -> &'static str {
        match self {
            Status::Good => "Tốt",
            Status::Warning => "Cảnh cáo",
            Status::Bad => "Xấu",
            Status::Unknown => "Không xác định",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Status::Good => "#22c55e",
            Status::Warning => "#eab308",
            Status::Bad => "#ef4444",
            Status::Unknown => "#6b7280",
        }
    }

    /// The label object in the shape the service sends alongside scores.
    pub fn label(&self) -> StatusLabel {
        StatusLabel {
            vi: self.label_vi().to_string(),
            en: self.label_en().to_string(),
            color: self.color().to_string(),
        }
    }
}

/// Localized display labels for a status tier, as supplied by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLabel {
    pub vi: String,
    pub en: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_higher_tier() {
        assert_eq!(classify(Some(80.0)), Status::Good);
        assert_eq!(classify(Some(79.99)), Status::Warning);
        assert_eq!(classify(Some(50.0)), Status::Warning);
        assert_eq!(classify(Some(49.99)), Status::Bad);
    }

    #[test]
    fn absent_score_is_unknown() {
        assert_eq!(classify(None), Status::Unknown);
    }

    #[test]
    fn extremes() {
        assert_eq!(classify(Some(100.0)), Status::Good);
        assert_eq!(classify(Some(0.0)), Status::Bad);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Warning).unwrap(), "\"warning\"");
        let status: Status = serde_json::from_str("\"good\"").unwrap();
        assert_eq!(status, Status::Good);
    }
}
