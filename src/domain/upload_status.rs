use std::fmt;
use std::str::FromStr;

/// Processing state of an uploaded recording. Transitions are monotonic:
/// once a terminal state is reached no further automatic transition occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadStatus {
    Uploading,
    Transcribing,
    Completed,
    Failed,
}

impl UploadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStatus::Uploading => "uploading",
            UploadStatus::Transcribing => "transcribing",
            UploadStatus::Completed => "completed",
            UploadStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Completed | UploadStatus::Failed)
    }
}

impl FromStr for UploadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uploading" => Ok(UploadStatus::Uploading),
            "transcribing" => Ok(UploadStatus::Transcribing),
            "completed" => Ok(UploadStatus::Completed),
            "failed" => Ok(UploadStatus::Failed),
            _ => Err(format!("Invalid upload status: {}", s)),
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_string_form() {
        for status in [
            UploadStatus::Uploading,
            UploadStatus::Transcribing,
            UploadStatus::Completed,
            UploadStatus::Failed,
        ] {
            assert_eq!(status.as_str().parse::<UploadStatus>(), Ok(status));
        }
    }

    #[test]
    fn only_completed_and_failed_are_terminal() {
        assert!(!UploadStatus::Uploading.is_terminal());
        assert!(!UploadStatus::Transcribing.is_terminal());
        assert!(UploadStatus::Completed.is_terminal());
        assert!(UploadStatus::Failed.is_terminal());
    }

    #[test]
    fn unknown_status_string_is_rejected() {
        assert!("queued".parse::<UploadStatus>().is_err());
    }
}
