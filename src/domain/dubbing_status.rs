use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DubbingStatus {
    Processing,
    Completed,
    Failed,
}

impl DubbingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DubbingStatus::Processing => "processing",
            DubbingStatus::Completed => "completed",
            DubbingStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DubbingStatus::Completed | DubbingStatus::Failed)
    }
}

impl FromStr for DubbingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(DubbingStatus::Processing),
            "completed" => Ok(DubbingStatus::Completed),
            "failed" => Ok(DubbingStatus::Failed),
            _ => Err(format!("Invalid dubbing status: {}", s)),
        }
    }
}

impl fmt::Display for DubbingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
