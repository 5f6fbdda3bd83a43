use std::fmt::{Display, Formatter, Result as FmtResult};

/// Publication lifecycle of a work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WorkStatus {
    Ongoing,
    Completed,
    /// Reported by the API as `cancelled`.
    Abandoned,
    Hiatus,
    #[default]
    Unknown,
}
impl WorkStatus {
    /// Maps the raw API status through the fixed status table. Anything not in
    /// the table is [`Unknown`](Self::Unknown).
    pub fn from_raw(status: &str) -> Self {
        match status {
            "completed" => Self::Completed,
            "ongoing" => Self::Ongoing,
            "cancelled" => Self::Abandoned,
            "hiatus" => Self::Hiatus,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Abandoned => "Abandoned",
            Self::Hiatus => "Hiatus",
            Self::Unknown => "Unknown",
        }
    }
}
impl From<&str> for WorkStatus {
    fn from(value: &str) -> Self {
        Self::from_raw(value)
    }
}
impl Display for WorkStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("completed", WorkStatus::Completed)]
    #[case("ongoing", WorkStatus::Ongoing)]
    #[case("cancelled", WorkStatus::Abandoned)]
    #[case("hiatus", WorkStatus::Hiatus)]
    #[case("Completed", WorkStatus::Unknown)]
    #[case("abandoned", WorkStatus::Unknown)]
    #[case("", WorkStatus::Unknown)]
    fn test_status_table(#[case] raw: &str, #[case] expected: WorkStatus) {
        assert_eq!(WorkStatus::from_raw(raw), expected);
    }
}
