use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

const ON_DUTY_DESCRIPTION: &str = "Employee is actively working on delivery/field duties";

/// Attendance statuses accepted by the HR module, including the delivery
/// staff `On Duty` extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "Present")]
    Present,
    #[serde(rename = "Absent")]
    Absent,
    #[serde(rename = "Half Day")]
    HalfDay,
    #[serde(rename = "Work From Home")]
    WorkFromHome,
    #[serde(rename = "Leave")]
    Leave,
    #[serde(rename = "On Duty")]
    OnDuty,
}

impl AttendanceStatus {
    /// Every status in display order.
    pub const ALL: [AttendanceStatus; 6] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::HalfDay,
        AttendanceStatus::WorkFromHome,
        AttendanceStatus::Leave,
        AttendanceStatus::OnDuty,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::HalfDay => "Half Day",
            AttendanceStatus::WorkFromHome => "Work From Home",
            AttendanceStatus::Leave => "Leave",
            AttendanceStatus::OnDuty => "On Duty",
        }
    }

    /// Exact, case-sensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    /// CSS class used by list and form indicators, e.g. `status-on-duty`.
    pub fn indicator_class(self) -> String {
        format!(
            "status-{}",
            self.label().to_ascii_lowercase().replace(' ', "-")
        )
    }

    pub fn description(self) -> Option<&'static str> {
        match self {
            AttendanceStatus::OnDuty => Some(ON_DUTY_DESCRIPTION),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Read access to the status field of a framework-owned record.
pub trait HasStatus {
    fn status(&self) -> Option<&str>;
}

/// Attendance document as handed over by the HR framework. The status stays a
/// raw string so unknown values reach the validator instead of failing
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 140, message = "Employee is required"))]
    pub employee: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub attendance_date: NaiveDate,
    #[serde(default)]
    pub status: Option<String>,
}

impl AttendanceRecord {
    pub fn new(employee: impl Into<String>, attendance_date: NaiveDate) -> Self {
        Self {
            name: None,
            employee: employee.into(),
            employee_name: None,
            attendance_date,
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl HasStatus for AttendanceRecord {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
