use crate::models::{CourseRecord, Selection, Stats};

pub const SAFE_THRESHOLD: f64 = 75.0;
pub const WARNING_THRESHOLD: f64 = 65.0;

/// Display band for a percentage. Fixed policy, not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Safe,
    Warning,
    Shortage,
}

impl Status {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= SAFE_THRESHOLD {
            Status::Safe
        } else if percentage >= WARNING_THRESHOLD {
            Status::Warning
        } else {
            Status::Shortage
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Safe => "Safe",
            Status::Warning => "Warning",
            Status::Shortage => "Shortage",
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum attendance over the selected course indices. Courses outside the
/// selection are ignored; an empty selection or empty course list yields all
/// zeroes rather than a division by zero.
pub fn aggregate(courses: &[CourseRecord], selection: &Selection) -> Stats {
    let mut attended = 0u32;
    let mut conducted = 0u32;

    for (index, course) in courses.iter().enumerate() {
        if !selection.contains(index) {
            continue;
        }
        attended += course.attended;
        conducted += course.conducted;
    }

    let percentage = if conducted > 0 {
        round2(attended as f64 / conducted as f64 * 100.0)
    } else {
        0.0
    };

    Stats {
        attended,
        conducted,
        percentage,
    }
}

/// Same formula applied to a single course, for per-row display.
pub fn course_percentage(course: &CourseRecord) -> f64 {
    if course.conducted > 0 {
        round2(course.attended as f64 / course.conducted as f64 * 100.0)
    } else {
        0.0
    }
}
