use std::collections::BTreeSet;

use crate::error::InputError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub name: String,
    pub attended: u32,
    pub conducted: u32,
}

/// One login's worth of scraped attendance data. Never persisted; dropped on
/// logout. A missing snapshot means "re-authenticate", not zero attendance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSnapshot {
    pub student_name: String,
    pub roll_number: String,
    pub courses: Vec<CourseRecord>,
}

impl AttendanceSnapshot {
    /// Names of courses where the portal reported more attended sessions than
    /// conducted ones. The data is kept as-is; callers decide how to warn.
    pub fn invariant_violations(&self) -> Vec<&str> {
        self.courses
            .iter()
            .filter(|course| course.attended > course.conducted)
            .map(|course| course.name.as_str())
            .collect()
    }
}

/// Course indices included in the selected-aggregate view. Defaults to the
/// full set; only explicit toggles mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    included: BTreeSet<usize>,
}

impl Selection {
    pub fn all(course_count: usize) -> Self {
        Self {
            included: (0..course_count).collect(),
        }
    }

    pub fn from_indices(indices: &[usize], course_count: usize) -> Result<Self, InputError> {
        let mut included = BTreeSet::new();
        for &index in indices {
            if index >= course_count {
                return Err(InputError::CourseIndex {
                    index,
                    count: course_count,
                });
            }
            included.insert(index);
        }
        Ok(Self { included })
    }

    pub fn toggle(&mut self, index: usize) {
        if !self.included.remove(&index) {
            self.included.insert(index);
        }
    }

    /// Select-all when anything is unselected, deselect-all otherwise.
    pub fn toggle_all(&mut self, course_count: usize) {
        if self.included.len() == course_count {
            self.included.clear();
        } else {
            self.included = (0..course_count).collect();
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.included.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.included.len()
    }

    pub fn is_empty(&self) -> bool {
        self.included.is_empty()
    }

    pub fn is_full(&self, course_count: usize) -> bool {
        self.included.len() == course_count
    }
}

/// Summary over a course subset. Derived on demand, never stored, so the
/// numbers can not drift from the selection they describe.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub attended: u32,
    pub conducted: u32,
    /// Rounded to two decimals; 0 when nothing was conducted.
    pub percentage: f64,
}
