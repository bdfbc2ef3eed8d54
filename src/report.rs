use std::fmt::Write;

use crate::models::{AttendanceSnapshot, Selection};
use crate::planner::{BunkInput, PlanVerdict};
use crate::stats::{self, Status};

pub fn build_dashboard(snapshot: &AttendanceSnapshot, selection: &Selection) -> String {
    let course_count = snapshot.courses.len();
    let overall = stats::aggregate(&snapshot.courses, &Selection::all(course_count));
    let selected = stats::aggregate(&snapshot.courses, selection);

    let mut output = String::new();

    let _ = writeln!(output, "# Attendance Dashboard");
    let _ = writeln!(
        output,
        "Welcome back, {} ({})",
        snapshot.student_name, snapshot.roll_number
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Overall Attendance");
    let _ = writeln!(
        output,
        "{} / {} classes, {:.2}% ({})",
        overall.attended,
        overall.conducted,
        overall.percentage,
        Status::from_percentage(overall.percentage).label()
    );

    if !selection.is_full(course_count) {
        let _ = writeln!(output);
        let _ = writeln!(output, "## Selected Aggregate");
        let _ = writeln!(
            output,
            "{} / {} classes, {:.2}% ({}) across {} of {} courses",
            selected.attended,
            selected.conducted,
            selected.percentage,
            Status::from_percentage(selected.percentage).label(),
            selection.len(),
            course_count
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Course Details");

    if snapshot.courses.is_empty() {
        let _ = writeln!(output, "No courses in this snapshot.");
    } else {
        for (index, course) in snapshot.courses.iter().enumerate() {
            let percentage = stats::course_percentage(course);
            let marker = if selection.contains(index) { "x" } else { " " };
            let _ = writeln!(
                output,
                "- [{marker}] {}: {} / {} classes, {:.2}% ({})",
                course.name,
                course.attended,
                course.conducted,
                percentage,
                Status::from_percentage(percentage).label()
            );
        }
    }

    output
}

pub fn build_plan_summary(input: &BunkInput, verdict: PlanVerdict) -> String {
    let mut output = String::new();

    if let Some(current) =
        crate::planner::current_percentage(input.total_classes, input.attended_classes)
    {
        let _ = writeln!(output, "Current attendance: {current:.2}%");
    }

    match verdict {
        PlanVerdict::Skippable(count) => {
            let _ = writeln!(
                output,
                "You can safely skip {count} classes this week and stay at {:.0}%.",
                input.desired_percentage
            );
        }
        PlanVerdict::Deficit(count) => {
            let _ = writeln!(
                output,
                "You cannot skip any classes. You need to attend {count} more classes to reach {:.0}%.",
                input.desired_percentage
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseRecord;

    fn sample_snapshot() -> AttendanceSnapshot {
        AttendanceSnapshot {
            student_name: "Avery Lee".to_string(),
            roll_number: "21BCE1234".to_string(),
            courses: vec![
                CourseRecord {
                    name: "Algorithms".to_string(),
                    attended: 8,
                    conducted: 10,
                },
                CourseRecord {
                    name: "Physics".to_string(),
                    attended: 15,
                    conducted: 20,
                },
            ],
        }
    }

    #[test]
    fn full_selection_omits_the_selected_section() {
        let snapshot = sample_snapshot();
        let dashboard = build_dashboard(&snapshot, &Selection::all(2));
        assert!(dashboard.contains("Welcome back, Avery Lee (21BCE1234)"));
        assert!(dashboard.contains("23 / 30 classes, 76.67% (Safe)"));
        assert!(!dashboard.contains("Selected Aggregate"));
        assert!(dashboard.contains("- [x] Algorithms: 8 / 10 classes, 80.00% (Safe)"));
        assert!(dashboard.contains("- [x] Physics: 15 / 20 classes, 75.00% (Safe)"));
    }

    #[test]
    fn strict_subset_shows_the_selected_aggregate() {
        let snapshot = sample_snapshot();
        let selection = Selection::from_indices(&[1], 2).unwrap();
        let dashboard = build_dashboard(&snapshot, &selection);
        assert!(dashboard.contains("## Selected Aggregate"));
        assert!(dashboard.contains("15 / 20 classes, 75.00% (Safe) across 1 of 2 courses"));
        assert!(dashboard.contains("- [ ] Algorithms"));
        assert!(dashboard.contains("- [x] Physics"));
    }

    #[test]
    fn empty_snapshot_renders_a_placeholder() {
        let snapshot = AttendanceSnapshot {
            student_name: "Avery Lee".to_string(),
            roll_number: "21BCE1234".to_string(),
            courses: Vec::new(),
        };
        let dashboard = build_dashboard(&snapshot, &Selection::all(0));
        assert!(dashboard.contains("0 / 0 classes, 0.00% (Shortage)"));
        assert!(dashboard.contains("No courses in this snapshot."));
    }

    #[test]
    fn plan_summary_reports_skips_and_deficits() {
        let input = BunkInput {
            total_classes: 100,
            attended_classes: 80,
            desired_percentage: 75.0,
            classes_per_week: 10,
        };
        let summary = build_plan_summary(&input, PlanVerdict::Skippable(7));
        assert!(summary.contains("Current attendance: 80.00%"));
        assert!(summary.contains("safely skip 7 classes"));

        let summary = build_plan_summary(&input, PlanVerdict::Deficit(13));
        assert!(summary.contains("attend 13 more classes to reach 75%"));
    }
}
