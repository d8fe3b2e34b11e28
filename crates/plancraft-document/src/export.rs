//! Plain-text export of a lesson plan
//!
//! Renders the plan in the layout teachers share outside the tool: header
//! fields, then each phase's activities with content, media slots and
//! spatial arrangement. Canonical codes are rendered through their display
//! labels.

use crate::labels::{display_screen_kind, display_space_usage, phase_display_name};
use crate::model::{Activity, LessonPlan, Phase};
use std::fmt::Write;

/// Render the whole plan as shareable text
#[must_use]
pub fn render_plan_text(plan: &LessonPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "תכנית שיעור: {}\n", plan.topic);
    let _ = writeln!(out, "זמן כולל: {}", plan.duration);
    let _ = writeln!(out, "שכבת גיל: {}", plan.grade_level);
    let _ = writeln!(out, "ידע קודם: {}", plan.prior_knowledge);
    let _ = writeln!(out, "מיקום בתוכן: {}\n", plan.position);
    let _ = writeln!(out, "מטרות ברמת התוכן:\n{}\n", plan.content_goals);
    let _ = writeln!(out, "מטרות ברמת המיומנויות:\n{}\n", plan.skill_goals);

    for phase in Phase::ALL {
        let _ = writeln!(out, "== {} ==", phase_display_name(phase));
        for (i, activity) in plan.sections.phase(phase).iter().enumerate() {
            render_activity(&mut out, i, activity);
        }
        let _ = writeln!(out);
    }

    out
}

fn render_activity(out: &mut String, index: usize, activity: &Activity) {
    let _ = writeln!(out, "\nפעילות {}:", index + 1);
    let _ = writeln!(out, "תוכן: {}", activity.content);
    for (n, kind) in [
        (1, &activity.screen1),
        (2, &activity.screen2),
        (3, &activity.screen3),
    ] {
        let _ = writeln!(out, "מסך {}: {}", n, display_screen_kind(kind));
    }
    let _ = writeln!(out, "ארגון הלומדים: {}", display_space_usage(&activity.space_usage));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Activity;

    #[test]
    fn renders_header_and_phases() {
        let mut plan = LessonPlan::empty("u");
        plan.topic = "מחזור המים".to_string();
        plan.duration = "90 דקות".to_string();

        let text = render_plan_text(&plan);
        assert!(text.starts_with("תכנית שיעור: מחזור המים"));
        assert!(text.contains("זמן כולל: 90 דקות"));
        assert!(text.contains("== פתיחה =="));
        assert!(text.contains("== גוף השיעור =="));
        assert!(text.contains("== סיכום =="));
    }

    #[test]
    fn renders_activities_with_display_labels() {
        let mut plan = LessonPlan::empty("u");
        plan.sections.main.push(Activity {
            content: "ניסוי קבוצתי".to_string(),
            space_usage: "groups".to_string(),
            screen1: "video".to_string(),
            ..Activity::default()
        });

        let text = render_plan_text(&plan);
        assert!(text.contains("פעילות 1:"));
        assert!(text.contains("תוכן: ניסוי קבוצתי"));
        assert!(text.contains("מסך 1: סרטון"));
        assert!(text.contains("ארגון הלומדים: עבודה בקבוצות"));
    }
}
