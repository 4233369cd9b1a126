//! Task list rendering and the local search filter.
//!
//! Both are purely client-side: the filter narrows an already-fetched list,
//! and the theme only changes how the terminal output looks.

use tasktrack_types::{Task, TaskStatus};

use crate::prefs::Theme;

const RESET: &str = "\x1b[0m";

/// Case-insensitive substring match over `description`.
pub fn filter_tasks<'a>(tasks: &'a [Task], search: &str) -> Vec<&'a Task> {
    let needle = search.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.description.to_lowercase().contains(&needle))
        .collect()
}

fn status_style(status: TaskStatus, theme: Theme) -> (&'static str, &'static str) {
    // Normal intensity reads better on light backgrounds, bright on dark.
    match (status, theme) {
        (TaskStatus::Todo, Theme::Light) => ("·", "\x1b[33m"),
        (TaskStatus::Todo, Theme::Dark) => ("·", "\x1b[93m"),
        (TaskStatus::InProgress, Theme::Light) => ("›", "\x1b[34m"),
        (TaskStatus::InProgress, Theme::Dark) => ("›", "\x1b[94m"),
        (TaskStatus::Done, Theme::Light) => ("✓", "\x1b[32m"),
        (TaskStatus::Done, Theme::Dark) => ("✓", "\x1b[92m"),
    }
}

/// One line per task: glyph, status, description, id.
pub fn render_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, theme: Theme) -> String {
    let mut lines: Vec<String> = Vec::new();
    for task in tasks {
        let (glyph, color) = status_style(task.status, theme);
        lines.push(format!(
            "{color}{glyph} {:<11}{RESET} {}  ({})",
            task.status, task.description, task.id
        ));
    }
    if lines.is_empty() {
        return "(no tasks)".to_owned();
    }
    lines.join("\n")
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;

    fn task(description: &str, status: TaskStatus) -> Task {
        let now = Utc::now();
        Task {
            id: format!("id-{description}"),
            description: description.to_owned(),
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let tasks = vec![
            task("Buy Milk", TaskStatus::Todo),
            task("write spec", TaskStatus::Done),
        ];
        let hits = filter_tasks(&tasks, "MILK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Buy Milk");
        assert!(filter_tasks(&tasks, "nothing").is_empty());
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let tasks: Vec<Task> = Vec::new();
        assert_eq!(render_tasks(&tasks, Theme::Light), "(no tasks)");
    }

    #[test]
    fn rendering_includes_description_status_and_id() {
        let tasks = vec![task("write spec", TaskStatus::InProgress)];
        let out = render_tasks(&tasks, Theme::Dark);
        assert!(out.contains("write spec"));
        assert!(out.contains("in-progress"));
        assert!(out.contains("id-write spec"));
    }
}
