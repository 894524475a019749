// SPDX-License-Identifier: Apache-2.0

//! HTML rendering of the task list. Every piece of user-supplied text goes
//! through [`escape_html`] before insertion; that is a security property of
//! the view, not a style choice.

use chrono::{DateTime, Local, Utc};
use taskdeck_api::TaskDto;

pub const EMPTY_STATE_HTML: &str = r#"<div class="empty-state">No tasks yet. Add one above!</div>"#;
pub const LOAD_FAILED_HTML: &str =
    r#"<div class="empty-state">Failed to load tasks. Make sure the server is running.</div>"#;

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `"1 task"` / `"n tasks"`, from the server-reported count.
#[must_use]
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}

fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[must_use]
pub fn render_task(task: &TaskDto) -> String {
    let item_class = if task.completed {
        "task-item completed"
    } else {
        "task-item"
    };
    let toggle_label = if task.completed { "Undo" } else { "Complete" };
    let description = if task.description.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="task-description">{}</div>"#,
            escape_html(&task.description)
        )
    };
    format!(
        r#"<div class="{item_class}" data-id="{id}"><div class="task-header"><div class="task-title">{title}</div></div>{description}<div class="task-actions"><button class="btn btn-small btn-success">{toggle_label}</button><button class="btn btn-small btn-danger">Delete</button></div><div class="task-meta">Created: {created}</div></div>"#,
        id = task.id,
        title = escape_html(&task.title),
        created = format_created_at(&task.created_at),
    )
}

#[must_use]
pub fn render_tasks(tasks: &[TaskDto]) -> String {
    if tasks.is_empty() {
        return EMPTY_STATE_HTML.to_string();
    }
    tasks.iter().map(render_task).collect()
}
