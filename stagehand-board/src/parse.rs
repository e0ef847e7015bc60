//! Line-regex extraction of task checklist entries.
//!
//! Parsing is deliberately line-oriented: any line anywhere in the file
//! that looks like a task checklist entry is picked up, wherever a human
//! or the raw CLI append happened to put it. Everything else (tables,
//! decision lines, daily headings) is ignored.

use std::sync::LazyLock;

use regex::Regex;

use stagehand_core::types::{AgentId, Task, TaskId};

/// `- [ ] #T-123 [Owner: A1] Some title` — owner segment optional.
static TASK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^- \[([ x])\] (#[TB]-\d+)(?: \[Owner: (A\d+)\])? (.+)$")
        .expect("TASK_LINE is a compile-time constant")
});

/// Extract every well-formed task line from `contents`, in file order.
pub fn parse_tasks(contents: &str) -> Vec<Task> {
    contents.lines().filter_map(parse_task_line).collect()
}

/// Parse a single checklist line, or `None` when the line is not a task.
pub fn parse_task_line(line: &str) -> Option<Task> {
    let caps = TASK_LINE.captures(line.trim_end())?;
    Some(Task::new(
        TaskId::from(&caps[2]),
        caps.get(3).map(|m| AgentId::from(m.as_str())),
        &caps[4],
        &caps[1] == "x",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_task_with_owner() {
        let task = parse_task_line("- [ ] #T-102 [Owner: A2] Implement SSR app shell")
            .expect("task line");
        assert_eq!(task.id.0, "#T-102");
        assert_eq!(task.owner.as_ref().expect("owner").0, "A2");
        assert_eq!(task.title, "Implement SSR app shell");
        assert!(!task.done);
    }

    #[test]
    fn parses_done_marker() {
        let task = parse_task_line("- [x] #B-7 [Owner: A4] Fix flaky spec").expect("task line");
        assert!(task.done);
        assert_eq!(task.id.0, "#B-7");
    }

    #[test]
    fn parses_ownerless_task() {
        let task = parse_task_line("- [ ] #T-55 Triage inbox").expect("task line");
        assert!(task.owner.is_none());
        assert_eq!(task.title, "Triage inbox");
    }

    #[test]
    fn rejects_non_task_lines() {
        assert!(parse_task_line("## Tasks").is_none());
        assert!(parse_task_line("| A0 | Product Manager |").is_none());
        assert!(parse_task_line("- [ ] no id here").is_none());
        assert!(parse_task_line("- [y] #T-1 bad marker").is_none());
        assert!(parse_task_line("- [2026-01-01 00:00:00 UTC] a decision").is_none());
    }

    #[test]
    fn extracts_tasks_from_anywhere_in_the_file() {
        let contents = "\
# Task Progress

## Tasks

- [ ] #T-100 [Owner: A0] Draft the plan

## Daily Sync
- [ ] #T-900 [Owner: A3] Appended by hand at the bottom
";
        let tasks = parse_tasks(contents);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id.0, "#T-900");
    }
}
