//! One-line board context summaries.

use stagehand_core::types::Task;

/// `Total: N, Done: D, Todo: T` for the given task list.
///
/// Also used verbatim as the daily sync summary.
pub fn board_context(tasks: &[Task]) -> String {
    let done = tasks.iter().filter(|t| t.done).count();
    format!(
        "Total: {}, Done: {}, Todo: {}",
        tasks.len(),
        done,
        tasks.len() - done
    )
}
