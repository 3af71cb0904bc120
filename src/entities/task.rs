use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub important: bool,
    /// Stored with the task; nothing on the screen reads it.
    pub my_day: bool,
}

impl Task {
    pub fn new(id: &str, text: &str, completed: bool, important: bool, my_day: bool) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            completed,
            important,
            my_day,
        }
    }
}

/// Tasks split by their completed flag, each half in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPartition<'a> {
    pub pending: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

/// Split tasks into pending and completed in a single pass.
pub fn partition(tasks: &[Task]) -> TaskPartition<'_> {
    let (completed, pending): (Vec<&Task>, Vec<&Task>) = tasks.iter().partition(|task| task.completed);
    TaskPartition { pending, completed }
}
