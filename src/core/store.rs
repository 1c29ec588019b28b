use crate::core::models::{Column, Task};

/// Where a reparented task lands in the global task list.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskAnchor {
    /// Array-move the task to the list index currently held by this task.
    AtTask(String),
    /// Leave the list position alone. The task still shows up at the end of
    /// the target column's visible stack, because rendering filters the
    /// global list by `column_id`.
    KeepPosition,
}

/// Owns the two ordered entity lists. List order is display order: columns
/// left to right, tasks top to bottom within their column once filtered by
/// `column_id`. There is no rank field.
///
/// Every mutation assigns a freshly built Vec to the list it touches, so
/// observers can detect a change without diffing contents. Operations on
/// ids the store does not know return `false` and leave both lists alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardStore {
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks belonging to one column, preserving global list order.
    pub fn tasks_in(&self, column_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .cloned()
            .collect()
    }

    /// Appends a column with a generated id and an auto-numbered title.
    pub fn add_column(&mut self) {
        let column = Column::new(format!("Column {}", self.columns.len() + 1));
        let mut next = self.columns.clone();
        next.push(column);
        self.columns = next;
    }

    pub fn rename_column(&mut self, id: &str, title: String) -> bool {
        if self.column(id).is_none() {
            return false;
        }
        self.columns = self
            .columns
            .iter()
            .map(|c| {
                if c.id == id {
                    let mut c = c.clone();
                    c.title = title.clone();
                    c
                } else {
                    c.clone()
                }
            })
            .collect();
        true
    }

    /// Removes the column and every task it owns. Tasks must never point at
    /// a column that no longer exists.
    pub fn remove_column(&mut self, id: &str) -> bool {
        if self.column(id).is_none() {
            return false;
        }
        self.columns = self.columns.iter().filter(|c| c.id != id).cloned().collect();
        self.tasks = self
            .tasks
            .iter()
            .filter(|t| t.column_id != id)
            .cloned()
            .collect();
        true
    }

    /// Appends a task owned by `column_id` with auto-numbered content.
    /// Callers pass ids they are currently rendering, so the column is not
    /// validated here.
    pub fn add_task(&mut self, column_id: &str) {
        let task = Task::new(
            column_id.to_string(),
            format!("Task {}", self.tasks.len() + 1),
        );
        let mut next = self.tasks.clone();
        next.push(task);
        self.tasks = next;
    }

    pub fn update_task_content(&mut self, id: &str, content: String) -> bool {
        if self.task(id).is_none() {
            return false;
        }
        self.tasks = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    let mut t = t.clone();
                    t.content = content.clone();
                    t
                } else {
                    t.clone()
                }
            })
            .collect();
        true
    }

    pub fn remove_task(&mut self, id: &str) -> bool {
        if self.task(id).is_none() {
            return false;
        }
        self.tasks = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        true
    }

    /// Moves the `from_id` column to the position currently held by `to_id`,
    /// shifting everything in between.
    pub fn reorder_columns(&mut self, from_id: &str, to_id: &str) -> bool {
        if from_id == to_id {
            return false;
        }
        let Some(from) = self.columns.iter().position(|c| c.id == from_id) else {
            return false;
        };
        let Some(to) = self.columns.iter().position(|c| c.id == to_id) else {
            return false;
        };
        self.columns = array_move(&self.columns, from, to);
        true
    }

    /// Same semantics as `reorder_columns`, over the global task list.
    /// Column membership plays no part here.
    pub fn reorder_tasks(&mut self, from_id: &str, to_id: &str) -> bool {
        if from_id == to_id {
            return false;
        }
        let Some(from) = self.tasks.iter().position(|t| t.id == from_id) else {
            return false;
        };
        let Some(to) = self.tasks.iter().position(|t| t.id == to_id) else {
            return false;
        };
        self.tasks = array_move(&self.tasks, from, to);
        true
    }

    /// Hands the task to `new_column_id` and repositions it per `anchor`.
    pub fn reparent_task(&mut self, task_id: &str, new_column_id: &str, anchor: TaskAnchor) -> bool {
        if self.task(task_id).is_none() {
            return false;
        }
        self.tasks = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == task_id {
                    let mut t = t.clone();
                    t.column_id = new_column_id.to_string();
                    t
                } else {
                    t.clone()
                }
            })
            .collect();
        if let TaskAnchor::AtTask(anchor_id) = anchor {
            self.reorder_tasks(task_id, &anchor_id);
        }
        true
    }
}

/// Remove the element at `from` and reinsert it at `to`, preserving the
/// relative order of everything else.
fn array_move<T: Clone>(list: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = list.to_vec();
    let item = next.remove(from);
    next.insert(to, item);
    next
}
