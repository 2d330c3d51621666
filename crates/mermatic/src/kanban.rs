//! Kanban board diagrams.
//!
//! Columns and their tasks are identified positionally: the renderer
//! assigns `column{i}` ids by column declaration order and `task{i}{j}` ids
//! by task order local to each column. Callers never supply keys. Task
//! metadata renders as an `@{ ... }` suffix only when at least one field is
//! present; the suffix key order is fixed (`assigned`, `ticket`,
//! `priority`) regardless of the order the fields were supplied.

use mermatic_core::{BuildError, Mode, guard, text::INDENT};

use crate::diagram::{Diagram, DiagramKind};

/// One appended construct in a kanban diagram.
#[derive(Debug, Clone)]
pub enum KanbanItem {
    /// A column and its locally-ordered tasks.
    Column {
        /// Column display name.
        name: String,
        /// Tasks belonging to this column, in declaration order.
        tasks: Vec<KanbanTask>,
    },
}

/// One task inside a kanban column.
#[derive(Debug, Clone)]
pub struct KanbanTask {
    description: String,
    metadata: TaskMetadata,
}

/// Optional metadata attached to a kanban task.
///
/// # Example
///
/// ```
/// use mermatic::{Priority, TaskMetadata};
///
/// let meta = TaskMetadata::new()
///     .with_ticket("MC-2037")
///     .with_priority(Priority::VeryHigh);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskMetadata {
    assigned: Option<String>,
    ticket: Option<String>,
    priority: Option<Priority>,
}

impl TaskMetadata {
    /// Creates metadata with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the assignee.
    pub fn with_assigned(mut self, assigned: &str) -> Self {
        self.assigned = Some(assigned.to_owned());
        self
    }

    /// Sets the ticket reference.
    pub fn with_ticket(mut self, ticket: &str) -> Self {
        self.ticket = Some(ticket.to_owned());
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    fn is_empty(&self) -> bool {
        self.assigned.is_none() && self.ticket.is_none() && self.priority.is_none()
    }

    fn suffix(&self) -> String {
        let mut parts = Vec::new();
        if let Some(assigned) = &self.assigned {
            parts.push(format!("assigned: '{assigned}'"));
        }
        if let Some(ticket) = &self.ticket {
            parts.push(format!("ticket: {ticket}"));
        }
        if let Some(priority) = self.priority {
            parts.push(format!("priority: '{}'", priority.label()));
        }
        format!("@{{ {} }}", parts.join(", "))
    }
}

/// Task priority, rendered through a fixed label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Rendered as `Very Low`.
    VeryLow,
    /// Rendered as `Low`.
    Low,
    /// Rendered as `High`.
    High,
    /// Rendered as `Very High`.
    VeryHigh,
}

impl Priority {
    /// Returns the output label for this priority.
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

/// Accumulates the tasks of one column inside an
/// [`add_column_with`](KanbanDiagram::add_column_with) closure.
#[derive(Debug)]
pub struct KanbanColumn {
    mode: Mode,
    tasks: Vec<KanbanTask>,
}

impl KanbanColumn {
    /// Appends a task with no metadata.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank description raises [`BuildError::WhiteSpace`].
    pub fn task(self, description: &str) -> Result<Self, BuildError> {
        self.task_with(description, TaskMetadata::new())
    }

    /// Appends a task with metadata.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank description raises [`BuildError::WhiteSpace`].
    pub fn task_with(
        mut self,
        description: &str,
        metadata: TaskMetadata,
    ) -> Result<Self, BuildError> {
        guard::require_label(self.mode, "description", description)?;
        self.tasks.push(KanbanTask {
            description: description.to_owned(),
            metadata,
        });
        Ok(self)
    }
}

/// Line-format strategy for kanban diagrams.
#[derive(Debug, Default)]
pub struct Kanban;

/// A kanban diagram builder; see [`crate::kanban`] and [`crate::unchecked::kanban`].
pub type KanbanDiagram = Diagram<Kanban>;

impl DiagramKind for Kanban {
    type Item = KanbanItem;

    const NAME: &'static str = "kanban";

    fn keyword(&self) -> String {
        "kanban".to_owned()
    }

    fn render(&self, items: &[Self::Item], lines: &mut Vec<String>) {
        let mut column_index = 0usize;
        for item in items {
            match item {
                KanbanItem::Column { name, tasks } => {
                    lines.push(format!("{INDENT}column{column_index}[{name}]"));
                    for (task_index, task) in tasks.iter().enumerate() {
                        let mut line = format!(
                            "{INDENT}{INDENT}task{column_index}{task_index}[{}]",
                            task.description
                        );
                        if !task.metadata.is_empty() {
                            line.push_str(&task.metadata.suffix());
                        }
                        lines.push(line);
                    }
                    column_index += 1;
                }
            }
        }
    }
}

impl KanbanDiagram {
    /// Appends an empty column.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank name raises [`BuildError::WhiteSpace`].
    pub fn add_column(self, name: &str) -> Result<Self, BuildError> {
        self.add_column_with(name, Ok)
    }

    /// Appends a column and configures its tasks through a closure.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank name raises [`BuildError::WhiteSpace`];
    /// failures inside the closure propagate unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// let text = mermatic::kanban(None, None)
    ///     .add_column_with("Todo", |col| col.task("Write docs")).unwrap()
    ///     .build();
    /// assert_eq!(text, "kanban\n    column0[Todo]\n        task00[Write docs]");
    /// ```
    pub fn add_column_with<F>(mut self, name: &str, tasks: F) -> Result<Self, BuildError>
    where
        F: FnOnce(KanbanColumn) -> Result<KanbanColumn, BuildError>,
    {
        guard::require_label(self.mode(), "name", name)?;
        let column = tasks(KanbanColumn {
            mode: self.mode(),
            tasks: Vec::new(),
        })?;
        self.push(KanbanItem::Column {
            name: name.to_owned(),
            tasks: column.tasks,
        });
        Ok(self)
    }
}
