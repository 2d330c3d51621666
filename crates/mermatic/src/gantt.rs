//! Gantt schedule diagrams.
//!
//! The body always opens with a `dateFormat YYYY-MM-DD` line; task dates
//! are formatted accordingly through chrono. Sections open an indentation
//! scope exactly like the timeline kind. A task line reads
//! `{name} :{tag}, {id}, {start}, {length}` with absent parts omitted.

use chrono::NaiveDate;

use mermatic_core::{BuildError, guard, text::{INDENT, SectionIndent}};

use crate::diagram::{Diagram, DiagramKind};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One appended construct in a gantt diagram.
#[derive(Debug, Clone)]
pub enum GanttItem {
    /// A section header opening a new indentation scope.
    Section(String),
    /// A scheduled task.
    Task {
        /// Task display name.
        name: String,
        /// Schedule and metadata for the task.
        spec: GanttTask,
    },
}

/// Schedule and metadata for one gantt task.
///
/// Built fluently from either a start date or a predecessor id, then
/// refined with a length, an id, and a tag. The length defaults to one day.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use mermatic::{GanttTask, TaskTag};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// let task = GanttTask::starting(start).days(5).id("des1").tagged(TaskTag::Active);
/// ```
#[derive(Debug, Clone)]
pub struct GanttTask {
    start: TaskStart,
    length: TaskLength,
    id: Option<String>,
    tag: Option<TaskTag>,
}

#[derive(Debug, Clone)]
enum TaskStart {
    On(NaiveDate),
    After(String),
}

#[derive(Debug, Clone)]
enum TaskLength {
    Days(u32),
    Until(NaiveDate),
}

/// Status tag rendered in the task metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTag {
    /// Work in progress.
    Active,
    /// Completed work.
    Done,
    /// On the critical path.
    Crit,
    /// A zero-length milestone marker.
    Milestone,
}

impl TaskTag {
    fn keyword(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Done => "done",
            Self::Crit => "crit",
            Self::Milestone => "milestone",
        }
    }
}

impl GanttTask {
    /// Starts the task on a calendar date. Length defaults to one day.
    pub fn starting(date: NaiveDate) -> Self {
        Self {
            start: TaskStart::On(date),
            length: TaskLength::Days(1),
            id: None,
            tag: None,
        }
    }

    /// Starts the task when the task with the given id finishes.
    pub fn after(id: &str) -> Self {
        Self {
            start: TaskStart::After(id.to_owned()),
            length: TaskLength::Days(1),
            id: None,
            tag: None,
        }
    }

    /// Sets the task length as a day count.
    pub fn days(mut self, days: u32) -> Self {
        self.length = TaskLength::Days(days);
        self
    }

    /// Sets the task end as a calendar date.
    pub fn until(mut self, date: NaiveDate) -> Self {
        self.length = TaskLength::Until(date);
        self
    }

    /// Assigns an id other tasks can reference via [`GanttTask::after`].
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    /// Attaches a status tag.
    pub fn tagged(mut self, tag: TaskTag) -> Self {
        self.tag = Some(tag);
        self
    }

    fn metadata(&self) -> String {
        let mut parts = Vec::new();
        if let Some(tag) = self.tag {
            parts.push(tag.keyword().to_owned());
        }
        if let Some(id) = &self.id {
            parts.push(id.clone());
        }
        parts.push(match &self.start {
            TaskStart::On(date) => date.format(DATE_FORMAT).to_string(),
            TaskStart::After(id) => format!("after {id}"),
        });
        parts.push(match &self.length {
            TaskLength::Days(days) => format!("{days}d"),
            TaskLength::Until(date) => date.format(DATE_FORMAT).to_string(),
        });
        parts.join(", ")
    }
}

/// Line-format strategy for gantt diagrams.
#[derive(Debug, Default)]
pub struct Gantt;

/// A gantt diagram builder; see [`crate::gantt`] and [`crate::unchecked::gantt`].
pub type GanttDiagram = Diagram<Gantt>;

impl DiagramKind for Gantt {
    type Item = GanttItem;

    const NAME: &'static str = "gantt";

    fn keyword(&self) -> String {
        "gantt".to_owned()
    }

    fn render(&self, items: &[Self::Item], lines: &mut Vec<String>) {
        lines.push(format!("{INDENT}dateFormat YYYY-MM-DD"));
        let mut indent = SectionIndent::new();
        for item in items {
            match item {
                GanttItem::Section(name) => {
                    lines.push(format!("{}section {name}", indent.section()));
                }
                GanttItem::Task { name, spec } => {
                    lines.push(format!("{}{name} :{}", indent.leaf(), spec.metadata()));
                }
            }
        }
    }
}

impl GanttDiagram {
    /// Appends a section header; subsequent tasks indent under it.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank name raises [`BuildError::WhiteSpace`].
    pub fn add_section(mut self, name: &str) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "name", name)?;
        self.push(GanttItem::Section(name.to_owned()));
        Ok(self)
    }

    /// Appends a scheduled task.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank name raises [`BuildError::WhiteSpace`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use mermatic::GanttTask;
    ///
    /// let start = NaiveDate::from_ymd_opt(2014, 1, 6).unwrap();
    /// let text = mermatic::gantt(None, None)
    ///     .add_task("Design", GanttTask::starting(start).days(3)).unwrap()
    ///     .build();
    /// assert_eq!(text, "gantt\n    dateFormat YYYY-MM-DD\n    Design :2014-01-06, 3d");
    /// ```
    pub fn add_task(mut self, name: &str, spec: GanttTask) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "name", name)?;
        self.push(GanttItem::Task {
            name: name.to_owned(),
            spec,
        });
        Ok(self)
    }

    /// Appends a zero-length milestone on the given date.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank name raises [`BuildError::WhiteSpace`].
    pub fn add_milestone(self, name: &str, date: NaiveDate) -> Result<Self, BuildError> {
        self.add_task(
            name,
            GanttTask::starting(date).days(0).tagged(TaskTag::Milestone),
        )
    }
}
