//! Task domain model.
//!
//! # Responsibility
//! - Define the task record stored in the board slot and its wire names.
//! - Provide constructors for fresh tasks, templates and materialized instances.
//! - Define partial-update semantics through `TaskPatch`.
//!
//! # Invariants
//! - `id` is assigned once at creation and never rewritten by a patch.
//! - `is_recurring == true` marks a template, never a schedulable entry.
//! - `recurring_pattern` has no effect unless `is_recurring` is set.
//!
//! # See also
//! - crates/weekboard_core/src/service/task_ops.rs

use crate::model::day::DayOfWeek;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TASK_ID_LEN: usize = 12;
const TASK_ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Validation error for task identifiers read from external input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIdError {
    Empty,
}

impl Display for TaskIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "task id must not be empty"),
        }
    }
}

impl Error for TaskIdError {}

/// Opaque task identifier.
///
/// Generated ids are short base-36 strings; ids loaded from storage may have
/// any non-empty shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh random id.
    ///
    /// Collisions are not checked; 36^12 values leave the probability
    /// negligible for a weekly board.
    pub fn generate() -> Self {
        let mut bits = Uuid::new_v4().as_u128();
        let mut id = String::with_capacity(TASK_ID_LEN);
        for _ in 0..TASK_ID_LEN {
            let digit = (bits % 36) as usize;
            id.push(char::from(TASK_ID_ALPHABET[digit]));
            bits /= 36;
        }
        Self(id)
    }

    /// Wraps a caller-provided id, rejecting blank input.
    pub fn parse(value: impl Into<String>) -> Result<Self, TaskIdError> {
        Self::try_from(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(TaskIdError::Empty);
        }
        Ok(Self(value))
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Board category. Fixed set, one column group each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Work,
    Personal,
    Habit,
}

impl TaskCategory {
    /// All categories in board display order.
    pub const ALL: [Self; 3] = [Self::Work, Self::Personal, Self::Habit];

    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Habit => "habit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "work" => Some(Self::Work),
            "personal" => Some(Self::Personal),
            "habit" => Some(Self::Habit),
            _ => None,
        }
    }
}

/// Recurrence cadence of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringPattern {
    /// One instance on every day of the week.
    Daily,
    /// One instance on the template's own day.
    Weekly,
    /// Accepted and persisted, but never materialized.
    Monthly,
}

impl RecurringPattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// Canonical board record.
///
/// Serialized with camelCase names so the persisted slot keeps the
/// `isCompleted` / `isRecurring` / `recurringPattern` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: TaskCategory,
    pub day: DayOfWeek,
    /// Free-form clock value such as `09:00`; not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub is_completed: bool,
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_pattern: Option<RecurringPattern>,
}

impl Task {
    /// Builds a task from creation input with a freshly generated id.
    pub fn new(input: NewTask) -> Self {
        Self::with_id(TaskId::generate(), input)
    }

    /// Builds a task from creation input with a caller-provided id.
    pub fn with_id(id: TaskId, input: NewTask) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            day: input.day,
            time: input.time,
            is_completed: input.is_completed,
            is_recurring: input.is_recurring,
            recurring_pattern: input.recurring_pattern,
        }
    }

    /// Whether this record is a recurrence template.
    pub fn is_template(&self) -> bool {
        self.is_recurring
    }

    /// Pattern that drives materialization, `None` for plain tasks.
    pub fn effective_pattern(&self) -> Option<RecurringPattern> {
        if self.is_recurring {
            self.recurring_pattern
        } else {
            None
        }
    }

    /// Copies this task as a new template with a fresh id.
    pub fn to_template(&self) -> Self {
        Self {
            id: TaskId::generate(),
            is_recurring: true,
            ..self.clone()
        }
    }

    /// Copies this template as a schedulable instance on `day`.
    pub fn instance_on(&self, day: DayOfWeek) -> Self {
        Self {
            id: TaskId::generate(),
            day,
            is_recurring: false,
            ..self.clone()
        }
    }

    /// Merges `patch` over this task. `id` is never touched.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(day) = patch.day {
            self.day = day;
        }
        if let Some(time) = &patch.time {
            self.time = time.clone();
        }
        if let Some(is_completed) = patch.is_completed {
            self.is_completed = is_completed;
        }
        if let Some(is_recurring) = patch.is_recurring {
            self.is_recurring = is_recurring;
        }
        if let Some(pattern) = patch.recurring_pattern {
            self.recurring_pattern = pattern;
        }
    }
}

/// Creation input: a task without an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: TaskCategory,
    pub day: DayOfWeek,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_pattern: Option<RecurringPattern>,
}

impl NewTask {
    /// Plain open task with no description, time or recurrence.
    pub fn new(title: impl Into<String>, category: TaskCategory, day: DayOfWeek) -> Self {
        Self {
            title: title.into(),
            description: None,
            category,
            day,
            time: None,
            is_completed: false,
            is_recurring: false,
            recurring_pattern: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Marks the input as a template with the given cadence.
    pub fn recurring(mut self, pattern: RecurringPattern) -> Self {
        self.is_recurring = true;
        self.recurring_pattern = Some(pattern);
        self
    }
}

/// Partial update merged over an existing task.
///
/// `None` leaves a field untouched. For optional task fields the inner
/// `Option` is the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<TaskCategory>,
    pub day: Option<DayOfWeek>,
    pub time: Option<Option<String>>,
    pub is_completed: Option<bool>,
    pub is_recurring: Option<bool>,
    pub recurring_pattern: Option<Option<RecurringPattern>>,
}

impl TaskPatch {
    /// Patch that only flips completion state.
    pub fn completion(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            ..Self::default()
        }
    }

    /// Whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<NewTask> for TaskPatch {
    /// Full-replacement patch, as produced by an edit form submission.
    fn from(value: NewTask) -> Self {
        Self {
            title: Some(value.title),
            description: Some(value.description),
            category: Some(value.category),
            day: Some(value.day),
            time: Some(value.time),
            is_completed: Some(value.is_completed),
            is_recurring: Some(value.is_recurring),
            recurring_pattern: Some(value.recurring_pattern),
        }
    }
}
