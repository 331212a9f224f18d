//! Catalogue of the scalar configuration fields.
//!
//! Each field has a stable snake_case name (used by [`ConfigModel::set_field`]
//! and by the form), a label, the form section it lives in and its kind.
//! Integer fields carry their inclusive bounds here so the model, the
//! error messages and the `min`/`max` attributes of the inputs all agree.
//!
//! [`ConfigModel::set_field`]: crate::model::ConfigModel::set_field

use crate::config::*;
use crate::model::{PipeType, SchedulerMode};
use std::fmt;

/// Inclusive integer range accepted by a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Signed input so that negative form values are reported as out of range.
    pub fn contains(&self, value: i64) -> bool {
        (self.min as i64..=self.max as i64).contains(&value)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.min, self.max)
    }
}

pub const THREAD_COUNT_BOUNDS: Bounds = Bounds::new(MIN_THREAD_COUNT, MAX_THREAD_COUNT);
pub const STACK_SIZE_BOUNDS: Bounds = Bounds::new(MIN_STACK_SIZE, MAX_STACK_SIZE);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    ThreadCount,
    IdleTaskPid,
    IdleTaskStackSize,
    TimerHandlerPid,
    TimerHandlerStackSize,
    NumPriorities,
    TimeSliceMs,
    SchedulerMode,
    MessageQueueEnabled,
    MailboxEnabled,
    MailboxAckEnabled,
    NumMessageBuffers,
    PipeType,
    ConditionVariablesEnabled,
    TraceEnabled,
    TraceBufferSize,
}

/// Form section a field is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Threads,
    Scheduler,
    Communication,
    Synchronization,
    Trace,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Threads,
        Section::Scheduler,
        Section::Communication,
        Section::Synchronization,
        Section::Trace,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Threads => "Threads",
            Section::Scheduler => "Scheduler",
            Section::Communication => "Communication",
            Section::Synchronization => "Synchronization",
            Section::Trace => "Trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer(Bounds),
    Flag,
    /// One of a fixed set of names, matched case-insensitively.
    Choice(&'static [&'static str]),
}

#[derive(Debug)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub name: &'static str,
    pub label: &'static str,
    pub section: Section,
    pub kind: FieldKind,
}

const fn int(min: u32, max: u32) -> FieldKind {
    FieldKind::Integer(Bounds::new(min, max))
}

pub static FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: FieldId::ThreadCount,
        name: "thread_count",
        label: "Number of Threads",
        section: Section::Threads,
        kind: FieldKind::Integer(THREAD_COUNT_BOUNDS),
    },
    FieldDescriptor {
        id: FieldId::IdleTaskPid,
        name: "idle_task_pid",
        label: "Idle Task PID",
        section: Section::Scheduler,
        kind: int(MIN_IDLE_TASK_PID, MAX_PID),
    },
    FieldDescriptor {
        id: FieldId::IdleTaskStackSize,
        name: "idle_task_stack_size",
        label: "Idle Task Stack Size",
        section: Section::Scheduler,
        kind: FieldKind::Integer(STACK_SIZE_BOUNDS),
    },
    FieldDescriptor {
        id: FieldId::TimerHandlerPid,
        name: "timer_handler_pid",
        label: "Timer Handler PID",
        section: Section::Scheduler,
        kind: int(MIN_TIMER_HANDLER_PID, MAX_PID),
    },
    FieldDescriptor {
        id: FieldId::TimerHandlerStackSize,
        name: "timer_handler_stack_size",
        label: "Timer Handler Stack Size",
        section: Section::Scheduler,
        kind: FieldKind::Integer(STACK_SIZE_BOUNDS),
    },
    FieldDescriptor {
        id: FieldId::SchedulerMode,
        name: "scheduler_mode",
        label: "Scheduler Mode",
        section: Section::Scheduler,
        kind: FieldKind::Choice(&SchedulerMode::NAMES),
    },
    FieldDescriptor {
        id: FieldId::TimeSliceMs,
        name: "time_slice_ms",
        label: "Time Slice (ms)",
        section: Section::Scheduler,
        kind: int(MIN_TIME_SLICE_MS, MAX_TIME_SLICE_MS),
    },
    FieldDescriptor {
        id: FieldId::NumPriorities,
        name: "num_priorities",
        label: "Number of Priorities",
        section: Section::Scheduler,
        kind: int(MIN_NUM_PRIORITIES, MAX_NUM_PRIORITIES),
    },
    FieldDescriptor {
        id: FieldId::MessageQueueEnabled,
        name: "message_queue_enabled",
        label: "Enable Message Queue",
        section: Section::Communication,
        kind: FieldKind::Flag,
    },
    FieldDescriptor {
        id: FieldId::MailboxEnabled,
        name: "mailbox_enabled",
        label: "Enable Mailbox",
        section: Section::Communication,
        kind: FieldKind::Flag,
    },
    FieldDescriptor {
        id: FieldId::MailboxAckEnabled,
        name: "mailbox_ack_enabled",
        label: "Enable Mailbox ACK (Extended Rendez-vous)",
        section: Section::Communication,
        kind: FieldKind::Flag,
    },
    FieldDescriptor {
        id: FieldId::NumMessageBuffers,
        name: "num_message_buffers",
        label: "Number of Message Buffers",
        section: Section::Communication,
        kind: int(MIN_NUM_MESSAGE_BUFFERS, MAX_NUM_MESSAGE_BUFFERS),
    },
    FieldDescriptor {
        id: FieldId::PipeType,
        name: "pipe_type",
        label: "Pipe Type",
        section: Section::Communication,
        kind: FieldKind::Choice(&PipeType::NAMES),
    },
    FieldDescriptor {
        id: FieldId::ConditionVariablesEnabled,
        name: "condition_variables_enabled",
        label: "Enable Condition Variables",
        section: Section::Synchronization,
        kind: FieldKind::Flag,
    },
    FieldDescriptor {
        id: FieldId::TraceEnabled,
        name: "trace_enabled",
        label: "Enable Trace",
        section: Section::Trace,
        kind: FieldKind::Flag,
    },
    FieldDescriptor {
        id: FieldId::TraceBufferSize,
        name: "trace_buffer_size",
        label: "Trace Buffer Size",
        section: Section::Trace,
        kind: int(MIN_TRACE_BUFFER_SIZE, MAX_TRACE_BUFFER_SIZE),
    },
];

impl FieldId {
    pub fn descriptor(self) -> &'static FieldDescriptor {
        // Every variant has exactly one catalogue entry (see tests).
        FIELDS
            .iter()
            .find(|d| d.id == self)
            .unwrap_or_else(|| unreachable!("field {:?} missing from catalogue", self))
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn kind(self) -> FieldKind {
        self.descriptor().kind
    }

    /// Inclusive bounds for integer fields, `None` for flags and choices.
    pub fn bounds(self) -> Option<Bounds> {
        match self.kind() {
            FieldKind::Integer(bounds) => Some(bounds),
            _ => None,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look a field up by its snake_case name.
pub fn find_field(name: &str) -> Option<FieldId> {
    let name = name.trim();
    FIELDS.iter().find(|d| d.name == name).map(|d| d.id)
}

/// Fields displayed under `section`, in form order.
pub fn fields_in(section: Section) -> impl Iterator<Item = &'static FieldDescriptor> {
    FIELDS.iter().filter(move |d| d.section == section)
}
