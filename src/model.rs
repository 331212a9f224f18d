//! The configuration record and its edit rules.
//!
//! [`ConfigModel`] is the single source of truth for the form. Every edit
//! goes through a setter that either applies the change or returns a
//! [`ValidationError`] and leaves the record untouched, so the model is
//! always in its last valid state. [`ConfigModel::validate`] re-checks the
//! whole record; it matters for records built through serde, which bypass
//! the setters.

use crate::config::*;
use crate::error::ValidationError;
use crate::field::{find_field, FieldId, FieldKind, STACK_SIZE_BOUNDS, THREAD_COUNT_BOUNDS};
use crate::utils::{default_thread_name, is_c_identifier, parse_choice, parse_flag, parse_numeric_input};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SchedulerMode {
    #[default]
    Preemptive,
    Cooperative,
}

impl SchedulerMode {
    pub const ALL: [SchedulerMode; 2] = [SchedulerMode::Preemptive, SchedulerMode::Cooperative];
    pub const NAMES: [&'static str; 2] = ["Preemptive", "Cooperative"];

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl fmt::Display for SchedulerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PipeType {
    #[default]
    Simple,
    /// Needs condition variable support in the kernel.
    Extended,
}

impl PipeType {
    pub const ALL: [PipeType; 2] = [PipeType::Simple, PipeType::Extended];
    pub const NAMES: [&'static str; 2] = ["Simple", "Extended"];

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl fmt::Display for PipeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the thread table: the stack array name and its size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadEntry {
    pub name: String,
    pub stack_size: u32,
}

impl ThreadEntry {
    pub fn with_defaults(index: usize) -> Self {
        Self {
            name: default_thread_name(index),
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

/// What happens to existing thread entries when the thread count changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// Rebuild every entry with defaults.
    #[default]
    Reset,
    /// Keep entries whose index survives, default the new ones.
    Preserve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigModel {
    threads: Vec<ThreadEntry>,
    idle_task_pid: u32,
    idle_task_stack_size: u32,
    timer_handler_pid: u32,
    timer_handler_stack_size: u32,
    num_priorities: u32,
    time_slice_ms: u32,
    scheduler_mode: SchedulerMode,
    message_queue_enabled: bool,
    mailbox_enabled: bool,
    mailbox_ack_enabled: bool,
    num_message_buffers: u32,
    pipe_type: PipeType,
    condition_variables_enabled: bool,
    trace_enabled: bool,
    trace_buffer_size: u32,
}

impl Default for ConfigModel {
    fn default() -> Self {
        Self {
            threads: default_threads(DEFAULT_THREAD_COUNT as usize),
            idle_task_pid: DEFAULT_IDLE_TASK_PID,
            idle_task_stack_size: DEFAULT_STACK_SIZE,
            timer_handler_pid: DEFAULT_TIMER_HANDLER_PID,
            timer_handler_stack_size: DEFAULT_STACK_SIZE,
            num_priorities: DEFAULT_NUM_PRIORITIES,
            time_slice_ms: DEFAULT_TIME_SLICE_MS,
            scheduler_mode: SchedulerMode::Preemptive,
            message_queue_enabled: false,
            mailbox_enabled: false,
            mailbox_ack_enabled: false,
            num_message_buffers: DEFAULT_NUM_MESSAGE_BUFFERS,
            pipe_type: PipeType::Simple,
            condition_variables_enabled: true,
            trace_enabled: true,
            trace_buffer_size: DEFAULT_TRACE_BUFFER_SIZE,
        }
    }
}

fn default_threads(count: usize) -> Vec<ThreadEntry> {
    (0..count).map(ThreadEntry::with_defaults).collect()
}

/// Whether `pipe` can currently be selected.
pub fn is_pipe_type_available(model: &ConfigModel, pipe: PipeType) -> bool {
    match pipe {
        PipeType::Simple => true,
        PipeType::Extended => model.condition_variables_enabled,
    }
}

/// Whether the mailbox ACK option can currently be enabled.
pub fn is_mailbox_ack_available(model: &ConfigModel) -> bool {
    model.mailbox_enabled
}

impl ConfigModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("Configuration reset to defaults");
    }

    // ---------------------------------------------------------------------
    // Read access

    pub fn kernel_version(&self) -> &'static str {
        KERNEL_VERSION
    }

    pub fn thread_count(&self) -> usize {
        self.threads.len()
    }

    pub fn threads(&self) -> &[ThreadEntry] {
        &self.threads
    }

    pub fn thread_names(&self) -> Vec<&str> {
        self.threads.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn stack_sizes(&self) -> Vec<u32> {
        self.threads.iter().map(|t| t.stack_size).collect()
    }

    pub fn idle_task_pid(&self) -> u32 {
        self.idle_task_pid
    }

    pub fn idle_task_stack_size(&self) -> u32 {
        self.idle_task_stack_size
    }

    pub fn timer_handler_pid(&self) -> u32 {
        self.timer_handler_pid
    }

    pub fn timer_handler_stack_size(&self) -> u32 {
        self.timer_handler_stack_size
    }

    pub fn num_priorities(&self) -> u32 {
        self.num_priorities
    }

    pub fn time_slice_ms(&self) -> u32 {
        self.time_slice_ms
    }

    pub fn scheduler_mode(&self) -> SchedulerMode {
        self.scheduler_mode
    }

    pub fn message_queue_enabled(&self) -> bool {
        self.message_queue_enabled
    }

    pub fn mailbox_enabled(&self) -> bool {
        self.mailbox_enabled
    }

    pub fn mailbox_ack_enabled(&self) -> bool {
        self.mailbox_ack_enabled
    }

    pub fn num_message_buffers(&self) -> u32 {
        self.num_message_buffers
    }

    pub fn pipe_type(&self) -> PipeType {
        self.pipe_type
    }

    pub fn condition_variables_enabled(&self) -> bool {
        self.condition_variables_enabled
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace_enabled
    }

    pub fn trace_buffer_size(&self) -> u32 {
        self.trace_buffer_size
    }

    pub fn is_pipe_type_available(&self, pipe: PipeType) -> bool {
        is_pipe_type_available(self, pipe)
    }

    pub fn is_mailbox_ack_available(&self) -> bool {
        is_mailbox_ack_available(self)
    }

    /// Current value of an integer field; `None` for flags and choices.
    pub fn int_value(&self, field: FieldId) -> Option<u32> {
        match field {
            FieldId::ThreadCount => Some(self.threads.len() as u32),
            FieldId::IdleTaskPid => Some(self.idle_task_pid),
            FieldId::IdleTaskStackSize => Some(self.idle_task_stack_size),
            FieldId::TimerHandlerPid => Some(self.timer_handler_pid),
            FieldId::TimerHandlerStackSize => Some(self.timer_handler_stack_size),
            FieldId::NumPriorities => Some(self.num_priorities),
            FieldId::TimeSliceMs => Some(self.time_slice_ms),
            FieldId::NumMessageBuffers => Some(self.num_message_buffers),
            FieldId::TraceBufferSize => Some(self.trace_buffer_size),
            _ => None,
        }
    }

    /// Current value of a flag field; `None` for integers and choices.
    pub fn flag_value(&self, field: FieldId) -> Option<bool> {
        match field {
            FieldId::MessageQueueEnabled => Some(self.message_queue_enabled),
            FieldId::MailboxEnabled => Some(self.mailbox_enabled),
            FieldId::MailboxAckEnabled => Some(self.mailbox_ack_enabled),
            FieldId::ConditionVariablesEnabled => Some(self.condition_variables_enabled),
            FieldId::TraceEnabled => Some(self.trace_enabled),
            _ => None,
        }
    }

    /// Canonical text of a field's current value.
    pub fn field_text(&self, field: FieldId) -> String {
        match field {
            FieldId::SchedulerMode => self.scheduler_mode.to_string(),
            FieldId::PipeType => self.pipe_type.to_string(),
            _ => match (self.int_value(field), self.flag_value(field)) {
                (Some(v), _) => v.to_string(),
                (_, Some(b)) => b.to_string(),
                (None, None) => String::new(),
            },
        }
    }

    /// Canonical text of the field named `name`.
    pub fn get_field(&self, name: &str) -> Result<String, ValidationError> {
        let field =
            find_field(name).ok_or_else(|| ValidationError::UnknownField(name.trim().to_string()))?;
        Ok(self.field_text(field))
    }

    // ---------------------------------------------------------------------
    // Scalar edits

    /// Set a scalar field from its textual form input.
    ///
    /// Integers are checked against the field's bounds, flags accept
    /// true/false, on/off, yes/no and 1/0, choices match case-insensitively.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), ValidationError> {
        let field = match find_field(name) {
            Some(field) => field,
            None => {
                warn!("Rejected edit of unknown field '{}'", name.trim());
                return Err(ValidationError::UnknownField(name.trim().to_string()));
            }
        };

        let result = match field.kind() {
            FieldKind::Integer(_) => {
                parse_numeric_input(value, field).and_then(|v| self.set_int(field, v))
            }
            FieldKind::Flag => parse_flag(value, field).and_then(|b| self.set_flag(field, b)),
            FieldKind::Choice(choices) => {
                parse_choice(value, field, choices).and_then(|idx| match field {
                    FieldId::SchedulerMode => {
                        self.set_scheduler_mode(SchedulerMode::ALL[idx]);
                        Ok(())
                    }
                    FieldId::PipeType => self.set_pipe_type(PipeType::ALL[idx]),
                    _ => Err(ValidationError::KindMismatch {
                        field,
                        expected: "a choice",
                    }),
                })
            }
        };

        if let Err(ref e) = result {
            warn!("Rejected {}={:?}: {}", field, value, e);
        }
        result
    }

    /// Set an integer field. Values outside the field's bounds are rejected.
    pub fn set_int(&mut self, field: FieldId, value: i64) -> Result<(), ValidationError> {
        let bounds = field.bounds().ok_or(ValidationError::KindMismatch {
            field,
            expected: "an integer",
        })?;
        if !bounds.contains(value) {
            return Err(ValidationError::OutOfRange {
                field,
                bounds,
                value,
            });
        }
        let value = value as u32;

        match field {
            FieldId::ThreadCount => return self.set_thread_count(value as usize),
            FieldId::IdleTaskPid => {
                check_pids(value, self.timer_handler_pid)?;
                self.idle_task_pid = value;
            }
            FieldId::TimerHandlerPid => {
                check_pids(self.idle_task_pid, value)?;
                self.timer_handler_pid = value;
            }
            FieldId::IdleTaskStackSize => self.idle_task_stack_size = value,
            FieldId::TimerHandlerStackSize => self.timer_handler_stack_size = value,
            FieldId::NumPriorities => self.num_priorities = value,
            FieldId::TimeSliceMs => self.time_slice_ms = value,
            FieldId::NumMessageBuffers => self.num_message_buffers = value,
            FieldId::TraceBufferSize => self.trace_buffer_size = value,
            _ => {
                return Err(ValidationError::KindMismatch {
                    field,
                    expected: "an integer",
                })
            }
        }
        debug!("{} = {}", field, value);
        Ok(())
    }

    /// Set a flag field, enforcing the cross-field rules.
    pub fn set_flag(&mut self, field: FieldId, value: bool) -> Result<(), ValidationError> {
        match field {
            FieldId::ConditionVariablesEnabled => {
                self.set_condition_variables_enabled(value);
                return Ok(());
            }
            FieldId::MailboxEnabled => {
                self.set_mailbox_enabled(value);
                return Ok(());
            }
            FieldId::MailboxAckEnabled => {
                if value && !self.mailbox_enabled {
                    return Err(ValidationError::MailboxAckRequiresMailbox);
                }
                self.mailbox_ack_enabled = value;
            }
            FieldId::MessageQueueEnabled => self.message_queue_enabled = value,
            FieldId::TraceEnabled => self.trace_enabled = value,
            _ => {
                return Err(ValidationError::KindMismatch {
                    field,
                    expected: "a flag",
                })
            }
        }
        debug!("{} = {}", field, value);
        Ok(())
    }

    pub fn set_scheduler_mode(&mut self, mode: SchedulerMode) {
        self.scheduler_mode = mode;
        debug!("scheduler_mode = {}", mode);
    }

    /// `Extended` is only accepted while condition variables are enabled.
    pub fn set_pipe_type(&mut self, pipe: PipeType) -> Result<(), ValidationError> {
        if !self.is_pipe_type_available(pipe) {
            return Err(ValidationError::PipeRequiresConditionVariables);
        }
        self.pipe_type = pipe;
        debug!("pipe_type = {}", pipe);
        Ok(())
    }

    /// Disabling condition variables forces the pipe type back to `Simple`.
    /// Re-enabling them does not restore `Extended`.
    pub fn set_condition_variables_enabled(&mut self, enabled: bool) {
        self.condition_variables_enabled = enabled;
        if !enabled && self.pipe_type != PipeType::Simple {
            debug!("Condition variables disabled, pipe_type reset to Simple");
            self.pipe_type = PipeType::Simple;
        }
        debug!("condition_variables_enabled = {}", enabled);
    }

    /// Disabling the mailbox also clears the ACK option.
    pub fn set_mailbox_enabled(&mut self, enabled: bool) {
        self.mailbox_enabled = enabled;
        if !enabled && self.mailbox_ack_enabled {
            debug!("Mailbox disabled, mailbox_ack_enabled cleared");
            self.mailbox_ack_enabled = false;
        }
        debug!("mailbox_enabled = {}", enabled);
    }

    // ---------------------------------------------------------------------
    // Thread table

    /// Resize the thread table to `count` entries, rebuilding all of them
    /// with default names and stack sizes.
    pub fn set_thread_count(&mut self, count: usize) -> Result<(), ValidationError> {
        self.resize_threads(count, ResizePolicy::Reset)
    }

    pub fn resize_threads(
        &mut self,
        count: usize,
        policy: ResizePolicy,
    ) -> Result<(), ValidationError> {
        if !THREAD_COUNT_BOUNDS.contains(count as i64) {
            let err = ValidationError::OutOfRange {
                field: FieldId::ThreadCount,
                bounds: THREAD_COUNT_BOUNDS,
                value: count as i64,
            };
            warn!("Rejected thread count: {}", err);
            return Err(err);
        }

        match policy {
            ResizePolicy::Reset => self.threads = default_threads(count),
            ResizePolicy::Preserve => {
                self.threads.truncate(count);
                for index in self.threads.len()..count {
                    let name = self.unused_default_name(index);
                    self.threads.push(ThreadEntry {
                        name,
                        stack_size: DEFAULT_STACK_SIZE,
                    });
                }
            }
        }
        debug!("thread_count = {} ({:?})", count, policy);
        Ok(())
    }

    /// `Thread_{index}`, or the next free `Thread_{k}` when a kept entry
    /// was already renamed to it.
    fn unused_default_name(&self, index: usize) -> String {
        (index..)
            .map(default_thread_name)
            .find(|name| self.threads.iter().all(|t| &t.name != name))
            .unwrap_or_else(|| default_thread_name(index))
    }

    /// Rename thread `index`. The name must be a C identifier not used by
    /// another thread.
    pub fn set_thread_name(&mut self, index: usize, name: &str) -> Result<(), ValidationError> {
        let result = self.check_thread_name(index, name.trim());
        match result {
            Ok(()) => {
                self.threads[index].name = name.trim().to_string();
                debug!("thread[{}].name = {}", index, name.trim());
                Ok(())
            }
            Err(e) => {
                warn!("Rejected thread name: {}", e);
                Err(e)
            }
        }
    }

    pub fn set_stack_size(&mut self, index: usize, size: i64) -> Result<(), ValidationError> {
        let thread_count = self.threads.len();
        let Some(entry) = self.threads.get_mut(index) else {
            return Err(ValidationError::ThreadIndex {
                index,
                thread_count,
            });
        };
        if !STACK_SIZE_BOUNDS.contains(size) {
            let err = ValidationError::StackSizeOutOfRange {
                index,
                bounds: STACK_SIZE_BOUNDS,
                value: size,
            };
            warn!("Rejected stack size: {}", err);
            return Err(err);
        }
        entry.stack_size = size as u32;
        debug!("thread[{}].stack_size = {}", index, size);
        Ok(())
    }

    /// Textual variant of [`set_stack_size`](Self::set_stack_size) for form input.
    pub fn set_stack_size_text(&mut self, index: usize, input: &str) -> Result<(), ValidationError> {
        let trimmed = input.trim();
        let size = trimmed
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidStackSize {
                index,
                input: trimmed.to_string(),
            })?;
        self.set_stack_size(index, size)
    }

    fn check_thread_name(&self, index: usize, name: &str) -> Result<(), ValidationError> {
        if index >= self.threads.len() {
            return Err(ValidationError::ThreadIndex {
                index,
                thread_count: self.threads.len(),
            });
        }
        if !is_c_identifier(name) {
            return Err(ValidationError::InvalidThreadName {
                index,
                name: name.to_string(),
            });
        }
        if let Some(other) = self
            .threads
            .iter()
            .enumerate()
            .position(|(i, t)| i != index && t.name == name)
        {
            let (first, second) = if other < index { (other, index) } else { (index, other) };
            return Err(ValidationError::DuplicateThreadName {
                name: name.to_string(),
                first,
                second,
            });
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Whole-record check

    /// Every violated invariant of the current record, in field order.
    /// An empty list means the record can be rendered.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut violations = Vec::new();

        for field in [
            FieldId::ThreadCount,
            FieldId::IdleTaskPid,
            FieldId::IdleTaskStackSize,
            FieldId::TimerHandlerPid,
            FieldId::TimerHandlerStackSize,
            FieldId::NumPriorities,
            FieldId::TimeSliceMs,
            FieldId::NumMessageBuffers,
            FieldId::TraceBufferSize,
        ] {
            if let (Some(bounds), Some(value)) = (field.bounds(), self.int_value(field)) {
                if !bounds.contains(value as i64) {
                    violations.push(ValidationError::OutOfRange {
                        field,
                        bounds,
                        value: value as i64,
                    });
                }
            }
        }

        if let Err(e) = check_pids(self.idle_task_pid, self.timer_handler_pid) {
            violations.push(e);
        }
        if !self.is_pipe_type_available(self.pipe_type) {
            violations.push(ValidationError::PipeRequiresConditionVariables);
        }
        if self.mailbox_ack_enabled && !self.mailbox_enabled {
            violations.push(ValidationError::MailboxAckRequiresMailbox);
        }

        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(self.threads.len());
        for (index, thread) in self.threads.iter().enumerate() {
            if !is_c_identifier(&thread.name) {
                violations.push(ValidationError::InvalidThreadName {
                    index,
                    name: thread.name.clone(),
                });
            } else if let Some(&first) = seen.get(thread.name.as_str()) {
                violations.push(ValidationError::DuplicateThreadName {
                    name: thread.name.clone(),
                    first,
                    second: index,
                });
            } else {
                seen.insert(&thread.name, index);
            }
            if !STACK_SIZE_BOUNDS.contains(thread.stack_size as i64) {
                violations.push(ValidationError::StackSizeOutOfRange {
                    index,
                    bounds: STACK_SIZE_BOUNDS,
                    value: thread.stack_size as i64,
                });
            }
        }

        violations
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn check_pids(idle: u32, timer: u32) -> Result<(), ValidationError> {
    if idle == timer {
        Err(ValidationError::PidConflict { pid: idle })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_initial_values() {
        let m = ConfigModel::default();
        assert_eq!(m.kernel_version(), "0.1.0");
        assert_eq!(m.thread_count(), 3);
        assert_eq!(m.thread_names(), vec!["Thread_0", "Thread_1", "Thread_2"]);
        assert_eq!(m.stack_sizes(), vec![128, 128, 128]);
        assert_eq!(m.idle_task_pid(), 0);
        assert_eq!(m.timer_handler_pid(), 1);
        assert_eq!(m.num_priorities(), 5);
        assert_eq!(m.time_slice_ms(), 10);
        assert_eq!(m.scheduler_mode(), SchedulerMode::Preemptive);
        assert_eq!(m.num_message_buffers(), 5);
        assert_eq!(m.pipe_type(), PipeType::Simple);
        assert!(m.condition_variables_enabled());
        assert!(m.trace_enabled());
        assert_eq!(m.trace_buffer_size(), 512);
        assert!(m.validate().is_empty());
    }

    #[test]
    fn set_thread_count_rebuilds_every_entry() {
        let mut m = ConfigModel::default();
        m.set_thread_name(0, "Worker").unwrap();
        m.set_stack_size(0, 512).unwrap();

        m.set_thread_count(4).unwrap();
        assert_eq!(m.thread_names()[0], "Thread_0");
        assert_eq!(m.stack_sizes(), vec![128; 4]);
    }

    #[test]
    fn preserve_resize_keeps_surviving_entries() {
        let mut m = ConfigModel::default();
        m.set_thread_name(1, "Net").unwrap();
        m.set_stack_size(1, 256).unwrap();

        m.resize_threads(5, ResizePolicy::Preserve).unwrap();
        assert_eq!(m.thread_names(), vec!["Thread_0", "Net", "Thread_2", "Thread_3", "Thread_4"]);
        assert_eq!(m.stack_sizes(), vec![128, 256, 128, 128, 128]);

        m.resize_threads(2, ResizePolicy::Preserve).unwrap();
        assert_eq!(m.thread_names(), vec!["Thread_0", "Net"]);
    }

    #[test]
    fn thread_count_out_of_range_is_rejected() {
        let mut m = ConfigModel::default();
        assert!(matches!(
            m.set_thread_count(0),
            Err(ValidationError::OutOfRange { field: FieldId::ThreadCount, .. })
        ));
        assert!(m.set_thread_count(33).is_err());
        assert_eq!(m.thread_count(), 3);
    }

    #[test]
    fn time_slice_out_of_range_keeps_prior_value() {
        let mut m = ConfigModel::default();
        let err = m.set_field("time_slice_ms", "101").unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: FieldId::TimeSliceMs,
                bounds: crate::field::Bounds::new(1, 100),
                value: 101,
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("time_slice_ms"), "{}", msg);
        assert!(msg.contains("[1,100]"), "{}", msg);
        assert_eq!(m.time_slice_ms(), 10);
    }

    #[test]
    fn disabling_condition_variables_resets_pipe() {
        let mut m = ConfigModel::default();
        m.set_pipe_type(PipeType::Extended).unwrap();

        m.set_condition_variables_enabled(false);
        assert_eq!(m.pipe_type(), PipeType::Simple);
        m.set_condition_variables_enabled(false);
        assert_eq!(m.pipe_type(), PipeType::Simple);

        m.set_condition_variables_enabled(true);
        assert_eq!(m.pipe_type(), PipeType::Simple);
    }

    #[test]
    fn extended_pipe_needs_condition_variables() {
        let mut m = ConfigModel::default();
        m.set_condition_variables_enabled(false);
        assert!(!is_pipe_type_available(&m, PipeType::Extended));
        assert!(is_pipe_type_available(&m, PipeType::Simple));
        assert_eq!(
            m.set_field("pipe_type", "Extended"),
            Err(ValidationError::PipeRequiresConditionVariables)
        );
        assert_eq!(m.pipe_type(), PipeType::Simple);
    }

    #[test]
    fn mailbox_ack_follows_mailbox() {
        let mut m = ConfigModel::default();
        assert_eq!(
            m.set_field("mailbox_ack_enabled", "on"),
            Err(ValidationError::MailboxAckRequiresMailbox)
        );
        m.set_field("mailbox_enabled", "on").unwrap();
        assert!(m.is_mailbox_ack_available());
        m.set_field("mailbox_ack_enabled", "on").unwrap();
        assert!(m.mailbox_ack_enabled());

        m.set_mailbox_enabled(false);
        assert!(!m.mailbox_ack_enabled());
        m.set_mailbox_enabled(true);
        assert!(!m.mailbox_ack_enabled());
    }

    #[test]
    fn system_pids_must_differ() {
        let mut m = ConfigModel::default();
        assert_eq!(
            m.set_field("idle_task_pid", "1"),
            Err(ValidationError::PidConflict { pid: 1 })
        );
        assert_eq!(m.idle_task_pid(), 0);
        m.set_field("timer_handler_pid", "7").unwrap();
        m.set_field("idle_task_pid", "1").unwrap();
        assert_eq!((m.idle_task_pid(), m.timer_handler_pid()), (1, 7));
    }

    #[test]
    fn thread_names_must_be_unique_identifiers() {
        let mut m = ConfigModel::default();
        assert!(matches!(
            m.set_thread_name(0, "bad name"),
            Err(ValidationError::InvalidThreadName { index: 0, .. })
        ));
        assert_eq!(
            m.set_thread_name(2, "Thread_0"),
            Err(ValidationError::DuplicateThreadName {
                name: "Thread_0".to_string(),
                first: 0,
                second: 2,
            })
        );
        assert!(matches!(
            m.set_thread_name(3, "Extra"),
            Err(ValidationError::ThreadIndex { index: 3, thread_count: 3 })
        ));
        // Renaming a thread to its own name is not a duplicate.
        m.set_thread_name(1, "Thread_1").unwrap();
        assert_eq!(m.thread_names(), vec!["Thread_0", "Thread_1", "Thread_2"]);
    }

    #[test]
    fn stack_size_edits() {
        let mut m = ConfigModel::default();
        m.set_stack_size_text(2, " 1024 ").unwrap();
        assert_eq!(m.stack_sizes()[2], 1024);
        assert!(matches!(
            m.set_stack_size(2, 63),
            Err(ValidationError::StackSizeOutOfRange { index: 2, value: 63, .. })
        ));
        assert!(matches!(
            m.set_stack_size_text(0, "big"),
            Err(ValidationError::InvalidStackSize { index: 0, .. })
        ));
        assert_eq!(m.stack_sizes(), vec![128, 128, 1024]);
    }

    #[test]
    fn set_field_parses_each_kind() {
        let mut m = ConfigModel::default();
        m.set_field("scheduler_mode", "cooperative").unwrap();
        m.set_field("trace_enabled", "off").unwrap();
        m.set_field("trace_buffer_size", "1024").unwrap();
        m.set_field("thread_count", "6").unwrap();
        assert_eq!(m.scheduler_mode(), SchedulerMode::Cooperative);
        assert!(!m.trace_enabled());
        assert_eq!(m.trace_buffer_size(), 1024);
        assert_eq!(m.thread_count(), 6);

        assert_eq!(m.get_field("scheduler_mode").unwrap(), "Cooperative");
        assert_eq!(m.get_field("trace_enabled").unwrap(), "false");
        assert_eq!(m.get_field("thread_count").unwrap(), "6");

        assert!(matches!(
            m.set_field("quantum", "5"),
            Err(ValidationError::UnknownField(_))
        ));
        assert!(matches!(
            m.set_field("num_priorities", "five"),
            Err(ValidationError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn typed_setters_reject_other_kinds() {
        let mut m = ConfigModel::default();
        assert!(matches!(
            m.set_int(FieldId::TraceEnabled, 1),
            Err(ValidationError::KindMismatch { .. })
        ));
        assert!(matches!(
            m.set_flag(FieldId::TimeSliceMs, true),
            Err(ValidationError::KindMismatch { .. })
        ));
    }

    #[test]
    fn validate_reports_every_violation_without_mutating() {
        let json = r#"{
            "threads": [
                {"name": "A", "stack_size": 128},
                {"name": "A", "stack_size": 2048},
                {"name": "9lives", "stack_size": 128}
            ],
            "time_slice_ms": 0,
            "timer_handler_pid": 0,
            "pipe_type": "Extended",
            "condition_variables_enabled": false,
            "mailbox_ack_enabled": true
        }"#;
        let m: ConfigModel = serde_json::from_str(json).unwrap();
        let snapshot = m.clone();

        let violations = m.validate();
        assert_eq!(violations, m.validate());
        assert_eq!(m, snapshot);

        assert!(violations.contains(&ValidationError::OutOfRange {
            field: FieldId::TimeSliceMs,
            bounds: crate::field::Bounds::new(1, 100),
            value: 0,
        }));
        assert!(violations.contains(&ValidationError::PidConflict { pid: 0 }));
        assert!(violations.contains(&ValidationError::PipeRequiresConditionVariables));
        assert!(violations.contains(&ValidationError::MailboxAckRequiresMailbox));
        assert!(violations.iter().any(|v| matches!(v, ValidationError::DuplicateThreadName { second: 1, .. })));
        assert!(violations.iter().any(|v| matches!(v, ValidationError::StackSizeOutOfRange { index: 1, .. })));
        assert!(violations.iter().any(|v| matches!(v, ValidationError::InvalidThreadName { index: 2, .. })));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut m = ConfigModel::default();
        m.set_field("time_slice_ms", "42").unwrap();
        m.set_thread_count(9).unwrap();
        m.reset();
        assert_eq!(m, ConfigModel::default());
    }
}
