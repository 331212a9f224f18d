use kconfig_gen::field::THREAD_COUNT_BOUNDS;
use kconfig_gen::utils::parse_numeric_input;
use kconfig_gen::{ConfigModel, FieldId, ResizePolicy, ResultReporter, ValidationError};
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

/// Outcome of the last generate request, shown under the button.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Success(String),
    Failure(String),
}

/// Collects the generate outcome so it can be dispatched into the form state.
#[derive(Default)]
pub struct StatusCollector {
    pub status: Option<Status>,
}

impl ResultReporter for StatusCollector {
    fn success(&mut self, message: &str) {
        self.status = Some(Status::Success(message.to_string()));
    }

    fn failure(&mut self, message: &str) {
        self.status = Some(Status::Failure(message.to_string()));
    }
}

/// Everything the form renders: the model plus the messages of rejected edits.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub model: ConfigModel,
    /// Last rejected edit per scalar field.
    pub field_errors: HashMap<FieldId, String>,
    /// Last rejected edit per thread row.
    pub thread_errors: HashMap<usize, String>,
    pub status: Option<Status>,
}

impl FormState {
    pub fn field_error(&self, field: FieldId) -> Option<String> {
        self.field_errors.get(&field).cloned()
    }
}

pub enum FormAction {
    /// Commit the text of a scalar input.
    SetField { field: FieldId, input: String },
    /// Thread count edits keep the names already typed in.
    SetThreadCount(String),
    RenameThread { index: usize, name: String },
    SetStackSize { index: usize, input: String },
    SetStatus(Option<Status>),
    Reset,
}

fn record<K: std::hash::Hash + Eq>(
    errors: &mut HashMap<K, String>,
    key: K,
    result: Result<(), ValidationError>,
) {
    match result {
        Ok(()) => {
            errors.remove(&key);
        }
        Err(e) => {
            errors.insert(key, e.to_string());
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::SetField { field, input } => {
                let result = next.model.set_field(field.name(), &input);
                if result.is_ok() {
                    // The dependent option is reset together with its parent.
                    match field {
                        FieldId::ConditionVariablesEnabled => {
                            next.field_errors.remove(&FieldId::PipeType);
                        }
                        FieldId::MailboxEnabled => {
                            next.field_errors.remove(&FieldId::MailboxAckEnabled);
                        }
                        _ => {}
                    }
                }
                record(&mut next.field_errors, field, result);
            }
            FormAction::SetThreadCount(input) => {
                let result = parse_numeric_input(&input, FieldId::ThreadCount).and_then(|n| {
                    if THREAD_COUNT_BOUNDS.contains(n) {
                        next.model.resize_threads(n as usize, ResizePolicy::Preserve)
                    } else {
                        Err(ValidationError::OutOfRange {
                            field: FieldId::ThreadCount,
                            bounds: THREAD_COUNT_BOUNDS,
                            value: n,
                        })
                    }
                });
                if result.is_ok() {
                    next.thread_errors.clear();
                }
                record(&mut next.field_errors, FieldId::ThreadCount, result);
            }
            FormAction::RenameThread { index, name } => {
                let result = next.model.set_thread_name(index, &name);
                record(&mut next.thread_errors, index, result);
            }
            FormAction::SetStackSize { index, input } => {
                let result = next.model.set_stack_size_text(index, &input);
                record(&mut next.thread_errors, index, result);
            }
            FormAction::SetStatus(status) => next.status = status,
            FormAction::Reset => next = FormState::default(),
        }
        Rc::new(next)
    }
}

/// Form state shared by every section of the page.
#[hook]
pub fn use_config_form() -> UseReducerHandle<FormState> {
    use_reducer(FormState::default)
}
