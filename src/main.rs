//! Main module for the kernel configuration form using Yew.
//! Wires the form state, view components and the generate flow.

use gloo_timers::callback::Timeout;
use kconfig_gen::config::STATUS_CLEAR_MS;
use kconfig_gen::field::{fields_in, FieldDescriptor, FieldKind, Section};
use kconfig_gen::{generate, FieldId, PipeType, SchedulerMode};
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

mod components;
mod download;
mod hooks;

use components::{render_status, FlagField, FormSection, NumberField, ThreadTable};
use download::BrowserDownload;
use hooks::{use_config_form, FormAction, FormState, StatusCollector};

/// Renders the input for an integer or flag field from its descriptor.
fn render_field(
    desc: &'static FieldDescriptor,
    form: &FormState,
    onchange: &Callback<(FieldId, String)>,
) -> Html {
    let model = &form.model;
    match desc.kind {
        FieldKind::Integer(bounds) => html! {
            <NumberField
                field={desc.id}
                {bounds}
                value={model.int_value(desc.id).unwrap_or_default()}
                error={form.field_error(desc.id)}
                onchange={onchange.clone()}
            />
        },
        FieldKind::Flag => html! {
            <FlagField
                field={desc.id}
                checked={model.flag_value(desc.id).unwrap_or_default()}
                disabled={desc.id == FieldId::MailboxAckEnabled && !model.is_mailbox_ack_available()}
                error={form.field_error(desc.id)}
                onchange={onchange.clone()}
            />
        },
        FieldKind::Choice(_) => html! {},
    }
}

/// Primary application component wiring state, callbacks and sections.
#[function_component]
pub fn App() -> Html {
    let form = use_config_form();
    // Pending status auto-clear; replacing the handle cancels the previous timer.
    let status_timer = use_state(|| None::<Timeout>);

    let on_field = {
        let form = form.clone();
        Callback::from(move |(field, input): (FieldId, String)| {
            form.dispatch(FormAction::SetField { field, input });
        })
    };
    let on_thread_count = {
        let form = form.clone();
        Callback::from(move |(_, input): (FieldId, String)| {
            form.dispatch(FormAction::SetThreadCount(input));
        })
    };
    let on_rename = {
        let form = form.clone();
        Callback::from(move |(index, name): (usize, String)| {
            form.dispatch(FormAction::RenameThread { index, name });
        })
    };
    let on_stack_size = {
        let form = form.clone();
        Callback::from(move |(index, input): (usize, String)| {
            form.dispatch(FormAction::SetStackSize { index, input });
        })
    };
    let on_scheduler_mode = {
        let on_field = on_field.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_field.emit((FieldId::SchedulerMode, select.value()));
        })
    };

    let on_generate = {
        let form = form.clone();
        let status_timer = status_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let mut reporter = StatusCollector::default();
            // The outcome reaches the user through the reporter.
            let _ = generate(&form.model, &mut BrowserDownload, &mut reporter);
            form.dispatch(FormAction::SetStatus(reporter.status));

            let form_for_timer = form.clone();
            let handle = Timeout::new(STATUS_CLEAR_MS, move || {
                form_for_timer.dispatch(FormAction::SetStatus(None));
            });
            status_timer.set(Some(handle));
        })
    };
    let on_reset = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FormAction::Reset))
    };

    let model = &form.model;

    let render_section_fields = |section: Section| -> Html {
        fields_in(section)
            .map(|desc| match desc.id {
                FieldId::ThreadCount => render_field(desc, &form, &on_thread_count),
                FieldId::SchedulerMode => html! {
                    <div class="form-group">
                        <label for={desc.name}>{ format!("{}:", desc.label) }</label>
                        <select id={desc.name} onchange={on_scheduler_mode.clone()}>
                            { for SchedulerMode::ALL.iter().map(|mode| html! {
                                <option value={mode.name()} selected={*mode == model.scheduler_mode()}>
                                    { mode.name() }
                                </option>
                            }) }
                        </select>
                    </div>
                },
                FieldId::PipeType => html! {
                    <div class="form-group radio-group">
                        { for PipeType::ALL.iter().map(|pipe| {
                            let pipe = *pipe;
                            let on_field = on_field.clone();
                            html! {
                                <label>
                                    <input type="radio"
                                        name={desc.name}
                                        value={pipe.name()}
                                        checked={model.pipe_type() == pipe}
                                        disabled={!model.is_pipe_type_available(pipe)}
                                        onchange={Callback::from(move |_: Event| {
                                            on_field.emit((FieldId::PipeType, pipe.name().to_string()));
                                        })}
                                    />
                                    { format!("{} Pipe", pipe.name()) }
                                </label>
                            }
                        }) }
                        if let Some(err) = form.field_error(FieldId::PipeType) {
                            <div class="input-error">{ err }</div>
                        }
                    </div>
                },
                _ => render_field(desc, &form, &on_field),
            })
            .collect::<Html>()
    };

    html! {
        <div class="container">
            <h1>{ "RTOS Configuration Generator" }</h1>

            <FormSection title="General">
                <div class="kernel-version">
                    { format!("Kernel Version: {}", model.kernel_version()) }
                </div>
            </FormSection>

            <FormSection title={Section::Threads.title()}>
                { render_section_fields(Section::Threads) }
                <ThreadTable
                    threads={Rc::new(model.threads().to_vec())}
                    errors={form.thread_errors.clone()}
                    {on_rename}
                    {on_stack_size}
                />
            </FormSection>

            { for [Section::Scheduler, Section::Communication, Section::Synchronization, Section::Trace]
                .into_iter()
                .map(|section| html! {
                    <FormSection title={section.title()}>
                        { render_section_fields(section) }
                    </FormSection>
                }) }

            <div class="actions">
                <button class="btn-primary" onclick={on_generate}>{ "Generate Config" }</button>
                <button class="btn-secondary" onclick={on_reset}>{ "Reset" }</button>
            </div>
            { render_status(&form.status) }
        </div>
    }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
