//! Pure Yew view components for the configuration form.
//!
//! This module contains stateless components that render based on props;
//! all edits are reported back through callbacks and applied by the form
//! reducer in `hooks.rs`.

use crate::hooks::Status;
use kconfig_gen::{Bounds, FieldId, ThreadEntry};
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Titled frame around one group of fields.
#[derive(Properties, PartialEq)]
pub struct FormSectionProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(FormSection)]
pub fn form_section(props: &FormSectionProps) -> Html {
    html! {
        <fieldset class="form-section">
            <legend>{ props.title.clone() }</legend>
            { props.children.clone() }
        </fieldset>
    }
}

/// Bounded integer input; the text is committed on change.
#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub field: FieldId,
    pub bounds: Bounds,
    pub value: u32,
    #[prop_or_default]
    pub error: Option<String>,
    pub onchange: Callback<(FieldId, String)>,
}

#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    let onchange = {
        let field = props.field;
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit((field, input.value()));
        })
    };

    html! {
        <div class="form-group">
            <label for={props.field.name()}>{ format!("{}:", props.field.label()) }</label>
            <input
                type="number"
                id={props.field.name()}
                min={props.bounds.min.to_string()}
                max={props.bounds.max.to_string()}
                value={props.value.to_string()}
                class={if props.error.is_some() { "invalid" } else { "" }}
                {onchange}
            />
            <span class="range-info">{ props.bounds.to_string() }</span>
            if let Some(ref err) = props.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

/// Checkbox bound to a flag field.
#[derive(Properties, PartialEq)]
pub struct FlagFieldProps {
    pub field: FieldId,
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub onchange: Callback<(FieldId, String)>,
}

#[function_component(FlagField)]
pub fn flag_field(props: &FlagFieldProps) -> Html {
    let onchange = {
        let field = props.field;
        let cb = props.onchange.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit((field, input.checked().to_string()));
        })
    };

    html! {
        <div class="form-group checkbox-group">
            <label>
                <input type="checkbox"
                    checked={props.checked}
                    disabled={props.disabled}
                    {onchange}
                />
                { props.field.label() }
            </label>
            if let Some(ref err) = props.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

/// Name and stack size inputs, one row per thread.
#[derive(Properties, PartialEq)]
pub struct ThreadTableProps {
    pub threads: Rc<Vec<ThreadEntry>>,
    pub errors: HashMap<usize, String>,
    pub on_rename: Callback<(usize, String)>,
    pub on_stack_size: Callback<(usize, String)>,
}

#[function_component(ThreadTable)]
pub fn thread_table(props: &ThreadTableProps) -> Html {
    html! {
        <table class="thread-table">
            <thead>
                <tr>
                    <th>{ "#" }</th>
                    <th>{ "Name" }</th>
                    <th>{ "Stack Size" }</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { props.threads.iter().enumerate().map(|(idx, thread)| {
                    render_thread_row(idx, thread, props.errors.get(&idx), props)
                }).collect::<Html>() }
            </tbody>
        </table>
    }
}

/// Renders a single row of the thread table
fn render_thread_row(
    idx: usize,
    thread: &ThreadEntry,
    error: Option<&String>,
    props: &ThreadTableProps,
) -> Html {
    let on_rename = {
        let cb = props.on_rename.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit((idx, input.value()));
        })
    };
    let on_stack_size = {
        let cb = props.on_stack_size.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit((idx, input.value()));
        })
    };

    html! {
        <tr key={idx.to_string()} class={if error.is_some() { "invalid" } else { "" }}>
            <td>{ format!("Thread {}", idx) }</td>
            <td>
                <input type="text" value={thread.name.clone()} onchange={on_rename} />
            </td>
            <td>
                <input type="number" value={thread.stack_size.to_string()} onchange={on_stack_size} />
            </td>
            <td class="input-error">{ error.cloned().unwrap_or_default() }</td>
        </tr>
    }
}

/// Renders the outcome of the last generate request, if any.
pub fn render_status(status: &Option<Status>) -> Html {
    match status {
        Some(Status::Success(msg)) => html! {
            <div class="status success">{ msg }</div>
        },
        Some(Status::Failure(msg)) => html! {
            <div class="status failure">{ msg }</div>
        },
        None => html! {},
    }
}
