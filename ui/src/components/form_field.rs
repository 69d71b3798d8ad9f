//! Inputs bound to one path of the ad form.

use serde_json::Value;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::ad_form::{FormAction, FormStore, number_input};

pub type FormHandle = UseReducerHandle<FormStore>;

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub form: FormHandle,
    pub path: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub form: FormHandle,
    pub path: AttrValue,
    pub label: AttrValue,
    /// `(wire value, label)` pairs.
    pub options: Vec<(&'static str, &'static str)>,
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border rounded-md shadow-sm \
    bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100 \
    focus:outline-none focus:ring-2 focus:ring-neutral-500 \
    dark:focus:ring-neutral-400";

fn input_class(error: Option<&str>) -> String {
    let border = if error.is_some() {
        "border-red-400 dark:border-red-600"
    } else {
        "border-neutral-300 dark:border-neutral-600"
    };
    format!("{INPUT_CLASS} {border}")
}

fn set_callback<E, F>(form: &FormHandle, path: &AttrValue, read: F) -> Callback<E>
where
    E: 'static,
    F: Fn(E) -> Value + 'static,
{
    let form = form.clone();
    let path = path.to_string();
    Callback::from(move |event: E| {
        form.dispatch(FormAction::Set {
            path: path.clone(),
            value: read(event),
        });
    })
}

#[derive(Properties, PartialEq)]
struct FieldFrameProps {
    path: AttrValue,
    label: AttrValue,
    error: Option<AttrValue>,
    children: Children,
}

#[function_component]
fn FieldFrame(props: &FieldFrameProps) -> Html {
    html! {
        <div>
            <label for={props.path.clone()} class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                {&props.label}
            </label>
            {props.children.clone()}
            if let Some(error) = &props.error {
                <p class="mt-1 text-sm text-red-600 dark:text-red-400">{error}</p>
            }
        </div>
    }
}

fn visible_error(form: &FormStore, path: &str) -> Option<AttrValue> {
    form.visible_error(path).map(|e| AttrValue::from(e.to_string()))
}

#[function_component]
pub fn TextField(props: &FieldProps) -> Html {
    let error = visible_error(&props.form, &props.path);
    let oninput = set_callback(&props.form, &props.path, |e: InputEvent| {
        Value::String(e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <FieldFrame path={props.path.clone()} label={props.label.clone()} error={error.clone()}>
            <input
                type="text"
                id={props.path.clone()}
                value={props.form.text(&props.path)}
                placeholder={props.placeholder.clone()}
                class={input_class(error.as_deref())}
                {oninput}
            />
        </FieldFrame>
    }
}

#[function_component]
pub fn TextAreaField(props: &FieldProps) -> Html {
    let error = visible_error(&props.form, &props.path);
    let oninput = set_callback(&props.form, &props.path, |e: InputEvent| {
        Value::String(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });

    html! {
        <FieldFrame path={props.path.clone()} label={props.label.clone()} error={error.clone()}>
            <textarea
                id={props.path.clone()}
                rows="5"
                value={props.form.text(&props.path)}
                placeholder={props.placeholder.clone()}
                class={input_class(error.as_deref())}
                {oninput}
            />
        </FieldFrame>
    }
}

#[function_component]
pub fn NumberField(props: &FieldProps) -> Html {
    let error = visible_error(&props.form, &props.path);
    let oninput = set_callback(&props.form, &props.path, |e: InputEvent| {
        number_input(&e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <FieldFrame path={props.path.clone()} label={props.label.clone()} error={error.clone()}>
            <input
                type="number"
                id={props.path.clone()}
                value={props.form.text(&props.path)}
                placeholder={props.placeholder.clone()}
                class={input_class(error.as_deref())}
                {oninput}
            />
        </FieldFrame>
    }
}

#[function_component]
pub fn SelectField(props: &SelectFieldProps) -> Html {
    let error = visible_error(&props.form, &props.path);
    let current = props.form.text(&props.path);
    let onchange = set_callback(&props.form, &props.path, |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        if value.is_empty() {
            Value::Null
        } else {
            Value::String(value)
        }
    });

    html! {
        <FieldFrame path={props.path.clone()} label={props.label.clone()} error={error.clone()}>
            <select
                id={props.path.clone()}
                class={input_class(error.as_deref())}
                {onchange}
            >
                <option value="" selected={current.is_empty()}>{"Select..."}</option>
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={*value} selected={current == *value}>{*label}</option>
                })}
            </select>
        </FieldFrame>
    }
}

#[function_component]
pub fn CheckboxField(props: &FieldProps) -> Html {
    let onchange = set_callback(&props.form, &props.path, |e: Event| {
        Value::Bool(e.target_unchecked_into::<HtmlInputElement>().checked())
    });

    html! {
        <label class="flex items-center gap-3 text-sm text-neutral-700 dark:text-neutral-300">
            <input
                type="checkbox"
                id={props.path.clone()}
                checked={props.form.flag(&props.path)}
                class="h-4 w-4 rounded border-neutral-300 dark:border-neutral-600"
                {onchange}
            />
            {&props.label}
        </label>
    }
}
