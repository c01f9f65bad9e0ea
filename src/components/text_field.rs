//! Labeled text input bound to a validated form field.

use leptos::prelude::*;

use crate::state::form::Field;

/// Text input wired to a [`Field`] signal, with label, inline error
/// line, and an optional show/hide toggle for password inputs.
#[component]
pub fn TextField(
    /// Field state to read and write.
    field: RwSignal<Field>,
    /// Visible label text.
    label: &'static str,
    /// Input `type` attribute.
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(optional)]
    placeholder: &'static str,
    /// When set, adds a show/hide toggle that overrides `input_type`
    /// between `password` and `text`.
    #[prop(optional, into)]
    reveal: Option<RwSignal<bool>>,
) -> impl IntoView {
    let effective_type = move || match reveal {
        Some(shown) if shown.get() => "text",
        Some(_) => "password",
        None => input_type,
    };
    let error = move || field.with(Field::visible_error);

    view! {
        <div class="field">
            <label class="field__label">{label}</label>
            <div class="field__control">
                <input
                    class="field__input"
                    class:field__input--invalid=move || error().is_some()
                    type=effective_type
                    placeholder=placeholder
                    prop:value=move || field.with(|f| f.value.clone())
                    on:input=move |ev| field.update(|f| f.set_value(event_target_value(&ev)))
                />
                {reveal.map(|shown| {
                    view! {
                        <button
                            type="button"
                            class="field__reveal"
                            title="Toggle password visibility"
                            on:click=move |_| shown.update(|s| *s = !*s)
                        >
                            {move || if shown.get() { "Hide" } else { "Show" }}
                        </button>
                    }
                })}
            </div>
            {move || error().map(|message| view! { <p class="field__error">{message}</p> })}
        </div>
    }
}
