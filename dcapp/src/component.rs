use leptos::prelude::*;

/// A select box over `(value, label)` pairs, bound to `value`; the blank
/// leading option stays selected while the value matches none of them.
#[component]
pub fn SelectMap(
    name: &'static str,
    options: Vec<(String, String)>,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional, into)] on_change: Option<Callback<()>>,
) -> impl IntoView {
    let known = options.iter()
        .map(|(option, _)| option.clone())
        .collect::<Vec<_>>();
    let valid_choice = move || value.with(|value| known.contains(value));
    let options_view = options.into_iter()
        .map(|(option, label)| {
            let current = option.clone();
            let selected = move || value.with(|value| value == &current);
            view! { <option value=option selected=selected>{label}</option> }
        })
        .collect_view();
    view! {
        <select
            id=name
            name=name
            prop:value=move || value.get()
            on:change=move |ev| {
                value.set(event_target_value(&ev));
                if let Some(on_change) = on_change {
                    on_change.run(());
                }
            }
        >
            <option value="" selected=move || !valid_choice()>{placeholder}</option>
            {options_view}
        </select>
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="bounce1"></div>
            <div class="bounce2"></div>
            <div class="bounce3"></div>
        </div>
    }
}
