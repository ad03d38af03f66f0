use leptos::prelude::*;

/// 带标签与字段错误的输入框
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into, default = "text".to_string())] input_type: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=name.clone()>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=name.clone()
                name=name
                type=input_type
                placeholder=placeholder
                class=move || {
                    if error.with(Option::is_some) {
                        "input input-bordered input-error"
                    } else {
                        "input input-bordered"
                    }
                }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <Show when=move || error.with(Option::is_some)>
                <label class="label">
                    <span class="label-text-alt text-error">
                        {move || error.get().unwrap_or_default()}
                    </span>
                </label>
            </Show>
        </div>
    }
}
