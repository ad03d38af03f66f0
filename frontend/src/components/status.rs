//! 加载中 / 加载失败的通用展示

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-4 py-24">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <p class="text-base-content/70">{message}</p>
        </div>
    }
}

/// 错误提示，附带重试按钮
#[component]
pub fn LoadError(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-4 py-24">
            <div role="alert" class="alert alert-error max-w-md">
                <span>{message}</span>
            </div>
            <button class="btn btn-primary" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
