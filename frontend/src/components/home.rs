use crate::api::use_api;
use crate::components::product_card::ProductCard;
use crate::components::status::{LoadError, Loading};
use leptos::prelude::*;
use leptos::task::spawn_local;
use mnshop_shared::Product;

const LOAD_FAILED: &str = "Failed to load products. Please try again later.";

/// 首页与商品列表页共用的商品列表
#[component]
pub fn HomePage(
    /// 是否展示顶部横幅
    #[prop(default = true)]
    hero: bool,
) -> impl IntoView {
    let api = use_api();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load = move || {
        let api = api.clone();
        set_is_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.home().list_products().await {
                Ok(list) => {
                    tracing::debug!(count = list.len(), "products loaded");
                    set_products.set(list);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load products");
                    set_error_msg.set(Some(LOAD_FAILED.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    load();
    let on_retry = Callback::new(move |_: ()| load());

    let listing = move || {
        if is_loading.get() {
            return view! { <Loading message="Loading products..." /> }.into_any();
        }
        if let Some(message) = error_msg.get() {
            return view! { <LoadError message=message on_retry=on_retry /> }.into_any();
        }
        view! {
            <Show
                when=move || products.with(|p| !p.is_empty())
                fallback=|| view! {
                    <div class="text-center py-16 text-base-content/60">
                        <p>"No products available at the moment."</p>
                    </div>
                }
            >
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || products.get()
                        key=|product| product.product_id.clone()
                        children=|product| view! { <ProductCard product=product /> }
                    />
                </div>
            </Show>
        }
        .into_any()
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Show when=move || hero>
                <div class="hero bg-primary text-primary-content py-16">
                    <div class="hero-content text-center">
                        <div class="max-w-md">
                            <h1 class="text-4xl font-bold">"Welcome to MN-SHOP"</h1>
                            <p class="py-4">"Discover amazing products at unbeatable prices"</p>
                        </div>
                    </div>
                </div>
            </Show>
            <section class="container mx-auto px-4 py-10">
                <h2 class="text-2xl font-bold mb-6">"Featured Products"</h2>
                {listing}
            </section>
        </div>
    }
}
