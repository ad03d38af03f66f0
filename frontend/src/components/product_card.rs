//! 商品卡片
//!
//! 交互状态放在一个 `RwSignal<CardState>` 里，交给核心层的异步驱动
//! [`toggle_favorite`] / [`add_to_cart`] 读写；失败统一用原生弹窗提示。

use crate::api::use_api;
use crate::auth::use_session;
use crate::web::alert;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mnshop::card::{CART_ADDED_MESSAGE, CardCell, CardError, CardState, add_to_cart, toggle_favorite};
use mnshop_shared::Product;

/// 以信号承载的卡片状态，busy 标记的变化会立即驱动按钮禁用
#[derive(Clone, Copy)]
struct ReactiveCard(RwSignal<CardState>);

impl CardCell for ReactiveCard {
    fn update_card<R>(&self, f: impl FnOnce(&mut CardState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// 驱动内部已记录日志，这里只负责提示用户
fn report(err: &CardError) {
    match err {
        CardError::Busy | CardError::Detached => {}
        _ => alert(&err.to_string()),
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let card = RwSignal::new(CardState::new(&product));
    let cell = ReactiveCard(card);

    let on_favorite = {
        let session = session.clone();
        let api = api.clone();
        move |_: leptos::ev::MouseEvent| {
            let session = session.clone();
            let api = api.clone();
            spawn_local(async move {
                if let Err(e) = toggle_favorite(&cell, &session.store, &*api).await {
                    report(&e);
                }
            });
        }
    };

    let on_add_to_cart = move |_: leptos::ev::MouseEvent| {
        let session = session.clone();
        let api = api.clone();
        spawn_local(async move {
            match add_to_cart(&cell, &session.store, &*api).await {
                Ok(_) => alert(CART_ADDED_MESSAGE),
                Err(e) => report(&e),
            }
        });
    };

    let colors = card.with_untracked(|s| s.colors().to_vec());
    let has_colors = !colors.is_empty();
    let sizes = card.with_untracked(|s| s.sizes().to_vec());

    let color_options = colors
        .into_iter()
        .map(|color| {
            let selected = color.clone();
            let title = color.clone();
            let current = color.clone();
            view! {
                <button
                    class=move || {
                        if card.with(|s| s.selected_color.as_deref() == Some(current.as_str())) {
                            "w-8 h-8 rounded-full border-2 border-primary ring-2 ring-primary/40"
                        } else {
                            "w-8 h-8 rounded-full border-2 border-base-300"
                        }
                    }
                    style=format!("background-color: {}", color.to_lowercase())
                    title=title
                    on:click=move |_| {
                        card.update(|s| {
                            s.select_color(&selected);
                        });
                    }
                ></button>
            }
        })
        .collect_view();

    // 没有可选颜色时整块不显示
    let color_block = has_colors.then(|| {
        view! {
            <div>
                <label class="label-text font-semibold">"Color:"</label>
                <div class="flex flex-wrap gap-2 mt-1">{color_options}</div>
            </div>
        }
    });

    let size_options = if sizes.is_empty() {
        view! { <p class="text-sm text-base-content/60">"One size available"</p> }.into_any()
    } else {
        sizes
            .into_iter()
            .map(|size| {
                let selected = size.clone();
                let current = size.clone();
                view! {
                    <button
                        class=move || {
                            if card.with(|s| s.selected_size.as_deref() == Some(current.as_str())) {
                                "btn btn-sm btn-primary"
                            } else {
                                "btn btn-sm btn-outline"
                            }
                        }
                        on:click=move |_| {
                            card.update(|s| {
                                s.select_size(&selected);
                            });
                        }
                    >
                        {size}
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="card bg-base-100 shadow-md">
            <figure class="relative h-48 bg-base-200">
                <div class="flex flex-col items-center justify-center text-base-content/60">
                    <span class="text-4xl">"📷"</span>
                    <p class="font-medium">"Product Image"</p>
                    <p class="text-sm">
                        "Color: "
                        {move || {
                            card.with(|s| {
                                s.selected_color.clone().unwrap_or_else(|| "Select a color".to_string())
                            })
                        }}
                    </p>
                </div>
                <button
                    class="btn btn-circle btn-sm absolute top-2 right-2"
                    on:click=on_favorite
                    disabled=move || card.with(|s| s.favorite_busy)
                    title=move || {
                        if card.with(|s| s.favorite) { "Remove from favorites" } else { "Add to favorites" }
                    }
                >
                    {move || if card.with(|s| s.favorite) { "❤️" } else { "🤍" }}
                </button>
            </figure>
            <div class="card-body gap-3">
                <h3 class="card-title">{product.product_name.clone()}</h3>
                <p class="text-sm text-base-content/70">{product.description.clone()}</p>
                <span class="text-lg font-bold">{format!("${}", product.price)}</span>

                {color_block}

                <div>
                    <label class="label-text font-semibold">"Size:"</label>
                    <div class="flex flex-wrap gap-2 mt-1">{size_options}</div>
                </div>

                <div class="card-actions">
                    <button
                        class="btn btn-primary w-full"
                        on:click=on_add_to_cart
                        disabled=move || !card.with(CardState::can_add_to_cart)
                    >
                        {move || if card.with(|s| s.cart_busy) { "Adding..." } else { "Add to Cart" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
