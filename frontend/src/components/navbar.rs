use crate::auth::{logout, use_session};
use crate::web::router::{Link, use_navigate};
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let user = session.user_signal();
    let is_loading = session.is_loading_signal();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        logout(&session);
        navigate("/");
    };

    view! {
        <nav class="navbar bg-base-100 shadow-sm px-4">
            <div class="flex-1">
                <Link to="/" class="btn btn-ghost text-xl font-bold">"MN-SHOP"</Link>
            </div>
            <div class="flex-none">
                <ul class="menu menu-horizontal px-1">
                    <li><Link to="/">"Home"</Link></li>
                    <li><Link to="/products">"Products"</Link></li>
                    <li><Link to="/about">"About"</Link></li>
                </ul>
            </div>
            <Show when=move || !is_loading.get()>
                <div class="flex-none flex items-center gap-2">
                    {
                        let on_logout = on_logout.clone();
                        move || match user.get() {
                            Some(user) => {
                                let on_logout = on_logout.clone();
                                view! {
                                    <span class="text-sm text-base-content/70">
                                        {user.email().unwrap_or("User").to_string()}
                                    </span>
                                    <button class="btn btn-outline btn-sm" on:click=on_logout>
                                        "Logout"
                                    </button>
                                }
                                .into_any()
                            }
                            None => view! {
                                <Link to="/login" class="btn btn-ghost btn-sm">"Login"</Link>
                                <Link to="/signup" class="btn btn-primary btn-sm">"Sign Up"</Link>
                            }
                            .into_any(),
                        }
                    }
                </div>
            </Show>
        </nav>
    }
}
