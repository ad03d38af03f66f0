use crate::api::use_api;
use crate::auth::use_session;
use crate::components::form_field::TextField;
use crate::web::router::{Link, use_navigate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use mnshop::flows;
use mnshop::validation::{FieldErrors, FormField, LoginForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let is_loading = session.is_loading_signal();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let submitted = form.get_untracked();
        if let Err(field_errors) = submitted.validate() {
            errors.set(field_errors);
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let session = session.clone();
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match flows::login(&*api, &session.store, &submitted).await {
                Ok(_) => navigate("/"),
                Err(e) => match e.field_errors() {
                    Some(field_errors) => errors.set(field_errors.clone()),
                    None => set_error_msg.set(Some(e.to_string())),
                },
            }
            set_is_submitting.set(false);
        });
    };

    let email = Signal::derive(move || form.with(|f| f.email.clone()));
    let password = Signal::derive(move || form.with(|f| f.password.clone()));
    let error_for =
        move |field: FormField| Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)));

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit.clone()>
                            <div class="text-center mb-2">
                                <h2 class="text-3xl font-bold">"Welcome Back"</h2>
                                <p class="text-base-content/70">"Sign in to continue shopping"</p>
                            </div>

                            <Show when=move || error_msg.with(Option::is_some)>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <TextField
                                label="Email"
                                name=FormField::Email.as_str()
                                input_type="email"
                                placeholder="Enter your email"
                                value=email
                                error=error_for(FormField::Email)
                                disabled=is_submitting
                                on_input=Callback::new(move |value: String| {
                                    form.update(|f| f.email = value);
                                    errors.update(|e| e.clear(FormField::Email));
                                })
                            />
                            <TextField
                                label="Password"
                                name=FormField::Password.as_str()
                                input_type="password"
                                placeholder="Enter your password"
                                value=password
                                error=error_for(FormField::Password)
                                disabled=is_submitting
                                on_input=Callback::new(move |value: String| {
                                    form.update(|f| f.password = value);
                                    errors.update(|e| e.clear(FormField::Password));
                                })
                            />

                            <div class="form-control mt-6">
                                <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() { "Signing In..." } else { "Sign In" }}
                                </button>
                            </div>

                            <p class="text-center text-sm mt-2">
                                "Don't have an account? "
                                <Link to="/signup" class="link link-primary">"Sign up here"</Link>
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
