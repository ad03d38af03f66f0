//! 注册页
//!
//! 提交前先做本地校验，全部通过才发请求。注册成功后展示成功卡片，
//! 2 秒后回到首页。

use crate::api::use_api;
use crate::auth::use_session;
use crate::components::form_field::TextField;
use crate::web::router::{Link, use_navigate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use mnshop::flows::{self, SignupError};
use mnshop::validation::{FieldErrors, FormField, SignupForm};
use std::time::Duration;

const REDIRECT_DELAY: Duration = Duration::from_secs(2);

fn field_mut(form: &mut SignupForm, field: FormField) -> &mut String {
    match field {
        FormField::Email => &mut form.email,
        FormField::Password => &mut form.password,
        FormField::ConfirmPassword => &mut form.confirm_password,
        FormField::MobileNumber => &mut form.mobile_number,
    }
}

fn field_ref(form: &SignupForm, field: FormField) -> &str {
    match field {
        FormField::Email => &form.email,
        FormField::Password => &form.password,
        FormField::ConfirmPassword => &form.confirm_password,
        FormField::MobileNumber => &form.mobile_number,
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (api_error, set_api_error) = signal(Option::<String>::None);
    let (email_taken, set_email_taken) = signal(false);
    let (succeeded, set_succeeded) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let submitted = form.get_untracked();
        if let Err(field_errors) = submitted.validate() {
            errors.set(field_errors);
            return;
        }

        set_is_submitting.set(true);
        set_api_error.set(None);
        set_email_taken.set(false);

        let session = session.clone();
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match flows::signup(&*api, &session.store, &submitted).await {
                Ok(_) => {
                    set_succeeded.set(true);
                    set_timeout(move || navigate("/"), REDIRECT_DELAY);
                }
                Err(e) => {
                    if let Some(field_errors) = e.field_errors() {
                        errors.set(field_errors.clone());
                    } else {
                        set_email_taken.set(matches!(e, SignupError::EmailTaken));
                        set_api_error.set(Some(e.to_string()));
                    }
                }
            }
            set_is_submitting.set(false);
        });
    };

    let field = move |name: FormField, label: &'static str, input_type: &'static str, placeholder: &'static str| {
        view! {
            <TextField
                label=label
                name=name.as_str()
                input_type=input_type
                placeholder=placeholder
                value=Signal::derive(move || form.with(|f| field_ref(f, name).to_string()))
                error=Signal::derive(move || errors.with(|e| e.get(name).map(str::to_string)))
                disabled=is_submitting
                on_input=Callback::new(move |value: String| {
                    form.update(|f| *field_mut(f, name) = value);
                    errors.update(|e| e.clear(name));
                })
            />
        }
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <Show
                    when=move || succeeded.get()
                    fallback=move || view! {
                        <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                            <form class="card-body" on:submit=on_submit.clone()>
                                <div class="text-center mb-2">
                                    <h2 class="text-3xl font-bold">"Create Account"</h2>
                                    <p class="text-base-content/70">"Join MN-SHOP and start shopping"</p>
                                </div>

                                <Show when=move || api_error.with(Option::is_some)>
                                    <div role="alert" class="alert alert-error text-sm py-2 flex flex-col items-start">
                                        <span>{move || api_error.get().unwrap_or_default()}</span>
                                        <Show when=move || email_taken.get()>
                                            <Link to="/login" class="link link-hover font-semibold">
                                                "Sign in instead"
                                            </Link>
                                        </Show>
                                    </div>
                                </Show>

                                {field(FormField::Email, "Email", "email", "Enter your email")}
                                {field(FormField::MobileNumber, "Mobile Number", "tel", "Enter your mobile number")}
                                {field(FormField::Password, "Password", "password", "Create a password")}
                                {field(FormField::ConfirmPassword, "Confirm Password", "password", "Confirm your password")}

                                <div class="form-control mt-6">
                                    <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                                        {move || if is_submitting.get() { "Creating Account..." } else { "Create Account" }}
                                    </button>
                                </div>

                                <p class="text-center text-sm mt-2">
                                    "Already have an account? "
                                    <Link to="/login" class="link link-primary">"Sign in here"</Link>
                                </p>
                            </form>
                        </div>
                    }
                >
                    <div class="card w-full shadow-2xl bg-base-100">
                        <div class="card-body items-center text-center">
                            <div class="text-5xl text-success">"✓"</div>
                            <h2 class="card-title text-2xl">"Account Created Successfully!"</h2>
                            <p class="text-base-content/70">
                                "Welcome to MN-SHOP! You will be redirected to the home page shortly."
                            </p>
                            <Link to="/" class="btn btn-primary mt-4">"Go to Home"</Link>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
