//! 关于页：公司介绍与联系方式

use crate::api::use_api;
use crate::components::status::{LoadError, Loading};
use crate::web::copy_text;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mnshop_shared::AboutInfo;
use std::time::Duration;

const LOAD_FAILED: &str = "Failed to load about page data. Please try again later.";
const COPY_FAILED: &str = "Failed to copy number";
const COPY_MESSAGE_DURATION: Duration = Duration::from_secs(3);

pub fn contact_icon(kind: &str) -> &'static str {
    match kind.to_lowercase().as_str() {
        "mobile" => "📱",
        "phone" => "📞",
        "email" => "📧",
        "instagram" => "📷",
        "facebook" => "📘",
        "twitter" => "🐦",
        "linkedin" => "💼",
        "youtube" => "📺",
        "whatsapp" => "💬",
        "website" => "🌐",
        "address" => "📍",
        "location" => "🗺️",
        _ => "📋",
    }
}

/// 未知类型原样显示
pub fn contact_label(kind: &str) -> String {
    let label = match kind.to_lowercase().as_str() {
        "mobile" => "Mobile",
        "phone" => "Phone",
        "email" => "Email",
        "instagram" => "Instagram",
        "facebook" => "Facebook",
        "twitter" => "Twitter",
        "linkedin" => "LinkedIn",
        "youtube" => "YouTube",
        "whatsapp" => "WhatsApp",
        "website" => "Website",
        "address" => "Address",
        "location" => "Location",
        _ => return kind.to_string(),
    };
    label.to_string()
}

/// 只有电话类联系方式点击后复制
pub fn is_copyable(kind: &str) -> bool {
    matches!(kind.to_lowercase().as_str(), "mobile" | "phone")
}

/// 复制联系方式后的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    pub copied: bool,
    pub message: String,
}

impl CopyFeedback {
    pub fn new(kind: &str, copied: bool) -> Self {
        let message = if copied {
            format!("{} number copied!", contact_label(kind))
        } else {
            COPY_FAILED.to_string()
        };
        Self { copied, message }
    }

    pub fn alert_class(&self) -> &'static str {
        if self.copied { "alert alert-success" } else { "alert alert-error" }
    }

    pub fn icon(&self) -> &'static str {
        if self.copied { "✅" } else { "⚠️" }
    }
}

/// 按空行拆分段落
pub fn paragraphs(description: &str) -> Vec<&str> {
    description.split("\n\n").collect()
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let api = use_api();

    let (about, set_about) = signal(Option::<AboutInfo>::None);
    let (is_loading, set_is_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (copy_msg, set_copy_msg) = signal(Option::<CopyFeedback>::None);

    let load = move || {
        let api = api.clone();
        set_is_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.about().get_about_data().await {
                Ok(info) => set_about.set(Some(info)),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load about data");
                    set_error_msg.set(Some(LOAD_FAILED.to_string()));
                }
            }
            set_is_loading.set(false);
        });
    };

    load();
    let on_retry = Callback::new(move |_: ()| load());

    let copy_contact = move |kind: String, value: String| {
        spawn_local(async move {
            let copied = match copy_text(&value).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard write failed");
                    false
                }
            };
            set_copy_msg.set(Some(CopyFeedback::new(&kind, copied)));
            set_timeout(move || set_copy_msg.set(None), COPY_MESSAGE_DURATION);
        });
    };

    let content = move || {
        if is_loading.get() {
            return view! { <Loading message="Loading about page..." /> }.into_any();
        }
        if let Some(message) = error_msg.get() {
            return view! { <LoadError message=message on_retry=on_retry /> }.into_any();
        }

        let info = about.get().unwrap_or_default();

        let story = info.description.as_deref().filter(|d| !d.is_empty()).map(|description| {
            let paragraphs = paragraphs(description)
                .into_iter()
                .map(|p| view! { <p class="mb-4 leading-relaxed">{p.to_string()}</p> })
                .collect_view();
            view! {
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <h2 class="card-title text-2xl">"Our Story"</h2>
                        <div>{paragraphs}</div>
                    </div>
                </div>
            }
        });

        let contacts = (!info.contact_info.is_empty()).then(|| {
            let items = info
                .contact_info
                .into_iter()
                .map(|(kind, value)| {
                    let copyable = is_copyable(&kind);
                    let icon = contact_icon(&kind);
                    let label = contact_label(&kind);
                    let shown = value.clone();
                    let on_click = move |_: leptos::ev::MouseEvent| {
                        if copyable {
                            copy_contact(kind.clone(), value.clone());
                        }
                    };
                    view! {
                        <div
                            class=if copyable {
                                "flex items-center gap-4 p-4 rounded-box bg-base-200 cursor-pointer hover:bg-base-300"
                            } else {
                                "flex items-center gap-4 p-4 rounded-box bg-base-200"
                            }
                            on:click=on_click
                        >
                            <div class="text-3xl">{icon}</div>
                            <div>
                                <h3 class="font-semibold">{label}</h3>
                                <p class="text-base-content/70">{shown}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <h2 class="card-title text-2xl">"Get In Touch"</h2>
                        <div class="grid gap-4 sm:grid-cols-2">{items}</div>
                    </div>
                </div>
            }
        });

        view! {
            <div class="container mx-auto px-4 py-10 flex flex-col gap-6">
                {story}
                {contacts}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="hero bg-primary text-primary-content py-16">
                <div class="hero-content text-center">
                    <div class="max-w-md">
                        <h1 class="text-4xl font-bold">"About MN-SHOP"</h1>
                        <p class="py-4">"Your trusted destination for quality products"</p>
                    </div>
                </div>
            </div>
            {content}
            <Show when=move || copy_msg.with(Option::is_some)>
                <div class="toast toast-center">
                    <div class=move || {
                        copy_msg.with(|m| m.as_ref().map_or("alert", CopyFeedback::alert_class))
                    }>
                        <span>{move || copy_msg.with(|m| m.as_ref().map_or("", CopyFeedback::icon))}</span>
                        <span>{move || copy_msg.with(|m| m.as_ref().map(|m| m.message.clone()).unwrap_or_default())}</span>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_contact_types_are_case_insensitive() {
        assert_eq!(contact_icon("Mobile"), "📱");
        assert_eq!(contact_label("LINKEDIN"), "LinkedIn");
        assert!(is_copyable("Phone"));
        assert!(!is_copyable("email"));
    }

    #[test]
    fn unknown_contact_type_falls_back() {
        assert_eq!(contact_icon("fax"), "📋");
        assert_eq!(contact_label("Fax"), "Fax");
    }

    #[test]
    fn copy_feedback_style_follows_outcome() {
        let ok = CopyFeedback::new("mobile", true);
        assert_eq!(ok.message, "Mobile number copied!");
        assert_eq!(ok.alert_class(), "alert alert-success");

        let failed = CopyFeedback::new("phone", false);
        assert_eq!(failed.message, "Failed to copy number");
        assert_eq!(failed.alert_class(), "alert alert-error");
        assert_ne!(failed.icon(), ok.icon());
    }

    #[test]
    fn description_splits_on_blank_lines() {
        assert_eq!(
            paragraphs("First.\n\nSecond line\nstill second.\n\nThird."),
            vec!["First.", "Second line\nstill second.", "Third."]
        );
        assert_eq!(paragraphs("Only one"), vec!["Only one"]);
    }
}
