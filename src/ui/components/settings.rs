use dioxus::prelude::*;

use crate::api_keys;

/// Settings page: TMDB API token entry and status.
#[component]
pub fn Settings() -> Element {
    let mut token_input = use_signal(String::new);
    let mut status_message = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);
    let mut has_token = use_signal(api_keys::check_api_token_exists);

    let save_token = move |_| {
        let token = token_input.read().trim().to_string();
        if token.is_empty() {
            status_message.set(Some("Enter a token first".to_string()));
            return;
        }

        spawn(async move {
            is_saving.set(true);
            status_message.set(None);

            match api_keys::validate_and_store_api_token(&token).await {
                Ok(()) => {
                    status_message.set(Some("Token validated and stored".to_string()));
                    has_token.set(true);
                    token_input.set(String::new());
                }
                Err(e) => {
                    status_message.set(Some(format!("Failed to store token: {}", e)));
                }
            }

            is_saving.set(false);
        });
    };

    let remove_token = move |_| {
        match api_keys::remove_api_token() {
            Ok(()) => {
                status_message.set(Some("Token removed".to_string()));
                has_token.set(false);
            }
            Err(e) => {
                status_message.set(Some(format!("Failed to remove token: {}", e)));
            }
        }
    };

    rsx! {
        div { class: "max-w-4xl mx-auto p-6",
            h1 { class: "text-2xl font-bold text-white mb-6", "Settings" }

            div { class: "bg-gray-800 rounded-lg shadow p-6",
                h2 { class: "text-xl font-semibold text-white mb-4", "TMDB API Token" }

                div { class: "mb-4",
                    div { class: "text-sm font-medium text-gray-400 mb-1", "Status" }
                    if *has_token.read() {
                        div { class: "text-base text-gray-200 flex items-center gap-2",
                            "Configured"
                            span { class: "text-green-500", "✓" }
                        }
                    } else {
                        div { class: "text-base text-gray-400 italic", "Not configured" }
                    }
                }

                div { class: "flex gap-2",
                    input {
                        class: "flex-1 p-3 bg-gray-900 border border-gray-600 rounded-lg text-white",
                        r#type: "password",
                        placeholder: "Paste your TMDB API read access token",
                        value: "{token_input}",
                        oninput: move |event: FormEvent| {
                            token_input.set(event.value());
                        }
                    }
                    button {
                        class: "px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 font-medium",
                        disabled: *is_saving.read(),
                        onclick: save_token,
                        if *is_saving.read() { "Validating..." } else { "Save" }
                    }
                    if *has_token.read() {
                        button {
                            class: "px-6 py-3 bg-gray-600 text-white rounded-lg hover:bg-gray-700 font-medium",
                            onclick: remove_token,
                            "Remove"
                        }
                    }
                }

                if let Some(message) = status_message.read().as_ref() {
                    p { class: "text-sm text-gray-300 mt-3", "{message}" }
                }
            }
        }
    }
}
