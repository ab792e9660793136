use client::{HttpResetApi, Notice, PasswordResetApi, ResetForm, ResetLink, ResetQuery};
use dioxus::prelude::*;
use shared_types::{PasswordRequirements, ALL_REQUIREMENTS};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Checklist,
    ChecklistItem, Label, PasswordInput,
};

use crate::notify;

/// Checklist rows for the current password, in rule order.
fn checklist_items(requirements: PasswordRequirements) -> Vec<ChecklistItem> {
    ALL_REQUIREMENTS
        .iter()
        .map(|r| ChecklistItem::new(r.key(), r.label(), requirements.is_met(*r)))
        .collect()
}

/// Show the mismatch hint only once the user has typed a confirmation.
fn confirmation_mismatch(form: &ResetForm) -> bool {
    !form.confirm_password().is_empty() && form.confirm_password() != form.password()
}

/// Undecoded `location.search`, where the platform has one.
async fn location_search() -> Option<String> {
    document::eval("return window.location.search;")
        .join::<String>()
        .await
        .inspect_err(|e| tracing::debug!(error = %e, "Page URL unavailable, using routed token"))
        .ok()
}

/// Reset password page. Receives a token from the email link as a query
/// param and lets the user set a new password.
#[component]
pub fn ResetPassword(token: Option<String>, id: Option<String>) -> Element {
    let config = client::config::app_config();
    let param = config.reset.token_param;
    let mut form = use_signal(|| ResetForm::new(ResetLink { token, id }.token(param)));
    let toasts = use_toast();

    // The router splits the query after decoding it, so an encoded `&` in a
    // token is lost. Re-read the token from the raw URL once mounted.
    use_effect(move || {
        spawn(async move {
            if let Some(search) = location_search().await {
                let token = ResetQuery::from(search.as_str()).token(param);
                if form.peek().token() != token.as_ref() {
                    tracing::debug!("Token re-read from the page URL");
                    form.write().set_token(token);
                }
            }
        });
    });

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();

        // The write guard must not live across the request.
        let pending = form.write().begin_submit();
        let pending = match pending {
            Ok(pending) => pending,
            Err(e) => {
                notify::show(&toasts, &Notice::from(e));
                return;
            }
        };

        let api = HttpResetApi::from_config(&config.api);
        let outcome = api.reset_password(&pending.token, &pending.request).await;

        let notice = form.write().finish_submit(outcome);
        notify::show(&toasts, &notice);
    };

    let state = form.read();
    let submitting = state.is_submitting();
    let password = state.password().to_string();
    let confirm = state.confirm_password().to_string();
    let items = checklist_items(state.requirements());
    let mismatch = confirmation_mismatch(&state);
    drop(state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reset_password.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Set New Password" }
                    CardDescription { "Enter your new password below" }
                }

                CardContent {
                    form { class: "auth-form", onsubmit: handle_submit,
                        div { class: "auth-field",
                            Label { html_for: "new_password", "New Password" }
                            PasswordInput {
                                id: "new_password",
                                placeholder: "At least 8 characters",
                                value: password,
                                disabled: submitting,
                                on_input: move |e: FormEvent| form.write().set_password(e.value()),
                            }
                            Checklist { id: "password_requirements", items }
                        }
                        div { class: "auth-field",
                            Label { html_for: "confirm_password", "Confirm Password" }
                            PasswordInput {
                                id: "confirm_password",
                                placeholder: "Re-enter your password",
                                value: confirm,
                                disabled: submitting,
                                invalid: mismatch,
                                on_input: move |e: FormEvent| form.write().set_confirm_password(e.value()),
                            }
                            if mismatch {
                                p { class: "auth-hint", "Passwords do not match" }
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: submitting,
                            if submitting { "Resetting..." } else { "Reset Password" }
                        }
                    }
                }
            }
        }
    }
}
