use client::{Notice, NoticeKind};
use shared_ui::{ToastOptions, Toasts};

/// Show a workflow notice as a toast.
pub fn show(toasts: &Toasts, notice: &Notice) {
    match notice.kind {
        NoticeKind::Success => {
            tracing::info!("Password reset succeeded");
            toasts.success(notice.message.clone(), ToastOptions::new());
        }
        NoticeKind::Error => {
            tracing::warn!(message = %notice.message, "Password reset failed");
            toasts.error(notice.message.clone(), ToastOptions::new());
        }
    }
}
