//! Transient toast notifications.
//!
//! Page-level errors and confirmations surface here; they never affect
//! session state. Toasts dismiss themselves after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::utils::constants::TOAST_DISMISS_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Global toast queue, provided once at the application root.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Toaster {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self
            .next_id
            .try_update(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);
        let toasts = self.toasts;
        toasts.update(|list| {
            list.push(Toast {
                id,
                level,
                message: message.into(),
            })
        });
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.update(|list| list.retain(|toast| toast.id != id));
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Overlay rendering the active toasts. Mounted once in the app shell.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <div class="toast-host">
            {move || {
                toaster
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        view! {
                            <div class=format!("toast {}", toast.level.class())>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
