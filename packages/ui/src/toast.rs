//! Transient notifications shown in the corner of every page.
//!
//! Handlers push a message with [`toast`] (or the level shorthands); it stays
//! for [`TOAST_DURATION`] unless closed earlier.

use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleInfo, FaTriangleExclamation, FaXmark};
use crate::Icon;

pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    /// Returns the id of the new entry.
    pub fn push(&mut self, level: LogLevel, message: &str) -> u64 {
        self.next_id += 1;
        self.entries.push(Toast { id: self.next_id, level, message: message.to_string() });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Pushes a message and schedules its removal. The timer lives in the root
/// scope so it survives the page that raised the toast.
pub fn toast(toasts: &mut Signal<Toasts>, level: LogLevel, message: &str) {
    let id = toasts.write().push(level, message);
    let mut toasts = *toasts;
    spawn_forever(async move {
        sleep(TOAST_DURATION).await;
        toasts.write().dismiss(id);
    });
}

pub fn toast_success(toasts: &mut Signal<Toasts>, message: &str) {
    toast(toasts, LogLevel::Success, message);
}

pub fn toast_error(toasts: &mut Signal<Toasts>, message: &str) {
    toast(toasts, LogLevel::Error, message);
}

/// Provides the toast signal and renders the stack above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries.clone();

    rsx! {
        div {
            class: "toast-stack",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: match entry.level {
                        LogLevel::Error => "toast error",
                        LogLevel::Warning => "toast warning",
                        LogLevel::Success => "toast success",
                        LogLevel::Info => "toast info",
                    },
                    role: "status",
                    {match entry.level {
                        LogLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                        LogLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
                        _ => rsx! { Icon { icon: FaTriangleExclamation, width: 16, height: 16 } },
                    }}
                    span { class: "toast-message", "{entry.message}" }
                    button {
                        class: "toast-close",
                        title: "Fermer",
                        onclick: move |_| toasts.write().dismiss(entry.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    thread_local! {
        static HANDLES: Cell<Option<(Signal<Toasts>, Signal<bool>)>> = const { Cell::new(None) };
    }

    #[component]
    fn LoginNotice() -> Element {
        let mut toasts = use_toasts();
        use_hook(|| toast_success(&mut toasts, "Connexion réussie !"));
        rsx! {}
    }

    #[component]
    fn Page() -> Element {
        let show_notice = use_signal(|| true);
        let toasts = use_toasts();
        use_hook(|| HANDLES.with(|h| h.set(Some((toasts, show_notice)))));
        rsx! {
            if show_notice() {
                LoginNotice {}
            }
        }
    }

    fn app() -> Element {
        rsx! {
            ToastProvider { Page {} }
        }
    }

    fn mounted() -> (VirtualDom, Signal<Toasts>, Signal<bool>) {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let (toasts, show_notice) = HANDLES.with(|h| h.get()).expect("page mounted");
        (dom, toasts, show_notice)
    }

    async fn run_for(dom: &mut VirtualDom, duration: Duration) {
        let deadline = tokio::time::sleep(duration);
        tokio::pin!(deadline);
        loop {
            let done = tokio::select! {
                _ = dom.wait_for_work() => false,
                _ = &mut deadline => true,
            };
            if done {
                break;
            }
            dom.render_immediate_to_vec();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires() {
        let (mut dom, toasts, _) = mounted();
        assert_eq!(dom.in_runtime(|| toasts.peek().entries.len()), 1);

        run_for(&mut dom, Duration::from_millis(4800)).await;
        assert_eq!(dom.in_runtime(|| toasts.peek().entries.len()), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_its_page_unmounts() {
        let (mut dom, toasts, mut show_notice) = mounted();
        dom.in_runtime(|| show_notice.set(false));
        run_for(&mut dom, Duration::from_millis(100)).await;
        assert_eq!(dom.in_runtime(|| toasts.peek().entries.len()), 1);

        run_for(&mut dom, Duration::from_millis(4800)).await;
        assert_eq!(dom.in_runtime(|| toasts.peek().entries.len()), 0);
    }

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::default();
        let a = toasts.push(LogLevel::Success, "Connexion réussie !");
        let b = toasts.push(LogLevel::Error, "Erreur lors de la connexion");
        assert_ne!(a, b);
        toasts.dismiss(a);
        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].message, "Erreur lors de la connexion");
        toasts.dismiss(a);
        assert_eq!(toasts.entries.len(), 1);
    }
}
