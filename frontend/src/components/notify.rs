use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NotifyKind,
    pub message: String,
    seq: u64,
}

/// Transient snackbar state. In the browser each notice dismisses itself
/// after three seconds; a newer notice cancels the older timer via `seq`.
#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notice>>,
    seq: RwSignal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            seq: create_rw_signal(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotifyKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotifyKind::Error, message.into());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }

    fn show(&self, kind: NotifyKind, message: String) {
        let seq = self.seq.get_untracked().wrapping_add(1);
        self.seq.set(seq);
        self.current.set(Some(Notice { kind, message, seq }));

        #[cfg(target_arch = "wasm32")]
        {
            let current = self.current;
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3_000).await;
                if current.get_untracked().map(|notice| notice.seq) == Some(seq) {
                    current.set(None);
                }
            });
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifier() -> Notifier {
    let notifier = Notifier::new();
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(Notifier::new)
}

#[component]
pub fn Snackbar() -> impl IntoView {
    let notifier = use_notifier();
    view! {
        <Show when=move || notifier.current().is_some()>
            {move || {
                notifier
                    .current()
                    .map(|notice| {
                        let classes = match notice.kind {
                            NotifyKind::Success => {
                                "bg-green-600 text-white px-4 py-2 rounded shadow-lg"
                            }
                            NotifyKind::Error => "bg-red-600 text-white px-4 py-2 rounded shadow-lg",
                        };
                        view! {
                            <div class="fixed bottom-4 right-4 z-50">
                                <div class=classes on:click=move |_| notifier.dismiss()>
                                    {notice.message.clone()}
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn newest_notice_replaces_previous_one() {
        with_runtime(|| {
            let notifier = Notifier::new();
            notifier.success("saved");
            notifier.error("failed");
            let notice = notifier.current().unwrap();
            assert_eq!(notice.kind, NotifyKind::Error);
            assert_eq!(notice.message, "failed");
        });
    }

    #[test]
    fn dismiss_clears_the_notice() {
        with_runtime(|| {
            let notifier = Notifier::new();
            notifier.success("saved");
            notifier.dismiss();
            assert!(notifier.current().is_none());
        });
    }
}
