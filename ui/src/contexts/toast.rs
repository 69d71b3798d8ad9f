use std::collections::HashMap;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

use crate::ad_form::{Notification, NotificationVariant, Notifier};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub toast_type: ToastType,
    pub created_seq: u64,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(title: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            toast_type,
            created_seq: 0,
            duration: Some(5000), // 5 seconds default
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, ToastType::Error)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, ToastType::Success)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title, ToastType::Info)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration = Some(duration_ms);
        self
    }
}

impl From<Notification> for Toast {
    fn from(notification: Notification) -> Self {
        let toast_type = match notification.variant {
            NotificationVariant::Default => ToastType::Success,
            NotificationVariant::Destructive => ToastType::Error,
        };
        let toast = Toast::new(notification.title, toast_type)
            .description(notification.description);
        match toast_type {
            // Failures stay up longer so there is time to read them.
            ToastType::Error => toast.duration(8000),
            ToastType::Success | ToastType::Info => toast,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: HashMap<Uuid, Toast>,
    next_seq: u64,
}

impl ToastState {
    /// Toasts oldest first.
    pub fn ordered(&self) -> Vec<Toast> {
        let mut toasts: Vec<_> = self.toasts.values().cloned().collect();
        toasts.sort_by_key(|toast| toast.created_seq);
        toasts
    }
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        let mut next_seq = self.next_seq;

        match action {
            ToastAction::Add(mut toast) => {
                toast.created_seq = next_seq;
                next_seq += 1;
                toasts.insert(toast.id, toast);
            }
            ToastAction::Remove(id) => {
                toasts.remove(&id);
            }
        }

        Rc::new(ToastState { toasts, next_seq })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: Option<ToastContext>,
}

impl ToastHandle {
    pub fn new(context: Option<ToastContext>) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let Some(context) = self.context.clone() else {
            tracing::warn!("Toast outside a ToastProvider: {}", toast.title);
            return;
        };
        let toast_id = toast.id;
        let duration = toast.duration;

        context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::error(message));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::success(message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.add(Toast::info(message));
    }

    pub fn remove(&self, id: Uuid) {
        if let Some(context) = &self.context {
            context.dispatch(ToastAction::Remove(id));
        }
    }
}

impl Notifier for ToastHandle {
    fn notify(&self, notification: Notification) {
        self.add(notification.into());
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle::new(use_context::<ToastContext>())
}
