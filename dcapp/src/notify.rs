//! Transient notifications shown over the page.

use dccore::search::Notification;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a notification stays up, in milliseconds.
pub const DISMISS_AFTER: u32 = 5000;

#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<(u64, Notification)>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    /// Create the notifications and provide them as context.
    pub fn provide() -> Self {
        let notifications = Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        };
        provide_context(notifications);
        notifications
    }

    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push((id, notification)));
        let this = *self;
        Timeout::new(DISMISS_AFTER, move || this.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|(item, _)| *item != id));
    }
}

#[component]
pub fn NotificationArea() -> impl IntoView {
    let notifications = expect_context::<Notifications>();
    view! {
        <div class="notifications">
            <For
                each=move || notifications.items.get()
                key=|(id, _)| *id
                children=move |(id, notification)| view! {
                    <div class=format!("notification notification-{}", notification.kind)>
                        <span>{notification.message}</span>
                        <button
                            class="notification-close"
                            on:click=move |_| notifications.dismiss(id)
                        >"×"</button>
                    </div>
                }
            />
        </div>
    }
}
