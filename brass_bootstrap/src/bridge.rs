use std::{cell::RefCell, rc::Rc};

use brass::{effect::EventSubscription, web::element_by_id, Callback};

use crate::HIDDEN_EVENT;

/// The document the toolkit script operates on.
pub trait WidgetHost {
    /// Removes the listener when dropped.
    type Subscription;

    /// Listen to `event` on the element with the given id.
    ///
    /// Returns `None` if there is no such element.
    fn subscribe(
        &self,
        id: &str,
        event: &'static str,
        callback: Rc<dyn Fn()>,
    ) -> Option<Self::Subscription>;

    /// Whether the subscription still targets the element currently found
    /// under `id`.
    fn is_current(&self, id: &str, subscription: &Self::Subscription) -> bool;
}

/// The browser document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomHost;

impl WidgetHost for DomHost {
    type Subscription = EventSubscription;

    fn subscribe(
        &self,
        id: &str,
        event: &'static str,
        callback: Rc<dyn Fn()>,
    ) -> Option<EventSubscription> {
        let elem = element_by_id(id)?;
        let sub = EventSubscription::subscribe_raw(elem.into(), event, move |_| callback());
        Some(sub)
    }

    fn is_current(&self, id: &str, subscription: &EventSubscription) -> bool {
        match element_by_id(id) {
            Some(elem) => {
                let target: &web_sys::EventTarget = elem.as_ref();
                target == subscription.target()
            }
            None => false,
        }
    }
}

enum State<S> {
    Unmounted,
    Mounted {
        id: String,
        /// `None` if the element was missing at mount time.
        subscription: Option<S>,
    },
}

/// Relays the toolkit's "hidden" notification of a modal to `on_close`.
///
/// Mounting subscribes to [`HIDDEN_EVENT`] on the element with the modal id,
/// unmounting (or dropping the bridge) removes the listener again.
/// A missing element is not an error: the subscription is skipped and not
/// retried until the next mount.
pub struct ModalBridge<H: WidgetHost> {
    host: H,
    on_close: Rc<RefCell<Option<Callback<()>>>>,
    state: State<H::Subscription>,
}

impl<H: WidgetHost> ModalBridge<H> {
    pub fn new(host: H, on_close: Option<Callback<()>>) -> Self {
        Self {
            host,
            on_close: Rc::new(RefCell::new(on_close)),
            state: State::Unmounted,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Replace the close callback.
    ///
    /// Takes effect for the existing listener, no new subscription is made.
    pub fn set_on_close(&self, on_close: Option<Callback<()>>) {
        *self.on_close.borrow_mut() = on_close;
    }

    /// Subscribe to the element with the given id.
    ///
    /// An existing subscription is removed first.
    pub fn mount(&mut self, id: &str) {
        self.unmount();

        let on_close = self.on_close.clone();
        let callback: Rc<dyn Fn()> = Rc::new(move || {
            // Release the borrow before calling out.
            let callback = on_close.borrow().clone();
            if let Some(callback) = callback {
                callback.send(());
            }
        });

        let subscription = self.host.subscribe(id, HIDDEN_EVENT, callback);
        if subscription.is_some() {
            tracing::debug!(modal=%id, "Subscribed to modal hidden event");
        } else {
            tracing::debug!(modal=%id, "Modal element not found, skipping subscription");
        }
        self.state = State::Mounted {
            id: id.to_string(),
            subscription,
        };
    }

    /// Bring the bridge in line with the rendered modal.
    ///
    /// Nothing happens if the bridge is already subscribed to the current
    /// element for `id`. A changed id, or an element that was replaced,
    /// leads to a new subscription.
    pub fn sync(&mut self, id: &str) {
        if let State::Mounted {
            id: current,
            subscription,
        } = &self.state
        {
            if current == id {
                let stale = match subscription {
                    Some(sub) => !self.host.is_current(id, sub),
                    // Not retried.
                    None => false,
                };
                if !stale {
                    return;
                }
            }
        }
        self.mount(id);
    }

    /// Remove the listener, if any.
    pub fn unmount(&mut self) {
        if let State::Mounted { id, subscription } =
            std::mem::replace(&mut self.state, State::Unmounted)
        {
            if subscription.is_some() {
                tracing::debug!(modal=%id, "Unsubscribed from modal hidden event");
            }
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.state, State::Mounted { .. })
    }

    pub fn is_subscribed(&self) -> bool {
        matches!(
            self.state,
            State::Mounted {
                subscription: Some(_),
                ..
            }
        )
    }

    pub fn subscription(&self) -> Option<&H::Subscription> {
        match &self.state {
            State::Mounted { subscription, .. } => subscription.as_ref(),
            State::Unmounted => None,
        }
    }

    pub fn mounted_id(&self) -> Option<&str> {
        match &self.state {
            State::Mounted { id, .. } => Some(id.as_str()),
            State::Unmounted => None,
        }
    }
}

impl<H: WidgetHost> Drop for ModalBridge<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
