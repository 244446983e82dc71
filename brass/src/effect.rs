use futures::{
    future::{AbortHandle, Abortable},
    Future,
};
use wasm_bindgen::{prelude::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;

use crate::dom::EventName;

#[must_use]
pub struct EffectGuard {
    handle: AbortHandle,
}

impl Drop for EffectGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn a future on the local executor.
///
/// The future is aborted when the returned guard is dropped.
pub fn spawn_guarded<F: Future<Output = ()> + 'static>(f: F) -> EffectGuard {
    let (handle, reg) = AbortHandle::new_pair();
    let f = Abortable::new(f, reg);
    spawn_local(async move {
        f.await.ok();
    });
    EffectGuard { handle }
}

/// An event listener that is removed from its target when dropped.
#[must_use]
pub struct EventSubscription {
    event: EventName,
    target: web_sys::EventTarget,
    closure: Closure<dyn Fn(web_sys::Event)>,
}

impl EventSubscription {
    /// Listen to `event`, ignoring events that can not be cast to `E`.
    pub fn subscribe<E, F>(
        target: web_sys::EventTarget,
        event: impl Into<EventName>,
        callback: F,
    ) -> Self
    where
        E: JsCast + 'static,
        F: Fn(E) + 'static,
    {
        Self::subscribe_raw(target, event, move |event: web_sys::Event| {
            if let Ok(typed_ev) = event.dyn_into::<E>() {
                callback(typed_ev);
            }
        })
    }

    pub fn subscribe_raw<F>(target: web_sys::EventTarget, event: impl Into<EventName>, callback: F) -> Self
    where
        F: Fn(web_sys::Event) + 'static,
    {
        let event = event.into();
        let boxed: Box<dyn Fn(web_sys::Event)> = Box::new(callback);
        let closure = Closure::wrap(boxed);

        if let Err(err) = target
            .add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
        {
            tracing::error!(?err, event=%event, "Could not add event listener");
        }
        Self {
            event,
            target,
            closure,
        }
    }

    #[inline]
    pub fn event(&self) -> &EventName {
        &self.event
    }

    #[inline]
    pub fn target(&self) -> &web_sys::EventTarget {
        &self.target
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(_err) = self.target.remove_event_listener_with_callback(
            self.event.as_str(),
            self.closure.as_ref().unchecked_ref(),
        ) {
            tracing::error!(event=%self.event, "Could not remove EventSubscription event listener");
        }
    }
}
