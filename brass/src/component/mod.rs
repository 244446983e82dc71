use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use futures::{
    channel::mpsc::{self, UnboundedReceiver, UnboundedSender},
    StreamExt,
};

use crate::{
    dom::{Node, RootSource, VNode},
    effect::{spawn_guarded, EffectGuard},
    Callback,
};

/// Whether a component needs to be rendered again.
pub type ShouldRender = bool;

pub trait Component: Sized + 'static {
    type Properties: 'static;
    type Msg: 'static;

    fn init(props: Self::Properties, ctx: &Context<Self>) -> Self;

    fn update(&mut self, msg: Self::Msg, ctx: &Context<Self>) -> ShouldRender;

    /// New properties were passed in by the owner.
    fn change(&mut self, props: Self::Properties, ctx: &Context<Self>) -> ShouldRender;

    fn render(&self, ctx: &Context<Self>) -> VNode;

    /// Called after the rendered nodes were put into the document.
    fn on_render(&mut self, _first_render: bool) {}

    /// Called exactly once, before the nodes are removed.
    fn destroy(&mut self) {}
}

pub struct Context<C: Component> {
    handle: Handle<C>,
}

impl<C: Component> Context<C> {
    pub fn handle(&self) -> Handle<C> {
        self.handle.clone()
    }

    pub fn send(&self, msg: C::Msg) {
        self.handle.send(msg);
    }

    /// Build a callback that maps its input to a message.
    pub fn callback<T, F>(&self, f: F) -> Callback<T>
    where
        F: Fn(T) -> C::Msg + 'static,
    {
        self.handle.callback(f)
    }
}

/// Sends messages to a component.
///
/// Messages are queued and processed on the local executor, never while the
/// sender is still on the stack.
pub struct Handle<C: Component> {
    tx: UnboundedSender<C::Msg>,
}

impl<C: Component> Clone for Handle<C> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<C: Component> Handle<C> {
    pub fn send(&self, msg: C::Msg) {
        if self.tx.unbounded_send(msg).is_err() {
            #[cfg(debug_assertions)]
            tracing::warn!(
                component=%std::any::type_name::<C>(),
                "Tried to send message to dropped component"
            );
        }
    }

    pub fn callback<T, F>(&self, f: F) -> Callback<T>
    where
        F: Fn(T) -> C::Msg + 'static,
    {
        let handle = self.clone();
        Callback::new(move |value| handle.send(f(value)))
    }
}

struct Inner<C: Component> {
    state: C,
    ctx: Context<C>,
    node: Option<Node>,
    destroyed: bool,
}

impl<C: Component> Inner<C> {
    fn process(&mut self, msg: C::Msg) {
        if self.destroyed {
            return;
        }
        if self.state.update(msg, &self.ctx) {
            self.rerender();
        }
    }

    fn set_props(&mut self, props: C::Properties) {
        if self.destroyed {
            return;
        }
        if self.state.change(props, &self.ctx) {
            self.rerender();
        }
    }

    fn rerender(&mut self) {
        let vnode = self.state.render(&self.ctx);
        let node = match self.node.take() {
            Some(old) => old.update(vnode),
            None => {
                tracing::warn!(
                    component=%std::any::type_name::<C>(),
                    "Rendered a component without nodes"
                );
                let mut node = Node::build(vnode);
                node.run_mount_hooks();
                node
            }
        };
        self.node = Some(node);
        self.state.on_render(false);
    }

    fn mounted(&mut self) {
        if let Some(node) = self.node.as_mut() {
            node.run_mount_hooks();
        }
        self.state.on_render(true);
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.state.destroy();
        if let Some(node) = self.node.take() {
            node.detach();
        }
    }
}

impl<C: Component> RootSource for RefCell<Inner<C>> {
    fn collect_roots(&self, out: &mut Vec<web_sys::Node>) {
        match self.try_borrow() {
            Ok(inner) => {
                if let Some(node) = inner.node.as_ref() {
                    out.extend(node.roots());
                }
            }
            Err(_) => {
                tracing::error!(
                    component=%std::any::type_name::<C>(),
                    "Component nodes requested while it is rendering"
                );
            }
        }
    }
}

async fn process_messages<C: Component>(
    inner: Weak<RefCell<Inner<C>>>,
    mut rx: UnboundedReceiver<C::Msg>,
) {
    while let Some(msg) = rx.next().await {
        let inner = match inner.upgrade() {
            Some(inner) => inner,
            None => break,
        };
        let mut borrow = inner.borrow_mut();
        borrow.process(msg);
    }
}

/// Owns a mounted component.
///
/// Dropping the handle destroys the component and removes its nodes from
/// the document.
#[must_use]
pub struct ComponentHandle<C: Component> {
    inner: Rc<RefCell<Inner<C>>>,
    _task: EffectGuard,
}

impl<C: Component> ComponentHandle<C> {
    pub fn handle(&self) -> Handle<C> {
        self.inner.borrow().ctx.handle()
    }

    pub fn send(&self, msg: C::Msg) {
        self.inner.borrow().ctx.send(msg);
    }

    /// Pass new properties, re-rendering right away if the component asks
    /// for it.
    pub fn set_props(&self, props: C::Properties) {
        self.inner.borrow_mut().set_props(props);
    }

    pub fn with_state<O>(&self, f: impl FnOnce(&C) -> O) -> O {
        f(&self.inner.borrow().state)
    }

    /// The first element rendered by the component.
    pub fn element(&self) -> Option<web_sys::Element> {
        self.inner.borrow().node.as_ref().and_then(Node::element)
    }
}

impl<C: Component> Drop for ComponentHandle<C> {
    fn drop(&mut self) {
        match self.inner.try_borrow_mut() {
            Ok(mut inner) => inner.destroy(),
            Err(_) => {
                tracing::error!(
                    component=%std::any::type_name::<C>(),
                    "Component dropped while in use, skipping destroy"
                );
            }
        }
    }
}

/// A component that was initialized but not mounted yet.
struct Pending<C: Component> {
    state: C,
    ctx: Context<C>,
    rx: UnboundedReceiver<C::Msg>,
}

impl<C: Component> Pending<C> {
    fn new(props: C::Properties) -> Self {
        let (tx, rx) = mpsc::unbounded();
        let ctx = Context {
            handle: Handle { tx },
        };
        let state = C::init(props, &ctx);
        Self { state, ctx, rx }
    }

    fn start(self) -> ComponentHandle<C> {
        let Self { state, ctx, rx } = self;
        let node = Node::build(state.render(&ctx));
        let inner = Rc::new(RefCell::new(Inner {
            state,
            ctx,
            node: Some(node),
            destroyed: false,
        }));
        let task = spawn_guarded(process_messages(Rc::downgrade(&inner), rx));
        ComponentHandle { inner, _task: task }
    }
}

trait AnyComponent {
    fn name(&self) -> &'static str;
    fn mount(self: Box<Self>, parent: Option<&web_sys::Node>, out: &mut Node);
    fn write_html(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<C: Component> AnyComponent for Pending<C> {
    fn name(&self) -> &'static str {
        std::any::type_name::<C>()
    }

    fn mount(self: Box<Self>, parent: Option<&web_sys::Node>, out: &mut Node) {
        let handle = self.start();
        let source: Rc<dyn RootSource> = handle.inner.clone();
        out.push_source(source, parent);
        let weak = Rc::downgrade(&handle.inner);
        out.add_mount_hook(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().mounted();
            }
        });
        out.retain(handle);
    }

    fn write_html(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state.render(&self.ctx), f)
    }
}

/// A component inside a virtual tree.
///
/// The component is initialized eagerly. It is started when the tree is
/// mounted, and lives as long as the mounted [`Node`].
pub struct VComponent(Box<dyn AnyComponent>);

impl VComponent {
    pub(crate) fn mount(self, parent: Option<&web_sys::Node>, out: &mut Node) {
        self.0.mount(parent, out);
    }

    pub(crate) fn write_html(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_html(f)
    }
}

impl fmt::Debug for VComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VComponent({})", self.0.name())
    }
}

pub fn component<C: Component>(props: C::Properties) -> VComponent {
    VComponent(Box::new(Pending::<C>::new(props)))
}

/// Mount a component as the last child of `parent`.
pub fn mount_component<C: Component>(
    parent: &web_sys::Element,
    props: C::Properties,
) -> ComponentHandle<C> {
    let handle = Pending::<C>::new(props).start();
    {
        let mut inner = handle.inner.borrow_mut();
        if let Some(node) = inner.node.as_mut() {
            node.attach(parent);
        }
        inner.mounted();
    }
    handle
}
