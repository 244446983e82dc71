// NOTE: needs to be on top because it defines macros used elsewhere.
#[macro_use]
pub mod web;

mod callback;
pub mod component;
pub mod dom;
pub mod effect;

pub use self::{
    callback::Callback,
    component::{component, mount_component, Component, ComponentHandle, Context, Handle},
};

use dom::{Node, VNode};

/// Mount a component into `parent` and keep it alive for the rest of the
/// program.
pub fn launch_component<C: Component>(parent: web_sys::Element, properties: C::Properties) {
    let handle = mount_component::<C>(&parent, properties);
    std::mem::forget(handle);
}

/// Render a static tree into `parent` and keep it alive for the rest of the
/// program.
pub fn launch<F: FnOnce() -> VNode>(parent: web_sys::Element, render: F) {
    let mut node = Node::build(render());
    node.attach(&parent);
    std::mem::forget(node);
}
