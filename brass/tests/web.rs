wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
use std::{cell::Cell, convert::Infallible, rc::Rc};

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::wasm_bindgen_test;

use brass::{
    dom::{
        builder::{button, div, input, p, span},
        Attr, ClickEvent, InputEvent, KeyDownEvent, VNode,
    },
    effect::EventSubscription,
    web::dispatch_custom_event,
    Component, Context,
};

fn get_root() -> web_sys::Element {
    let doc = brass::web::document();
    if let Some(elem) = doc.get_element_by_id("testapp") {
        elem.remove();
    }

    let elem = doc.create_element("div").unwrap();
    elem.set_id("testapp");
    doc.body().unwrap().append_child(&elem).unwrap();
    elem
}

fn elem_by_id(id: &str) -> web_sys::Element {
    brass::web::element_by_id(id).unwrap()
}

async fn tick() {
    let promise = js_sys::Promise::resolve(&JsValue::NULL);
    JsFuture::from(promise).await.unwrap();
}

/// Let queued component messages be processed.
async fn settle() {
    for _ in 0..4 {
        tick().await;
    }
}

fn click(id: &str) {
    elem_by_id(id)
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
fn test_launch_renders_attributes_and_text() {
    let root = get_root();
    brass::launch(root.clone(), || {
        div()
            .attr(Attr::Id, "static")
            .class("a")
            .and(span().text("hello"))
            .into()
    });

    assert_eq!(
        root.inner_html(),
        r#"<div id="static" class="a"><span>hello</span></div>"#
    );
}

#[wasm_bindgen_test]
fn test_event_handler_click_simple() {
    let count = Rc::new(Cell::new(0));
    let count2 = count.clone();

    brass::launch(get_root(), move || {
        button()
            .attr(Attr::Id, "btn")
            .on(move |_: ClickEvent| count2.set(count2.get() + 1))
            .into()
    });

    click("btn");
    click("btn");
    assert_eq!(count.get(), 2);
}

#[wasm_bindgen_test]
fn test_on_click_callback() {
    let count = Rc::new(Cell::new(0));
    let count2 = count.clone();

    brass::launch(get_root(), move || {
        button()
            .attr(Attr::Id, "btn-cb")
            .on_click(move |_: ()| count2.set(count2.get() + 1))
            .into()
    });

    click("btn-cb");
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
fn test_input_event_value() {
    let value = Rc::new(std::cell::RefCell::new(None));
    let value2 = value.clone();

    brass::launch(get_root(), move || {
        input()
            .attr(Attr::Id, "text")
            .on(move |ev: InputEvent| *value2.borrow_mut() = ev.value())
            .into()
    });

    let elem = elem_by_id("text")
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    elem.set_value("brass");
    let ev = web_sys::Event::new("input").unwrap();
    elem.dispatch_event(&ev).unwrap();

    assert_eq!(value.borrow().as_deref(), Some("brass"));
}

#[wasm_bindgen_test]
fn test_keydown_event() {
    let keys = Rc::new(std::cell::RefCell::new(Vec::new()));
    let keys2 = keys.clone();

    brass::launch(get_root(), move || {
        div()
            .attr(Attr::Id, "keys")
            .on(move |ev: KeyDownEvent| keys2.borrow_mut().push(ev.key()))
            .into()
    });

    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    let ev = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    elem_by_id("keys").dispatch_event(&ev).unwrap();

    // Not a keyboard event, ignored.
    let other = web_sys::Event::new("keydown").unwrap();
    elem_by_id("keys").dispatch_event(&other).unwrap();

    assert_eq!(*keys.borrow(), vec!["Escape".to_string()]);
}

struct Counter {
    value: u32,
}

enum CounterMsg {
    Increment,
}

impl Component for Counter {
    type Properties = u32;
    type Msg = CounterMsg;

    fn init(value: u32, _ctx: &Context<Self>) -> Self {
        Self { value }
    }

    fn update(&mut self, msg: CounterMsg, _ctx: &Context<Self>) -> bool {
        match msg {
            CounterMsg::Increment => self.value += 1,
        }
        true
    }

    fn change(&mut self, value: u32, _ctx: &Context<Self>) -> bool {
        self.value = value;
        true
    }

    fn render(&self, ctx: &Context<Self>) -> VNode {
        div()
            .and(p().attr(Attr::Id, "counter-value").text(self.value.to_string()))
            .and(
                button()
                    .attr(Attr::Id, "counter-inc")
                    .on_click(ctx.callback(|_: ()| CounterMsg::Increment)),
            )
            .into()
    }
}

#[wasm_bindgen_test]
async fn test_component_rerenders_on_message() {
    let root = get_root();
    let handle = brass::mount_component::<Counter>(&root, 5);
    settle().await;

    assert_eq!(elem_by_id("counter-value").text_content().unwrap(), "5");

    click("counter-inc");
    settle().await;
    assert_eq!(elem_by_id("counter-value").text_content().unwrap(), "6");

    click("counter-inc");
    click("counter-inc");
    settle().await;
    assert_eq!(elem_by_id("counter-value").text_content().unwrap(), "8");
    assert_eq!(handle.with_state(|c| c.value), 8);
}

#[wasm_bindgen_test]
fn test_component_set_props_rerenders() {
    let root = get_root();
    let handle = brass::mount_component::<Counter>(&root, 1);
    handle.set_props(42);
    assert_eq!(elem_by_id("counter-value").text_content().unwrap(), "42");
    // The old nodes are gone.
    assert_eq!(root.child_element_count(), 1);
}

#[wasm_bindgen_test]
fn test_dropping_component_handle_removes_nodes() {
    let root = get_root();
    let handle = brass::mount_component::<Counter>(&root, 1);
    assert_eq!(root.child_element_count(), 1);

    drop(handle);
    assert_eq!(root.child_element_count(), 0);
}

struct Tracked {
    mounted: Rc<Cell<u32>>,
    destroyed: Rc<Cell<u32>>,
}

impl Component for Tracked {
    type Properties = (Rc<Cell<u32>>, Rc<Cell<u32>>);
    type Msg = Infallible;

    fn init((mounted, destroyed): Self::Properties, _ctx: &Context<Self>) -> Self {
        Self { mounted, destroyed }
    }

    fn update(&mut self, _msg: Infallible, _ctx: &Context<Self>) -> bool {
        false
    }

    fn change(&mut self, _props: Self::Properties, _ctx: &Context<Self>) -> bool {
        false
    }

    fn render(&self, _ctx: &Context<Self>) -> VNode {
        span().attr(Attr::Id, "tracked").into()
    }

    fn on_render(&mut self, first_render: bool) {
        if first_render {
            // Must already be in the document.
            assert!(brass::web::element_by_id("tracked").is_some());
            self.mounted.set(self.mounted.get() + 1);
        }
    }

    fn destroy(&mut self) {
        self.destroyed.set(self.destroyed.get() + 1);
    }
}

struct Host {
    show: bool,
    tracked: (Rc<Cell<u32>>, Rc<Cell<u32>>),
}

impl Component for Host {
    type Properties = (Rc<Cell<u32>>, Rc<Cell<u32>>);
    type Msg = Infallible;

    fn init(tracked: Self::Properties, _ctx: &Context<Self>) -> Self {
        Self { show: true, tracked }
    }

    fn update(&mut self, _msg: Infallible, _ctx: &Context<Self>) -> bool {
        false
    }

    fn change(&mut self, _props: Self::Properties, _ctx: &Context<Self>) -> bool {
        self.show = !self.show;
        true
    }

    fn render(&self, _ctx: &Context<Self>) -> VNode {
        div()
            .and_if(self.show, || {
                brass::component::<Tracked>((self.tracked.0.clone(), self.tracked.1.clone()))
            })
            .into()
    }
}

#[wasm_bindgen_test]
fn test_nested_component_lifecycle() {
    let mounted = Rc::new(Cell::new(0));
    let destroyed = Rc::new(Cell::new(0));
    let props = (mounted.clone(), destroyed.clone());

    let handle = brass::mount_component::<Host>(&get_root(), props.clone());
    assert_eq!(mounted.get(), 1);
    assert_eq!(destroyed.get(), 0);

    // Toggles the tracked child off.
    handle.set_props(props.clone());
    assert_eq!(destroyed.get(), 1);
    assert!(brass::web::element_by_id("tracked").is_none());

    // And on again.
    handle.set_props(props);
    assert_eq!(mounted.get(), 2);

    drop(handle);
    assert_eq!(destroyed.get(), 2);
}

struct Labeled {
    label: String,
    clicks: Rc<Cell<u32>>,
}

impl Component for Labeled {
    type Properties = (String, Rc<Cell<u32>>);
    type Msg = Infallible;

    fn init((label, clicks): Self::Properties, _ctx: &Context<Self>) -> Self {
        Self { label, clicks }
    }

    fn update(&mut self, _msg: Infallible, _ctx: &Context<Self>) -> bool {
        false
    }

    fn change(&mut self, (label, clicks): Self::Properties, _ctx: &Context<Self>) -> bool {
        self.label = label;
        self.clicks = clicks;
        true
    }

    fn render(&self, _ctx: &Context<Self>) -> VNode {
        let clicks = self.clicks.clone();
        div()
            .attr(Attr::Id, "kept")
            .class(&format!("label-{}", self.label))
            .on_click(move |_: ()| clicks.set(clicks.get() + 1))
            .and(span().text(&self.label))
            .into()
    }
}

#[wasm_bindgen_test]
fn test_rerender_with_same_id_keeps_root_element() {
    let root = get_root();
    let clicks = Rc::new(Cell::new(0));
    let handle = brass::mount_component::<Labeled>(&root, ("a".to_string(), clicks.clone()));

    let before = elem_by_id("kept");
    // Added by someone else, must survive re-rendering.
    before.set_attribute("class", "label-a extra").unwrap();
    before.set_attribute("aria-busy", "true").unwrap();

    handle.set_props(("b".to_string(), clicks.clone()));

    let after = elem_by_id("kept");
    assert_eq!(before, after);
    assert_eq!(after.class_name(), "extra label-b");
    assert_eq!(after.get_attribute("aria-busy").as_deref(), Some("true"));
    assert_eq!(after.text_content().as_deref(), Some("b"));
    assert_eq!(root.child_element_count(), 1);

    // The old handler is gone, the new one is attached.
    click("kept");
    assert_eq!(clicks.get(), 1);
}

struct Wrapper {
    start: u32,
}

impl Component for Wrapper {
    type Properties = u32;
    type Msg = Infallible;

    fn init(start: u32, _ctx: &Context<Self>) -> Self {
        Self { start }
    }

    fn update(&mut self, _msg: Infallible, _ctx: &Context<Self>) -> bool {
        false
    }

    fn change(&mut self, start: u32, _ctx: &Context<Self>) -> bool {
        self.start = start;
        true
    }

    fn render(&self, _ctx: &Context<Self>) -> VNode {
        brass::component::<Counter>(self.start).into()
    }
}

#[wasm_bindgen_test]
async fn test_parent_rerender_after_child_rerender() {
    let root = get_root();
    let handle = brass::mount_component::<Wrapper>(&root, 1);
    settle().await;

    // The child replaces its own nodes.
    click("counter-inc");
    settle().await;
    assert_eq!(elem_by_id("counter-value").text_content().unwrap(), "2");

    handle.set_props(10);
    assert_eq!(elem_by_id("counter-value").text_content().unwrap(), "10");
    assert_eq!(root.child_element_count(), 1);

    click("counter-inc");
    settle().await;
    assert_eq!(elem_by_id("counter-value").text_content().unwrap(), "11");

    drop(handle);
    assert_eq!(root.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_event_subscription_custom_event() {
    let root = get_root();
    let count = Rc::new(Cell::new(0));
    let count2 = count.clone();

    let target: web_sys::EventTarget = root.clone().into();
    let sub = EventSubscription::subscribe_raw(target.clone(), "shown.custom", move |_| {
        count2.set(count2.get() + 1)
    });
    assert_eq!(sub.event().as_str(), "shown.custom");

    dispatch_custom_event(&target, "shown.custom").unwrap();
    assert_eq!(count.get(), 1);

    drop(sub);
    dispatch_custom_event(&target, "shown.custom").unwrap();
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
fn test_custom_event_bubbles() {
    let root = get_root();
    let count = Rc::new(Cell::new(0));
    let count2 = count.clone();

    brass::launch(root.clone(), || div().attr(Attr::Id, "inner").into());

    let _sub = EventSubscription::subscribe(root.into(), "ping", move |_: web_sys::CustomEvent| {
        count2.set(count2.get() + 1)
    });
    let inner: web_sys::EventTarget = elem_by_id("inner").into();
    dispatch_custom_event(&inner, "ping").unwrap();
    assert_eq!(count.get(), 1);
}
