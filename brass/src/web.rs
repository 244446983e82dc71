//! Helpers for interacting with the browser environment.

use wasm_bindgen::JsValue;

/// Defines an enum that maps to plain string values.
///
/// Used for the fixed vocabularies the DOM understands (tag names, attribute
/// names, event names). Downstream crates use it for their own vocabulary,
/// like toolkit-specific `data-*` attributes.
///
/// ```
/// brass::make_str_enum! {
///     /// Fruits.
///     Fruit {
///         Apple = "apple",
///         Pear = "pear",
///     }
/// }
///
/// assert_eq!(Fruit::Pear.as_str(), "pear");
/// assert_eq!(Fruit::from_str_value("apple"), Some(Fruit::Apple));
/// ```
#[macro_export]
macro_rules! make_str_enum {
    (
        $( #[$meta:meta] )*
        $enum_name:ident {
            $( $name:ident = $value:literal, )*
        }
    ) => {
        $( #[$meta] )*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $( $name, )*
        }

        impl $enum_name {
            /// All variants in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$name, )* ];

            /// Convert to a string.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(
                        Self::$name => $value,
                    )*
                }
            }

            /// Look up the variant with the given string value.
            pub fn from_str_value(value: &str) -> Option<Self> {
                match value {
                    $(
                        $value => Some(Self::$name),
                    )*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $enum_name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

pub fn window() -> web_sys::Window {
    web_sys::window().expect("Could not get window")
}

pub fn document() -> web_sys::Document {
    window().document().expect("Could not get document")
}

pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().get_element_by_id(id)
}

/// Dispatch a bubbling [`web_sys::CustomEvent`] with the given name.
///
/// Mirrors what third-party scripts do when they announce state changes
/// (eg `hidden.bs.modal`).
pub fn dispatch_custom_event(target: &web_sys::EventTarget, name: &str) -> Result<bool, JsValue> {
    let init = web_sys::CustomEventInit::new();
    init.set_bubbles(true);
    let event = web_sys::CustomEvent::new_with_event_init_dict(name, &init)?;
    target.dispatch_event(&event)
}

/// Remove a node from its parent, if it has one.
pub(crate) fn remove_node(node: &web_sys::Node) {
    if let Some(parent) = node.parent_node() {
        if let Err(err) = parent.remove_child(node) {
            tracing::error!(?err, "Could not remove node from parent");
        }
    }
}
