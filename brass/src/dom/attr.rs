use std::borrow::Cow;

make_str_enum! {
    /// Well known html attribute names.
    Attr {
        Id = "id",
        Class = "class",
        Style = "style",
        Type = "type",
        Name = "name",
        Value = "value",
        Href = "href",
        Src = "src",
        Rel = "rel",
        Title = "title",
        TabIndex = "tabindex",
        Role = "role",
        Disabled = "disabled",
        Checked = "checked",
        Selected = "selected",
        Placeholder = "placeholder",
        For = "for",
        Integrity = "integrity",
        CrossOrigin = "crossorigin",
        AriaLabel = "aria-label",
        AriaLabelledBy = "aria-labelledby",
        AriaHidden = "aria-hidden",
        AriaModal = "aria-modal",
        AriaDisabled = "aria-disabled",
    }
}

/// The name of an attribute.
///
/// Either one of the well known [`Attr`]s or an arbitrary name, which is
/// needed for `data-*` attributes that third party scripts look for.
///
/// Names compare by their string value, so `AttrName::new("id")` equals
/// `AttrName::from(Attr::Id)`.
#[derive(Clone, Debug)]
pub enum AttrName {
    Known(Attr),
    Custom(Cow<'static, str>),
}

impl AttrName {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        match Attr::from_str_value(&name) {
            Some(attr) => Self::Known(attr),
            None => Self::Custom(name),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(attr) => attr.as_str(),
            Self::Custom(name) => name.as_ref(),
        }
    }

    #[inline]
    pub fn is_class(&self) -> bool {
        self.as_str() == Attr::Class.as_str()
    }
}

impl PartialEq for AttrName {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for AttrName {}

impl std::hash::Hash for AttrName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl std::fmt::Display for AttrName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Attr> for AttrName {
    fn from(attr: Attr) -> Self {
        Self::Known(attr)
    }
}

impl From<&'static str> for AttrName {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AttrName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// An ordered set of attributes.
///
/// Insertion order is kept so that serialized and mounted markup is
/// deterministic. Setting an existing attribute replaces the value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(AttrName, String)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with(mut self, name: impl Into<AttrName>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<AttrName>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n.as_str() == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Add one or more space separated class tokens.
    ///
    /// Tokens that are already present are skipped.
    pub fn add_class(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            match self.entries.iter_mut().find(|(n, _)| n.is_class()) {
                Some((_, value)) => {
                    if !value.split_whitespace().any(|c| c == token) {
                        if !value.is_empty() {
                            value.push(' ');
                        }
                        value.push_str(token);
                    }
                }
                None => {
                    self.entries.push((Attr::Class.into(), token.to_string()));
                }
            }
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get(Attr::Class.as_str())
            .unwrap_or_default()
            .split_whitespace()
    }

    /// Merge another set into this one.
    ///
    /// Class tokens are added to the existing ones, every other attribute
    /// overrides a previous value of the same name. Attributes not present in
    /// `other` are left untouched.
    pub fn merge(&mut self, other: Attrs) {
        for (name, value) in other.entries {
            if name.is_class() {
                self.add_class(&value);
            } else {
                self.set(name, value);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttrName, &str)> {
        self.entries.iter().map(|(n, v)| (n, v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Attrs {
    type Item = (AttrName, String);
    type IntoIter = std::vec::IntoIter<(AttrName, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<N, V> FromIterator<(N, V)> for Attrs
where
    N: Into<AttrName>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_name_compares_by_value() {
        assert_eq!(AttrName::new("id"), AttrName::from(Attr::Id));
        assert!(matches!(AttrName::new("id"), AttrName::Known(Attr::Id)));
        assert_eq!(AttrName::new("data-bs-toggle").as_str(), "data-bs-toggle");
        assert_ne!(AttrName::new("data-a"), AttrName::new("data-b"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = Attrs::new().with(Attr::Id, "a").with("data-x", "1");
        attrs.set(Attr::Id, "b");

        let entries: Vec<_> = attrs.iter().map(|(n, v)| (n.as_str(), v)).collect();
        assert_eq!(entries, vec![("id", "b"), ("data-x", "1")]);
    }

    #[test]
    fn test_add_class_skips_duplicates() {
        let mut attrs = Attrs::new();
        attrs.add_class("modal fade");
        attrs.add_class("fade");
        attrs.add_class("  show ");

        assert_eq!(attrs.get("class"), Some("modal fade show"));
        assert!(attrs.has_class("show"));
        assert!(!attrs.has_class("mod"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_merge_keeps_unrelated_attributes() {
        let mut attrs = Attrs::new()
            .with(Attr::Type, "button")
            .with(Attr::Class, "btn")
            .with("data-bs-target", "#old");

        attrs.merge(
            Attrs::new()
                .with("data-bs-toggle", "modal")
                .with("data-bs-target", "#new")
                .with(Attr::Class, "btn-primary"),
        );

        assert_eq!(attrs.get("type"), Some("button"));
        assert_eq!(attrs.get("class"), Some("btn btn-primary"));
        assert_eq!(attrs.get("data-bs-toggle"), Some("modal"));
        assert_eq!(attrs.get("data-bs-target"), Some("#new"));
        assert_eq!(attrs.len(), 4);
    }

    #[test]
    fn test_remove() {
        let mut attrs: Attrs = vec![(Attr::Id, "x"), (Attr::Role, "dialog")]
            .into_iter()
            .collect();
        assert_eq!(attrs.remove("id"), Some("x".to_string()));
        assert_eq!(attrs.remove("id"), None);
        assert!(!attrs.contains("id"));
        assert!(attrs.contains("role"));
    }
}
