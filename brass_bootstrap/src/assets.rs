use brass::{
    dom::{
        builder::{link, script},
        fragment, Attr, Node, TagBuilder, VNode,
    },
    web::document,
};
use wasm_bindgen::{JsCast, JsValue};

pub const BOOTSTRAP_VERSION: &str = "5.3.1";
pub const ICONS_VERSION: &str = "1.11.0";

/// Where the Bootstrap stylesheet and script are loaded from.
///
/// Defaults to the jsDelivr CDN. Set a field to `None` to skip the asset,
/// for example when it is bundled in some other way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assets {
    pub stylesheet: Option<String>,
    /// The bundle including Popper. Required by modals.
    pub script: Option<String>,
    pub icons: Option<String>,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            stylesheet: Some(format!(
                "https://cdn.jsdelivr.net/npm/bootstrap@{}/dist/css/bootstrap.min.css",
                BOOTSTRAP_VERSION
            )),
            script: Some(format!(
                "https://cdn.jsdelivr.net/npm/bootstrap@{}/dist/js/bootstrap.bundle.min.js",
                BOOTSTRAP_VERSION
            )),
            icons: Some(format!(
                "https://cdn.jsdelivr.net/npm/bootstrap-icons@{}/font/bootstrap-icons.css",
                ICONS_VERSION
            )),
        }
    }
}

impl Assets {
    pub fn none() -> Self {
        Self {
            stylesheet: None,
            script: None,
            icons: None,
        }
    }

    pub fn stylesheet(mut self, url: impl Into<String>) -> Self {
        self.stylesheet = Some(url.into());
        self
    }

    pub fn script(mut self, url: impl Into<String>) -> Self {
        self.script = Some(url.into());
        self
    }

    pub fn icons(mut self, url: impl Into<String>) -> Self {
        self.icons = Some(url.into());
        self
    }

    fn stylesheets(&self) -> impl Iterator<Item = &str> {
        self.stylesheet
            .iter()
            .chain(self.icons.iter())
            .map(String::as_str)
    }

    fn tags(&self) -> Vec<TagBuilder> {
        let links = self
            .stylesheets()
            .map(|href| link().attr(Attr::Rel, "stylesheet").attr(Attr::Href, href));
        let scripts = self.script.iter().map(|src| script().attr(Attr::Src, src.as_str()));
        links.chain(scripts).collect()
    }

    /// The tags to put into the `<head>` of a static index page.
    pub fn head_html(&self) -> String {
        self.tags()
            .into_iter()
            .map(|tag| tag.build().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Add the tags that are not in the document yet to `document.head`.
    ///
    /// Returns the number of added tags.
    pub fn install(&self) -> Result<usize, JsValue> {
        let head = document()
            .head()
            .ok_or_else(|| JsValue::from_str("document has no head"))?;

        let missing: Vec<VNode> = self
            .tags()
            .into_iter()
            .filter(|tag| !is_installed(tag))
            .map(TagBuilder::build)
            .collect();
        let count = missing.len();
        if count == 0 {
            return Ok(0);
        }

        let mut node = Node::build(fragment(missing));
        node.attach(&head);
        tracing::debug!(count, "Installed bootstrap assets");
        Ok(count)
    }
}

/// Compares attribute values directly, so a url needs no selector escaping.
fn is_installed(tag: &TagBuilder) -> bool {
    let tag = tag.tag();
    let (name, url) = match (tag.attr("href"), tag.attr("src")) {
        (Some(href), _) => ("href", href),
        (None, Some(src)) => ("src", src),
        (None, None) => return false,
    };
    let nodes = match document().query_selector_all("link[href], script[src]") {
        Ok(nodes) => nodes,
        Err(err) => {
            tracing::error!(?err, "Could not query installed assets");
            return false;
        }
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .any(|elem| elem.get_attribute(name).as_deref() == Some(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let assets = Assets::default();
        assert_eq!(
            assets.script.as_deref(),
            Some("https://cdn.jsdelivr.net/npm/bootstrap@5.3.1/dist/js/bootstrap.bundle.min.js")
        );
        assert_eq!(
            assets.stylesheet.as_deref(),
            Some("https://cdn.jsdelivr.net/npm/bootstrap@5.3.1/dist/css/bootstrap.min.css")
        );
        assert_eq!(
            assets.icons.as_deref(),
            Some("https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.0/font/bootstrap-icons.css")
        );
    }

    #[test]
    fn test_head_html() {
        let html = Assets::none()
            .stylesheet("/b.css")
            .script("/b.js")
            .head_html();
        assert_eq!(
            html,
            "<link rel=\"stylesheet\" href=\"/b.css\">\n<script src=\"/b.js\"></script>"
        );
    }

    #[test]
    fn test_head_html_orders_styles_before_script() {
        let html = Assets::default().head_html();
        let lines: Vec<_> = html.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("bootstrap.min.css"));
        assert!(lines[1].contains("bootstrap-icons.css"));
        assert!(lines[2].starts_with("<script"));
    }

    #[test]
    fn test_no_assets() {
        assert_eq!(Assets::none().head_html(), "");
    }
}
