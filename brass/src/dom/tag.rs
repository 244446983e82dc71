make_str_enum! {
    /// Html element names.
    Tag {
        A = "a",
        B = "b",
        Body = "body",
        Button = "button",
        Div = "div",
        Footer = "footer",
        Form = "form",
        H1 = "h1",
        H2 = "h2",
        H3 = "h3",
        H4 = "h4",
        H5 = "h5",
        H6 = "h6",
        Head = "head",
        Header = "header",
        Hr = "hr",
        I = "i",
        Img = "img",
        Input = "input",
        Label = "label",
        Li = "li",
        Link = "link",
        Main = "main",
        Meta = "meta",
        Nav = "nav",
        Option = "option",
        P = "p",
        Script = "script",
        Section = "section",
        Select = "select",
        Small = "small",
        Span = "span",
        Strong = "strong",
        Table = "table",
        Td = "td",
        TextArea = "textarea",
        Th = "th",
        Tr = "tr",
        Ul = "ul",
    }
}

impl Tag {
    /// Void elements can not have children and are serialized without a
    /// closing tag.
    pub fn is_void(self) -> bool {
        matches!(
            self,
            Self::Hr | Self::Img | Self::Input | Self::Link | Self::Meta
        )
    }
}
