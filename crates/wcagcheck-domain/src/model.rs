use std::collections::BTreeMap;

/// Index of an element inside a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Resolved style values, kept as CSS strings the way a browser reports computed styles.
///
/// Colour strings are parsed by the checks that need them, so a malformed value surfaces as a
/// check failure instead of being dropped while the document is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComputedStyle {
    pub color: String,
    pub background_color: String,
    pub font_size: String,
    pub font_weight: String,
    pub display: String,
    pub visibility: String,
}

impl ComputedStyle {
    pub fn initial() -> Self {
        Self {
            color: "rgb(0, 0, 0)".to_string(),
            background_color: "transparent".to_string(),
            font_size: "16px".to_string(),
            font_weight: "400".to_string(),
            display: "inline".to_string(),
            visibility: "visible".to_string(),
        }
    }

    /// Style a child starts from: inherited properties copied, the rest reset.
    pub fn inherit_from(parent: &ComputedStyle) -> Self {
        Self {
            color: parent.color.clone(),
            font_size: parent.font_size.clone(),
            font_weight: parent.font_weight.clone(),
            visibility: parent.visibility.clone(),
            ..Self::initial()
        }
    }

    /// Font size in CSS pixels; unknown units fall back to 16px.
    pub fn font_size_px(&self) -> f64 {
        let v = self.font_size.trim();
        v.strip_suffix("px")
            .and_then(|n| n.trim().parse::<f64>().ok())
            .unwrap_or(16.0)
    }

    /// Numeric font weight (`bold` = 700, `normal` = 400).
    pub fn font_weight_value(&self) -> u32 {
        match self.font_weight.trim() {
            "bold" | "bolder" => 700,
            "normal" | "lighter" => 400,
            other => other.parse().unwrap_or(400),
        }
    }
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self::initial()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    Element(NodeId),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Lower-case tag name.
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub parent: Option<NodeId>,
    /// Child elements and text runs in document order.
    pub content: Vec<Content>,
    pub style: ComputedStyle,
    /// Outer markup snapshot, empty when the builder did not record one.
    pub markup: String,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Attribute value trimmed, treating empty values as absent.
    pub fn non_empty_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.content.iter().filter_map(|c| match c {
            Content::Element(id) => Some(*id),
            Content::Text(_) => None,
        })
    }

    pub fn has_class(&self, needle: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|t| t == needle))
            .unwrap_or(false)
    }

    /// Heading level for `h1`..`h6`.
    pub fn heading_level(&self) -> Option<u8> {
        match self.tag.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }
}

/// Arena of elements in document order. The first element pushed without a parent is the root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element. Its style starts from the parent's inherited properties.
    pub fn push_element(
        &mut self,
        parent: Option<NodeId>,
        tag: &str,
        attrs: BTreeMap<String, String>,
    ) -> NodeId {
        let id = NodeId(self.elements.len());
        let style = match parent {
            Some(p) => ComputedStyle::inherit_from(&self.elements[p.0].style),
            None => ComputedStyle::initial(),
        };
        self.elements.push(Element {
            tag: tag.to_ascii_lowercase(),
            attrs,
            parent,
            content: Vec::new(),
            style,
            markup: String::new(),
        });
        if let Some(p) = parent {
            self.elements[p.0].content.push(Content::Element(id));
        }
        id
    }

    pub fn push_text(&mut self, parent: NodeId, text: &str) {
        if text.is_empty() {
            return;
        }
        self.elements[parent.0]
            .content
            .push(Content::Text(text.to_string()));
    }

    pub fn get(&self, id: NodeId) -> &Element {
        &self.elements[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.elements[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| (NodeId(i), e))
    }

    /// All elements with one of the given tags, in document order.
    pub fn by_tags<'a>(&'a self, tags: &'a [&'a str]) -> impl Iterator<Item = NodeId> + 'a {
        self.iter()
            .filter(move |(_, e)| tags.contains(&e.tag.as_str()))
            .map(|(id, _)| id)
    }

    pub fn count_tag(&self, tag: &str) -> usize {
        self.by_tags(&[tag]).count()
    }

    /// Strict ancestors, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.get(id).parent, move |p| self.get(*p).parent)
    }

    /// Strict descendants in document order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.get(id).children().collect();
        stack.reverse();
        while let Some(next) = stack.pop() {
            out.push(next);
            let mut kids: Vec<NodeId> = self.get(next).children().collect();
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// Concatenated text of the element and its descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        for c in &self.get(id).content {
            match c {
                Content::Text(t) => out.push_str(t),
                Content::Element(child) => self.collect_text(*child, out),
            }
        }
    }

    /// Whether the element produces a box: neither it nor an ancestor is `display: none` or
    /// `hidden`, and its own visibility is not `hidden`.
    pub fn is_rendered(&self, id: NodeId) -> bool {
        let el = self.get(id);
        let visibility = el.style.visibility.trim();
        if visibility == "hidden" || visibility == "collapse" {
            return false;
        }
        std::iter::once(id)
            .chain(self.ancestors(id))
            .all(|n| {
                let e = self.get(n);
                e.style.display.trim() != "none" && !e.has_attr("hidden")
            })
    }
}
