//! MathML tree node definitions and the markup serializer.
//!
//! The parser builds this tree directly; there is no separate AST layer.
//! Nodes own their children outright, and attributes are an
//! insertion-ordered list rather than a hash map so that serializing the
//! same document twice is byte-identical and attribute order is fixed per
//! element kind.

use crate::utils::{escape_annotation_into, escape_attribute_into, escape_text_into};
use core::fmt::{self, Write as _};
use strum::AsRefStr;

/// The MathML namespace, applied to the root `math` element.
pub const MATHML_NS: &str = "http://www.w3.org/1998/Math/MathML";

/// MathML element kinds used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MathNodeType {
    /// `<math>` element
    Math,
    /// `<semantics>` element
    Semantics,
    /// `<annotation>` element
    Annotation,
    /// `<mrow>` element
    Mrow,
    /// `<mi>` element
    Mi,
    /// `<mn>` element
    Mn,
    /// `<mo>` element
    Mo,
    /// `<mtext>` element
    Mtext,
    /// `<ms>` element
    Ms,
    /// `<mspace>` element
    Mspace,
    /// `<mfrac>` element
    Mfrac,
    /// `<msqrt>` element
    Msqrt,
    /// `<mroot>` element
    Mroot,
    /// `<msub>` element
    Msub,
    /// `<msup>` element
    Msup,
    /// `<msubsup>` element
    Msubsup,
    /// `<mmultiscripts>` element
    Mmultiscripts,
    /// `<mprescripts>` placeholder
    Mprescripts,
    /// `<none>` placeholder
    None,
    /// `<munder>` element
    Munder,
    /// `<mover>` element
    Mover,
    /// `<munderover>` element
    Munderover,
    /// `<mtable>` element
    Mtable,
    /// `<mtr>` element
    Mtr,
    /// `<mtd>` element
    Mtd,
    /// `<maction>` element
    Maction,
    /// `<mpadded>` element
    Mpadded,
    /// `<mstyle>` element
    Mstyle,
    /// `<mphantom>` element
    Mphantom,
    /// `<menclose>` element
    Menclose,
    /// `<merror>` element
    Merror,
}

impl MathNodeType {
    /// Whether this element serializes as `<tag/>` when it has no
    /// children. Placeholder and spacing elements do; everything else
    /// (notably `annotation` and `mtd`) writes an explicit open/close
    /// pair.
    const fn self_closing_when_empty(self) -> bool {
        matches!(
            self,
            Self::Mrow | Self::None | Self::Mprescripts | Self::Mspace
        )
    }
}

/// Insertion-ordered attribute list.
///
/// Setting an existing name replaces its value in place, so emission order
/// is the order of first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets `name` to `value`, keeping the original position when the
    /// name is already present.
    pub fn set<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    /// Looks up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A node in the MathML tree: either an element or a text leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum MathmlNode {
    /// An element with attributes and children.
    Element(MathNode),
    /// A text leaf.
    Text(TextNode),
}

impl MathmlNode {
    /// Concatenated text content of this subtree.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Element(node) => node.text(),
            Self::Text(text) => text.text.clone(),
        }
    }

    /// The element inside, if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&MathNode> {
        match self {
            Self::Element(node) => Some(node),
            Self::Text(_) => None,
        }
    }

    fn write_markup(&self, f: &mut fmt::Formatter<'_>, in_annotation: bool) -> fmt::Result {
        match self {
            Self::Element(node) => node.write_markup(f),
            Self::Text(text) => {
                if in_annotation {
                    escape_annotation_into(f, &text.text)
                } else {
                    escape_text_into(f, &text.text)
                }
            }
        }
    }
}

impl From<MathNode> for MathmlNode {
    fn from(node: MathNode) -> Self {
        Self::Element(node)
    }
}

impl From<TextNode> for MathmlNode {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    /// The (unescaped) text content.
    pub text: String,
}

/// A MathML element.
#[derive(Debug, Clone, PartialEq)]
pub struct MathNode {
    /// Which element this is.
    pub node_type: MathNodeType,
    /// Attributes in emission order.
    pub attributes: Attributes,
    /// Owned child nodes.
    pub children: Vec<MathmlNode>,
}

impl MathNode {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub const fn new(node_type: MathNodeType) -> Self {
        Self {
            node_type,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with the given children.
    #[must_use]
    pub fn with_children(node_type: MathNodeType, children: Vec<MathmlNode>) -> Self {
        Self {
            node_type,
            attributes: Attributes::new(),
            children,
        }
    }

    /// Creates a token element (`mi`, `mn`, `mo`, ...) holding `text`.
    #[must_use]
    pub fn with_text<T: Into<String>>(node_type: MathNodeType, text: T) -> Self {
        Self::with_children(node_type, vec![TextNode { text: text.into() }.into()])
    }

    /// Appends a child.
    pub fn add_child<N: Into<MathmlNode>>(&mut self, child: N) {
        self.children.push(child.into());
    }

    /// Sets an attribute (insertion-ordered).
    pub fn set_attribute<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.set(name, value);
    }

    /// Builder-style [`Self::set_attribute`].
    #[must_use]
    pub fn with_attribute<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.set(name, value);
        self
    }

    /// Concatenated text content of the subtree.
    #[must_use]
    pub fn text(&self) -> String {
        self.children.iter().map(MathmlNode::text).collect()
    }

    /// Whether this is a token element whose content is exactly the single
    /// character `ch`-wide text. Used by the mathvariant remapping rule.
    #[must_use]
    pub fn single_char(&self) -> Option<char> {
        if !matches!(
            self.node_type,
            MathNodeType::Mi | MathNodeType::Mn | MathNodeType::Mtext
        ) {
            return None;
        }
        let [MathmlNode::Text(text)] = self.children.as_slice() else {
            return None;
        };
        let mut chars = text.text.chars();
        let ch = chars.next()?;
        chars.next().is_none().then_some(ch)
    }

    fn write_markup(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.node_type.as_ref();
        write!(f, "<{tag}")?;
        for (name, value) in self.attributes.iter() {
            write!(f, " {name}=\"")?;
            escape_attribute_into(f, value)?;
            f.write_char('"')?;
        }
        if self.children.is_empty() && self.node_type.self_closing_when_empty() {
            return f.write_str("/>");
        }
        f.write_char('>')?;
        let in_annotation = self.node_type == MathNodeType::Annotation;
        for child in &self.children {
            child.write_markup(f, in_annotation)?;
        }
        write!(f, "</{tag}>")
    }
}

impl fmt::Display for MathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_markup(f)
    }
}

impl fmt::Display for MathmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_markup(f, false)
    }
}

/// The finished translation: a `math` root wrapping a `semantics` pair of
/// parsed content and the TeX annotation.
///
/// Immutable after construction; `Display` is the serializer.
#[derive(Debug, Clone, PartialEq)]
pub struct MathDocument {
    root: MathNode,
}

impl MathDocument {
    /// Wraps a fully-built `math` element.
    #[must_use]
    pub(crate) const fn from_root(root: MathNode) -> Self {
        Self { root }
    }

    /// The `math` root element.
    #[must_use]
    pub const fn root(&self) -> &MathNode {
        &self.root
    }
}

impl fmt::Display for MathDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_markup(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_element_markup() {
        let node = MathNode::with_text(MathNodeType::Mi, "x");
        assert_eq!(node.to_string(), "<mi>x</mi>");
    }

    #[test]
    fn empty_mrow_self_closes_but_mtd_does_not() {
        assert_eq!(MathNode::new(MathNodeType::Mrow).to_string(), "<mrow/>");
        assert_eq!(MathNode::new(MathNodeType::Mtd).to_string(), "<mtd></mtd>");
        assert_eq!(MathNode::new(MathNodeType::None).to_string(), "<none/>");
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let node = MathNode::with_text(MathNodeType::Mo, "(")
            .with_attribute("maxsize", "1.2em")
            .with_attribute("minsize", "1.2em");
        assert_eq!(node.to_string(), "<mo maxsize=\"1.2em\" minsize=\"1.2em\">(</mo>");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let node = MathNode::with_text(MathNodeType::Ms, "a&b")
            .with_attribute("lquote", "<2")
            .with_attribute("rquote", "&]x");
        assert_eq!(
            node.to_string(),
            "<ms lquote=\"&lt;2\" rquote=\"&amp;]x\">a&amp;b</ms>"
        );
    }

    #[test]
    fn annotation_text_escapes_gt() {
        let node = MathNode::with_text(MathNodeType::Annotation, "a > b")
            .with_attribute("encoding", "TeX");
        assert_eq!(
            node.to_string(),
            "<annotation encoding=\"TeX\">a &gt; b</annotation>"
        );
    }

    #[test]
    fn single_char_detection() {
        assert_eq!(
            MathNode::with_text(MathNodeType::Mi, "x").single_char(),
            Some('x')
        );
        assert_eq!(MathNode::with_text(MathNodeType::Mi, "xy").single_char(), None);
        assert_eq!(MathNode::with_text(MathNodeType::Mo, "x").single_char(), None);
    }
}
