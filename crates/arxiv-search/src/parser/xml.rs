//! Namespace-aware XML tree for Atom documents.
//!
//! The document is read once with `quick_xml::NsReader` into an owned tree.
//! Elements are addressed by a [`Namespace`] plus local name, resolved from
//! the namespace URI rather than the prefix.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

use crate::error::{FeedError, FeedResult};

/// Namespaces used by the arXiv API feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `http://www.w3.org/2005/Atom`, the feed's default namespace.
    Atom,
    /// `http://arxiv.org/schemas/atom`, the arXiv extension elements.
    Arxiv,
}

impl Namespace {
    /// Namespace URI.
    #[must_use]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::Atom => "http://www.w3.org/2005/Atom",
            Self::Arxiv => "http://arxiv.org/schemas/atom",
        }
    }

    fn from_uri(uri: &[u8]) -> Option<Self> {
        [Self::Atom, Self::Arxiv].into_iter().find(|ns| ns.uri().as_bytes() == uri)
    }
}

/// One element of the parsed document.
#[derive(Debug, Clone, Default)]
pub struct Element {
    namespace: Option<Namespace>,
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
    // Text or an attribute of this element could not be decoded.
    undecodable: bool,
}

impl Element {
    fn open(namespace: Option<Namespace>, start: &BytesStart<'_>) -> Self {
        let mut element = Self {
            namespace,
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Self::default()
        };

        for attr in start.attributes() {
            let decoded = attr.map_err(quick_xml::Error::from).and_then(|attr| {
                let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
                attr.unescape_value().map(|value| (key, value.into_owned()))
            });
            match decoded {
                Ok(pair) => element.attributes.push(pair),
                Err(_) => element.undecodable = true,
            }
        }

        element
    }

    /// Whether this element is `tag` in namespace `ns`.
    #[must_use]
    pub fn is(&self, ns: Namespace, tag: &str) -> bool {
        self.namespace == Some(ns) && self.name == tag
    }

    /// Local name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved namespace, `None` for unqualified or foreign elements.
    #[must_use]
    pub const fn namespace(&self) -> Option<Namespace> {
        self.namespace
    }

    /// Character data before the first child element, untrimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First direct child named `tag` in `ns`.
    #[must_use]
    pub fn child(&self, ns: Namespace, tag: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.is(ns, tag))
    }

    /// All direct children named `tag` in `ns`, in document order.
    pub fn children_named<'a>(
        &'a self,
        ns: Namespace,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |c| c.is(ns, tag))
    }

    /// Trimmed text of the first child named `tag` in `ns`.
    ///
    /// `None` when the child is absent; an empty string when it has no text.
    #[must_use]
    pub fn child_text(&self, ns: Namespace, tag: &str) -> Option<&str> {
        self.child(ns, tag).map(|c| c.text.trim())
    }

    /// Value of the attribute with local name `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    /// True when nothing in this subtree failed to decode.
    #[must_use]
    pub fn is_intact(&self) -> bool {
        !self.undecodable && self.children.iter().all(Self::is_intact)
    }
}

/// Read a complete XML document into an element tree.
///
/// Fails on syntax errors, mismatched or unclosed tags, stray text outside
/// the root, or a missing or repeated root. Undecodable text inside an
/// element only marks that element (see [`Element::is_intact`]).
pub fn parse_document(bytes: &[u8]) -> FeedResult<Element> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (resolved, event) = reader.read_resolved_event_into(&mut buf)?;
        let namespace = match resolved {
            ResolveResult::Bound(ns) => Namespace::from_uri(ns.as_ref()),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(FeedError::UnboundPrefix {
                    prefix: String::from_utf8_lossy(&prefix).into_owned(),
                });
            }
        };

        match event {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(FeedError::MultipleRoots);
                }
                stack.push(Element::open(namespace, &start));
            }
            Event::Empty(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(FeedError::MultipleRoots);
                }
                attach(&mut stack, &mut root, Element::open(namespace, &start));
            }
            Event::End(_) => {
                // The reader rejects end tags that do not match the open element.
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Text(text) => match stack.last_mut() {
                Some(current) => {
                    let decoded = std::str::from_utf8(&text).ok().and_then(|raw| {
                        quick_xml::escape::unescape(&normalize_line_endings(raw))
                            .ok()
                            .map(Cow::into_owned)
                    });
                    append_text(current, decoded);
                }
                None if text.iter().all(u8::is_ascii_whitespace) => {}
                None => return Err(FeedError::TextOutsideRoot),
            },
            Event::CData(data) => match stack.last_mut() {
                Some(current) => {
                    let decoded = std::str::from_utf8(&data).ok().map(|raw| normalize_line_endings(raw).into_owned());
                    append_text(current, decoded);
                }
                None => return Err(FeedError::TextOutsideRoot),
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(FeedError::Unclosed { element: open.name.clone() });
    }
    root.ok_or(FeedError::NoRoot)
}

// Only text ahead of the first child counts as the element's own text.
fn append_text(element: &mut Element, decoded: Option<String>) {
    match decoded {
        Some(text) if element.children.is_empty() => element.text.push_str(&text),
        Some(_) => {}
        None => element.undecodable = true,
    }
}

/// `\r\n` and lone `\r` become `\n`, as XML requires of parsed text.
fn normalize_line_endings(raw: &str) -> Cow<'_, str> {
    if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}
