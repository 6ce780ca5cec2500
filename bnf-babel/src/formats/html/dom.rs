//! DOM nodes and markup writing
//!
//! Rows and expression markup are built as `markup5ever_rcdom` nodes and written
//! out through html5ever's serialization traversal. Text contents and attribute
//! values are stored already escaped with [`escape_html`](super::escape_html), so
//! [`MarkupWriter`] copies them verbatim: quote glyphs around a literal stay raw
//! while `'` and `"` inside it keep their character references.
//!
//! Table structure is laid out one row per line:
//!
//! ```text
//! <table class="grammar">
//!   <tbody class="grammar-productions">
//!     <tr id="A">…</tr>
//!   </tbody>
//! </table>
//! ```

use crate::error::FormatError;
use html5ever::serialize::{AttrRef, Serialize, Serializer, TraversalScope};
use html5ever::{ns, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::io;
use std::rc::Rc;

/// Elements whose children go on their own, indented lines
const BLOCK_ELEMENTS: &[&str] = &["table", "tbody"];
/// Elements written on a single line
const LINE_ELEMENTS: &[&str] = &["tr"];

/// Create an element; attribute values must already be escaped
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node; `escaped` must already be escaped
pub fn create_text(escaped: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(escaped.to_string().into()),
        },
    })
}

/// Append `children` to `parent`
pub fn append_all(parent: &Handle, children: impl IntoIterator<Item = Handle>) {
    parent.children.borrow_mut().extend(children);
}

/// Write nodes (and their subtrees) as markup
pub fn write_nodes(nodes: &[Handle]) -> Result<String, FormatError> {
    let mut writer = MarkupWriter::new();
    for node in nodes {
        SerializableHandle::from(node.clone())
            .serialize(&mut writer, TraversalScope::IncludeNode)
            .map_err(|e| {
                FormatError::SerializationError(format!("HTML serialization failed: {}", e))
            })?;
    }
    Ok(writer.output)
}

/// html5ever serializer that keeps the node contents as they are
struct MarkupWriter {
    output: String,
    indent_level: usize,
}

impl MarkupWriter {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn push_indent(&mut self) {
        self.output.push_str(&"  ".repeat(self.indent_level));
    }
}

impl Serializer for MarkupWriter {
    fn start_elem<'a, AttrIter>(&mut self, name: QualName, attrs: AttrIter) -> io::Result<()>
    where
        AttrIter: Iterator<Item = AttrRef<'a>>,
    {
        let tag: &str = &name.local;
        let block = BLOCK_ELEMENTS.contains(&tag);
        if block || LINE_ELEMENTS.contains(&tag) {
            self.push_indent();
        }

        self.output.push('<');
        self.output.push_str(tag);
        for (attr_name, value) in attrs {
            self.output.push(' ');
            self.output.push_str(&attr_name.local);
            self.output.push_str("=\"");
            self.output.push_str(value);
            self.output.push('"');
        }
        self.output.push('>');

        if block {
            self.output.push('\n');
            self.indent_level += 1;
        }
        Ok(())
    }

    fn end_elem(&mut self, name: QualName) -> io::Result<()> {
        let tag: &str = &name.local;
        let block = BLOCK_ELEMENTS.contains(&tag);
        if block {
            self.indent_level = self.indent_level.saturating_sub(1);
            self.push_indent();
        }

        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');

        if block || LINE_ELEMENTS.contains(&tag) {
            self.output.push('\n');
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn write_comment(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str("<!--");
        self.output.push_str(text);
        self.output.push_str("-->");
        Ok(())
    }

    fn write_doctype(&mut self, name: &str) -> io::Result<()> {
        self.output.push_str("<!DOCTYPE ");
        self.output.push_str(name);
        self.output.push('>');
        Ok(())
    }

    fn write_processing_instruction(&mut self, target: &str, data: &str) -> io::Result<()> {
        self.output.push_str("<?");
        self.output.push_str(target);
        self.output.push(' ');
        self.output.push_str(data);
        self.output.push('>');
        Ok(())
    }
}
