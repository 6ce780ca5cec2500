//! HTML table serialization
//!
//! Assembles rule records into one table. Productions go in a first `<tbody>`;
//! terminal productions, when present, go in a second one that opens with a
//! heading row. Each row is anchored on its symbol so that identifier links in
//! other rows resolve to it. Rows are built as DOM nodes around the markup nodes
//! of each rule and written out with [`write_nodes`].
//!
//! ```text
//! <table class="grammar">
//!   <tbody class="grammar-productions">
//!     <tr id="A" data-source="[1] A ::= B"><td class="rule-number">[1]</td>…</tr>
//!   </tbody>
//!   <tbody class="grammar-terminals">
//!     <tr class="grammar-section"><th colspan="4">Productions for terminals</th></tr>
//!     …
//!   </tbody>
//! </table>
//! ```

use super::dom::{append_all, create_element, create_text, write_nodes};
use super::escape::escape_html;
use crate::error::FormatError;
use crate::options::RenderOptions;
use crate::record::{render_grammar, RenderedRule};
use bnf_parser::bnf::Grammar;
use markup5ever_rcdom::Handle;

/// Build one row; cell text comes from the escaped record fields
fn build_row(rule: RenderedRule) -> Handle {
    let record = rule.record;
    let row = create_element(
        "tr",
        vec![("id", record.anchor.as_str()), ("data-source", record.original_text.as_str())],
    );

    let number = create_element("td", vec![("class", "rule-number")]);
    append_all(&number, [create_text(&format!("[{}]", record.number))]);

    let symbol = create_element("td", vec![("class", "rule-symbol")]);
    append_all(&symbol, [code(vec![create_text(&record.symbol)])]);

    let defines = create_element("td", vec![("class", "rule-defines")]);
    append_all(&defines, [create_text("::=")]);

    let expression = create_element(
        "td",
        vec![
            ("class", "rule-expression"),
            ("title", record.escaped_expression_text.as_str()),
        ],
    );
    append_all(&expression, [code(rule.markup)]);

    append_all(&row, [number, symbol, defines, expression]);
    row
}

fn code(children: Vec<Handle>) -> Handle {
    let code = create_element("code", vec![]);
    append_all(&code, children);
    code
}

fn build_section_heading(heading: &str) -> Handle {
    let row = create_element("tr", vec![("class", "grammar-section")]);
    let cell = create_element("th", vec![("colspan", "4")]);
    append_all(&cell, [create_text(&escape_html(heading))]);
    append_all(&row, [cell]);
    row
}

fn build_table(
    productions: Vec<RenderedRule>,
    terminals: Vec<RenderedRule>,
    options: &RenderOptions,
) -> Handle {
    let table = create_element("table", vec![("class", "grammar")]);

    let body = create_element("tbody", vec![("class", "grammar-productions")]);
    append_all(&body, productions.into_iter().map(build_row));
    append_all(&table, [body]);

    if !terminals.is_empty() {
        let body = create_element("tbody", vec![("class", "grammar-terminals")]);
        append_all(&body, [build_section_heading(&options.terminals_heading)]);
        append_all(&body, terminals.into_iter().map(build_row));
        append_all(&table, [body]);
    }

    table
}

/// Serialize a grammar to an HTML table, or a full document when `standalone` is set
pub fn serialize_grammar(grammar: &Grammar, options: &RenderOptions) -> Result<String, FormatError> {
    let (productions, terminals) = render_grammar(grammar, options)?;
    let table = write_nodes(&[build_table(productions, terminals, options)])?;

    if options.standalone {
        Ok(wrap_in_document(&table, &options.title))
    } else {
        Ok(table)
    }
}

fn wrap_in_document(body: &str, title: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>{}</title>\n",
            "</head>\n",
            "<body>\n",
            "{}",
            "</body>\n",
            "</html>\n"
        ),
        escape_html(title),
        body
    )
}
