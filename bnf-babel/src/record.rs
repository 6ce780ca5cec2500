//! Per-rule records handed to the table templates
//!
//! Every string field of a [`RuleRecord`] is already escaped: it can be embedded
//! as element text or inside a quoted attribute without further processing.

use crate::error::FormatError;
use crate::formats::html::dom::write_nodes;
use crate::formats::html::{escape_html, MarkupRenderer};
use crate::options::RenderOptions;
use bnf_parser::bnf::{Grammar, Rule};
use markup5ever_rcdom::Handle;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRecord {
    pub number: String,
    pub symbol: String,
    /// Id of this rule's row, unique within one rendering
    pub anchor: String,
    pub original_text: String,
    pub escaped_expression_text: String,
    pub rendered_markup: String,
    pub is_terminal: bool,
}

/// Records split into the two ordered groups: productions first, then terminals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordSet {
    pub productions: Vec<RuleRecord>,
    pub terminals: Vec<RuleRecord>,
}

impl RecordSet {
    pub fn from_grammar(grammar: &Grammar, options: &RenderOptions) -> Result<Self, FormatError> {
        let (productions, terminals) = render_grammar(grammar, options)?;
        Ok(Self {
            productions: productions.into_iter().map(|rule| rule.record).collect(),
            terminals: terminals.into_iter().map(|rule| rule.record).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.productions.len() + self.terminals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Hands out row ids.
///
/// A symbol defined more than once gets `-2`, `-3`, … on its later rows, so ids
/// stay unique while identifier links keep pointing at the first definition.
pub struct AnchorAllocator<'a> {
    options: &'a RenderOptions,
    used: HashSet<String>,
}

impl<'a> AnchorAllocator<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            used: HashSet::new(),
        }
    }

    pub fn claim(&mut self, symbol: &str) -> String {
        let base = self.options.anchor(symbol);
        let mut candidate = base.clone();
        let mut n = 1;
        while self.used.contains(&candidate) {
            n += 1;
            candidate = format!("{}-{}", base, n);
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

/// A record together with the markup nodes its `rendered_markup` was written from
pub(crate) struct RenderedRule {
    pub record: RuleRecord,
    pub markup: Vec<Handle>,
}

impl RenderedRule {
    fn new(rule: &Rule, anchor: &str, options: &RenderOptions) -> Result<Self, FormatError> {
        let markup = MarkupRenderer::new(options).render(&rule.expression);
        let record = RuleRecord {
            number: escape_html(&rule.number),
            symbol: escape_html(&rule.symbol),
            anchor: escape_html(anchor),
            original_text: escape_html(&rule.original_text),
            escaped_expression_text: escape_html(&rule.expression_text),
            rendered_markup: write_nodes(&markup)?,
            is_terminal: rule.is_terminal,
        };
        Ok(Self { record, markup })
    }
}

/// Render both groups, productions first, sharing one set of row ids
pub(crate) fn render_grammar(
    grammar: &Grammar,
    options: &RenderOptions,
) -> Result<(Vec<RenderedRule>, Vec<RenderedRule>), FormatError> {
    let mut anchors = AnchorAllocator::new(options);
    let productions = render_group(grammar.productions(), &mut anchors, options)?;
    let terminals = render_group(grammar.terminals(), &mut anchors, options)?;
    Ok((productions, terminals))
}

fn render_group<'g>(
    rules: impl Iterator<Item = &'g Rule>,
    anchors: &mut AnchorAllocator<'_>,
    options: &RenderOptions,
) -> Result<Vec<RenderedRule>, FormatError> {
    rules
        .map(|rule| RenderedRule::new(rule, &anchors.claim(&rule.symbol), options))
        .collect()
}
