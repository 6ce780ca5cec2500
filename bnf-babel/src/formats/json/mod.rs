//! JSON format implementation
//!
//! Pretty-printed [`RecordSet`]: the same escaped fields the HTML rows are built
//! from, for templating outside this crate.

use crate::error::FormatError;
use crate::format::Format;
use crate::options::RenderOptions;
use crate::record::RecordSet;
use bnf_parser::bnf::Grammar;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Rule records as JSON, productions and terminals in separate lists"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn serialize(&self, grammar: &Grammar, options: &RenderOptions) -> Result<String, FormatError> {
        let records = RecordSet::from_grammar(grammar, options)?;
        Ok(serde_json::to_string_pretty(&records)?)
    }
}
