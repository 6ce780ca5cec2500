//! Output formats for compiled grammars
//!
//!     This crate turns a compiled [`Grammar`](bnf_parser::bnf::Grammar) into text: the
//!     cross-referenced HTML table the tool is named for, plus machine-readable and
//!     debugging views.
//!
//!     This is a pure lib: it powers bnf2html but is shell agnostic, no code here
//!     prints, reads env vars or touches the file system.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all output formats
//!     - FormatRegistry: discovery and selection of formats by name
//!     - RuleRecord: the per-rule data every format starts from
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── options.rs              # RenderOptions
//!     ├── record.rs               # RuleRecord / RecordSet
//!     ├── registry.rs             # FormatRegistry
//!     ├── formats
//!     │   ├── html
//!     │   │   ├── dom.rs          # rcdom nodes and markup writing
//!     │   │   ├── escape.rs       # character reference escaping
//!     │   │   ├── expression.rs   # expression tree → inline markup
//!     │   │   ├── serializer.rs   # rules → table
//!     │   │   └── mod.rs
//!     │   ├── json
//!     │   └── tag
//!     ├── lib.rs
//!
//! Parenthesization
//!
//!     The expression tree keeps no grouping nodes, so the renderer re-derives the
//!     parentheses from two context bits, see [formats::html::expression].

pub mod error;
pub mod format;
pub mod formats;
pub mod options;
pub mod record;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::html::{escape_html, render_expression};
pub use options::RenderOptions;
pub use record::{AnchorAllocator, RecordSet, RuleRecord};
pub use registry::FormatRegistry;
