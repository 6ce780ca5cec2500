//! Rule extraction
//!
//! Groups physical lines into logical rules. A rule starts on a line whose first
//! character is `[` (a numbered rule) or `@` (a section marker such as
//! `@terminals`) and extends over every following line until the next such line.
//! Continuation lines are trimmed and concatenated without a separator.
//!
//! Lines starting with `/*` are dropped. Only the line itself is skipped: there is
//! no tracking of a closing `*/`, so block comments must put `/*` on every line.

/// Iterator adapter turning raw lines into rule strings.
///
/// Single pass: the underlying line iterator is consumed as rules are pulled.
pub struct RuleExtractor<I> {
    lines: I,
    pending: String,
}

impl<I, S> RuleExtractor<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            pending: String::new(),
        }
    }
}

impl<I, S> Iterator for RuleExtractor<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for line in self.lines.by_ref() {
            let text = line.as_ref();
            if text.starts_with("/*") {
                continue;
            }
            if starts_rule(text) {
                let finished = std::mem::replace(&mut self.pending, text.trim().to_owned());
                if !finished.is_empty() {
                    return Some(finished);
                }
            } else {
                self.pending.push_str(text.trim());
            }
        }

        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }
}

fn starts_rule(line: &str) -> bool {
    line.starts_with('[') || line.starts_with('@')
}

/// Extract the rules of a whole grammar source
pub fn extract_rules(source: &str) -> RuleExtractor<std::str::Lines<'_>> {
    RuleExtractor::new(source.lines())
}
