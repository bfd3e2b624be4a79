//! Directive registry
//!
//! Maps step phrases (regular expressions, anchored to the whole line) to
//! handlers. The registry is built once, up front; registering the same
//! pattern twice is an error, and a line that matches more than one pattern is
//! reported rather than silently dispatched to the first.

pub mod convert;
mod named_sql;

use regex::Regex;

use crate::error::{Result, StepError};

pub use named_sql::{NamedSqlStep, StepOutcome, named_sql_steps, run_step};

struct StepDef<H> {
    pattern: String,
    regex: Regex,
    handler: H,
}

/// A step matched against a line, with its captured arguments
#[derive(Debug)]
pub struct StepMatch<'r, 'l, H> {
    pub pattern: &'r str,
    pub handler: &'r H,
    pub args: Vec<&'l str>,
}

/// Ordered phrase-pattern → handler table
pub struct StepRegistry<H> {
    steps: Vec<StepDef<H>>,
}

impl<H> Default for StepRegistry<H> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<H> StepRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for lines matching `pattern`
    pub fn register(&mut self, pattern: &str, handler: H) -> Result<()> {
        if self.steps.iter().any(|s| s.pattern == pattern) {
            return Err(StepError::DuplicateStep(pattern.to_owned()));
        }

        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            StepError::InvalidStepPattern {
                pattern: pattern.to_owned(),
                source,
            }
        })?;

        self.steps.push(StepDef {
            pattern: pattern.to_owned(),
            regex,
            handler,
        });
        Ok(())
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, pattern: &str, handler: H) -> Result<Self> {
        self.register(pattern, handler)?;
        Ok(self)
    }

    /// Find the single step matching `line`
    pub fn find<'r, 'l>(&'r self, line: &'l str) -> Result<StepMatch<'r, 'l, H>> {
        let mut matches = self
            .steps
            .iter()
            .filter_map(|step| step.regex.captures(line).map(|caps| (step, caps)));

        let Some((step, caps)) = matches.next() else {
            return Err(StepError::UnknownStep(line.to_owned()));
        };

        let others: Vec<String> = matches.map(|(s, _)| s.pattern.clone()).collect();
        if !others.is_empty() {
            let mut patterns = vec![step.pattern.clone()];
            patterns.extend(others);
            return Err(StepError::AmbiguousStep {
                line: line.to_owned(),
                patterns,
            });
        }

        let args = caps
            .iter()
            .skip(1)
            .map(|m| m.map_or("", |m| m.as_str()))
            .collect();

        Ok(StepMatch {
            pattern: &step.pattern,
            handler: &step.handler,
            args,
        })
    }

    /// Registered patterns, in registration order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.pattern.as_str())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
