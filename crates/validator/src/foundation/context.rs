//! Evaluation context
//!
//! A [`Context`] is created per evaluation and threaded down the rule tree by
//! reference. Each level only borrows its parent, so building a child context
//! is free and nothing outlives the call.
//!
//! The context carries what a rule needs to build its report: the template
//! overrides of every enclosing tree, the display name of the tree, the path
//! accumulated by navigators, and the [`ReportConfig`].

use std::borrow::Cow;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::template::{self, FALLBACK_TEMPLATE, TemplateSet};
use crate::foundation::{Params, ValidationError, value};

/// Default maximum length, in characters, of the input snippet in reports.
pub const DEFAULT_INPUT_SNIPPET_LEN: usize = 64;

/// Settings that shape how reports are built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum length of the `input` snippet, in characters.
    pub input_snippet_len: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_snippet_len: DEFAULT_INPUT_SNIPPET_LEN,
        }
    }
}

static DEFAULT_REPORT_CONFIG: ReportConfig = ReportConfig {
    input_snippet_len: DEFAULT_INPUT_SNIPPET_LEN,
};

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

/// State of a single evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    config: &'a ReportConfig,
    templates: Option<&'a TemplateSet>,
    name: Option<&'a str>,
    segment: Option<Segment<'a>>,
    parent: Option<&'a Context<'a>>,
}

impl Default for Context<'static> {
    fn default() -> Self {
        Self::root(&DEFAULT_REPORT_CONFIG)
    }
}

impl<'a> Context<'a> {
    /// Creates a root context with no overrides and no path.
    #[must_use]
    pub fn root(config: &'a ReportConfig) -> Self {
        Self {
            config,
            templates: None,
            name: None,
            segment: None,
            parent: None,
        }
    }

    /// Returns the report configuration in effect.
    #[must_use]
    pub fn config(&self) -> &'a ReportConfig {
        self.config
    }

    fn child(&self) -> Context<'_> {
        Context {
            config: self.config,
            templates: None,
            name: None,
            segment: None,
            parent: Some(self),
        }
    }

    /// Layers `templates` over the overrides already in effect.
    #[must_use]
    pub fn with_templates<'b>(&'b self, templates: &'b TemplateSet) -> Context<'b> {
        Context {
            templates: Some(templates),
            ..self.child()
        }
    }

    /// Sets the display name used for `{name}` when there is no path.
    #[must_use]
    pub fn with_name<'b>(&'b self, name: &'b str) -> Context<'b> {
        Context {
            name: Some(name),
            ..self.child()
        }
    }

    /// Replaces the report configuration for this subtree.
    #[must_use]
    pub fn with_config<'b>(&'b self, config: &'b ReportConfig) -> Context<'b> {
        Context {
            config,
            ..self.child()
        }
    }

    /// Descends into the member `key`.
    #[must_use]
    pub fn key<'b>(&'b self, key: &'b str) -> Context<'b> {
        Context {
            segment: Some(Segment::Key(key)),
            ..self.child()
        }
    }

    /// Descends into the element at `index`.
    #[must_use]
    pub fn index(&self, index: usize) -> Context<'_> {
        Context {
            segment: Some(Segment::Index(index)),
            ..self.child()
        }
    }

    fn ancestors(&self) -> impl Iterator<Item = &Context<'a>> {
        std::iter::successors(Some(self), |ctx| ctx.parent)
    }

    /// Path from the root to the current value, e.g. `user.tags[2]`.
    #[must_use]
    pub fn path(&self) -> Option<String> {
        let mut segments: Vec<Segment<'_>> = self.ancestors().filter_map(|c| c.segment).collect();
        if segments.is_empty() {
            return None;
        }
        segments.reverse();

        let mut path = String::new();
        for segment in segments {
            match segment {
                Segment::Key(key) if path.is_empty() => path.push_str(key),
                Segment::Key(key) => {
                    path.push('.');
                    path.push_str(key);
                }
                Segment::Index(index) => {
                    let _ = write!(path, "[{index}]");
                }
            }
        }
        Some(path)
    }

    /// Returns the innermost tree-level override for `id`, if any.
    #[must_use]
    pub fn template_override(&self, id: &str) -> Option<&'a str> {
        self.ancestors()
            .filter_map(|ctx| ctx.templates)
            .find_map(|templates| templates.get(id))
    }

    /// Resolves the template for `id`: innermost override first, then the
    /// enclosing trees', then the defaults, then the fallback.
    #[must_use]
    pub fn template(&self, id: &str) -> &'a str {
        self.template_override(id)
            .or_else(|| template::default_template(id))
            .unwrap_or(FALLBACK_TEMPLATE)
    }

    fn display_name(&self, snippet: &str) -> String {
        self.path()
            .or_else(|| self.ancestors().find_map(|c| c.name).map(str::to_owned))
            .unwrap_or_else(|| snippet.to_owned())
    }

    /// Builds the report for rule `id` rejecting `input`.
    ///
    /// The report's params are `id`, `name` and `input`, followed by `params`.
    #[must_use]
    pub fn reject(&self, id: &str, params: Params, input: &Value) -> ValidationError {
        self.reject_with_template(id, self.template(id), params, input)
    }

    /// Like [`reject`](Self::reject), rendering `pattern` instead of the
    /// template resolved for `id`.
    #[must_use]
    pub fn reject_with_template(
        &self,
        id: &str,
        pattern: &str,
        params: Params,
        input: &Value,
    ) -> ValidationError {
        let snippet = value::snippet(input, self.config.input_snippet_len);
        let name = self.display_name(&snippet);

        let mut all = Params::with_capacity(3 + params.len());
        all.push((Cow::Borrowed("id"), Cow::Owned(id.to_owned())));
        all.push((Cow::Borrowed("name"), Cow::Owned(name)));
        all.push((Cow::Borrowed("input"), Cow::Owned(snippet.clone())));
        all.extend(params);

        let message = template::render(pattern, &all);
        let error = ValidationError::new(id.to_owned(), message)
            .with_input(snippet)
            .with_params(all);

        match self.path() {
            Some(path) => error.with_path(path),
            None => error,
        }
    }

    /// Builds the report for a combinator, attaching its failing children.
    #[must_use]
    pub fn reject_with_children(
        &self,
        id: &str,
        params: Params,
        input: &Value,
        children: Vec<ValidationError>,
    ) -> ValidationError {
        self.reject(id, params, input).with_children(children)
    }
}
