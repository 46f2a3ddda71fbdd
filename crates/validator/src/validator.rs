//! Chain builder
//!
//! A [`Validator`] is the root a host hands its input to: a list of rules
//! evaluated together, plus the settings that shape the reports of the
//! tree (template overrides, display name, [`ReportConfig`]).
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use sieve_validator::prelude::*;
//!
//! let validator = Validator::new()
//!     .named("age")
//!     .rule(int_type())
//!     .rule(between(0, 150).unwrap())
//!     .with_template("between", "{name} is out of range");
//!
//! assert!(validator.check(&json!(42)));
//!
//! let error = validator.assert(&json!(200)).unwrap_err();
//! assert_eq!(error.children[0].message, "age is out of range");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::combinators::AllOf;
use crate::foundation::{
    BoxedRule, ConfigError, Context, Params, ReportConfig, Rule, TemplateSet, ValidationError,
};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Report settings of a [`Validator`], loadable from JSON.
///
/// Every field is optional:
///
/// ```json
/// {
///   "name": "email",
///   "report": { "input_snippet_len": 32 },
///   "templates": { "regex": "{name} is not an email address" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Display name used for `{name}` outside navigators.
    pub name: Option<String>,
    /// Report configuration for the tree.
    pub report: Option<ReportConfig>,
    /// Template overrides for the tree.
    pub templates: TemplateSet,
}

impl ValidatorConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A fluent list of rules evaluated as a conjunction.
///
/// A chain of exactly one rule reports that rule's node directly; longer
/// chains report an `allOf` node with the failing rules as children. An
/// empty chain accepts everything.
///
/// `Validator` implements [`Rule`], so validators nest. The templates of a
/// nested validator take precedence over those of the enclosing one for its
/// own subtree.
#[derive(Debug, Default)]
pub struct Validator {
    rules: AllOf,
    templates: TemplateSet,
    name: Option<String>,
    report: Option<ReportConfig>,
}

impl Validator {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a rule in place.
    pub fn add<R: Rule + 'static>(&mut self, rule: R) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Sets the display name used for `{name}` outside navigators.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Overrides the template of one rule identifier.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, id: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.templates.insert(id, pattern);
        self
    }

    /// Merges a set of template overrides; later entries win.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_templates(mut self, templates: TemplateSet) -> Self {
        self.templates.merge(templates);
        self
    }

    /// Sets the report configuration of the tree.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_report_config(mut self, report: ReportConfig) -> Self {
        self.report = Some(report);
        self
    }

    /// Applies a [`ValidatorConfig`].
    ///
    /// Fields left unset in `config` keep their current value; templates
    /// are merged.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        let ValidatorConfig {
            name,
            report,
            templates,
        } = config;

        if name.is_some() {
            self.name = name;
        }
        if report.is_some() {
            self.report = report;
        }
        self.templates.merge(templates);
        self
    }

    /// Returns the rules of the chain.
    pub fn rules(&self) -> &[BoxedRule] {
        self.rules.rules()
    }

    /// Returns the display name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the template overrides of the tree.
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    fn single(&self) -> Option<&dyn Rule> {
        match self.rules.rules() {
            [rule] => Some(rule.as_ref()),
            _ => None,
        }
    }
}

impl Rule for Validator {
    fn id(&self) -> &str {
        self.single().map_or_else(|| self.rules.id(), Rule::id)
    }

    fn check(&self, input: &Value) -> bool {
        self.rules.check(input)
    }

    fn params(&self) -> Params {
        self.single().map_or_else(Params::new, Rule::params)
    }

    fn evaluate(&self, input: &Value, ctx: &Context<'_>) -> Result<(), ValidationError> {
        let configured = match &self.report {
            Some(report) => ctx.with_config(report),
            None => *ctx,
        };
        let templated = if self.templates.is_empty() {
            configured
        } else {
            configured.with_templates(&self.templates)
        };
        let ctx = match &self.name {
            Some(name) => templated.with_name(name),
            None => templated,
        };

        let result = match self.single() {
            Some(rule) => rule.evaluate(input, &ctx),
            None => self.rules.evaluate(input, &ctx),
        };

        tracing::trace!(
            name = self.name.as_deref(),
            rules = self.rules.rules().len(),
            valid = result.is_ok(),
            "validator evaluated"
        );
        result
    }
}
