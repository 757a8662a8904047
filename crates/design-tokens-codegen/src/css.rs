//! Stylesheet emitter.
//!
//! Generated rules are plain data. Putting them into a caller's stylesheet
//! goes through [`StylesheetHost`], which only knows "insert at start" and
//! "append at end".

use std::fmt;

use crate::map::PropertyMapBuilder;

/// Selector of the rule that carries every custom property.
pub const ROOT_SELECTOR: &str = ":root";

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{};", self.property, self.value)
    }
}

/// A selector with its declarations, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Render as `selector{prop:value;...}`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.selector)?;
        for decl in &self.declarations {
            write!(f, "{decl}")?;
        }
        write!(f, "}}")
    }
}

/// Everything one run generates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStylesheet {
    /// The single `:root` rule, possibly empty.
    pub root: Rule,
    /// One rule per utility-group token.
    pub utilities: Vec<Rule>,
}

impl GeneratedStylesheet {
    /// Emit the `:root` rule and utility rules in group-then-token order.
    pub fn emit(builder: &PropertyMapBuilder<'_>) -> Self {
        let mut root = Rule::new(ROOT_SELECTOR);
        root.declarations = builder.custom_properties();

        Self {
            root,
            utilities: builder.utility_rules(),
        }
    }

    /// Root rule first, then utilities.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        std::iter::once(&self.root).chain(self.utilities.iter())
    }

    /// One rule per line.
    pub fn to_css(&self) -> String {
        self.rules()
            .map(Rule::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Put the root rule at the start of `host` and append every utility.
    ///
    /// Applying twice duplicates the rules; regenerate from tokens instead.
    pub fn apply_to<H: StylesheetHost + ?Sized>(&self, host: &mut H) {
        host.prepend(self.root.clone());
        for rule in &self.utilities {
            host.append(rule.clone());
        }
    }
}

/// A stylesheet tree the generated rules are inserted into.
pub trait StylesheetHost {
    fn prepend(&mut self, rule: Rule);
    fn append(&mut self, rule: Rule);
}

impl StylesheetHost for Vec<Rule> {
    fn prepend(&mut self, rule: Rule) {
        self.insert(0, rule);
    }

    fn append(&mut self, rule: Rule) {
        self.push(rule);
    }
}

/// Existing stylesheet text with rules inserted around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssDocument {
    head: Vec<Rule>,
    body: String,
    tail: Vec<Rule>,
}

impl CssDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            head: Vec::new(),
            body: body.into(),
            tail: Vec::new(),
        }
    }

    /// Full text: prepended rules, the original body, appended rules.
    ///
    /// The body is kept byte for byte; a newline is only added after it when
    /// appended rules would otherwise share its last line.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.head {
            css.push_str(&rule.to_css());
            css.push('\n');
        }
        css.push_str(&self.body);
        if !self.body.is_empty() && !self.body.ends_with('\n') {
            css.push('\n');
        }
        for rule in &self.tail {
            css.push_str(&rule.to_css());
            css.push('\n');
        }
        css
    }
}

impl StylesheetHost for CssDocument {
    fn prepend(&mut self, rule: Rule) {
        self.head.insert(0, rule);
    }

    fn append(&mut self, rule: Rule) {
        self.tail.push(rule);
    }
}
