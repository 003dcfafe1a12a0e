//! File templates and variable substitution.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  FileTemplate                                               │
//! │  ├── RelativePath  - where the file lands under the root    │
//! │  ├── TemplateGroup - which option selected it               │
//! │  └── TemplateContent - what goes in it                      │
//! │       ├── Static(&'static str)   compile-time text          │
//! │       ├── Owned(String)          rendered at collect time   │
//! │       └── Deferred(Fn -> String) produced at write time     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext                                              │
//! │  └── {{PROJECT_NAME}} -> "demo-api"                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `FileTemplate` is created in bulk by the collect step, consumed once by
//! the write step, then dropped.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::Datelike;

use crate::domain::{
    entities::common::RelativePath, error::DomainError, value_objects::TemplateGroup,
};

/// Content producer for a single file.
#[derive(Clone)]
pub enum TemplateContent {
    /// Text compiled into the binary.
    Static(&'static str),
    /// Text rendered while collecting.
    Owned(String),
    /// Text produced on demand, right before the file is written.
    Deferred(Arc<dyn Fn() -> String + Send + Sync>),
}

impl TemplateContent {
    /// Wrap a closure as deferred content.
    pub fn deferred<F>(producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(producer))
    }

    /// Resolve to the final text, invoking the producer if needed.
    pub fn resolve(&self) -> Cow<'_, str> {
        match self {
            Self::Static(text) => Cow::Borrowed(text),
            Self::Owned(text) => Cow::Borrowed(text.as_str()),
            Self::Deferred(producer) => Cow::Owned(producer()),
        }
    }

    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl fmt::Debug for TemplateContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(&text.len()).finish(),
            Self::Owned(text) => f.debug_tuple("Owned").field(&text.len()).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<&'static str> for TemplateContent {
    fn from(text: &'static str) -> Self {
        Self::Static(text)
    }
}

impl From<String> for TemplateContent {
    fn from(text: String) -> Self {
        Self::Owned(text)
    }
}

/// One file to generate.
#[derive(Debug, Clone)]
pub struct FileTemplate {
    pub path: RelativePath,
    pub group: TemplateGroup,
    pub content: TemplateContent,
}

impl FileTemplate {
    /// # Panics
    /// Panics if `path` is absolute. Built-in catalogs only use literals.
    pub fn new(
        path: impl Into<std::path::PathBuf>,
        group: TemplateGroup,
        content: impl Into<TemplateContent>,
    ) -> Self {
        Self {
            path: RelativePath::new(path),
            group,
            content: content.into(),
        }
    }

    /// Fallible constructor for paths that did not come from a literal.
    pub fn try_new(
        path: impl Into<std::path::PathBuf>,
        group: TemplateGroup,
        content: impl Into<TemplateContent>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            path: RelativePath::try_new(path)?,
            group,
            content: content.into(),
        })
    }

    /// Empty placeholder that keeps a directory under version control.
    pub fn keep(dir: &str, group: TemplateGroup) -> Self {
        Self::new(format!("{dir}/.gitkeep"), group, "")
    }

    pub fn with_deferred<F>(
        path: impl Into<std::path::PathBuf>,
        group: TemplateGroup,
        producer: F,
    ) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::new(path, group, TemplateContent::deferred(producer))
    }

    /// Final file text.
    pub fn content(&self) -> Cow<'_, str> {
        self.content.resolve()
    }
}

/// Context for template rendering.
///
/// A **Value Object** holding the variables available to parameterized
/// templates. Built-in variables are `SCREAMING_SNAKE_CASE`.
///
/// | Variable | Example |
/// |----------|---------|
/// | `PROJECT_NAME` | "demo-api" |
/// | `PROJECT_NAME_SNAKE` | "demo_api" |
/// | `PROJECT_NAME_KEBAB` | "demo-api" |
/// | `PROJECT_NAME_PASCAL` | "DemoApi" |
/// | `PROJECT_TITLE` | "Demo Api" |
/// | `YEAR` | "2026" |
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();

        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_SNAKE".to_string(), to_snake_case(&name));
        vars.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(&name));
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(&name));
        vars.insert("PROJECT_TITLE".to_string(), to_title_case(&name));
        vars.insert("YEAR".to_string(), chrono::Local::now().year().to_string());

        Self {
            project_name: name,
            variables: vars,
        }
    }

    /// Add a variable, consuming self. Later values override earlier ones.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Replace every `{{VARIABLE}}` placeholder with its value.
    ///
    /// Unknown placeholders are left untouched, so text such as GitHub
    /// Actions' `${{ secrets.TOKEN }}` passes through unchanged.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

fn to_title_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split an identifier into lowercase words.
///
/// Separators (`_`, `-`, whitespace) always split; a lowercase-to-uppercase
/// transition splits camelCase; `Upper Upper Lower` splits acronyms
/// (`HTTPServer` -> `http`, `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = input.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(current.to_lowercase());
                current.clear();
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_context_standard_variables() {
        let ctx = RenderContext::new("demo-api");

        assert_eq!(ctx.get("PROJECT_NAME"), Some("demo-api"));
        assert_eq!(ctx.get("PROJECT_NAME_SNAKE"), Some("demo_api"));
        assert_eq!(ctx.get("PROJECT_NAME_KEBAB"), Some("demo-api"));
        assert_eq!(ctx.get("PROJECT_NAME_PASCAL"), Some("DemoApi"));
        assert_eq!(ctx.get("PROJECT_TITLE"), Some("Demo Api"));
        assert!(ctx.get("YEAR").is_some());
    }

    #[test]
    fn render_replaces_known_and_keeps_unknown() {
        let ctx = RenderContext::new("billingService").with_variable("PORT", "8000");
        let out = ctx.render("{{PROJECT_NAME_SNAKE}}:{{PORT}} ${{ secrets.TOKEN }} {{NOPE}}");
        assert_eq!(out, "billing_service:8000 ${{ secrets.TOKEN }} {{NOPE}}");
    }

    #[test]
    fn split_words_handles_acronyms() {
        assert_eq!(split_words("HTTPServer"), vec!["http", "server"]);
        assert_eq!(split_words("my_API-v2"), vec!["my", "api", "v2"]);
    }

    #[test]
    fn deferred_content_is_produced_on_resolve() {
        let template = FileTemplate::with_deferred("gen.txt", TemplateGroup::Core, || {
            "made late".to_string()
        });
        assert!(template.content.is_deferred());
        assert_eq!(template.content(), "made late");
    }

    #[test]
    fn static_and_owned_content_resolve_verbatim() {
        let a = FileTemplate::new("a.txt", TemplateGroup::Config, "alpha");
        let b = FileTemplate::new("b.txt", TemplateGroup::Config, String::from("beta"));
        assert_eq!(a.content(), "alpha");
        assert_eq!(b.content(), "beta");
    }

    #[test]
    fn keep_marker_is_empty_and_nested() {
        let keep = FileTemplate::keep("src/utils", TemplateGroup::Core);
        assert_eq!(keep.path.as_path(), std::path::Path::new("src/utils/.gitkeep"));
        assert!(keep.content().is_empty());
    }
}
