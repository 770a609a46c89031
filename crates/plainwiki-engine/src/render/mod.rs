//! # Page Rendering
//!
//! Templates are plain HTML with two placeholders, `{{title}}` and
//! `{{body}}`. They are parsed once into [`Template`] segments and then only
//! read, so a [`Templates`] set can be shared across requests behind an `Arc`.
//!
//! Substituted values are HTML-escaped including quotes, which makes a
//! placeholder safe both in element text and inside a quoted attribute.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Page;

/// Template names the wiki renders
pub const VIEW: &str = "view";
pub const EDIT: &str = "edit";

const BUILTIN_VIEW: &str = include_str!("../../templates/view.html");
const BUILTIN_EDIT: &str = include_str!("../../templates/edit.html");

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Template {name}: unknown placeholder {{{{{placeholder}}}}}")]
    UnknownPlaceholder { name: String, placeholder: String },
    #[error("Template {name}: unterminated placeholder at byte {offset}")]
    Unterminated { name: String, offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Template {0:?} is not defined")]
    UnknownTemplate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Body,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Field::Title),
            "body" => Some(Field::Body),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed template
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Split `source` into literal text and placeholders.
    ///
    /// Placeholder names may be padded with spaces: `{{ title }}`.
    pub fn parse(name: &str, source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find(OPEN) {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after_open = &rest[open + OPEN.len()..];
            let close = after_open
                .find(CLOSE)
                .ok_or_else(|| TemplateError::Unterminated {
                    name: name.to_string(),
                    offset: offset + open,
                })?;

            let placeholder = after_open[..close].trim();
            let field =
                Field::from_name(placeholder).ok_or_else(|| TemplateError::UnknownPlaceholder {
                    name: name.to_string(),
                    placeholder: placeholder.to_string(),
                })?;
            segments.push(Segment::Field(field));

            let consumed = open + OPEN.len() + close + CLOSE.len();
            rest = &rest[consumed..];
            offset += consumed;
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Bind the page into this template
    pub fn render(&self, page: &Page) -> String {
        let title = html_escape::encode_quoted_attribute(page.title().as_str());
        let body_text = page.body_text();
        let body = html_escape::encode_quoted_attribute(&body_text);

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(Field::Title) => out.push_str(&title),
                Segment::Field(Field::Body) => out.push_str(&body),
            }
        }
        out
    }
}

/// The parse-once set of page templates, keyed by name.
#[derive(Debug, Clone)]
pub struct Templates {
    templates: HashMap<String, Template>,
    source: Option<PathBuf>,
}

impl Templates {
    /// The `view` and `edit` templates compiled into the crate
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_sources([(VIEW, BUILTIN_VIEW), (EDIT, BUILTIN_EDIT)])
    }

    /// Parse templates from `(name, source)` pairs
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TemplateError> {
        let mut templates = HashMap::new();
        for (name, source) in sources {
            templates.insert(name.to_string(), Template::parse(name, source)?);
        }
        Ok(Self {
            templates,
            source: None,
        })
    }

    /// Load `view.html` and `edit.html` from `dir`
    pub fn load_dir(dir: &Path) -> Result<Self, TemplateError> {
        let mut templates = HashMap::new();
        for name in [VIEW, EDIT] {
            let path = dir.join(format!("{name}.html"));
            let source = fs::read_to_string(&path).map_err(|source| TemplateError::Read {
                path: path.clone(),
                source,
            })?;
            templates.insert(name.to_string(), Template::parse(name, &source)?);
        }
        Ok(Self {
            templates,
            source: Some(dir.to_path_buf()),
        })
    }

    /// Directory the templates came from, `None` for built-in ones
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render `page` with the template called `name`
    pub fn render(&self, name: &str, page: &Page) -> Result<String, RenderError> {
        self.get(name)
            .map(|template| template.render(page))
            .ok_or_else(|| RenderError::UnknownTemplate(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_content_dir, title};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn page(t: &str, body: &str) -> Page {
        Page::new(title(t), body)
    }

    #[test]
    fn builtin_view_template() {
        let templates = Templates::builtin().unwrap();
        let html = templates
            .render(VIEW, &page("Home", "Hello <world>"))
            .unwrap();
        assert_snapshot!(html, @r#"
        <h1>Home</h1>

        <p>[<a href="/edit/Home">edit</a>]</p>

        <div>Hello &lt;world&gt;</div>
        "#);
    }

    #[test]
    fn builtin_edit_template() {
        let templates = Templates::builtin().unwrap();
        let html = templates
            .render(EDIT, &page("Home", "say \"hi\""))
            .unwrap();
        assert_snapshot!(html, @r#"
        <h1>Editing Home</h1>

        <form action="/save/Home" method="POST">
        <div><textarea name="body" rows="20" cols="80">say &quot;hi&quot;</textarea></div>
        <div><input type="submit" value="Save"></div>
        </form>
        "#);
    }

    #[test]
    fn edit_template_for_empty_page() {
        let templates = Templates::builtin().unwrap();
        let html = templates
            .render(EDIT, &Page::empty(title("NewPage")))
            .unwrap();
        assert!(html.contains(r#"<textarea name="body" rows="20" cols="80"></textarea>"#));
        assert!(html.contains(r#"action="/save/NewPage""#));
    }

    #[test]
    fn bracket_links_render_as_text() {
        // Links are stored unrewritten, so views show the brackets
        let templates = Templates::builtin().unwrap();
        let html = templates.render(VIEW, &page("A", "see [B]")).unwrap();
        assert!(html.contains("<div>see [B]</div>"));
    }

    #[test]
    fn unknown_template_name() {
        let templates = Templates::builtin().unwrap();
        let err = templates.render("history", &page("A", "")).unwrap_err();
        assert_eq!(err, RenderError::UnknownTemplate("history".to_string()));
        assert_eq!(err.to_string(), r#"Template "history" is not defined"#);
    }

    #[test]
    fn parse_allows_padded_placeholders() {
        let template = Template::parse("t", "<b>{{ title }}</b>{{body}}").unwrap();
        assert_eq!(template.render(&page("X", "y")), "<b>X</b>y");
    }

    #[test]
    fn parse_template_without_placeholders() {
        let template = Template::parse("static", "<p>static</p>").unwrap();
        assert_eq!(template.render(&page("X", "y")), "<p>static</p>");
    }

    #[test]
    fn parse_rejects_unknown_placeholder() {
        let err = Template::parse("view", "<h1>{{.Title}}</h1>").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::UnknownPlaceholder { ref placeholder, .. } if placeholder == ".Title"
        ));
        assert_eq!(
            err.to_string(),
            "Template view: unknown placeholder {{.Title}}"
        );
    }

    #[test]
    fn parse_rejects_unterminated_placeholder() {
        let err = Template::parse("edit", "<p>ok</p>{{body").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::Unterminated { offset: 9, .. }
        ));
    }

    #[test]
    fn load_dir_reads_both_templates() {
        let dir = create_test_content_dir();
        fs::write(dir.path().join("view.html"), "V:{{title}}:{{body}}").unwrap();
        fs::write(dir.path().join("edit.html"), "E:{{title}}").unwrap();

        let templates = Templates::load_dir(dir.path()).unwrap();
        assert_eq!(templates.source(), Some(dir.path()));
        assert_eq!(templates.render(VIEW, &page("T", "b")).unwrap(), "V:T:b");
        assert_eq!(templates.render(EDIT, &page("T", "b")).unwrap(), "E:T");
    }

    #[test]
    fn load_dir_missing_template() {
        let dir = create_test_content_dir();
        fs::write(dir.path().join("view.html"), "{{title}}").unwrap();

        let err = Templates::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, TemplateError::Read { ref path, .. } if path.ends_with("edit.html")));
    }

    #[test]
    fn builtin_has_no_source_dir() {
        assert!(Templates::builtin().unwrap().source().is_none());
    }
}
