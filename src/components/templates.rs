use std::fs;
use std::io;
use std::path::Path;
use log::{debug, info, warn};
use crate::errors::WikiError;
use crate::types::Page;

/// The templates a handler can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateName {
    View,
    Edit,
}

impl TemplateName {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateName::View => "view",
            TemplateName::Edit => "edit",
        }
    }

    fn file_name(self) -> String {
        format!("{}.html", self.as_str())
    }

    fn fallback(self) -> &'static str {
        match self {
            TemplateName::View => FALLBACK_VIEW,
            TemplateName::Edit => FALLBACK_EDIT,
        }
    }
}

/// Renders a page into an HTML document.
///
/// Field values are inserted verbatim, so callers hand over a page whose
/// body is already safe to embed.
pub trait PageRenderer: Send + Sync {
    fn render(&self, name: TemplateName, page: &Page) -> Result<String, WikiError>;
}

const FALLBACK_VIEW: &str = "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{{.Title}}</title></head><body><h1>{{.Title}}</h1><p>[<a href=\"/edit/{{.Title}}\">edit</a>]</p><div>{{.Body}}</div></body></html>";

const FALLBACK_EDIT: &str = "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Editing {{.Title}}</title></head><body><h1>Editing {{.Title}}</h1><form action=\"/save/{{.Title}}\" method=\"POST\"><div><textarea name=\"body\" rows=\"20\" cols=\"80\">{{.Body}}</textarea></div><div><input type=\"submit\" value=\"Save\"></div></form></body></html>";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Field(String),
}

/// A parsed template: literal text interleaved with `{{.Field}}` slots
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source. Fails only on an unterminated `{{`.
    pub fn parse(name: &str, source: &str) -> Result<Self, WikiError> {
        let mut segments = Vec::new();
        let mut rest = source;
        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let end = after.find("}}").ok_or_else(|| {
                WikiError::Template(format!("{}: unclosed action at byte {}", name, source.len() - rest.len() + start))
            })?;
            let field = after[..end].trim();
            segments.push(Segment::Field(field.trim_start_matches('.').to_string()));
            rest = &after[end + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }
        Ok(Self { name: name.to_string(), segments })
    }

    /// Fill every slot from `page`; an unknown field is a render error
    pub fn execute(&self, page: &Page) -> Result<String, WikiError> {
        let body = page.body_text();
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(field) => match field.as_str() {
                    "Title" => out.push_str(page.title.as_str()),
                    "Body" => out.push_str(&body),
                    other => {
                        return Err(WikiError::Render(format!(
                            "template: {}: can't evaluate field {}",
                            self.name, other
                        )));
                    }
                },
            }
        }
        Ok(out)
    }
}

/// The `view` and `edit` templates, loaded once at startup
#[derive(Debug, Clone)]
pub struct TemplateSet {
    view: Template,
    edit: Template,
}

impl TemplateSet {
    /// Load `view.html` and `edit.html` from `dir`, using the built-in
    /// template for any file that does not exist
    pub fn load(dir: &Path) -> Result<Self, WikiError> {
        let set = Self {
            view: load_one(dir, TemplateName::View)?,
            edit: load_one(dir, TemplateName::Edit)?,
        };
        info!("Templates loaded from {:?}", dir);
        Ok(set)
    }

    /// Only the built-in templates
    pub fn builtin() -> Result<Self, WikiError> {
        Ok(Self {
            view: Template::parse("view", FALLBACK_VIEW)?,
            edit: Template::parse("edit", FALLBACK_EDIT)?,
        })
    }

    fn get(&self, name: TemplateName) -> &Template {
        match name {
            TemplateName::View => &self.view,
            TemplateName::Edit => &self.edit,
        }
    }
}

impl PageRenderer for TemplateSet {
    fn render(&self, name: TemplateName, page: &Page) -> Result<String, WikiError> {
        debug!("Rendering template '{}' for page '{}'", name.as_str(), page.title);
        self.get(name).execute(page)
    }
}

fn load_one(dir: &Path, name: TemplateName) -> Result<Template, WikiError> {
    let path = dir.join(name.file_name());
    match fs::read_to_string(&path) {
        Ok(source) => Template::parse(name.as_str(), &source),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Template {:?} not found, using built-in '{}' template", path, name.as_str());
            Template::parse(name.as_str(), name.fallback())
        }
        Err(e) => Err(WikiError::Io(e)),
    }
}
