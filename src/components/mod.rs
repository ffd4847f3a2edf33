pub mod templates;

pub use templates::{PageRenderer, Template, TemplateName, TemplateSet};
