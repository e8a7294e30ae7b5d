//! Renderer - substitutes values into templates and writes the results

use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

use crate::error::{Result, ScaffoldError};
use crate::paths;
use crate::templates::{MappingTable, TemplateSet};
use crate::values::ScaffoldValues;

pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Parse every template in `set` up front
    pub fn new(set: &TemplateSet) -> Result<Self> {
        let mut tera = Tera::default();
        // Generated files are source code, never HTML-escaped
        tera.autoescape_on(vec![]);

        for template in set.iter() {
            tera.add_raw_template(&template.id, &template.body)
                .map_err(|source| ScaffoldError::render(&template.id, source))?;
        }

        Ok(Self { tera })
    }

    /// Render template `id` to a string
    pub fn render(&self, id: &str, values: &ScaffoldValues) -> Result<String> {
        if !self.tera.get_template_names().any(|name| name == id) {
            return Err(ScaffoldError::TemplateNotFound(id.to_string()));
        }

        let render_err = |source: tera::Error| ScaffoldError::render(id, source);
        let context = Context::from_serialize(values).map_err(render_err)?;
        self.tera.render(id, &context).map_err(render_err)
    }

    /// Render template `id` and write it to its mapped path under `root`
    ///
    /// The destination directory must already exist. An existing file is
    /// truncated and overwritten.
    pub fn write(
        &self,
        id: &str,
        values: &ScaffoldValues,
        root: &Path,
        mappings: &MappingTable,
    ) -> Result<PathBuf> {
        let rendered = self.render(id, values)?;

        let dir = paths::destination_dir(root, mappings.destination_for(id));
        if !dir.is_dir() {
            return Err(ScaffoldError::MissingOutputDir(dir));
        }

        let path = dir.join(id);
        fs::write(&path, rendered).map_err(|e| ScaffoldError::io(&path, e))?;
        tracing::debug!(template = id, path = %path.display(), "rendered");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::Template;
    use tempfile::TempDir;

    fn values() -> ScaffoldValues {
        ScaffoldValues {
            name: "mypkg".into(),
            repository: "https://example.com/repo".into(),
            author_name: "Jane Doe".into(),
            author_email: "jane@example.com".into(),
            description: String::new(),
            console_script: false,
        }
    }

    fn set(templates: &[(&str, &str)]) -> TemplateSet {
        TemplateSet::from_templates(
            templates
                .iter()
                .map(|(id, body)| Template {
                    id: id.to_string(),
                    body: body.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_render_substitutes_every_field() {
        let renderer = Renderer::new(&set(&[(
            "info.txt",
            "{{ name }}|{{ repository }}|{{ author_name }}|{{ author_email }}|{{ description }}|{{ console_script }}\n",
        )]))
        .unwrap();

        let out = renderer.render("info.txt", &values()).unwrap();
        assert_eq!(
            out,
            "mypkg|https://example.com/repo|Jane Doe|jane@example.com||false\n"
        );
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = Renderer::new(&set(&[("index.html", "<{{ author_email }}> & {{ name }}")]))
            .unwrap();
        let mut v = values();
        v.name = "a&b".into();
        assert_eq!(
            renderer.render("index.html", &v).unwrap(),
            "<jane@example.com> & a&b"
        );
    }

    #[test]
    fn test_unknown_template() {
        let renderer = Renderer::new(&set(&[])).unwrap();
        let err = renderer.render("setup.py", &values()).unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateNotFound(id) if id == "setup.py"));
    }

    #[test]
    fn test_syntax_error_fails_construction() {
        let err = Renderer::new(&set(&[("bad.txt", "{% if name %}unclosed")]))
            .err()
            .unwrap();
        assert!(matches!(err, ScaffoldError::Render { name, .. } if name == "bad.txt"));
    }

    #[test]
    fn test_undefined_variable_is_named_in_error() {
        let renderer = Renderer::new(&set(&[("x", "[{{ license }}]")])).unwrap();
        let err = renderer.render("x", &values()).unwrap_err();

        assert!(matches!(&err, ScaffoldError::Render { name, .. } if name == "x"));
        let message = err.to_string();
        assert!(message.starts_with("Failed to render template x: "));
        assert!(message.contains("license"), "missing variable not reported: {message}");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let renderer = Renderer::new(&set(&[("NAME", "{{ name }}")])).unwrap();
        fs::write(tmp.path().join("NAME"), "old content that is longer").unwrap();

        let path = renderer
            .write("NAME", &values(), tmp.path(), &MappingTable::default())
            .unwrap();
        assert_eq!(path, tmp.path().join("NAME"));
        assert_eq!(fs::read_to_string(path).unwrap(), "mypkg");
    }

    #[test]
    fn test_write_into_mapped_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        let renderer = Renderer::new(&set(&[("__main__.py", "# {{ name }}")])).unwrap();

        let path = renderer
            .write("__main__.py", &values(), tmp.path(), &MappingTable::builtin())
            .unwrap();
        assert_eq!(path, tmp.path().join("src").join("__main__.py"));
    }

    #[test]
    fn test_write_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let renderer = Renderer::new(&set(&[("__main__.py", "# {{ name }}")])).unwrap();

        let err = renderer
            .write("__main__.py", &values(), tmp.path(), &MappingTable::builtin())
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingOutputDir(dir) if dir == tmp.path().join("src")));
    }
}
