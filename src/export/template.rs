//! Tera-backed template renderer.

use crate::export::{RenderError, TemplateRender};
use async_trait::async_trait;
use serde_json::Value;
use tera::{Context, Tera};

/// Template renderer over a [`Tera`] environment loaded from disk.
///
/// The environment is built once at startup and shared across requests;
/// rendering itself takes no locks and mutates nothing.
pub struct TeraTemplateRender {
    tera: Tera,
}

impl TeraTemplateRender {
    /// Load all templates matching `glob` (e.g. `templates/**/*`).
    pub fn new(glob: &str) -> Result<Self, RenderError> {
        let tera = Tera::new(glob).map_err(|err| RenderError(err.to_string()))?;
        Ok(Self { tera })
    }
}

#[async_trait]
impl TemplateRender for TeraTemplateRender {
    async fn render(&self, template_name: &str, context: &Value) -> Result<String, RenderError> {
        let context =
            Context::from_value(context.clone()).map_err(|err| RenderError(err.to_string()))?;
        self.tera
            .render(template_name, &context)
            .map_err(|err| RenderError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renderer_with(name: &str, content: &str) -> TeraTemplateRender {
        let mut tera = Tera::default();
        tera.add_raw_template(name, content).unwrap();
        TeraTemplateRender { tera }
    }

    #[tokio::test]
    async fn renders_students_from_the_context() {
        let renderer = renderer_with(
            "scorecard/index.html",
            "{% for s in students %}{{ s.name }};{% endfor %}",
        );
        let context = json!({
            "students": [
                { "name": "User1", "mean": 2.0 },
                { "name": "User2", "mean": 3.5 }
            ]
        });

        let html = renderer
            .render("scorecard/index.html", &context)
            .await
            .unwrap();
        assert_eq!(html, "User1;User2;");
    }

    #[tokio::test]
    async fn missing_template_fails_with_a_render_error() {
        let renderer = renderer_with("scorecard/index.html", "ok");
        let err = renderer
            .render("missing.html", &json!({}))
            .await
            .unwrap_err();
        assert!(!err.0.is_empty());
    }
}
