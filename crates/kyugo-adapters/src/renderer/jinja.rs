//! minijinja-backed renderer.
//!
//! Templates are plain text with `{{ Name }}`-style substitutions; block
//! tags and filters work too but none of the built-ins need them.

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::instrument;

use kyugo_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateData,
    error::KyugoResult,
};

/// Renders template sources with minijinja.
///
/// Output is never HTML-escaped, a trailing newline is kept, and any
/// reference to a variable outside [`TemplateData`] is an error.
pub struct JinjaRenderer {
    env: Environment<'static>,
}

impl JinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for JinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for JinjaRenderer {
    #[instrument(skip(self, source, data))]
    fn render(&self, name: &str, source: &str, data: &TemplateData) -> KyugoResult<String> {
        self.env
            .render_named_str(name, source, data)
            .map_err(|e| {
                ApplicationError::RenderingFailed {
                    template: name.to_string(),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> TemplateData {
        TemplateData::from_raw("user_profile").unwrap()
    }

    #[test]
    fn substitutes_every_variable() {
        let out = JinjaRenderer::new()
            .render(
                "t",
                "{{ Name }} {{ StructName }} {{ FuncName }} {{ ModelName }} {{ Table }}",
                &data(),
            )
            .unwrap();
        assert_eq!(
            out,
            "user_profile UserProfile userProfileController UserProfile user_profile"
        );
    }

    #[test]
    fn keeps_trailing_newline_and_does_not_escape() {
        let out = JinjaRenderer::new()
            .render("t", "x := \"<{{ Name }}>\"\n", &data())
            .unwrap();
        assert_eq!(out, "x := \"<user_profile>\"\n");
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let err = JinjaRenderer::new()
            .render("dto", "{{ Nope }}", &data())
            .unwrap_err();
        assert!(err.to_string().contains("dto"));
    }

    #[test]
    fn malformed_template_is_an_error() {
        assert!(JinjaRenderer::new().render("dto", "{{ Name", &data()).is_err());
    }
}
