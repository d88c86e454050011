use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::domain::AppError;

use super::TemplateFile;

/// Build a strict environment holding every template in `templates`.
///
/// Referencing a field the record does not define is a render error.
/// Output is never escaped: manifests are YAML, not markup.
pub fn build_template_environment(
    templates: &[TemplateFile],
) -> Result<Environment<'_>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for template in templates {
        env.add_template(template.name(), template.content()).map_err(|source| {
            AppError::TemplateRender { template: template.name().to_string(), source }
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|source| AppError::TemplateRender {
        template: template_name.to_string(),
        source,
    })?;

    template
        .render(ctx)
        .map_err(|source| AppError::TemplateRender { template: template_name.to_string(), source })
}
