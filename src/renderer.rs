use crate::error::Result;
use minijinja::{AutoEscape, Environment};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Name reported in render errors, usually the target file
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String>;

    /// Executes a template expression and returns whether it evaluates to true.
    /// An empty expression is always true.
    fn execute_expression(&self, expr: &str, context: &serde_json::Value)
        -> Result<bool>;
}

/// MiniJinja-based template rendering engine.
///
/// Block tags swallow their own line, so a conditional block in a scaffold
/// template leaves no blank line behind when it is switched off. Output is
/// never escaped: templates are named after their target files and `.js`
/// would otherwise select JSON escaping.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String> {
        log::trace!("Rendering template '{name}'");
        Ok(self.env.render_named_str(name, template, context)?)
    }

    fn execute_expression(
        &self,
        expr_str: &str,
        context: &serde_json::Value,
    ) -> Result<bool> {
        if expr_str.is_empty() {
            return Ok(true);
        }
        let expr = self.env.compile_expression(expr_str)?;
        Ok(expr.eval(context)?.is_true())
    }
}
