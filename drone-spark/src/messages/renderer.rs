//! Build status message renderer.

use crate::build::{BuildInfo, RepositoryInfo};
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Markdown template of the build status message.
///
/// Block helpers share a line with text so Handlebars keeps every line break
/// exactly where it is written here.
const BUILD_TEMPLATE: &str = concat!(
    "{{#if success}}",
    "##Build for {{repo.full_name}} is Successful \n",
    "**Build author:** [{{build.author}}]({{build.email}}) \n",
    "{{else}}",
    "#Build for {{repo.full_name}} is FAILED!!! \n",
    "**Drone blames build author:** [{{build.author}}]({{build.email}}) \n",
    "{{/if}}",
    "###Build Details \n",
    "* [Build Log]({{build.link}})\n",
    "* [Commit Log]({{build.commit_link}})\n",
    "* **Branch:** {{build.branch}}\n",
    "* **Event:** {{build.event}}\n",
    "* **Commit Message:** {{build.message}}\n",
);

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renderer for build status messages.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the status message for a build.
    ///
    /// Only a status of exactly `"success"` gets the success heading; every
    /// other status is reported as a failure. The commit message is inserted
    /// as-is, so multi-line messages keep their line breaks.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_build_message(
        &self,
        repo: &RepositoryInfo,
        build: &BuildInfo,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "success": build.is_success(),
            "repo": repo,
            "build": build,
        });

        self.render_template(BUILD_TEMPLATE, &data)
    }

    /// Renders a template with the given data.
    fn render_template(
        &self,
        template: &str,
        data: &Value,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
