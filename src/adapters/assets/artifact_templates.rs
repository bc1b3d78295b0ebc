use include_dir::{Dir, DirEntry, File, include_dir};
use minijinja::{AutoEscape, Environment, Value, context};

use crate::domain::{AppError, Artifact, PROXY_CONFIG_FILE, ProvisionConfig};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Embedded templates for every generated artifact.
pub struct ArtifactTemplates {
    env: Environment<'static>,
}

impl ArtifactTemplates {
    /// Register all embedded templates.
    pub fn load() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        let mut files = Vec::new();
        collect_files(&TEMPLATE_DIR, &mut files);

        for file in files {
            let name = file.path().to_str().ok_or_else(|| {
                AppError::Template(format!("Non UTF-8 template path: {}", file.path().display()))
            })?;
            let source = file
                .contents_utf8()
                .ok_or_else(|| AppError::Template(format!("Template '{}' is not UTF-8", name)))?;
            env.add_template(name, source).map_err(|e| {
                AppError::Template(format!("Failed to register template '{}': {}", name, e))
            })?;
        }

        Ok(Self { env })
    }

    /// Render the content of one artifact for the given configuration.
    pub fn render(&self, artifact: Artifact, config: &ProvisionConfig) -> Result<String, AppError> {
        let ctx = match artifact {
            Artifact::FrontendDescriptor => context! {
                dist_dir => config.frontend.dist_dir.trim_matches('/'),
                proxy_config_file => PROXY_CONFIG_FILE,
            },
            Artifact::ProxyConfig => context! {
                api_upstream => config.proxy.api_upstream,
            },
            Artifact::BackendDescriptor => context! {
                workdir => config.startup.workdir,
                launch_exec => exec_form(&config.startup.launch_command),
            },
            Artifact::StartupScript => context! {
                delay_secs => config.startup.delay_secs,
                migrate_command => config.startup.migrate_command,
                launch_command => config.startup.launch_command,
            },
        };

        self.render_by_name(artifact.template_name(), &ctx)
    }

    fn render_by_name(&self, template_name: &str, ctx: &Value) -> Result<String, AppError> {
        let template = self.env.get_template(template_name).map_err(|e| {
            AppError::Template(format!("Failed to load template '{}': {}", template_name, e))
        })?;

        template.render(ctx).map_err(|e| {
            AppError::Template(format!("Failed to render template '{}': {}", template_name, e))
        })
    }
}

fn collect_files(dir: &'static Dir<'static>, out: &mut Vec<&'static File<'static>>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_files(subdir, out),
            DirEntry::File(file) => out.push(file),
        }
    }
}

/// Render a shell command as a Dockerfile exec-form array.
fn exec_form(command: &str) -> String {
    let parts: Vec<String> = command
        .split_whitespace()
        .map(|part| format!("\"{}\"", part.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect();
    format!("[{}]", parts.join(", "))
}
