mod artifact_templates;

pub use artifact_templates::ArtifactTemplates;
