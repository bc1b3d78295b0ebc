use std::fmt;

/// The two application services whose source trees the provisioner manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Single-page app served by nginx.
    Frontend,
    /// Node API server with Prisma migrations.
    Backend,
}

impl Service {
    /// All services in synchronization order.
    pub const ALL: [Service; 2] = [Service::Frontend, Service::Backend];

    /// Lowercase key used in configuration sections.
    pub fn label(&self) -> &'static str {
        match self {
            Service::Frontend => "frontend",
            Service::Backend => "backend",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Service::Frontend => "Frontend",
            Service::Backend => "Backend",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
