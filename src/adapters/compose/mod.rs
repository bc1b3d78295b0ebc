mod compose_command;

pub use compose_command::ComposeCommandAdapter;
