pub mod assets;
pub mod compose;
pub mod filesystem;
pub mod git;
