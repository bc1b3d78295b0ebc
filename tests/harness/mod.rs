#![allow(dead_code)]

pub(crate) mod git_repository;
pub(crate) mod test_context;

pub(crate) use test_context::{FakeCompose, TestContext};
