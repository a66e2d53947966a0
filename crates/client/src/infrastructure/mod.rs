pub mod bootstrap;
pub mod dom;
