//! The analysis pipeline. Each build runs these in order over a fresh
//! [`SchemaGraph`]: convert, link, validate, resolve root.

mod converter;
mod linker;
mod root_resolver;
mod schema_graph;
mod validator;

pub(crate) use converter::convert;
pub(crate) use linker::link;
pub(crate) use root_resolver::resolve_root;
pub(crate) use schema_graph::SchemaGraph;
pub(crate) use validator::validate;
