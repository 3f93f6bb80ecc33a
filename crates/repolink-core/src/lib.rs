pub mod config;
pub mod logging;

pub mod reference;
pub mod source;

pub use reference::{
    parse, parse_custom, parse_repository, CustomDescriptor, Parsed, ProviderType,
    RepositoryDescriptor, Template,
};
