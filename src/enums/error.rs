use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("variant {variant} of {enum_name} has no description")]
pub struct MissingDescription {
    pub enum_name: &'static str,
    pub variant: &'static str,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("no variant of {enum_name} matches {text:?}")]
pub struct UnknownVariant {
    pub enum_name: &'static str,
    pub text: String,
}
