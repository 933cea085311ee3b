pub(crate) mod config;
pub(crate) mod find;
pub(crate) mod float;
pub(crate) mod hash;
pub(crate) mod name;
pub(crate) mod say;
pub(crate) mod seek;
pub(crate) mod system;
