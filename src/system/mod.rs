pub(crate) mod hostname;
pub(crate) mod logger;
