pub(crate) mod batch;
pub(crate) mod catalog;
pub(crate) mod profile;
pub(crate) mod spec;
pub(crate) mod synth;
