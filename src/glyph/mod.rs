pub(crate) mod bitmap;
pub(crate) mod draw;
pub(crate) mod fonts;
pub(crate) mod initials;
pub(crate) mod layout;
