pub(crate) mod composite;
pub(crate) mod filter;
pub(crate) mod gradient;
pub(crate) mod mask;
pub(crate) mod raster;
pub(crate) mod texture;
