// directory paths
macro_rules! shader_path {
    ($file:literal) => {
        concat!(
            concat!(env!("CARGO_MANIFEST_DIR"), "/assets/shaders/"),
            $file
        )
    };
}

macro_rules! map_path {
    ($file:literal) => {
        concat!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/maps/"), $file)
    };
}

// shader files
pub(crate) const QUAD_VERT: &str = include_str!(shader_path!("quad.vert"));
pub(crate) const QUAD_FRAG: &str = include_str!(shader_path!("quad.frag"));

// map data
pub const ARCHIPELAGO_MAP: &str = include_str!(map_path!("archipelago.yaml"));
