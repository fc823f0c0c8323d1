mod shapes;
mod surface;

pub use self::shapes::feature_shape;
pub use self::surface::FloorplanSurface;
