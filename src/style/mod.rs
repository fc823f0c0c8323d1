mod cache;
mod compositor;
mod loader;
mod rendered;

pub use self::cache::{StyleCache, StyleKey};
pub use self::compositor::{composite_avatar, AvatarCompositor};
pub use self::loader::{FsImageLoader, ImageLoader};
pub use self::rendered::RenderedStyle;
