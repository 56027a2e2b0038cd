pub mod io;
pub mod rgb;
pub mod rgb_f32;
pub mod rgba_u8;
pub mod traits;

pub use self::rgb::Rgb;
pub use self::rgb_f32::ImageRgbF32;
pub use self::rgba_u8::ImageRgbaU8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
