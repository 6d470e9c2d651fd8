pub mod convert;
pub mod outputs;
pub mod ratio;

pub use convert::{parse_px, px_to_dp, Converter, InputError};
pub use outputs::{Outputs, MAX_BOX_WIDTH_PX};
pub use ratio::PixelRatio;
