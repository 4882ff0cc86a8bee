pub mod candles;
pub mod confetti;
pub mod constants;
pub mod error;
pub mod painter;
pub mod shower;
pub mod starfield;
pub mod surface;
pub mod text;
pub mod timeline;
pub mod ui_state;

pub use candles::*;
pub use confetti::*;
pub use constants::*;
pub use error::*;
pub use painter::*;
pub use shower::*;
pub use starfield::*;
pub use surface::*;
pub use text::*;
pub use timeline::*;
pub use ui_state::*;
