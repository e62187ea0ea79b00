//! Terminal presentation adapter: a framebuffer the pure view draws into,
//! plus a crossterm flusher. No simulation logic lives here.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
