//! Viewport scrolling and frame assembly.
//!
//! A frame is one contiguous byte buffer:
//!
//! 1. hide cursor, home
//! 2. one row per text-area line (document slice, `~` filler or welcome banner),
//!    each terminated by clear-to-end-of-line and `\r\n`
//! 3. inverse-video status bar
//! 4. message bar (suppressed once the status message expires)
//! 5. cursor placement, show cursor
//!
//! Color escapes are emitted only on highlight class transitions within a row
//! (see [`style::ColorRun`]). The frame is handed to the terminal in a single
//! write by [`writer::write_frame`].

pub mod render_engine;
pub mod status;
pub mod style;
pub mod viewport;
pub mod writer;

pub use render_engine::RenderEngine;
pub use viewport::scroll;
