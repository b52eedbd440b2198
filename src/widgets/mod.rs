//! Reusable screen furniture.
//!
//! - [`chrome`]: banner/body/footer background most screens start from
//! - [`popups`]: blocking yes/no prompt and the info overlay
//!
//! Everything here draws through [`Canvas`](crate::Canvas) or
//! [`Frame`](crate::Frame), so it shares the per-frame text buffer and
//! object budget with the calling screen.

mod chrome;
mod popups;

pub use chrome::draw_standard_chrome;
pub use popups::{draw_info_overlay, prompt_yes_no};
