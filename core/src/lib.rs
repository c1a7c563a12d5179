pub mod config;
pub mod cursor;
pub mod filter;
pub mod inertia;
pub mod lightbox;
pub mod mutation;
pub mod reveal;
pub mod scroll_sync;
pub mod sidebar;
pub mod vimeo;

pub use config::{ConfigError, PageConfig};
pub use cursor::CursorFollower;
pub use filter::{active_category, filter_portfolio, FilterControl, PortfolioItemSnapshot};
pub use inertia::{scrolls_vertically, InertiaScroll, WheelContext};
pub use lightbox::{build_slides, render_slides, LightboxSource, Slide};
pub use mutation::{Display, DomMutation, Target};
pub use reveal::{RevealLatch, RevealOutcome, RevealState};
pub use scroll_sync::{
    back_to_top_visible, current_section, ScrollSnapshot, ScrollStateSynchronizer,
    SectionGeometry,
};
pub use vimeo::{embed_url_for, VimeoId, VimeoIdError};
