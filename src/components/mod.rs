//! UI Components
//!
//! Reusable Leptos components.

mod banner;
mod chip_selector;
mod confirm_button;
mod file_drop_zone;
mod page_header;
mod pending_warning;
mod sidebar;
mod stat_card;
mod tab_bar;
mod top_bar;

pub use banner::{Banner, BannerKind};
pub use chip_selector::ChipSelector;
pub use confirm_button::ConfirmButton;
pub use file_drop_zone::FileDropZone;
pub use page_header::PageHeader;
pub use pending_warning::PendingWarning;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use tab_bar::TabBar;
pub use top_bar::TopBar;
