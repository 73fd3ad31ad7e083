//! Conversion pipeline
//!
//! Pure, synchronous transformation from the editor's document model to the
//! canonical schema, leaves first:
//! - widget type mapping (`widget_type`)
//! - style normalization (`style`)
//! - widget and page conversion (`component`, `page`)
//! - navigation and theme synthesis (`navigation`, `theme`)
//! - app assembly and content hashing (`assembler`)
//!
//! Nothing in this tier fails: malformed or missing optional input is
//! treated as absent and omitted from the output.

pub mod assembler;
pub mod component;
pub mod navigation;
pub mod page;
pub mod style;
pub mod theme;
pub mod widget_type;

pub use assembler::{assemble_app, content_hash};
pub use component::convert_widget;
pub use navigation::{build_navigation, MAX_BOTTOM_TABS};
pub use page::convert_page;
pub use style::normalize_style;
pub use theme::{build_theme, default_theme};
pub use widget_type::map_widget_type;
