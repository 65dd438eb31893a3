//! Domain layer: Core types and pure logic.
//!
//! Nothing here performs I/O. Session state, dataset shapes, theme tokens and
//! the keyword responder are all plain values.

pub mod content;
mod disease;
mod notice;
mod responder;
mod session;
mod theme;

pub use disease::{DataView, Disease, DiseaseDataset, FetchOutcome, MapPoint, TrendPoint};
pub use notice::{Notice, NoticeLevel};
pub use responder::{Responder, ResponseMatcher, FALLBACK_REPLY, RULES};
pub use session::{Action, Page, Session, Theme, Transition};
pub use theme::{ChartStyle, Rgb, ThemeTokens};
