//! Role-gated access control for localized routes.
//!
//! This crate owns the decision half of route protection: which viewer may
//! see which subtree, and where a denied viewer is sent. It is shared by the
//! `client` layouts and the `server` locale middleware and has no knowledge
//! of the rendering framework.

pub mod claims;
pub mod guard;
pub mod locale;
pub mod navigation;
pub mod source;

pub use claims::{Claims, Roles};
pub use guard::{Access, Guard, GuardError, GuardState, RolePredicate, authorize, authorize_chain, authorize_session};
pub use locale::{Locale, localized_href};
pub use navigation::{NavigationEpoch, NavigationTicket, Redirect};
pub use source::{RoleSource, SessionError};
