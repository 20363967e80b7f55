//! Reuses: applications, articles and visualizations built on datasets

mod badge;
mod constants;
mod models;
mod queryset;

pub use badge::ReuseBadge;
pub use constants::{ReuseTopic, ReuseType};
pub use models::Reuse;
pub use queryset::ReuseQuerySet;
