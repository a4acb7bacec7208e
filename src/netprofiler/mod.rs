//! NetProfiler reporting API
//!
//! This module holds the wire model and a blocking client for the parts of
//! the reporting API that describe what can go into a report.

pub mod client;
pub mod model;

pub use client::*;
pub use model::*;

use crate::error::ApiResult;

/// Read-only access to the appliance's report catalog
pub trait ReportingApi {
    /// Columns available for a realm, centricity and group-by (by id)
    fn columns(&self, realm: &str, centricity: Centricity, groupby: &str) -> ApiResult<Vec<Column>>;

    fn group_bys(&self) -> ApiResult<Vec<GroupBy>>;

    fn realms(&self) -> ApiResult<Vec<Realm>>;

    fn centricities(&self) -> ApiResult<Vec<CentricityInfo>>;
}
