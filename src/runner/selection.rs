//! Resolving realm, centricity and group-by for columns mode
//!
//! Each value comes from the command line, then the settings file, then the
//! built-in default. Realm and group-by are checked against what the
//! appliance reports.

use crate::cli::Invocation;
use crate::config::{default_centricity, Settings};
use crate::error::{Result, SelectionError};
use crate::netprofiler::{Centricity, GroupBy, Realm, ReportingApi};
use tracing::debug;

/// A fully resolved columns query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub realm: String,
    pub centricity: Centricity,
    pub groupby: GroupBy,
}

/// Resolve and validate the selection for an invocation
pub fn resolve_selection(
    api: &dyn ReportingApi,
    invocation: &Invocation,
    settings: &Settings,
) -> Result<Selection> {
    let realm_name = invocation
        .realm
        .as_deref()
        .unwrap_or_else(|| settings.realm());
    let realms = api.realms()?;
    let realm = find_realm(&realms, realm_name).ok_or_else(|| {
        let mut available: Vec<&str> = realms.iter().map(|r| r.id.as_str()).collect();
        available.sort_unstable();
        SelectionError::UnknownRealm {
            name: realm_name.to_string(),
            available: available.join(", "),
        }
    })?;

    let centricity = match invocation.centricity {
        Some(c) => c,
        None => default_centricity(settings)?,
    };

    let groupby_name = invocation
        .groupby
        .as_deref()
        .unwrap_or_else(|| settings.groupby());
    let group_bys = api.group_bys()?;
    let groupby = find_group_by(&group_bys, groupby_name).ok_or_else(|| {
        let mut available: Vec<&str> = group_bys.iter().map(|g| g.name.as_str()).collect();
        available.sort_unstable();
        SelectionError::UnknownGroupBy {
            name: groupby_name.to_string(),
            available: available.join(", "),
        }
    })?;

    debug!(
        "Selection: realm={} centricity={} groupby={}",
        realm.id, centricity, groupby.id
    );

    Ok(Selection {
        realm: realm.id.clone(),
        centricity,
        groupby: groupby.clone(),
    })
}

/// Match a realm by id, ignoring case and surrounding whitespace
pub fn find_realm<'a>(realms: &'a [Realm], name: &str) -> Option<&'a Realm> {
    let name = name.trim();
    realms
        .iter()
        .find(|r| r.id == name)
        .or_else(|| realms.iter().find(|r| r.id.eq_ignore_ascii_case(name)))
}

/// Match a group-by by id (`hos`) or name (`host`)
pub fn find_group_by<'a>(group_bys: &'a [GroupBy], name: &str) -> Option<&'a GroupBy> {
    let name = name.trim();
    group_bys
        .iter()
        .find(|g| g.id == name)
        .or_else(|| group_bys.iter().find(|g| g.name.eq_ignore_ascii_case(name)))
}
