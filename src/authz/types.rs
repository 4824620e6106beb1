use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::NavError;

/// Segment value that matches any literal in the same position.
pub const WILDCARD: &str = "*";

/// A permission of the form "application:resource:operation", e.g. "rbac:groups:write".
/// Any segment may be the wildcard `*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermissionString {
    pub application: String,
    pub resource: String,
    pub operation: String,
}

impl PermissionString {
    pub fn parse(s: &str) -> Result<Self, NavError> {
        let mut parts = s.split(':');
        let (Some(application), Some(resource), Some(operation), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(NavError::InvalidPermission(s.to_string()));
        };
        if application.is_empty() || resource.is_empty() || operation.is_empty() {
            return Err(NavError::InvalidPermission(s.to_string()));
        }
        Ok(Self {
            application: application.to_string(),
            resource: resource.to_string(),
            operation: operation.to_string(),
        })
    }

    pub fn segments(&self) -> [&str; 3] {
        [&self.application, &self.resource, &self.operation]
    }

    /// True when this permission, read as a grant, covers `required`.
    pub fn grants(&self, required: &PermissionString) -> bool {
        self.segments()
            .iter()
            .zip(required.segments())
            .all(|(granted, needed)| *granted == WILDCARD || *granted == needed)
    }
}

impl FromStr for PermissionString {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PermissionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.application, self.resource, self.operation)
    }
}

/// Authorization context of the acting user, supplied once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Org admins pass every permission check on declared routes.
    #[serde(default)]
    pub is_org_admin: bool,
    /// Raw grant strings; parsed when evaluated so one bad grant can't poison the rest
    #[serde(default)]
    pub grants: Vec<String>,
}

impl Principal {
    pub fn new<I, S>(grants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_org_admin: false,
            grants: grants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn org_admin() -> Self {
        Self {
            is_org_admin: true,
            grants: Vec::new(),
        }
    }
}
