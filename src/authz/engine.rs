use crate::authz::types::PermissionString;

/// Check whether any of `grants` covers `required`.
///
/// Fails closed: a malformed `required` denies, and a malformed grant is
/// logged and skipped while the remaining grants are still evaluated.
pub fn satisfies<S: AsRef<str>>(required: &str, grants: &[S]) -> bool {
    match PermissionString::parse(required) {
        Ok(required) => satisfies_parsed(&required, grants),
        Err(_) => {
            tracing::warn!(permission = required, "malformed required permission, denying");
            false
        }
    }
}

/// Same as [`satisfies`] for an already-parsed requirement.
pub fn satisfies_parsed<S: AsRef<str>>(required: &PermissionString, grants: &[S]) -> bool {
    grants.iter().any(|grant| {
        let grant = grant.as_ref();
        match PermissionString::parse(grant) {
            Ok(parsed) => parsed.grants(required),
            Err(_) => {
                tracing::warn!(grant, "ignoring malformed permission grant");
                false
            }
        }
    })
}

/// True when at least one of `required` is satisfied. An empty list is never satisfied.
pub fn satisfies_any<R: AsRef<str>, S: AsRef<str>>(required: &[R], grants: &[S]) -> bool {
    required.iter().any(|r| satisfies(r.as_ref(), grants))
}

/// True when every entry of `required` is satisfied. An empty list is vacuously satisfied.
pub fn satisfies_all<R: AsRef<str>, S: AsRef<str>>(required: &[R], grants: &[S]) -> bool {
    required.iter().all(|r| satisfies(r.as_ref(), grants))
}
