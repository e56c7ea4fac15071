//! Ownership guard applied before every resource read or mutation.
//!
//! Authorization in this system is a single rule: only the transitive owning
//! user may see or touch a resource. The rule is stated once here instead of
//! being re-implemented inside every service operation. For expenses the
//! owner resolves through the parent trip before this check runs.

use crate::domain::error::Error;
use crate::domain::user::UserId;

/// Capability trait for resources with a single owning user.
pub trait Owned {
    /// The user transitively responsible for this resource.
    fn owner_id(&self) -> UserId;
}

/// Allow the operation only when `caller` owns `resource`.
///
/// On deny the calling operation must abort without performing any mutation;
/// the returned error maps to HTTP 403 at the boundary.
pub fn ensure_owner<R: Owned>(resource: &R, caller: UserId) -> Result<(), Error> {
    if resource.owner_id() == caller {
        Ok(())
    } else {
        Err(Error::forbidden(
            "you don't have permission to access this resource",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    struct Resource {
        owner: UserId,
    }

    impl Owned for Resource {
        fn owner_id(&self) -> UserId {
            self.owner
        }
    }

    #[test]
    fn owner_is_allowed() {
        let owner = UserId::random();
        let resource = Resource { owner };
        assert!(ensure_owner(&resource, owner).is_ok());
    }

    #[test]
    fn any_other_caller_is_forbidden() {
        let resource = Resource {
            owner: UserId::random(),
        };
        let error = ensure_owner(&resource, UserId::random()).expect_err("must deny");
        assert_eq!(error.code(), ErrorCode::Forbidden);
    }
}
