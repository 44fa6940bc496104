
use crate::RequestContext;

use idm_core::{Role, Tenant, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Handled,
    Unauthorized,
}

/// Request stand-in carrying an already resolved identity
#[derive(Debug, Clone)]
pub(crate) struct TestContext {
    pub(crate) tenant: Tenant,
    pub(crate) user: Option<User>,
}

impl TestContext {
    pub(crate) fn anonymous() -> Self {
        Self {
            tenant: test_tenant(),
            user: None,
        }
    }

    pub(crate) fn as_role(role: Role) -> Self {
        let tenant = test_tenant();
        let mut user = User::new(&tenant, "Jon", "jon@example.com", role);
        user.id = 7;
        Self {
            tenant,
            user: Some(user),
        }
    }
}

impl RequestContext for TestContext {
    type Response = Outcome;

    fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn tenant(&self) -> Option<&Tenant> {
        Some(&self.tenant)
    }

    fn unauthorized(&self) -> Outcome {
        Outcome::Unauthorized
    }
}

pub(crate) fn test_tenant() -> Tenant {
    Tenant::new(1, "Acme", "acme")
}
