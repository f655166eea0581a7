//! Actor resolution for the current operation context.
//!
//! The recorder never threads an actor through call sites; it asks a
//! resolver injected at construction time. "No authenticated principal" is
//! `Ok(None)`; a real lookup failure is an error. Both end up as a null
//! actor on the emitted record, the failure is never propagated past the
//! recorder.

use crate::entry::ActorId;
use crate::error::AuditResult;

/// Resolves the principal responsible for the current mutation.
///
/// Implementations must be safe to call from concurrent event contexts;
/// request or thread scoping is the implementation's concern.
#[cfg_attr(test, mockall::automock)]
pub trait ActorResolver: Send + Sync {
    fn current_actor(&self) -> AuditResult<Option<ActorId>>;
}

impl<F> ActorResolver for F
where
    F: Fn() -> AuditResult<Option<ActorId>> + Send + Sync,
{
    fn current_actor(&self) -> AuditResult<Option<ActorId>> {
        self()
    }
}

/// Resolver that always yields the same actor. Useful for job runners and
/// tests where the principal is fixed for the whole scope.
#[derive(Debug, Clone, Copy)]
pub struct StaticActor(pub ActorId);

impl ActorResolver for StaticActor {
    fn current_actor(&self) -> AuditResult<Option<ActorId>> {
        Ok(Some(self.0))
    }
}

/// Resolver for contexts with no principal, e.g. system-initiated writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoActor;

impl ActorResolver for NoActor {
    fn current_actor(&self) -> AuditResult<Option<ActorId>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuditError;

    #[test]
    fn test_static_actor_resolves_fixed_id() {
        assert_eq!(StaticActor(7).current_actor().unwrap(), Some(7));
    }

    #[test]
    fn test_no_actor_resolves_none() {
        assert_eq!(NoActor.current_actor().unwrap(), None);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = || Ok(Some(99));
        assert_eq!(resolver.current_actor().unwrap(), Some(99));
    }

    #[test]
    fn test_closure_resolver_can_fail() {
        let resolver = || Err(AuditError::ActorLookup("no request context".to_string()));
        assert!(resolver.current_actor().is_err());
    }
}
