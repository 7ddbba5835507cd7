use ipgroups_api::AppState;
use ipgroups_application::ports::IpResolver;
use ipgroups_application::use_cases::{ListGroupsUseCase, ResolveGroupUseCase};
use ipgroups_domain::{Config, GroupSet};
use ipgroups_infrastructure::dns::{ResolutionCache, SystemIpResolver};
use std::sync::Arc;
use std::time::Duration;

/// Dependency wiring - builds the service graph from configuration.
pub struct Services {
    pub groups: Arc<GroupSet>,
    pub cache: Arc<ResolutionCache>,
    pub resolve_group: Arc<ResolveGroupUseCase>,
    pub list_groups: Arc<ListGroupsUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let groups = Arc::new(config.groups.clone());

        let resolver: Arc<dyn IpResolver> = Arc::new(SystemIpResolver::new(
            Duration::from_millis(config.resolver.timeout_ms),
        ));

        let cache = Arc::new(ResolutionCache::new(
            Arc::clone(&resolver),
            Duration::from_secs(config.cache.ttl_secs),
        ));

        let resolve_group = Arc::new(ResolveGroupUseCase::new(resolver));
        let list_groups = Arc::new(ListGroupsUseCase::new(Arc::clone(&groups)));

        Self {
            groups,
            cache,
            resolve_group,
            list_groups,
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            groups: Arc::clone(&self.groups),
            cache: Arc::clone(&self.cache),
            resolve_group: Arc::clone(&self.resolve_group),
            list_groups: Arc::clone(&self.list_groups),
        }
    }
}
