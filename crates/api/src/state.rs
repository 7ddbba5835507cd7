use ipgroups_application::use_cases::{ListGroupsUseCase, ResolveGroupUseCase};
use ipgroups_domain::GroupSet;
use ipgroups_infrastructure::dns::ResolutionCache;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub groups: Arc<GroupSet>,
    pub cache: Arc<ResolutionCache>,
    pub resolve_group: Arc<ResolveGroupUseCase>,
    pub list_groups: Arc<ListGroupsUseCase>,
}
