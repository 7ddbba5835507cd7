use ipgroups_domain::GroupSet;
use std::sync::Arc;

pub struct ListGroupsUseCase {
    groups: Arc<GroupSet>,
}

impl ListGroupsUseCase {
    pub fn new(groups: Arc<GroupSet>) -> Self {
        Self { groups }
    }

    /// Group names in lexicographic order.
    pub fn execute(&self) -> Vec<String> {
        self.groups.names()
    }
}
