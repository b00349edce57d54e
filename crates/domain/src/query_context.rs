/// Constraints of the query being answered.
///
/// The only constraint the resolver table reacts to is the namespace one: when
/// present the rows must be collected inside the namespaces of that process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    pub pid_with_namespace: Option<u32>,
}

impl QueryContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_namespace_of(pid: u32) -> Self {
        Self {
            pid_with_namespace: Some(pid),
        }
    }

    pub fn has_namespace_constraint(&self) -> bool {
        matches!(self.pid_with_namespace, Some(pid) if pid != 0)
    }
}
