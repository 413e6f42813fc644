/// An immutable, named unit of migration SQL targeting one schema namespace.
///
/// Fragments are compiled in; nothing registers or mutates them at runtime.
/// A body may hold several statements and runs through the simple query
/// protocol. Unqualified object names in the body resolve into `schema`.
#[derive(Debug, Clone, Copy)]
pub struct SchemaFragment {
    /// Short identifier used in logs and error messages.
    pub name: &'static str,
    /// The namespace unqualified names in `sql` resolve into.
    pub schema: &'static str,
    pub sql: &'static str,
}

impl SchemaFragment {
    pub const fn new(name: &'static str, schema: &'static str, sql: &'static str) -> Self {
        Self { name, schema, sql }
    }
}
