/// Marker trait for executable builder states.
///
/// Driver code only accepts builders whose state marker implements this,
/// so a query cannot run before its FROM clause has been set.
pub trait ExecutableState {}

/// State of a freshly created builder, before `select`/`insert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuilderInit;
