use std::fmt::Debug;

use crate::Work;

/// Whether a call to [`Execute::execute`] may block the caller until the
/// submitted [`Work`] has finished.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Blocking {
	/// The target makes no promise either way.
	Possibly,
	/// The work always finishes before `execute` returns.
	Always,
	/// `execute` never waits for the work.
	Never,
}

impl Default for Blocking {
	fn default() -> Self {
		Self::Possibly
	}
}

/// A concrete executor that can be wrapped in an [`Executor`](crate::Executor)
/// handle.
///
/// Two handles compare equal when they wrap targets of the same type that
/// compare equal, so `Eq` should identify the underlying execution resource,
/// not the handle.
pub trait Execute: Debug + Eq + Send + Sync + 'static {
	/// Hands `work` over. When and where it runs is up to the implementor.
	fn execute(&self, work: Work);

	fn blocking(&self) -> Blocking {
		Blocking::Possibly
	}
}
