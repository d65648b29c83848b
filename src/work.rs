use std::fmt::{self, Debug, Formatter};

/// A unit of work handed to an [`Execute`](crate::Execute) target. Runs at
/// most once.
#[must_use = "`Work` does nothing unless it is run"]
pub struct Work(Box<dyn FnOnce() + Send>);

impl Debug for Work {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Work").finish_non_exhaustive()
	}
}

impl Work {
	pub fn new<F>(fun: F) -> Self
	where
		F: FnOnce() + Send + 'static,
	{
		Self(Box::new(fun))
	}

	/// Runs the work on the current thread, consuming it.
	pub fn run(self) {
		(self.0)();
	}
}
