use thiserror::Error;

/// Failures raised by an [`Executor`](crate::Executor) handle.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
pub enum Executor {
	/// The handle is bound to no underlying executor.
	#[error("bad executor")]
	Bad,
}

impl Default for Executor {
	fn default() -> Self {
		Self::Bad
	}
}

impl Executor {
	/// Human-readable description, identical to the [`Display`](std::fmt::Display)
	/// output.
	#[must_use]
	pub const fn describe(self) -> &'static str {
		match self {
			Self::Bad => "bad executor",
		}
	}
}
