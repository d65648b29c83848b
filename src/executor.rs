use std::{
	any::{self, Any, TypeId},
	fmt::Debug,
	mem,
	sync::Arc,
};

use crate::{error, Blocking, Execute, Work};

/// Object-safe view of an [`Execute`] target.
trait Erased: Debug + Send + Sync {
	fn dispatch(&self, work: Work);

	fn query_blocking(&self) -> Blocking;

	fn as_any(&self) -> &dyn Any;

	fn target_type(&self) -> TypeId;

	fn type_name(&self) -> &'static str;

	fn equals(&self, other: &dyn Erased) -> bool;
}

impl<E: Execute> Erased for E {
	fn dispatch(&self, work: Work) {
		Execute::execute(self, work);
	}

	fn query_blocking(&self) -> Blocking {
		Execute::blocking(self)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn target_type(&self) -> TypeId {
		TypeId::of::<E>()
	}

	fn type_name(&self) -> &'static str {
		any::type_name::<E>()
	}

	fn equals(&self, other: &dyn Erased) -> bool {
		other
			.as_any()
			.downcast_ref::<E>()
			.map_or(false, |other| self == other)
	}
}

/// Polymorphic handle to some [`Execute`] target, or to nothing.
///
/// Clones share the same target. Every operation that needs a target fails
/// with [`error::Executor::Bad`] on an empty handle.
#[derive(Clone, Debug, Default)]
pub struct Executor {
	target: Option<Arc<dyn Erased>>,
}

impl Executor {
	/// A handle bound to no executor.
	#[must_use]
	pub const fn empty() -> Self {
		Self { target: None }
	}

	pub fn new<E: Execute>(target: E) -> Self {
		Self {
			target: Some(Arc::new(target)),
		}
	}

	#[must_use]
	pub const fn is_valid(&self) -> bool {
		self.target.is_some()
	}

	/// Submits `fun` to the wrapped target.
	///
	/// # Errors
	/// [`error::Executor::Bad`] if the handle is empty; `fun` is dropped
	/// without running.
	pub fn execute<F>(&self, fun: F) -> Result<(), error::Executor>
	where
		F: FnOnce() + Send + 'static,
	{
		let target = self.get("execute")?;
		tracing::trace!(executor = target.type_name(), "forwarding work");
		target.dispatch(Work::new(fun));

		Ok(())
	}

	/// The blocking behavior of the wrapped target.
	///
	/// # Errors
	/// [`error::Executor::Bad`] if the handle is empty.
	pub fn blocking(&self) -> Result<Blocking, error::Executor> {
		Ok(self.get("blocking")?.query_blocking())
	}

	#[must_use]
	pub fn target_type(&self) -> Option<TypeId> {
		self.target.as_deref().map(Erased::target_type)
	}

	#[must_use]
	pub fn target_type_name(&self) -> Option<&'static str> {
		self.target.as_deref().map(Erased::type_name)
	}

	/// The wrapped target, if it is an `E`.
	#[must_use]
	pub fn target<E: Execute>(&self) -> Option<&E> {
		self.target
			.as_deref()
			.and_then(|target| target.as_any().downcast_ref())
	}

	/// Moves the target out into a new handle, leaving `self` empty.
	#[must_use]
	pub fn take(&mut self) -> Self {
		mem::take(self)
	}

	fn get(&self, operation: &'static str) -> Result<&dyn Erased, error::Executor> {
		self.target.as_deref().ok_or_else(|| {
			tracing::debug!(operation, "executor handle is empty");
			error::Executor::Bad
		})
	}
}

impl<E: Execute> From<E> for Executor {
	fn from(target: E) -> Self {
		Self::new(target)
	}
}

impl PartialEq for Executor {
	fn eq(&self, other: &Self) -> bool {
		match (self.target.as_deref(), other.target.as_deref()) {
			(None, None) => true,
			(Some(this), Some(other)) => this.equals(other),
			_ => false,
		}
	}
}

impl Eq for Executor {}

#[cfg(test)]
mod test {
	use std::sync::{
		atomic::{AtomicUsize, Ordering},
		Arc,
	};

	use super::Executor;
	use crate::{error, Blocking, Execute, Work};

	#[derive(Debug, Eq, PartialEq)]
	struct Inline(u8);

	impl Execute for Inline {
		fn execute(&self, work: Work) {
			work.run();
		}

		fn blocking(&self) -> Blocking {
			Blocking::Always
		}
	}

	#[derive(Debug, Eq, PartialEq)]
	struct Discard;

	impl Execute for Discard {
		fn execute(&self, work: Work) {
			drop(work);
		}
	}

	#[test]
	fn empty() {
		let executor = Executor::empty();

		assert!(!executor.is_valid());
		assert_eq!(executor.blocking(), Err(error::Executor::Bad));
		assert_eq!(executor.target_type(), None);
		assert_eq!(executor.target_type_name(), None);
		assert!(executor.target::<Inline>().is_none());
		assert_eq!(executor, Executor::default());
	}

	#[test]
	fn execute_empty() {
		let counter = Arc::new(AtomicUsize::new(0));
		let result = {
			let counter = Arc::clone(&counter);
			Executor::empty().execute(move || {
				counter.fetch_add(1, Ordering::SeqCst);
			})
		};

		assert_eq!(result, Err(error::Executor::Bad));
		assert_eq!(result.unwrap_err().to_string(), "bad executor");
		assert_eq!(counter.load(Ordering::SeqCst), 0);
		assert_eq!(Arc::strong_count(&counter), 1);
	}

	#[test]
	fn execute_inline() -> Result<(), error::Executor> {
		let executor = Executor::new(Inline(0));
		let counter = Arc::new(AtomicUsize::new(0));

		{
			let counter = Arc::clone(&counter);
			executor.execute(move || {
				counter.fetch_add(1, Ordering::SeqCst);
			})?;
		}

		assert_eq!(counter.load(Ordering::SeqCst), 1);
		assert_eq!(executor.blocking()?, Blocking::Always);

		Ok(())
	}

	#[test]
	fn default_blocking() {
		assert_eq!(Executor::new(Discard).blocking(), Ok(Blocking::Possibly));
	}

	#[test]
	fn equality() {
		assert_eq!(Executor::new(Inline(1)), Executor::new(Inline(1)));
		assert_ne!(Executor::new(Inline(1)), Executor::new(Inline(2)));
		assert_ne!(Executor::new(Inline(1)), Executor::new(Discard));
		assert_ne!(Executor::new(Discard), Executor::empty());
		assert_ne!(Executor::empty(), Executor::new(Discard));

		let executor = Executor::from(Inline(3));
		assert_eq!(executor.clone(), executor);
	}

	#[test]
	fn target() {
		let executor = Executor::new(Inline(7));

		assert!(executor.is_valid());
		assert_eq!(executor.target::<Inline>(), Some(&Inline(7)));
		assert!(executor.target::<Discard>().is_none());
		assert_eq!(
			executor.target_type(),
			Some(std::any::TypeId::of::<Inline>())
		);
		assert!(executor
			.target_type_name()
			.map_or(false, |name| name.ends_with("Inline")));
	}

	#[test]
	fn take() {
		let mut executor = Executor::new(Inline(0));
		let taken = executor.take();

		assert!(!executor.is_valid());
		assert!(taken.is_valid());
		assert_eq!(executor.execute(|| ()), Err(error::Executor::Bad));
		assert_eq!(taken.execute(|| ()), Ok(()));
	}
}
