#[cfg(all(loom, shuttle))]
compile_error!("cannot use loom and shuttle at once");

#[cfg(not(any(loom, shuttle)))]
pub(crate) mod sync {
  pub(crate) use ::std::sync::Mutex;
  pub(crate) use ::std::sync::MutexGuard;
}

#[cfg(loom)]
pub(crate) mod sync {
  pub(crate) use ::loom::sync::Mutex;
  pub(crate) use ::loom::sync::MutexGuard;
}

#[cfg(shuttle)]
pub(crate) mod sync {
  pub(crate) use ::shuttle::sync::Mutex;
  pub(crate) use ::shuttle::sync::MutexGuard;
}
