//=========================================================================
// Hot Reload
//=========================================================================
//
// Runtime replacement of a system's backing implementation without
// restarting the process or losing registry state.
//
// Architecture:
//   ReloadStamp      — shared monotonically increasing version cell,
//                      bumped by whoever reloads the implementation
//   VersionedHandle  — {version, instance}; pure, unit-testable swap
//                      decision with no live reload machinery
//   HotReloadGuard   — wraps a handle with a stamp and once-per-version
//                      failure reporting
//
// The wrapping system keeps its own counters (interval triggers, edge
// state) outside the swapped instance, so a swap never disturbs frame
// bookkeeping owned by the dispatcher side.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::{info, warn};

//=== ReloadStamp =========================================================

/// Shared version stamp for one reloadable implementation.
///
/// The reload notifier holds one clone and bumps it after every reload;
/// guards hold another and compare against their last observed version.
/// Versions only ever increase, standing in for the load timestamp the
/// implementation would otherwise expose.
#[derive(Debug, Clone)]
pub struct ReloadStamp(Rc<Cell<u64>>);

impl ReloadStamp {
    /// Creates a stamp at version 1 (the initial load).
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(1)))
    }

    /// The current implementation version.
    pub fn current(&self) -> u64 {
        self.0.get()
    }

    /// Marks a new load and returns the new version.
    pub fn bump(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }
}

impl Default for ReloadStamp {
    fn default() -> Self {
        Self::new()
    }
}

//=== VersionedHandle =====================================================

/// An implementation instance tagged with the version it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedHandle<T> {
    version: u64,
    instance: T,
}

impl<T> VersionedHandle<T> {
    /// Wraps an instance constructed from the given version.
    pub fn new(version: u64, instance: T) -> Self {
        Self { version, instance }
    }

    /// The version the current instance was built from.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Shared access to the live instance.
    pub fn instance(&self) -> &T {
        &self.instance
    }

    /// Exclusive access to the live instance.
    pub fn instance_mut(&mut self) -> &mut T {
        &mut self.instance
    }

    /// Swaps in a freshly constructed instance when `live_version` is
    /// newer than the handle's.
    ///
    /// Returns `Ok(true)` after a swap, `Ok(false)` when the handle is
    /// already up to date. When construction fails the previous instance
    /// keeps serving and the handle is left untouched.
    pub fn maybe_reload<E>(
        &mut self,
        live_version: u64,
        construct: impl FnOnce() -> Result<T, E>,
    ) -> Result<bool, E> {
        if live_version <= self.version {
            return Ok(false);
        }

        let instance = construct()?;
        self.instance = instance;
        self.version = live_version;
        Ok(true)
    }
}

//=== HotReloadGuard ======================================================

/// Stamp-watching wrapper around a [`VersionedHandle`].
///
/// Call [`refresh`](Self::refresh) before delegating each update: the
/// guard swaps in a new instance when the stamp moved, mid-pass, without
/// pausing dispatch. A failed construction keeps the previous instance
/// serving and is logged once per offending version rather than every
/// frame.
pub struct HotReloadGuard<T> {
    stamp: ReloadStamp,
    handle: VersionedHandle<T>,
    failed_version: Option<u64>,
}

impl<T> HotReloadGuard<T> {
    /// Wraps the initial instance, observed at the stamp's current
    /// version.
    pub fn new(stamp: ReloadStamp, instance: T) -> Self {
        let version = stamp.current();
        Self {
            stamp,
            handle: VersionedHandle::new(version, instance),
            failed_version: None,
        }
    }

    /// The version of the instance currently serving.
    pub fn version(&self) -> u64 {
        self.handle.version()
    }

    /// The implementation version the stamp reports right now.
    pub fn live_version(&self) -> u64 {
        self.stamp.current()
    }

    /// Returns the live instance, swapping first when the stamp moved.
    ///
    /// `construct` receives the version being loaded. After a failed
    /// construction the guard serves the previous instance and skips
    /// further attempts until the stamp moves again.
    pub fn refresh<E: fmt::Display>(
        &mut self,
        construct: impl FnOnce(u64) -> Result<T, E>,
    ) -> &mut T {
        let live = self.stamp.current();

        if self.failed_version != Some(live) {
            match self.handle.maybe_reload(live, || construct(live)) {
                Ok(true) => {
                    info!("Hot reload: swapped in implementation version {}", live);
                    self.failed_version = None;
                }
                Ok(false) => {}
                Err(err) => {
                    warn!(
                        "Hot reload: failed to construct version {}, keeping version {}: {}",
                        live,
                        self.handle.version(),
                        err
                    );
                    self.failed_version = Some(live);
                }
            }
        }

        self.handle.instance_mut()
    }

    /// Shared access to the instance currently serving, without a swap
    /// check.
    pub fn instance(&self) -> &T {
        self.handle.instance()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Debug, PartialEq)]
    struct Impl {
        generation: u64,
        counter: u32,
    }

    impl Impl {
        fn new(generation: u64) -> Self {
            Self {
                generation,
                counter: 0,
            }
        }
    }

    //--- VersionedHandle --------------------------------------------------

    #[test]
    fn reload_skipped_when_version_unchanged() {
        let mut handle = VersionedHandle::new(1, Impl::new(1));
        handle.instance_mut().counter = 7;

        let swapped = handle
            .maybe_reload(1, || Ok::<_, Infallible>(Impl::new(1)))
            .unwrap();

        assert!(!swapped);
        assert_eq!(handle.instance().counter, 7);
    }

    #[test]
    fn reload_swaps_on_newer_version() {
        let mut handle = VersionedHandle::new(1, Impl::new(1));
        handle.instance_mut().counter = 7;

        let swapped = handle
            .maybe_reload(2, || Ok::<_, Infallible>(Impl::new(2)))
            .unwrap();

        assert!(swapped);
        assert_eq!(handle.version(), 2);
        assert_eq!(handle.instance().generation, 2);
        // Instance state was rebuilt from scratch.
        assert_eq!(handle.instance().counter, 0);
    }

    #[test]
    fn reload_ignores_older_version() {
        let mut handle = VersionedHandle::new(5, Impl::new(5));
        let swapped = handle
            .maybe_reload(3, || Ok::<_, Infallible>(Impl::new(3)))
            .unwrap();

        assert!(!swapped);
        assert_eq!(handle.version(), 5);
    }

    #[test]
    fn failed_construction_keeps_previous_instance() {
        let mut handle = VersionedHandle::new(1, Impl::new(1));
        handle.instance_mut().counter = 7;

        let result = handle.maybe_reload(2, || Err("assets missing"));

        assert_eq!(result, Err("assets missing"));
        assert_eq!(handle.version(), 1);
        assert_eq!(handle.instance().counter, 7);
    }

    //--- ReloadStamp ------------------------------------------------------

    #[test]
    fn stamp_versions_increase_monotonically() {
        let stamp = ReloadStamp::new();
        let observer = stamp.clone();

        assert_eq!(stamp.current(), 1);
        assert_eq!(stamp.bump(), 2);
        assert_eq!(stamp.bump(), 3);
        assert_eq!(observer.current(), 3);
    }

    //--- HotReloadGuard ---------------------------------------------------

    #[test]
    fn guard_serves_initial_instance_until_bump() {
        let stamp = ReloadStamp::new();
        let mut guard = HotReloadGuard::new(stamp.clone(), Impl::new(1));

        guard
            .refresh(|v| Ok::<_, Infallible>(Impl::new(v)))
            .counter = 3;
        assert_eq!(guard.version(), 1);
        assert_eq!(guard.instance().counter, 3);
    }

    #[test]
    fn guard_swaps_after_bump() {
        let stamp = ReloadStamp::new();
        let mut guard = HotReloadGuard::new(stamp.clone(), Impl::new(1));
        guard
            .refresh(|v| Ok::<_, Infallible>(Impl::new(v)))
            .counter = 3;

        stamp.bump();
        let live = guard.refresh(|v| Ok::<_, Infallible>(Impl::new(v)));

        assert_eq!(live.generation, 2);
        assert_eq!(live.counter, 0);
        assert_eq!(guard.version(), 2);
    }

    #[test]
    fn guard_keeps_serving_after_failed_construction() {
        let stamp = ReloadStamp::new();
        let mut guard = HotReloadGuard::new(stamp.clone(), Impl::new(1));
        guard
            .refresh(|v| Ok::<_, Infallible>(Impl::new(v)))
            .counter = 9;

        stamp.bump();

        let mut attempts = 0;
        for _ in 0..3 {
            let live = guard.refresh(|_| {
                attempts += 1;
                Err("constructor exploded")
            });
            assert_eq!(live.generation, 1);
            assert_eq!(live.counter, 9);
        }

        // Reported (and attempted) once for the failing version.
        assert_eq!(attempts, 1);
        assert_eq!(guard.version(), 1);

        // A further bump retries with the new version.
        stamp.bump();
        let live = guard.refresh(|v| Ok::<_, &str>(Impl::new(v)));
        assert_eq!(live.generation, 3);
        assert_eq!(guard.version(), 3);
    }
}
