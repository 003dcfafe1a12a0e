//! Validation chain - rejects a generation request before anything is written.
//!
//! ```text
//! name ──▶ [NameFormatCheck] ──▶ [DestinationCheck] ──▶ [WritableParentCheck] ──▶ Ok
//!                 │                      │                        │
//!                 ▼                      ▼                        ▼
//!               Err                     Err                      Err
//! ```
//!
//! Each link runs its own check and hands over to the next one only on
//! success. The first failure ends the run. Checks read the disk only
//! through the `Filesystem` port and never write.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::DomainValidator,
    error::ForgeResult,
};

/// One unit in the chain.
pub trait ProjectCheck: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Pass or fail for a proposed project name and target directory.
    fn check(&self, project_name: &str, target: &Path) -> ForgeResult<()>;
}

/// Name must match `^[A-Za-z0-9][A-Za-z0-9_-]*$` and be at least 2 chars.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameFormatCheck;

impl ProjectCheck for NameFormatCheck {
    fn name(&self) -> &'static str {
        "name-format"
    }

    fn check(&self, project_name: &str, _target: &Path) -> ForgeResult<()> {
        DomainValidator::validate_project_name(project_name)?;
        Ok(())
    }
}

/// Target must be missing or an empty directory.
///
/// Knows nothing about `--overwrite`; callers that want to overwrite build
/// the chain without this unit.
pub struct DestinationCheck {
    fs: Arc<dyn Filesystem>,
}

impl DestinationCheck {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }
}

impl ProjectCheck for DestinationCheck {
    fn name(&self) -> &'static str {
        "destination"
    }

    fn check(&self, _project_name: &str, target: &Path) -> ForgeResult<()> {
        if !self.fs.exists(target) {
            return Ok(());
        }
        // A plain file where the project root should go counts as occupied.
        if !self.fs.is_dir(target) || self.fs.has_entries(target)? {
            return Err(ApplicationError::DestinationOccupied {
                path: target.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}

/// Target's parent must exist and accept new entries.
pub struct WritableParentCheck {
    fs: Arc<dyn Filesystem>,
}

impl WritableParentCheck {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }
}

impl ProjectCheck for WritableParentCheck {
    fn name(&self) -> &'static str {
        "writable-parent"
    }

    fn check(&self, _project_name: &str, target: &Path) -> ForgeResult<()> {
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        if !self.fs.is_dir(parent) {
            return Err(ApplicationError::ParentMissing {
                path: parent.to_path_buf(),
            }
            .into());
        }
        if !self.fs.is_writable(parent) {
            return Err(ApplicationError::ParentNotWritable {
                path: parent.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}

/// Linked list of checks, built once and runnable any number of times.
pub struct ValidatorChain {
    check: Box<dyn ProjectCheck>,
    next: Option<Box<ValidatorChain>>,
}

impl ValidatorChain {
    pub fn new(check: impl ProjectCheck + 'static) -> Self {
        Self {
            check: Box::new(check),
            next: None,
        }
    }

    /// Append a check at the end of the chain.
    pub fn then(mut self, check: impl ProjectCheck + 'static) -> Self {
        self.push(Box::new(check));
        self
    }

    /// name -> destination -> writable-parent.
    pub fn standard(fs: Arc<dyn Filesystem>) -> Self {
        Self::new(NameFormatCheck)
            .then(DestinationCheck::new(Arc::clone(&fs)))
            .then(WritableParentCheck::new(fs))
    }

    /// Same as [`standard`](Self::standard) without the destination unit.
    pub fn for_overwrite(fs: Arc<dyn Filesystem>) -> Self {
        Self::new(NameFormatCheck).then(WritableParentCheck::new(fs))
    }

    /// Pick `standard` or `for_overwrite`.
    pub fn for_request(fs: Arc<dyn Filesystem>, overwrite: bool) -> Self {
        if overwrite {
            Self::for_overwrite(fs)
        } else {
            Self::standard(fs)
        }
    }

    /// Run this link, then the rest. Stops at the first failure.
    #[instrument(skip_all, fields(project = %project_name, target = %target.display()))]
    pub fn run(&self, project_name: &str, target: &Path) -> ForgeResult<()> {
        let mut link = Some(self);
        while let Some(current) = link {
            debug!(check = current.check.name(), "running check");
            current.check.check(project_name, target)?;
            link = current.next.as_deref();
        }
        Ok(())
    }

    /// Check identifiers in execution order.
    pub fn check_names(&self) -> Vec<&'static str> {
        let mut names = vec![self.check.name()];
        let mut link = self.next.as_deref();
        while let Some(current) = link {
            names.push(current.check.name());
            link = current.next.as_deref();
        }
        names
    }

    fn push(&mut self, check: Box<dyn ProjectCheck>) {
        match self.next.as_mut() {
            Some(next) => next.push(check),
            None => self.next = Some(Box::new(Self { check, next: None })),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::testing::FakeFs;
    use crate::error::{ErrorCategory, ForgeError};

    fn fs(dirs: &[&str]) -> Arc<FakeFs> {
        Arc::new(FakeFs::with_dirs(dirs))
    }

    #[test]
    fn standard_chain_order() {
        let chain = ValidatorChain::standard(fs(&["/out"]));
        assert_eq!(
            chain.check_names(),
            vec!["name-format", "destination", "writable-parent"]
        );
    }

    #[test]
    fn overwrite_chain_skips_destination() {
        let chain = ValidatorChain::for_overwrite(fs(&["/out"]));
        assert_eq!(chain.check_names(), vec!["name-format", "writable-parent"]);
    }

    #[test]
    fn missing_target_with_writable_parent_passes() {
        let chain = ValidatorChain::standard(fs(&["/out"]));
        assert!(chain.run("demo-api", Path::new("/out/demo-api")).is_ok());
    }

    #[test]
    fn empty_target_directory_passes() {
        let chain = ValidatorChain::standard(fs(&["/out", "/out/demo-api"]));
        assert!(chain.run("demo-api", Path::new("/out/demo-api")).is_ok());
    }

    #[test]
    fn occupied_target_fails_destination_check() {
        let fake = fs(&["/out", "/out/demo-api"]);
        fake.add_file("/out/demo-api/main.py", "print()");
        let chain = ValidatorChain::standard(fake);

        let err = chain
            .run("demo-api", Path::new("/out/demo-api"))
            .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::DestinationOccupied { .. })
        ));
        assert!(err.suggestions().iter().any(|s| s.contains("--overwrite")));
    }

    #[test]
    fn occupied_target_passes_when_overwriting() {
        let fake = fs(&["/out", "/out/demo-api"]);
        fake.add_file("/out/demo-api/main.py", "print()");
        let chain = ValidatorChain::for_overwrite(fake);

        assert!(chain.run("demo-api", Path::new("/out/demo-api")).is_ok());
    }

    #[test]
    fn invalid_name_short_circuits_before_destination() {
        let fake = fs(&["/out", "/out/-bad"]);
        fake.add_file("/out/-bad/file", "x");
        let chain = ValidatorChain::standard(fake);

        let err = chain.run("-bad", Path::new("/out/-bad")).unwrap_err();
        assert!(matches!(err, ForgeError::Domain(_)));
        assert!(err.to_string().contains("A-Z, a-z, 0-9"));
    }

    #[test]
    fn read_only_parent_fails_writable_check() {
        let fake = fs(&["/locked"]);
        fake.mark_read_only("/locked");
        let chain = ValidatorChain::standard(fake);

        let err = chain.run("demo-api", Path::new("/locked/demo-api")).unwrap_err();
        assert_eq!(
            err,
            ForgeError::Application(ApplicationError::ParentNotWritable {
                path: "/locked".into()
            })
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn missing_parent_fails_writable_check() {
        let chain = ValidatorChain::standard(fs(&[]));
        let err = chain.run("demo-api", Path::new("/nowhere/demo-api")).unwrap_err();
        assert!(err.to_string().contains("/nowhere"));
    }

    #[test]
    fn chain_can_run_repeatedly() {
        let chain = ValidatorChain::standard(fs(&["/out"]));
        for _ in 0..3 {
            assert!(chain.run("demo-api", Path::new("/out/demo-api")).is_ok());
        }
    }

    struct Counting(&'static str, Arc<Mutex<Vec<&'static str>>>);

    impl ProjectCheck for Counting {
        fn name(&self) -> &'static str {
            self.0
        }

        fn check(&self, _: &str, _: &Path) -> ForgeResult<()> {
            self.1.lock().unwrap().push(self.0);
            Ok(())
        }
    }

    #[test]
    fn custom_links_run_in_insertion_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let chain = ValidatorChain::new(Counting("a", Arc::clone(&seen)))
            .then(Counting("b", Arc::clone(&seen)))
            .then(Counting("c", Arc::clone(&seen)));

        chain.run("ab", Path::new("ab")).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b", "c"]);
    }
}
