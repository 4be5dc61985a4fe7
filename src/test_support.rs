use crate::ai::{ContentGenerator, GenerationError, GenerationRequest};
use crate::engine::{GeneratedContent, TripInputs};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Switches the process working directory for the guard's lifetime.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; hold the lock even if a
        // #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// The "Alex goes on vacation" scenario used across tests.
pub(crate) fn alex_inputs() -> TripInputs {
    TripInputs {
        name: "Alex".to_string(),
        start_date: "2025-08-01".to_string(),
        end_date: "2025-08-15".to_string(),
        reason: "Vacation".to_string(),
        backup: "Jordan".to_string(),
        notes: String::new(),
    }
}

/// Generator that always returns the same draft.
pub(crate) struct FixedGenerator {
    draft: GeneratedContent,
}

impl FixedGenerator {
    pub(crate) fn new(subject: &str, body: &str) -> Self {
        Self {
            draft: GeneratedContent {
                subject: subject.to_string(),
                body: body.to_string(),
            },
        }
    }
}

impl ContentGenerator for FixedGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<GeneratedContent, GenerationError> {
        Ok(self.draft.clone())
    }
}

/// Generator that fails with the given error. Later calls report a
/// malformed response since the original error is not `Clone`.
pub(crate) struct FailingGenerator {
    error: RefCell<Option<GenerationError>>,
}

impl FailingGenerator {
    pub(crate) fn new(error: GenerationError) -> Self {
        Self {
            error: RefCell::new(Some(error)),
        }
    }
}

impl ContentGenerator for FailingGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<GeneratedContent, GenerationError> {
        Err(self
            .error
            .borrow_mut()
            .take()
            .unwrap_or_else(|| GenerationError::MalformedResponse("repeated call".to_string())))
    }
}
