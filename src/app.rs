//! Root application module.
//!
//! Contains the main App component, the AppContext definition and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use webdesk_core::{seed_directory, EntryId, FileSystem};

use crate::components::Desktop;
use crate::config::{window::FALLBACK_DESKTOP, ROOT_NAME, SEED_COUNT};
use crate::models::{WindowContent, WindowGeometry, WindowId, WindowManager};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **File system**: one tree shared by every window
/// - **Windows**: open windows, stacking and focus
///
/// Per-explorer state (cwd, selection, expansion) is not here; each explorer
/// owns its own view model.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Shared file system.
    pub fs: RwSignal<FileSystem>,

    /// Desktop windows.
    pub windows: RwSignal<WindowManager>,
}

impl AppContext {
    /// Creates a context with an empty file system and no windows.
    pub fn new() -> Self {
        Self {
            fs: RwSignal::new(FileSystem::new(ROOT_NAME)),
            windows: RwSignal::new(WindowManager::new()),
        }
    }

    /// Fill the root directory with demo content.
    ///
    /// Runs inside a single update so dependents are notified once.
    pub fn seed(&self) {
        self.fs.update(|fs| {
            let root = fs.root();
            match seed_directory(fs, root, SEED_COUNT, &mut rand::thread_rng()) {
                Ok(_report) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::log_1(
                        &format!(
                            "Seeded {} files and {} folders",
                            _report.files, _report.directories
                        )
                        .into(),
                    );
                }
                Err(_e) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::error_1(&format!("Seeding failed: {}", _e).into());
                }
            }
        });
    }

    /// Open an explorer window on `root`, cascading from the focused window.
    pub fn open_explorer(&self, root: EntryId) -> WindowId {
        let (width, height) = dom::body_size()
            .filter(|(w, h)| *w > 0.0 && *h > 0.0)
            .unwrap_or(FALLBACK_DESKTOP);
        let previous = self.windows.with_untracked(|wm| wm.focused_geometry());
        let geometry = WindowGeometry::auto(width, height, previous.as_ref());

        let id = self
            .windows
            .write()
            .create_window(WindowContent::FileExplorer { root }, geometry);

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&"Opened file explorer".into());

        id
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Seeds the file system and opens the first explorer window
/// - Wraps the desktop in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    ctx.seed();
    let root = ctx.fs.with_untracked(|fs| fs.root());
    ctx.open_explorer(root);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #3a6ea5;
                    color: #f0f0f0;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                        <p style="margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; margin: 0 0 2rem 0; padding-left: 1.5rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="padding: 0.5rem 1.5rem; cursor: pointer;"
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Desktop />
        </ErrorBoundary>
    }
}
