//! Desktop window bookkeeping.
//!
//! Windows are plain data; the desktop renders whatever the manager holds.
//! Exactly one window is focused whenever at least one exists.

use webdesk_core::EntryId;

use crate::config::window as cfg;

/// Stable handle for an open window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u32);

/// What a window hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowContent {
    /// A file explorer rooted at a directory.
    FileExplorer { root: EntryId },
}

/// Window placement in CSS pixels, relative to the desktop body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowGeometry {
    /// Size a new window from the available desktop area.
    ///
    /// The width is 65% of the container, clamped to the configured bounds,
    /// and the height keeps a 4:3 aspect ratio. New windows are
    /// centered unless `previous` is given, in which case they cascade from it.
    pub fn auto(container_width: f64, container_height: f64, previous: Option<&Self>) -> Self {
        let width = (container_width * cfg::WIDTH_RATIO)
            .round()
            .clamp(cfg::MIN_WIDTH, cfg::MAX_WIDTH);
        let height = width * cfg::HEIGHT_RATIO;

        let (x, y) = match previous {
            Some(prev) => (prev.x + cfg::CASCADE_OFFSET, prev.y + cfg::CASCADE_OFFSET),
            None => (
                container_width / 2.0 - width / 2.0,
                container_height / 2.0 - height / 2.0,
            ),
        };

        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inline style placing the window.
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            self.x, self.y, self.width, self.height
        )
    }
}

/// One open window.
#[derive(Clone, Debug, PartialEq)]
pub struct DesktopWindow {
    pub id: WindowId,
    pub content: WindowContent,
    pub geometry: WindowGeometry,
    pub title: String,
    /// Footer text, hidden when `None`.
    pub details: Option<String>,
    /// Stacking order; higher is on top.
    pub z_index: u32,
}

/// Open windows in creation order plus focus tracking.
#[derive(Clone, Debug, Default)]
pub struct WindowManager {
    windows: Vec<DesktopWindow>,
    focused: Option<WindowId>,
    next_id: u32,
    next_z: u32,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn windows(&self) -> &[DesktopWindow] {
        &self.windows
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id).collect()
    }

    pub fn get(&self, id: WindowId) -> Option<&DesktopWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut DesktopWindow> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    pub fn is_focused(&self, id: WindowId) -> bool {
        self.focused == Some(id)
    }

    /// Geometry of the focused window, used to cascade the next one.
    pub fn focused_geometry(&self) -> Option<WindowGeometry> {
        self.focused.and_then(|id| self.get(id)).map(|w| w.geometry)
    }

    /// Open a window and give it focus.
    pub fn create_window(&mut self, content: WindowContent, geometry: WindowGeometry) -> WindowId {
        self.next_id += 1;
        let id = WindowId(self.next_id);
        self.windows.push(DesktopWindow {
            id,
            content,
            geometry,
            title: cfg::DEFAULT_TITLE.to_string(),
            details: None,
            z_index: 0,
        });
        self.focus(id);
        id
    }

    /// Close a window. Focus moves to the topmost remaining window.
    pub fn close(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() == before {
            return false;
        }

        if self.focused == Some(id) {
            self.focused = self
                .windows
                .iter()
                .max_by_key(|w| w.z_index)
                .map(|w| w.id);
        }
        true
    }

    /// Focus a window and raise it above the others.
    pub fn focus(&mut self, id: WindowId) -> bool {
        if self.focused == Some(id) {
            return true;
        }
        self.next_z += 1;
        let z = self.next_z;
        match self.get_mut(id) {
            Some(window) => {
                window.z_index = z;
                self.focused = Some(id);
                true
            }
            None => false,
        }
    }

    /// Title a window as `"{app} - {title}"`, or just `app`.
    pub fn set_title(&mut self, id: WindowId, app: &str, title: Option<&str>) {
        let text = match title {
            Some(title) if !title.is_empty() => format!("{app} - {title}"),
            _ => app.to_string(),
        };
        if let Some(window) = self.get_mut(id) {
            window.title = text;
        }
    }

    /// Set or clear the footer details. Empty strings clear.
    pub fn set_details(&mut self, id: WindowId, details: Option<String>) {
        let details = details.filter(|d| !d.is_empty());
        if let Some(window) = self.get_mut(id) {
            window.details = details;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webdesk_core::FileSystem;

    fn content() -> WindowContent {
        WindowContent::FileExplorer {
            root: FileSystem::default().root(),
        }
    }

    fn geometry() -> WindowGeometry {
        WindowGeometry::auto(1280.0, 800.0, None)
    }

    #[test]
    fn test_create_focuses_new_window() {
        let mut wm = WindowManager::new();
        let a = wm.create_window(content(), geometry());
        assert_eq!(wm.focused(), Some(a));

        let b = wm.create_window(content(), geometry());
        assert_eq!(wm.focused(), Some(b));
        assert!(!wm.is_focused(a));
        assert_eq!(wm.len(), 2);
    }

    #[test]
    fn test_focus_raises() {
        let mut wm = WindowManager::new();
        let a = wm.create_window(content(), geometry());
        let b = wm.create_window(content(), geometry());

        assert!(wm.focus(a));
        let za = wm.get(a).unwrap().z_index;
        let zb = wm.get(b).unwrap().z_index;
        assert!(za > zb);
        assert!(!wm.focus(WindowId(99)));
        assert_eq!(wm.focused(), Some(a));
    }

    #[test]
    fn test_close_moves_focus_to_top() {
        let mut wm = WindowManager::new();
        let a = wm.create_window(content(), geometry());
        let b = wm.create_window(content(), geometry());
        let c = wm.create_window(content(), geometry());
        wm.focus(a);

        assert!(wm.close(a));
        assert_eq!(wm.focused(), Some(c));
        assert!(wm.close(b));
        assert_eq!(wm.focused(), Some(c));
        assert!(wm.close(c));
        assert_eq!(wm.focused(), None);
        assert!(!wm.close(c));
        assert!(wm.is_empty());
    }

    #[test]
    fn test_set_title() {
        let mut wm = WindowManager::new();
        let id = wm.create_window(content(), geometry());
        assert_eq!(wm.get(id).unwrap().title, "New Window");

        wm.set_title(id, "File Explorer", Some("docs"));
        assert_eq!(wm.get(id).unwrap().title, "File Explorer - docs");
        wm.set_title(id, "File Explorer", None);
        assert_eq!(wm.get(id).unwrap().title, "File Explorer");
    }

    #[test]
    fn test_set_details() {
        let mut wm = WindowManager::new();
        let id = wm.create_window(content(), geometry());
        wm.set_details(id, Some("2 selected".into()));
        assert_eq!(wm.get(id).unwrap().details.as_deref(), Some("2 selected"));
        wm.set_details(id, Some(String::new()));
        assert_eq!(wm.get(id).unwrap().details, None);
    }

    #[test]
    fn test_auto_geometry_clamps() {
        let small = WindowGeometry::auto(800.0, 600.0, None);
        assert_eq!(small.width, 640.0);
        assert_eq!(small.height, 480.0);
        assert_eq!(small.x, 80.0);
        assert_eq!(small.y, 60.0);

        let large = WindowGeometry::auto(3000.0, 2000.0, None);
        assert_eq!(large.width, 1042.0);

        let mid = WindowGeometry::auto(1200.0, 900.0, None);
        assert_eq!(mid.width, 780.0);
        assert_eq!(mid.height, 585.0);
    }

    #[test]
    fn test_auto_geometry_cascades() {
        let first = WindowGeometry::auto(1280.0, 800.0, None);
        let second = WindowGeometry::auto(1280.0, 800.0, Some(&first));
        assert_eq!(second.x, first.x + 30.0);
        assert_eq!(second.y, first.y + 30.0);
        assert_eq!(second.width, first.width);
    }
}
