//! Document-level stylesheets shared by every control on a page.

use std::sync::Arc;

use carbon_button_core::logging::targets;
use parking_lot::RwLock;

/// Identifier of the icon layout stylesheet.
pub const ICON_STYLESHEET_ID: &str = "carbon-button-styles";

/// Layout rules for the icon slot, the content row and icon-only padding.
pub const ICON_STYLESHEET: &str = "\
.carbon-button-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 20px;
  height: 20px;
  flex-shrink: 0;
}
.carbon-button-icon svg {
  width: 100%;
  height: 100%;
  fill: currentColor;
}
.carbon-button-content {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  width: 100%;
}
.carbon-button-icon-only {
  padding: 0.75rem !important;
}
";

/// A registered stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// Registration key.
    pub id: Arc<str>,
    /// CSS text.
    pub css: Arc<str>,
}

/// The set of stylesheets installed in the host document.
///
/// Cloning yields another handle to the same registry, so every control on
/// a page can share one. Registration is keyed by id and first-wins:
/// mounting many controls installs each stylesheet exactly once.
///
/// ```
/// use carbon_button::StyleRegistry;
///
/// let registry = StyleRegistry::new();
/// assert!(registry.register("theme", ".a { color: red; }"));
/// assert!(!registry.clone().register("theme", ".a { color: blue; }"));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    sheets: Arc<RwLock<Vec<Stylesheet>>>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `css` under `id` unless a stylesheet with that id exists.
    ///
    /// Returns `true` if the stylesheet was added.
    pub fn register(&self, id: &str, css: &str) -> bool {
        let mut sheets = self.sheets.write();
        if sheets.iter().any(|sheet| &*sheet.id == id) {
            tracing::trace!(target: targets::STYLESHEET, id, "stylesheet already registered");
            return false;
        }
        sheets.push(Stylesheet {
            id: id.into(),
            css: css.into(),
        });
        tracing::debug!(target: targets::STYLESHEET, id, "registered stylesheet");
        true
    }

    /// Install the icon layout stylesheet.
    pub fn register_icon_styles(&self) -> bool {
        self.register(ICON_STYLESHEET_ID, ICON_STYLESHEET)
    }

    /// Whether a stylesheet with `id` is installed.
    pub fn contains(&self, id: &str) -> bool {
        self.sheets.read().iter().any(|sheet| &*sheet.id == id)
    }

    /// The CSS registered under `id`.
    pub fn get(&self, id: &str) -> Option<Arc<str>> {
        self.sheets
            .read()
            .iter()
            .find(|sheet| &*sheet.id == id)
            .map(|sheet| sheet.css.clone())
    }

    /// All stylesheets in registration order.
    pub fn stylesheets(&self) -> Vec<Stylesheet> {
        self.sheets.read().clone()
    }

    /// Number of installed stylesheets.
    pub fn len(&self) -> usize {
        self.sheets.read().len()
    }

    /// Whether no stylesheet is installed.
    pub fn is_empty(&self) -> bool {
        self.sheets.read().is_empty()
    }
}

static_assertions::assert_impl_all!(StyleRegistry: Send, Sync);
