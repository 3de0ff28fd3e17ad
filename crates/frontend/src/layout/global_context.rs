use leptos::prelude::*;

/// App-wide layout state: whether the sidebar is shown and which nav
/// group is currently expanded. Provided once from `App`.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub sidebar_open: RwSignal<bool>,
    pub expanded_group: RwSignal<Option<String>>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
            expanded_group: RwSignal::new(None),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Expands the given group, or collapses it if it is already open.
    pub fn toggle_group(&self, name: &str) {
        self.expanded_group.update(|current| {
            if current.as_deref() == Some(name) {
                *current = None;
            } else {
                *current = Some(name.to_string());
            }
        });
    }

    pub fn is_group_expanded(&self, name: &str) -> bool {
        self.expanded_group.get().as_deref() == Some(name)
    }
}

pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("LayoutContext should be provided by App")
}
