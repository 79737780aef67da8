//! The two concrete panels and their pass-through content callbacks.
//!
//! Selections inside panel content are not part of the gesture core; they are
//! forwarded to the host unchanged.

use crate::panel_view::PanelView;

/// Left panel: profile and group switching.
pub struct ProfilePanel {
    view: PanelView,
    on_group_selected: Option<Box<dyn Fn(&str, &str)>>,
}

impl ProfilePanel {
    pub fn new(view: PanelView) -> Self {
        Self {
            view,
            on_group_selected: None,
        }
    }

    pub fn with_group_selected(mut self, callback: impl Fn(&str, &str) + 'static) -> Self {
        self.on_group_selected = Some(Box::new(callback));
        self
    }

    pub fn view(&self) -> &PanelView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PanelView {
        &mut self.view
    }

    /// Content layer reports a group row was chosen.
    pub fn notify_group_selected(&self, group_id: &str, role: &str) {
        if let Some(callback) = &self.on_group_selected {
            callback(group_id, role);
        }
    }
}

/// Right panel: app menu.
pub struct MenuPanel {
    view: PanelView,
    on_theme_toggle: Option<Box<dyn Fn()>>,
    on_logout_requested: Option<Box<dyn Fn()>>,
}

impl MenuPanel {
    pub fn new(view: PanelView) -> Self {
        Self {
            view,
            on_theme_toggle: None,
            on_logout_requested: None,
        }
    }

    pub fn with_theme_toggle(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_theme_toggle = Some(Box::new(callback));
        self
    }

    pub fn with_logout_requested(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_logout_requested = Some(Box::new(callback));
        self
    }

    pub fn view(&self) -> &PanelView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PanelView {
        &mut self.view
    }

    pub fn notify_theme_toggle(&self) {
        if let Some(callback) = &self.on_theme_toggle {
            callback();
        }
    }

    pub fn notify_logout_requested(&self) {
        if let Some(callback) = &self.on_logout_requested {
            callback();
        }
    }
}
