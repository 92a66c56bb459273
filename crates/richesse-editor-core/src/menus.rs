//! Toolbar popover state.

/// Popovers the toolbar can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarMenu {
    TextColor,
    BackgroundColor,
    ImageDropzone,
}

/// Which toolbar popovers are open.
///
/// Flags are independent. Keeping at most one open is left to the toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolbarMenuState {
    pub text_color: bool,
    pub background_color: bool,
    pub image_dropzone: bool,
}

impl ToolbarMenuState {
    fn flag(&mut self, menu: ToolbarMenu) -> &mut bool {
        match menu {
            ToolbarMenu::TextColor => &mut self.text_color,
            ToolbarMenu::BackgroundColor => &mut self.background_color,
            ToolbarMenu::ImageDropzone => &mut self.image_dropzone,
        }
    }

    pub fn is_open(&self, menu: ToolbarMenu) -> bool {
        match menu {
            ToolbarMenu::TextColor => self.text_color,
            ToolbarMenu::BackgroundColor => self.background_color,
            ToolbarMenu::ImageDropzone => self.image_dropzone,
        }
    }

    /// Flip a menu. Returns whether it is now open.
    pub fn toggle(&mut self, menu: ToolbarMenu) -> bool {
        let flag = self.flag(menu);
        *flag = !*flag;
        *flag
    }

    pub fn close(&mut self, menu: ToolbarMenu) {
        *self.flag(menu) = false;
    }

    pub fn close_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut menus = ToolbarMenuState::default();
        assert!(menus.toggle(ToolbarMenu::TextColor));
        assert!(menus.is_open(ToolbarMenu::TextColor));
        assert!(!menus.toggle(ToolbarMenu::TextColor));
        assert!(!menus.is_open(ToolbarMenu::TextColor));
    }

    #[test]
    fn test_menus_are_independent() {
        let mut menus = ToolbarMenuState::default();
        menus.toggle(ToolbarMenu::TextColor);
        menus.toggle(ToolbarMenu::BackgroundColor);
        assert!(menus.is_open(ToolbarMenu::TextColor));
        assert!(menus.is_open(ToolbarMenu::BackgroundColor));

        menus.close(ToolbarMenu::TextColor);
        assert!(!menus.is_open(ToolbarMenu::TextColor));
        assert!(menus.is_open(ToolbarMenu::BackgroundColor));

        menus.close_all();
        assert_eq!(menus, ToolbarMenuState::default());
    }
}
