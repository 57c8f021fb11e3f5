//! Application menu model
//!
//! The menu is plain data so it can be rebuilt and inspected without a UI.
//! `ui::menu_bar` renders it with egui.

use egui::{Key, KeyboardShortcut, Modifiers};

pub const MENU_FILE_OPEN: &str = "file-open";
pub const MENU_FILE_OPEN_RECENT: &str = "file-open-recent";
pub const MENU_FILE_PRINT: &str = "file-print";
pub const MENU_FILE_PROPERTIES: &str = "file-properties";
pub const MENU_FILE_CLOSE: &str = "file-close";
pub const MENU_VIEW_FULLSCREEN: &str = "view-fullscreen";
pub const MENU_ABOUT: &str = "about";

/// Items that only make sense with a document open
pub const DOCUMENT_ITEMS: [&str; 4] = [
    MENU_FILE_PRINT,
    MENU_FILE_PROPERTIES,
    MENU_FILE_CLOSE,
    MENU_VIEW_FULLSCREEN,
];

/// What clicking a menu item does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    OpenDialog,
    OpenRecent(String),
    ClearRecent,
    Print,
    Properties,
    Close,
    Quit,
    ToggleFullscreen,
    About,
}

/// Name of the key behind `Modifiers::COMMAND`
const COMMAND_LABEL: &str = if cfg!(target_os = "macos") { "Cmd" } else { "Ctrl" };

/// Keyboard accelerator; `command` is Ctrl, or Cmd on macOS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accelerator {
    pub command: bool,
    pub key: Key,
}

impl Accelerator {
    pub const fn command(key: Key) -> Self {
        Self { command: true, key }
    }

    pub const fn plain(key: Key) -> Self {
        Self {
            command: false,
            key,
        }
    }

    pub fn shortcut(&self) -> KeyboardShortcut {
        let modifiers = if self.command {
            Modifiers::COMMAND
        } else {
            Modifiers::NONE
        };
        KeyboardShortcut::new(modifiers, self.key)
    }

    /// Text shown next to the item, e.g. "Ctrl+O" ("Cmd+O" on macOS)
    pub fn label(&self) -> String {
        if self.command {
            format!("{}+{}", COMMAND_LABEL, self.key.name())
        } else {
            self.key.name().to_string()
        }
    }
}

/// A single clickable (or nested) menu item
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: Option<&'static str>,
    pub label: String,
    pub accelerator: Option<Accelerator>,
    pub enabled: bool,
    pub action: Option<MenuAction>,
    /// Non-empty for items that open a submenu
    pub submenu: Vec<MenuEntry>,
}

impl MenuItem {
    fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            accelerator: None,
            enabled: true,
            action: None,
            submenu: Vec::new(),
        }
    }

    fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    fn accelerator(mut self, accelerator: Accelerator) -> Self {
        self.accelerator = Some(accelerator);
        self
    }

    fn action(mut self, action: MenuAction) -> Self {
        self.action = Some(action);
        self
    }

    fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
}

/// Top-level menu such as "File"
#[derive(Debug, Clone, PartialEq)]
pub struct TopMenu {
    pub label: &'static str,
    pub entries: Vec<MenuEntry>,
}

/// The whole application menu
#[derive(Debug, Clone, PartialEq)]
pub struct AppMenu {
    pub menus: Vec<TopMenu>,
}

impl AppMenu {
    /// Build the menu template with an empty recent submenu
    pub fn build() -> Self {
        let file = TopMenu {
            label: "File",
            entries: vec![
                MenuEntry::Item(
                    MenuItem::new("Open...")
                        .id(MENU_FILE_OPEN)
                        .accelerator(Accelerator::command(Key::O))
                        .action(MenuAction::OpenDialog),
                ),
                MenuEntry::Item(MenuItem::new("Open Recent").id(MENU_FILE_OPEN_RECENT)),
                MenuEntry::Item(
                    MenuItem::new("Print...")
                        .id(MENU_FILE_PRINT)
                        .accelerator(Accelerator::command(Key::P))
                        .action(MenuAction::Print)
                        .disabled(),
                ),
                MenuEntry::Separator,
                MenuEntry::Item(
                    MenuItem::new("Properties...")
                        .id(MENU_FILE_PROPERTIES)
                        .action(MenuAction::Properties)
                        .disabled(),
                ),
                MenuEntry::Separator,
                MenuEntry::Item(
                    MenuItem::new("Close")
                        .id(MENU_FILE_CLOSE)
                        .action(MenuAction::Close)
                        .disabled(),
                ),
                MenuEntry::Item(MenuItem::new("Exit").action(MenuAction::Quit)),
            ],
        };

        let view = TopMenu {
            label: "View",
            entries: vec![MenuEntry::Item(
                MenuItem::new("Toggle Full Screen")
                    .id(MENU_VIEW_FULLSCREEN)
                    .accelerator(Accelerator::plain(Key::F11))
                    .action(MenuAction::ToggleFullscreen)
                    .disabled(),
            )],
        };

        let help = TopMenu {
            label: "Help",
            entries: vec![MenuEntry::Item(
                MenuItem::new("About").id(MENU_ABOUT).action(MenuAction::About),
            )],
        };

        let mut menu = Self {
            menus: vec![file, view, help],
        };
        menu.update_recent(&[]);
        menu
    }

    /// Find an item by id anywhere in the tree
    #[allow(dead_code)]
    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.menus
            .iter()
            .find_map(|menu| find_item(&menu.entries, id))
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut MenuItem> {
        self.menus
            .iter_mut()
            .find_map(|menu| find_item_mut(&mut menu.entries, id))
    }

    /// Enable or disable print, properties, close and fullscreen together
    pub fn set_document_items_enabled(&mut self, enabled: bool) {
        for id in DOCUMENT_ITEMS {
            match self.item_mut(id) {
                Some(item) => item.enabled = enabled,
                None => tracing::warn!("Menu item {} not found", id),
            }
        }
    }

    /// Rebuild the "Open Recent" submenu from the recent list
    pub fn update_recent(&mut self, recent: &[String]) {
        let mut entries: Vec<MenuEntry> = if recent.is_empty() {
            vec![MenuEntry::Item(MenuItem::new("Empty").disabled())]
        } else {
            recent
                .iter()
                .map(|doc| {
                    MenuEntry::Item(
                        MenuItem::new(doc.as_str()).action(MenuAction::OpenRecent(doc.clone())),
                    )
                })
                .collect()
        };
        entries.push(MenuEntry::Separator);
        entries.push(MenuEntry::Item(
            MenuItem::new("Clear Recently Opened").action(MenuAction::ClearRecent),
        ));

        match self.item_mut(MENU_FILE_OPEN_RECENT) {
            Some(item) => item.submenu = entries,
            None => tracing::warn!("Menu item {} not found", MENU_FILE_OPEN_RECENT),
        }
    }

    /// Enabled items that carry both an accelerator and an action
    pub fn shortcuts(&self) -> Vec<(KeyboardShortcut, MenuAction)> {
        let mut shortcuts = Vec::new();
        for menu in &self.menus {
            collect_shortcuts(&menu.entries, &mut shortcuts);
        }
        shortcuts
    }
}

fn find_item<'a>(entries: &'a [MenuEntry], id: &str) -> Option<&'a MenuItem> {
    for entry in entries {
        if let MenuEntry::Item(item) = entry {
            if item.id == Some(id) {
                return Some(item);
            }
            if let Some(found) = find_item(&item.submenu, id) {
                return Some(found);
            }
        }
    }
    None
}

fn find_item_mut<'a>(entries: &'a mut [MenuEntry], id: &str) -> Option<&'a mut MenuItem> {
    for entry in entries {
        if let MenuEntry::Item(item) = entry {
            if item.id == Some(id) {
                return Some(item);
            }
            if let Some(found) = find_item_mut(&mut item.submenu, id) {
                return Some(found);
            }
        }
    }
    None
}

fn collect_shortcuts(entries: &[MenuEntry], out: &mut Vec<(KeyboardShortcut, MenuAction)>) {
    for entry in entries {
        if let MenuEntry::Item(item) = entry {
            if let (true, Some(accelerator), Some(action)) =
                (item.enabled, item.accelerator, &item.action)
            {
                out.push((accelerator.shortcut(), action.clone()));
            }
            collect_shortcuts(&item.submenu, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recent_labels(menu: &AppMenu) -> Vec<(String, bool)> {
        menu.item(MENU_FILE_OPEN_RECENT)
            .unwrap()
            .submenu
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Item(item) => Some((item.label.clone(), item.enabled)),
                MenuEntry::Separator => None,
            })
            .collect()
    }

    #[test]
    fn test_template_layout() {
        let menu = AppMenu::build();
        let labels: Vec<_> = menu.menus.iter().map(|m| m.label).collect();
        assert_eq!(labels, ["File", "View", "Help"]);

        let open = menu.item(MENU_FILE_OPEN).unwrap();
        assert_eq!(
            open.accelerator.unwrap().label(),
            format!("{}+O", COMMAND_LABEL)
        );
        assert!(open.enabled);

        let fullscreen = menu.item(MENU_VIEW_FULLSCREEN).unwrap();
        assert_eq!(fullscreen.accelerator.unwrap().label(), "F11");
        assert!(menu.item(MENU_ABOUT).is_some());
    }

    #[test]
    fn test_document_items_start_disabled() {
        let menu = AppMenu::build();
        for id in DOCUMENT_ITEMS {
            assert!(!menu.item(id).unwrap().enabled, "{id} should be disabled");
        }
    }

    #[test]
    fn test_toggle_document_items() {
        let mut menu = AppMenu::build();
        menu.set_document_items_enabled(true);
        for id in DOCUMENT_ITEMS {
            assert!(menu.item(id).unwrap().enabled);
        }
        assert!(menu.item(MENU_FILE_OPEN).unwrap().enabled);

        menu.set_document_items_enabled(false);
        for id in DOCUMENT_ITEMS {
            assert!(!menu.item(id).unwrap().enabled);
        }
        assert!(menu.item(MENU_ABOUT).unwrap().enabled);
    }

    #[test]
    fn test_empty_recent_submenu() {
        let menu = AppMenu::build();
        assert_eq!(
            recent_labels(&menu),
            vec![
                ("Empty".to_string(), false),
                ("Clear Recently Opened".to_string(), true)
            ]
        );
    }

    #[test]
    fn test_recent_submenu_lists_paths() {
        let mut menu = AppMenu::build();
        menu.update_recent(&["/d/b.pdf".to_string(), "/d/a.pdf".to_string()]);

        let submenu = &menu.item(MENU_FILE_OPEN_RECENT).unwrap().submenu;
        assert_eq!(submenu.len(), 4);
        assert!(matches!(submenu[2], MenuEntry::Separator));
        match &submenu[0] {
            MenuEntry::Item(item) => {
                assert_eq!(item.label, "/d/b.pdf");
                assert_eq!(
                    item.action,
                    Some(MenuAction::OpenRecent("/d/b.pdf".to_string()))
                );
            }
            MenuEntry::Separator => panic!("expected item"),
        }
        match &submenu[3] {
            MenuEntry::Item(item) => assert_eq!(item.action, Some(MenuAction::ClearRecent)),
            MenuEntry::Separator => panic!("expected item"),
        }
    }

    #[test]
    fn test_shortcuts_follow_enabled_state() {
        let mut menu = AppMenu::build();
        let actions: Vec<_> = menu.shortcuts().into_iter().map(|(_, a)| a).collect();
        assert_eq!(actions, vec![MenuAction::OpenDialog]);

        menu.set_document_items_enabled(true);
        let actions: Vec<_> = menu.shortcuts().into_iter().map(|(_, a)| a).collect();
        assert_eq!(
            actions,
            vec![
                MenuAction::OpenDialog,
                MenuAction::Print,
                MenuAction::ToggleFullscreen
            ]
        );
    }

    #[test]
    fn test_unknown_id() {
        assert!(AppMenu::build().item("nope").is_none());
    }

    #[test]
    fn test_command_label_matches_platform() {
        let label = Accelerator::command(Key::P).label();
        if cfg!(target_os = "macos") {
            assert_eq!(label, "Cmd+P");
        } else {
            assert_eq!(label, "Ctrl+P");
        }
        assert_eq!(
            Accelerator::command(Key::P).shortcut().modifiers,
            Modifiers::COMMAND
        );
    }
}
