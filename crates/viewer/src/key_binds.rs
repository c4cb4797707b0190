use crate::message::{ContextPage, GalleryMessage, LightboxMessage, Message};
use cosmic::{
    iced::keyboard::{Key, Modifiers, key::Named},
    widget::menu::{
        Action,
        key_bind::{KeyBind, Modifier},
    },
};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    OpenFolder,
    Rescan,
    Quit,
    Settings,
    About,
    FocusNext,
    FocusPrev,
    FocusUp,
    FocusDown,
    FocusFirst,
    FocusLast,
}

impl MenuAction {
    pub fn message(self) -> Message {
        match self {
            MenuAction::OpenFolder => Message::OpenFolderDialog,
            MenuAction::Rescan => Message::Rescan,
            MenuAction::Quit => Message::Quit,
            MenuAction::Settings => Message::ToggleContextPage(ContextPage::Settings),
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
            MenuAction::FocusNext => Message::Gallery(GalleryMessage::FocusNext),
            MenuAction::FocusPrev => Message::Gallery(GalleryMessage::FocusPrev),
            MenuAction::FocusUp => Message::Gallery(GalleryMessage::FocusUp),
            MenuAction::FocusDown => Message::Gallery(GalleryMessage::FocusDown),
            MenuAction::FocusFirst => Message::Gallery(GalleryMessage::FocusFirst),
            MenuAction::FocusLast => Message::Gallery(GalleryMessage::FocusLast),
        }
    }
}

impl Action for MenuAction {
    type Message = Message;

    fn message(&self) -> Message {
        (*self).message()
    }
}

fn bind(binds: &mut HashMap<KeyBind, MenuAction>, modifiers: Vec<Modifier>, key: Key, action: MenuAction) {
    binds.insert(KeyBind { modifiers, key }, action);
}

pub fn init_key_binds() -> HashMap<KeyBind, MenuAction> {
    let mut binds = HashMap::new();

    bind(&mut binds, vec![Modifier::Ctrl], Key::Character("o".into()), MenuAction::OpenFolder);
    bind(&mut binds, vec![Modifier::Ctrl], Key::Character("r".into()), MenuAction::Rescan);
    bind(&mut binds, vec![], Key::Named(Named::F5), MenuAction::Rescan);
    bind(&mut binds, vec![Modifier::Ctrl], Key::Character("q".into()), MenuAction::Quit);
    bind(&mut binds, vec![Modifier::Ctrl], Key::Character(",".into()), MenuAction::Settings);

    // Gallery focus
    bind(&mut binds, vec![], Key::Named(Named::ArrowRight), MenuAction::FocusNext);
    bind(&mut binds, vec![], Key::Named(Named::ArrowDown), MenuAction::FocusDown);
    bind(&mut binds, vec![], Key::Named(Named::ArrowLeft), MenuAction::FocusPrev);
    bind(&mut binds, vec![], Key::Named(Named::ArrowUp), MenuAction::FocusUp);
    bind(&mut binds, vec![], Key::Named(Named::Home), MenuAction::FocusFirst);
    bind(&mut binds, vec![], Key::Named(Named::End), MenuAction::FocusLast);
    bind(&mut binds, vec![Modifier::Shift], Key::Named(Named::Tab), MenuAction::FocusPrev);

    binds
}

/// Keys the lightbox reacts to. These bypass the menu bindings and go
/// through the focused element first, then the document.
pub fn lightbox_key(key: &Key, modifiers: Modifiers) -> Option<lightbox_types::Key> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::Enter) => Some(lightbox_types::Key::Enter),
        Key::Named(Named::Space) => Some(lightbox_types::Key::Space),
        Key::Named(Named::Escape) => Some(lightbox_types::Key::Escape),
        Key::Named(Named::Tab) if !modifiers.shift() => Some(lightbox_types::Key::Tab),
        _ => None,
    }
}

pub fn key_press_handler(key: Key, modifiers: Modifiers) -> Option<Message> {
    if let Some(key) = lightbox_key(&key, modifiers) {
        return Some(Message::Lightbox(LightboxMessage::KeyPressed(key)));
    }

    let mut mods = Vec::new();

    if modifiers.control() {
        mods.push(Modifier::Ctrl);
    }

    if modifiers.shift() {
        mods.push(Modifier::Shift);
    }

    if modifiers.alt() {
        mods.push(Modifier::Alt);
    }

    if modifiers.logo() {
        mods.push(Modifier::Super);
    }

    let key_bind = KeyBind {
        modifiers: mods,
        key,
    };

    init_key_binds()
        .get(&key_bind)
        .map(|action| Message::KeyBind(*action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightbox_keys() {
        let none = Modifiers::empty();
        assert_eq!(
            lightbox_key(&Key::Named(Named::Escape), none),
            Some(lightbox_types::Key::Escape)
        );
        assert_eq!(
            lightbox_key(&Key::Named(Named::Space), none),
            Some(lightbox_types::Key::Space)
        );
        assert_eq!(
            lightbox_key(&Key::Named(Named::Enter), none),
            Some(lightbox_types::Key::Enter)
        );
        assert_eq!(lightbox_key(&Key::Named(Named::F5), none), None);
    }

    #[test]
    fn test_modified_enter_is_not_activation() {
        assert_eq!(lightbox_key(&Key::Named(Named::Enter), Modifiers::CTRL), None);
    }

    #[test]
    fn test_menu_bindings() {
        let message = key_press_handler(Key::Character("o".into()), Modifiers::CTRL);
        assert!(matches!(
            message,
            Some(Message::KeyBind(MenuAction::OpenFolder))
        ));

        let message = key_press_handler(Key::Named(Named::ArrowRight), Modifiers::empty());
        assert!(matches!(message, Some(Message::KeyBind(MenuAction::FocusNext))));
    }

    #[test]
    fn test_escape_goes_to_lightbox() {
        let message = key_press_handler(Key::Named(Named::Escape), Modifiers::empty());
        assert!(matches!(
            message,
            Some(Message::Lightbox(LightboxMessage::KeyPressed(
                lightbox_types::Key::Escape
            )))
        ));
    }
}
