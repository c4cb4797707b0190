use crate::{fl, key_binds::MenuAction, message::Message};
use cosmic::{
    Core, Element,
    widget::{
        menu::{self, ItemHeight, ItemWidth, KeyBind},
        responsive_menu_bar,
    },
};
use std::{collections::HashMap, sync::LazyLock};

static MENU_ID: LazyLock<cosmic::widget::Id> =
    LazyLock::new(|| cosmic::widget::Id::new("responsive-menu"));

pub fn menu_bar<'a>(core: &Core, key_binds: &HashMap<KeyBind, MenuAction>) -> Element<'a, Message> {
    responsive_menu_bar()
        .item_height(ItemHeight::Dynamic(40))
        .item_width(ItemWidth::Uniform(250))
        .spacing(4.)
        .into_element(
            core,
            key_binds,
            MENU_ID.clone(),
            Message::Surface,
            vec![
                (
                    fl!("menu-file"),
                    vec![
                        menu::Item::button(fl!("menu-open-folder"), None, MenuAction::OpenFolder),
                        menu::Item::button(fl!("menu-rescan"), None, MenuAction::Rescan),
                        menu::Item::divider(),
                        menu::Item::button(fl!("menu-quit"), None, MenuAction::Quit),
                    ],
                ),
                (
                    fl!("menu-view"),
                    vec![menu::Item::button(
                        fl!("menu-settings"),
                        None,
                        MenuAction::Settings,
                    )],
                ),
                (
                    fl!("menu-help"),
                    vec![menu::Item::button(
                        fl!("menu-about"),
                        None,
                        MenuAction::About,
                    )],
                ),
            ],
        )
}
