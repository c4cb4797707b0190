//! Main app state

use crate::{
    fl,
    key_binds::{self, MenuAction},
    localize,
    menu::menu_bar,
    message::{ContextPage, GalleryMessage, LightboxMessage, Message, SettingsMessage},
    page::ChartPage,
    views::{GalleryStatus, gallery::columns_for, gallery_view, lightbox_view},
    watcher,
};
use chart_source::{ChartEntry, ScanError};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    app::context_drawer,
    cosmic_config::{Config, CosmicConfigEntry},
    iced::keyboard,
    iced_widget::toggler,
    task::future,
    widget::{column, dropdown, menu::key_bind::KeyBind, settings, text},
};
use lightbox::{LightboxLabels, LightboxOptions, OverlayState};
use lightbox_config::{AppTheme, LightboxConfig, ThumbnailSize};
use rfd::AsyncFileDialog;
use std::{collections::HashMap, path::PathBuf, sync::Arc};

pub struct ChartViewer {
    core: Core,
    config: LightboxConfig,
    config_handler: Option<Config>,
    key_binds: HashMap<KeyBind, MenuAction>,
    page: ChartPage,
    labels: LightboxLabels,
    charts: Vec<ChartEntry>,
    charts_dir: Option<PathBuf>,
    status: GalleryStatus,
    context_page: Option<ContextPage>,
    window_width: f32,
}

impl ChartViewer {
    pub const APP_ID: &'static str = lightbox_config::APP_ID;

    fn save_config(&self) {
        if let Some(ref handler) = self.config_handler
            && let Err(e) = self.config.write_entry(handler)
        {
            tracing::warn!("failed to save settings: {e}");
        }
    }

    fn columns(&self) -> usize {
        columns_for(self.window_width, self.config.thumbnail_size.pixels())
    }

    fn lightbox_options(&self) -> LightboxOptions {
        LightboxOptions::new()
            .with_behavior(self.config.behavior())
            .with_labels(self.labels.clone())
    }

    fn rebind_lightbox(&mut self) {
        let ids = self.config.overlay_ids();
        let options = self.lightbox_options();
        self.page.rebind(&self.charts, &ids, options);
    }

    fn open_path(&mut self, path: PathBuf) -> Task<Action<Message>> {
        let Some(dir) = chart_source::resolve_charts_dir(&path) else {
            let error = ScanError::NotFound(path);
            tracing::warn!("{error}");
            self.status = GalleryStatus::Failed(error.to_string());
            return Task::none();
        };

        self.config.charts_dir = dir.to_str().map(str::to_string);
        self.save_config();
        self.charts_dir = Some(dir);

        Task::batch([self.update_title(), self.scan()])
    }

    fn scan(&mut self) -> Task<Action<Message>> {
        let Some(dir) = self.charts_dir.clone() else {
            return Task::none();
        };

        self.status = GalleryStatus::Scanning;
        let include_hidden = self.config.show_hidden_files;

        future(async move {
            let result = chart_source::scan_charts(&dir, include_hidden)
                .await
                .map_err(|e| Arc::new(e.to_string()));

            Message::ChartsScanned { dir, result }
        })
    }

    fn update_title(&mut self) -> Task<Action<Message>> {
        let title = match self
            .charts_dir
            .as_ref()
            .and_then(|dir| dir.file_name())
            .and_then(|name| name.to_str())
        {
            Some(name) => format!("{} - {}", name, fl!("app-title")),
            None => fl!("app-title"),
        };

        match self.core.main_window_id() {
            Some(id) => self.set_window_title(title, id),
            None => Task::none(),
        }
    }

    fn update_lightbox(&mut self, message: LightboxMessage) {
        match message {
            LightboxMessage::ThumbnailPressed(idx) => self.page.thumbnail_pressed(idx),
            LightboxMessage::ClosePressed => self.page.close_pressed(),
            LightboxMessage::OverlayPressed(target) => self.page.overlay_pressed(&target),
            LightboxMessage::KeyPressed(key) => {
                let event = self.page.key_pressed(key);
                tracing::trace!(
                    "{:?} handled, default prevented: {}",
                    event.key,
                    event.is_default_prevented()
                );
            }
        }
    }

    fn update_gallery(&mut self, message: GalleryMessage) {
        let columns = self.columns() as isize;

        match message {
            GalleryMessage::FocusNext => self.page.focus_step(1),
            GalleryMessage::FocusPrev => self.page.focus_step(-1),
            GalleryMessage::FocusDown => self.page.focus_step(columns),
            GalleryMessage::FocusUp => self.page.focus_step(-columns),
            GalleryMessage::FocusFirst => self.page.focus_first(),
            GalleryMessage::FocusLast => self.page.focus_last(),
        }
    }

    fn update_settings(&mut self, message: SettingsMessage) -> Task<Action<Message>> {
        let mut task = Task::none();

        match message {
            SettingsMessage::AppTheme(theme) => {
                self.config.app_theme = theme;
                task = cosmic::command::set_theme(theme.to_cosmic_theme());
            }
            SettingsMessage::ThumbnailSize(size) => self.config.thumbnail_size = size,
            SettingsMessage::CloseOnBackdrop(close) => {
                self.config.close_on_backdrop = close;
                self.rebind_lightbox();
            }
            SettingsMessage::CloseOnEscape(close) => {
                self.config.close_on_escape = close;
                self.rebind_lightbox();
            }
            SettingsMessage::LockScroll(lock) => {
                self.config.lock_scroll = lock;
                self.rebind_lightbox();
            }
            SettingsMessage::ShowHiddenFiles(show) => {
                self.config.show_hidden_files = show;
                task = self.scan();
            }
        }

        self.save_config();
        task
    }
}

impl Application for ChartViewer {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = Self::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let (config, config_handler) = match lightbox_config::config() {
            Ok(handler) => {
                let config = match LightboxConfig::get_entry(&handler) {
                    Ok(c) => c,
                    Err((errors, c)) => {
                        for e in errors {
                            tracing::debug!("setting not loaded: {e}");
                        }
                        c
                    }
                };
                (config, Some(handler))
            }
            Err(e) => {
                tracing::warn!("settings unavailable, using defaults: {e}");
                (LightboxConfig::default(), None)
            }
        };

        let mut app = Self {
            core,
            config,
            config_handler,
            key_binds: key_binds::init_key_binds(),
            page: ChartPage::new(),
            labels: localize::lightbox_labels(),
            charts: Vec::new(),
            charts_dir: None,
            status: GalleryStatus::Ready,
            context_page: None,
            window_width: 1024.0,
        };

        // The overlay is bound before the first scan so keys work on an empty page.
        app.rebind_lightbox();

        let startup_path = flags
            .or_else(|| app.config.charts_dir.as_ref().map(PathBuf::from))
            .or_else(dirs::picture_dir);

        let mut tasks = vec![cosmic::command::set_theme(
            app.config.app_theme.to_cosmic_theme(),
        )];

        match startup_path {
            Some(path) => tasks.push(app.open_path(path)),
            None => tasks.push(app.update_title()),
        }

        (app, Task::batch(tasks))
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![menu_bar(&self.core, &self.key_binds)]
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let gallery = gallery_view(
            &self.charts,
            &self.labels.placeholder_description,
            self.config.thumbnail_size.pixels(),
            self.columns(),
            &self.page,
            &self.status,
        );

        let lightbox = self.page.lightbox();

        if let OverlayState::Shown(shown) = lightbox.overlay()
            && let Some(elements) = lightbox.elements()
            && let Some(dialog_label) = self.page.dialog_label()
        {
            return lightbox_view(
                gallery,
                &elements,
                &shown,
                &self.labels,
                dialog_label,
                self.page.is_close_focused(),
            );
        }

        gallery
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        match message {
            Message::Lightbox(msg) => self.update_lightbox(msg),
            Message::Gallery(msg) => self.update_gallery(msg),
            Message::Settings(msg) => return self.update_settings(msg),
            Message::KeyBind(action) => return self.update(action.message()),
            Message::Surface(action) => {
                return cosmic::task::message(Action::Cosmic(cosmic::app::Action::Surface(action)));
            }
            Message::ToggleContextPage(page) => {
                if self.context_page == Some(page) {
                    self.context_page = None;
                } else {
                    self.context_page = Some(page);
                }
            }
            Message::OpenFolderDialog => {
                return future(async {
                    let dialog = AsyncFileDialog::new().set_title(fl!("menu-open-folder"));

                    match dialog.pick_folder().await {
                        Some(handle) => Message::FolderSelected(handle.path().to_path_buf()),
                        None => Message::Cancelled,
                    }
                });
            }
            Message::FolderSelected(path) => return self.open_path(path),
            Message::Cancelled => {}
            Message::Rescan => return self.scan(),
            Message::ChartsScanned { dir, result } => {
                if self.charts_dir.as_ref() != Some(&dir) {
                    tracing::debug!("dropping stale scan of {}", dir.display());
                    return Task::none();
                }

                match result {
                    Ok(charts) => {
                        self.charts = charts;
                        self.status = GalleryStatus::Ready;
                    }
                    Err(error) => {
                        tracing::error!("chart scan failed: {error}");
                        self.charts.clear();
                        self.status = GalleryStatus::Failed(error.to_string());
                    }
                }

                self.rebind_lightbox();
            }
            Message::WatcherEvent(event) => match event {
                watcher::WatcherEvent::ChartsChanged(path) => {
                    tracing::debug!("{} changed, rescanning", path.display());
                    return self.scan();
                }
                watcher::WatcherEvent::Error(err) => tracing::warn!("watcher error: {err}"),
            },
            Message::WindowResized { width } => self.window_width = width,
            Message::Quit => {
                self.save_config();
                std::process::exit(0);
            }
        }

        Task::none()
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        let page = self.context_page?;
        let content = match page {
            ContextPage::About => self.about_page(),
            ContextPage::Settings => self.settings_page(),
        };

        Some(context_drawer::context_drawer(
            content,
            Message::ToggleContextPage(page),
        ))
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Self::Message> {
        let watcher_sub =
            watcher::watch_charts(self.charts_dir.clone()).map(Message::WatcherEvent);

        cosmic::iced::Subscription::batch([
            keyboard::on_key_press(key_binds::key_press_handler),
            cosmic::iced::window::events().map(|(_, event)| {
                if let cosmic::iced::window::Event::Resized(size) = event {
                    Message::WindowResized { width: size.width }
                } else {
                    Message::Cancelled
                }
            }),
            watcher_sub,
        ])
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        self.save_config();
        None
    }
}

impl ChartViewer {
    fn about_page(&self) -> Element<'_, Message> {
        column()
            .push(text::title3(fl!("app-title")))
            .push(text::body(fl!("app-description")))
            .push(text::caption(format!("Version {}", env!("CARGO_PKG_VERSION"))))
            .spacing(cosmic::theme::active().cosmic().spacing.space_s)
            .into()
    }

    fn settings_page(&self) -> Element<'_, Message> {
        let sections = vec![
            settings::section()
                .title(fl!("settings-appearance"))
                .add(settings::item(
                    fl!("settings-theme"),
                    dropdown(
                        AppTheme::ALL
                            .iter()
                            .map(|t| t.to_string())
                            .collect::<Vec<_>>(),
                        AppTheme::ALL
                            .iter()
                            .position(|t| *t == self.config.app_theme),
                        |idx| Message::Settings(SettingsMessage::AppTheme(AppTheme::ALL[idx])),
                    ),
                ))
                .add(settings::item(
                    fl!("settings-thumbnail-size"),
                    dropdown(
                        ThumbnailSize::ALL
                            .iter()
                            .map(|s| s.to_string())
                            .collect::<Vec<_>>(),
                        ThumbnailSize::ALL
                            .iter()
                            .position(|s| *s == self.config.thumbnail_size),
                        |idx| {
                            Message::Settings(SettingsMessage::ThumbnailSize(
                                ThumbnailSize::ALL[idx],
                            ))
                        },
                    ),
                ))
                .into(),
            settings::section()
                .title(fl!("settings-lightbox"))
                .add(settings::item(
                    fl!("settings-close-on-backdrop"),
                    toggler(self.config.close_on_backdrop).on_toggle(|close| {
                        Message::Settings(SettingsMessage::CloseOnBackdrop(close))
                    }),
                ))
                .add(settings::item(
                    fl!("settings-close-on-escape"),
                    toggler(self.config.close_on_escape).on_toggle(|close| {
                        Message::Settings(SettingsMessage::CloseOnEscape(close))
                    }),
                ))
                .add(settings::item(
                    fl!("settings-lock-scroll"),
                    toggler(self.config.lock_scroll)
                        .on_toggle(|lock| Message::Settings(SettingsMessage::LockScroll(lock))),
                ))
                .into(),
            settings::section()
                .title(fl!("settings-charts"))
                .add(settings::item(
                    fl!("settings-show-hidden"),
                    toggler(self.config.show_hidden_files).on_toggle(|show| {
                        Message::Settings(SettingsMessage::ShowHiddenFiles(show))
                    }),
                ))
                .into(),
        ];

        settings::view_column(sections).into()
    }
}
