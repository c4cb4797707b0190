use crate::{
    fl,
    message::{LightboxMessage, Message},
    page::ChartPage,
};
use chart_source::ChartEntry;
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    theme,
    widget::{Id, button, column, container, icon, image, row, scrollable, text, tooltip},
};

/// What the status bar under the grid reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryStatus {
    Scanning,
    Ready,
    Failed(String),
}

pub const SCROLL_ID: &str = "gallery-scroll";

/// How many tiles of `thumbnail_size` fit next to each other in `width`.
pub fn columns_for(width: f32, thumbnail_size: u32) -> usize {
    let spacing = theme::active().cosmic().spacing;
    let padding = f32::from(spacing.space_s) * 2.0;
    let tile = thumbnail_size as f32 + f32::from(spacing.space_xs) * 3.0;

    (((width - padding) / tile).floor() as usize).max(1)
}

fn thumbnail_tile<'a>(
    idx: usize,
    chart: &'a ChartEntry,
    placeholder: &'a str,
    size: u32,
    page: &ChartPage,
) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    let size = size as f32;

    let title = chart.title.as_deref().unwrap_or(placeholder);

    let tile = column()
        .push(
            image(image::Handle::from_path(&chart.path))
                .content_fit(ContentFit::Contain)
                .width(Length::Fixed(size))
                .height(Length::Fixed(size)),
        )
        .push(text::caption(title))
        .spacing(spacing.space_xxs)
        .align_x(Alignment::Center)
        .width(Length::Fixed(size));

    // Focus ring
    let class = if page.focused_thumbnail() == Some(idx) {
        theme::Container::Primary
    } else {
        theme::Container::Card
    };

    let tile = button::custom(container(tile).padding(spacing.space_xs).class(class))
        .on_press(Message::Lightbox(LightboxMessage::ThumbnailPressed(idx)))
        .class(theme::Button::Text);

    match page.thumbnail_label(idx) {
        Some(label) => tooltip(tile, text(label), tooltip::Position::Bottom).into(),
        None => tile.into(),
    }
}

fn empty_view<'a>(status: &GalleryStatus) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let (headline, hint) = match status {
        GalleryStatus::Scanning => (fl!("status-scanning"), String::new()),
        GalleryStatus::Ready => (fl!("status-no-charts"), fl!("status-open-hint")),
        GalleryStatus::Failed(error) => (
            fl!("status-scan-failed", error = error.as_str()),
            fl!("status-open-hint"),
        ),
    };

    container(
        column()
            .push(icon::from_name("folder-pictures-symbolic").size(64))
            .push(text(headline).size(16))
            .push(text(hint).size(12))
            .spacing(spacing.space_m)
            .align_x(Alignment::Center),
    )
    .center(Length::Fill)
    .into()
}

/// The chart grid with its status bar. While the page scroll is locked the
/// grid is laid out without a scrollable.
pub fn gallery_view<'a>(
    charts: &'a [ChartEntry],
    placeholder: &'a str,
    thumbnail_size: u32,
    columns: usize,
    page: &ChartPage,
    status: &GalleryStatus,
) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    if charts.is_empty() {
        return empty_view(status);
    }

    let columns = columns.max(1);
    let mut rows = column().spacing(spacing.space_xs);

    for (row_idx, chunk) in charts.chunks(columns).enumerate() {
        let mut tiles = row().spacing(spacing.space_xs);

        for (col, chart) in chunk.iter().enumerate() {
            let idx = row_idx * columns + col;
            tiles = tiles.push(thumbnail_tile(
                idx,
                chart,
                placeholder,
                thumbnail_size,
                page,
            ));
        }

        rows = rows.push(tiles);
    }

    let grid = container(rows)
        .padding(spacing.space_s)
        .width(Length::Fill);

    let content: Element<'a, Message> = if page.is_scroll_locked() {
        container(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        scrollable(grid)
            .id(Id::new(SCROLL_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    let status_text = match status {
        GalleryStatus::Scanning => fl!("status-scanning"),
        GalleryStatus::Ready => fl!("status-chart-count", count = charts.len()),
        GalleryStatus::Failed(error) => fl!("status-scan-failed", error = error.as_str()),
    };

    let status_bar = row()
        .push(text(status_text).size(12))
        .padding([spacing.space_xxs, spacing.space_s])
        .align_y(Alignment::Center);

    column()
        .push(content)
        .push(status_bar)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
