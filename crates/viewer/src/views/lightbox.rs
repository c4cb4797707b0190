use crate::message::{LightboxMessage, Message};
use cosmic::{
    Element,
    iced::{Alignment, ContentFit, Length},
    iced_widget::stack,
    theme,
    widget::{Space, button, column, container, horizontal_space, image, mouse_area, row, text},
};
use lightbox::{DisplayedImage, LightboxLabels, OverlayElements};

/// Stacks the overlay over `gallery`. Presses on the backdrop report the
/// overlay region, presses on the dialog report the image, so the controller
/// can tell them apart.
pub fn lightbox_view<'a>(
    gallery: Element<'a, Message>,
    elements: &OverlayElements,
    shown: &DisplayedImage,
    labels: &LightboxLabels,
    dialog_label: String,
    close_focused: bool,
) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .class(theme::Container::Transparent),
    )
    .on_press(Message::Lightbox(LightboxMessage::OverlayPressed(
        elements.overlay.clone(),
    )));

    let close_btn = button::text(labels.close.clone())
        .on_press(Message::Lightbox(LightboxMessage::ClosePressed))
        .padding(spacing.space_xs)
        .class(if close_focused {
            theme::Button::Suggested
        } else {
            theme::Button::Destructive
        });

    let header = row()
        .push(text::title4(dialog_label))
        .push(horizontal_space())
        .push(close_btn)
        .width(Length::Fill)
        .align_y(Alignment::Center)
        .padding(spacing.space_xs);

    let picture = container(
        image(image::Handle::from_path(&shown.src))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing.space_xs)
    .center(Length::Fill);

    let caption = row()
        .push(horizontal_space())
        .push(text::body(shown.description.clone()))
        .push(horizontal_space())
        .padding(spacing.space_xs);

    let dialog = container(
        mouse_area(
            container(
                column()
                    .push(header)
                    .push(picture)
                    .push(caption)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .class(theme::Container::Dialog),
        )
        .on_press(Message::Lightbox(LightboxMessage::OverlayPressed(
            elements.image.clone(),
        ))),
    )
    // The padding is backdrop: presses there fall through to the layer below.
    .padding([60, 80])
    .width(Length::Fill)
    .height(Length::Fill);

    stack![gallery, backdrop, dialog].into()
}
