/// Video details popup, drawn as a modal over the gallery
use iced::widget::{button, center, column, container, mouse_area, opaque, stack, text};
use iced::{Color, Element};

use crate::Message;

pub fn details_modal<'a>(base: Element<'a, Message>, path: &'a str) -> Element<'a, Message> {
    let dialog = container(
        column![
            text("Video Details").size(20),
            text(format!("Details for: {}", path)).size(14),
            button("Close").on_press(Message::CloseDetails).padding(6),
        ]
        .spacing(12),
    )
    .padding(20)
    .max_width(600)
    .style(container::rounded_box);

    // Clicking the dimmed backdrop dismisses the popup
    let backdrop = mouse_area(center(opaque(dialog)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.7,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }))
    .on_press(Message::CloseDetails);

    stack![base, opaque(backdrop)].into()
}
