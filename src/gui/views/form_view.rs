//! Form step: content type, link, style

use crate::gui::app::Message;
use crate::gui::components::url_input;
use crate::gui::theme;
use crate::models::{ContentKind, SummaryStyle};
use crate::state::FormState;
use iced::widget::{button, checkbox, column, container, row, text, Row, Space};
use iced::{Alignment, Element, Length};

pub fn form_view<'a>(form: &FormState) -> Element<'a, Message> {
    let kinds: Vec<Element<'a, Message>> = ContentKind::ALL
        .iter()
        .map(|kind| choice(kind.label(), *kind == form.kind, Message::KindSelected(*kind)))
        .collect();
    let styles: Vec<Element<'a, Message>> = SummaryStyle::ALL
        .iter()
        .map(|style| choice(style.label(), *style == form.style, Message::StyleSelected(*style)))
        .collect();
    let kind_picker = Row::with_children(kinds).spacing(8);
    let style_picker = Row::with_children(styles).spacing(8);

    let placeholder = match form.kind {
        ContentKind::Video => "YouTube video link or ID",
        ContentKind::Playlist => "YouTube playlist link",
    };
    let link_error = form.link_error.map(|e| e.to_string());

    container(
        column![
            text("Summarize a YouTube video")
                .size(28)
                .style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
            label("Content type"),
            kind_picker,
            url_input(&form.link, placeholder, link_error.as_deref()),
            label("Summary style"),
            style_picker,
            checkbox("Keep a copy on the server", form.persist).on_toggle(Message::PersistToggled),
            row![
                Space::with_width(Length::Fill),
                button(text("Summarize").size(16))
                    .on_press(Message::Submit)
                    .padding([16, 32])
                    .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
            ]
            .align_items(Alignment::Center),
        ]
        .spacing(16),
    )
    .padding(32)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer)))
    .into()
}

fn label<'a>(value: &str) -> Element<'a, Message> {
    text(value)
        .size(12)
        .style(iced::theme::Text::Color(theme::TEXT_MUTED))
        .into()
}

fn choice<'a>(value: &str, selected: bool, message: Message) -> Element<'a, Message> {
    button(text(value).size(14))
        .on_press(message)
        .padding([8, 16])
        .style(iced::theme::Button::Custom(Box::new(if selected {
            theme::ChoiceButton::Selected
        } else {
            theme::ChoiceButton::Unselected
        })))
        .into()
}
