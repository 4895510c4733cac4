use crate::gui::app::Message;
use crate::gui::components::fragment_view;
use crate::gui::theme;
use crate::render::Fragment;
use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

/// Loading step; an error banner replaces the message until the form returns
pub fn loading_view<'a>(message: &str, banner: Option<&Fragment>) -> Element<'a, Message> {
    let body: Element<'a, Message> = match banner {
        Some(fragment) => fragment_view(fragment, false),
        None => text(message)
            .size(16)
            .style(iced::theme::Text::Color(theme::TEXT_SECONDARY))
            .into(),
    };

    container(column![text("Working...").size(24), body].spacing(16).align_items(Alignment::Center))
        .padding(48)
        .width(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer)))
        .into()
}
