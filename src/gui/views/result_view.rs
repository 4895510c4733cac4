//! Result step: tabs, the active tab's fragments, and the result actions

use crate::gui::app::Message;
use crate::gui::components::fragment_view;
use crate::gui::theme;
use crate::render::{FragmentKey, ResultView};
use crate::state::{Controller, Tab};
use iced::widget::{button, column, container, row, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

pub fn result_view<'a>(controller: &Controller) -> Element<'a, Message> {
    let Some(view) = controller.view() else {
        return text("Nothing to show").into();
    };
    let state = controller.state();

    let mut tabs = vec![Tab::Summary, Tab::Transcript];
    if view.playlist.is_some() {
        tabs.push(Tab::AllVideos);
    }
    let tab_buttons: Vec<Element<'a, Message>> = tabs
        .into_iter()
        .map(|tab| {
            button(text(tab.label()).size(14))
                .on_press(Message::TabSelected(tab))
                .padding([8, 16])
                .style(iced::theme::Button::Custom(Box::new(
                    if tab == state.active_tab {
                        theme::ChoiceButton::Selected
                    } else {
                        theme::ChoiceButton::Unselected
                    },
                )))
                .into()
        })
        .collect();

    let body = match state.active_tab {
        Tab::Summary => fragment_view(&view.summary, false),
        Tab::Transcript => fragment_view(&view.transcript, false),
        Tab::AllVideos => playlist_tab(view, controller),
    };

    let actions = row![
        action("Copy", Message::CopySummary),
        action("Download", Message::DownloadSummary),
        Space::with_width(Length::Fill),
        button(text("New Summary").size(14))
            .on_press(Message::NewSummary)
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
    ]
    .spacing(12);

    container(
        column![
            Row::with_children(tab_buttons).spacing(8),
            scrollable(container(body).padding([8, 16, 8, 0]))
                .height(Length::Fill)
                .style(iced::theme::Scrollable::Custom(Box::new(theme::ScrollableStyle))),
            actions,
        ]
        .spacing(16),
    )
    .padding(32)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::GlassContainer)))
    .into()
}

fn playlist_tab<'a>(view: &ResultView, controller: &Controller) -> Element<'a, Message> {
    let Some(playlist) = &view.playlist else {
        return Space::with_height(0).into();
    };

    let mut children: Vec<Element<'a, Message>> = vec![fragment_view(&playlist.load_all, false)];
    for fragment in &playlist.items {
        let FragmentKey::Item(index) = fragment.key else {
            continue;
        };
        let failed = controller
            .state()
            .last_batch
            .as_ref()
            .and_then(|batch| batch.items.get(index))
            .map(|item| !item.success)
            .unwrap_or(false);

        children.push(
            container(fragment_view(fragment, controller.is_expanded(index)))
                .padding(16)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(if failed {
                    theme::ItemCard::Failed
                } else {
                    theme::ItemCard::Normal
                })))
                .into(),
        );
    }

    Column::with_children(children).spacing(12).into()
}

fn action<'a>(label: &str, message: Message) -> Element<'a, Message> {
    button(text(label).size(14))
        .on_press(message)
        .padding([8, 16])
        .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton)))
        .into()
}
