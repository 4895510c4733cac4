//! Draws a render fragment with iced widgets

use crate::gui::app::Message;
use crate::gui::theme;
use crate::render::fragment::{COLLAPSE_LABEL, EXPAND_LABEL};
use crate::render::{Control, Fragment, Node};
use iced::widget::{button, column, text, Column};
use iced::{Color, Element};

pub fn fragment_view<'a>(fragment: &Fragment, expanded: bool) -> Element<'a, Message> {
    let children: Vec<Element<'a, Message>> = fragment
        .nodes
        .iter()
        .map(|node| node_view(fragment, node, expanded))
        .collect();

    Column::with_children(children).spacing(8).into()
}

fn node_view<'a>(fragment: &Fragment, node: &Node, expanded: bool) -> Element<'a, Message> {
    match node {
        Node::Heading(value) => line(value, 18, theme::TEXT_PRIMARY),
        Node::Text(value) => line(value, 14, theme::TEXT_PRIMARY),
        Node::Muted(value) => line(value, 14, theme::TEXT_MUTED),
        Node::Error(value) => line(value, 14, theme::DANGER),
        Node::Status(value) => line(value, 14, theme::TEXT_SECONDARY),
        Node::Paragraphs(lines) => paragraphs(lines),
        Node::Button { control, label, .. } => control_button(fragment, *control, label),
        Node::Collapsible { preview, full } => {
            if expanded {
                column![paragraphs(full), control_button(fragment, Control::Collapse, COLLAPSE_LABEL)]
                    .spacing(8)
                    .into()
            } else {
                column![
                    line(preview, 14, theme::TEXT_PRIMARY),
                    control_button(fragment, Control::Expand, EXPAND_LABEL)
                ]
                .spacing(8)
                .into()
            }
        }
    }
}

fn line<'a>(value: &str, size: u16, color: Color) -> Element<'a, Message> {
    text(value)
        .size(size)
        .style(iced::theme::Text::Color(color))
        .into()
}

fn paragraphs<'a>(lines: &[String]) -> Element<'a, Message> {
    let children: Vec<Element<'a, Message>> = lines
        .iter()
        .map(|value| line(value, 14, theme::TEXT_PRIMARY))
        .collect();
    Column::with_children(children).spacing(6).into()
}

/// Pressable only when the fragment bound an action to `control`
fn control_button<'a>(fragment: &Fragment, control: Control, label: &str) -> Element<'a, Message> {
    let style = match control {
        Control::LoadAll => iced::theme::Button::Custom(Box::new(theme::PrimaryButton)),
        _ => iced::theme::Button::Custom(Box::new(theme::SecondaryButton)),
    };
    button(text(label).size(14))
        .on_press_maybe(fragment.action_for(control).map(Message::Fragment))
        .padding([8, 16])
        .style(style)
        .into()
}
