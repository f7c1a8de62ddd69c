use super::messages::Message;
use super::spinner::LoadingSpinner;
use super::state::{App, LoadPhase, SLIDER_SCROLL_ID, SPINNER_SIZE_PX};
use crate::config::AppConfig;
use crate::pager::slot_scale;
use crate::theme::{BACKDROP, SLOT_BORDER};
use iced::alignment::Vertical;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Image, Row, Space, Stack, container, scrollable};
use iced::{Border, ContentFit, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let page_width = self.geometry.page_width();
        let window = self.pager.render_window(self.config.beyond_bounds_pages);

        let pages = (0..self.pager.page_count()).map(|slot| {
            if window.as_ref().is_some_and(|window| window.contains(&slot)) {
                self.slot_view(slot, page_width)
            } else {
                Space::new(Length::Fixed(page_width), Length::Fill).into()
            }
        });

        let strip = Row::with_children(pages)
            .spacing(self.geometry.page_spacing)
            .padding([0.0, self.geometry.peek_padding])
            .height(Length::Fill)
            .align_y(Vertical::Center);

        let surface = scrollable(strip)
            .id(SLIDER_SCROLL_ID.clone())
            .direction(Direction::Horizontal(
                Scrollbar::new().width(0.0).scroller_width(0.0),
            ))
            .on_scroll(|viewport| {
                let bounds = viewport.bounds();
                Message::Scrolled {
                    offset_x: viewport.absolute_offset().x,
                    viewport_width: bounds.width,
                    viewport_height: bounds.height,
                }
            })
            .width(Length::Fill)
            .height(Length::Fill);

        container(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(BACKDROP.into()),
                ..container::Style::default()
            })
            .into()
    }

    /// One page: image, frame and spinner stacked in [`slot_layers`] order,
    /// all scaled by the slot's distance from centre.
    fn slot_view(&self, slot: usize, page_width: f32) -> Element<'_, Message> {
        let scale = slot_scale(self.pager.page_offset(slot), self.config.scale_step);
        let metrics = SlotMetrics::new(self.slot_side(), scale, &self.config);
        let state = self.slots.get(slot);
        let image = state.and_then(|state| state.image());

        let layers = slot_layers(state.map(|state| state.phase()), image.is_some())
            .into_iter()
            .map(|layer| -> Element<'_, Message> {
                let element: Element<'_, Message> = match (layer, image) {
                    (SlotLayer::Image, Some(image)) => Image::new(image.handle.clone())
                        .width(Length::Fixed(metrics.side))
                        .height(Length::Fixed(metrics.side))
                        .content_fit(ContentFit::Fill)
                        .into(),
                    (SlotLayer::Image, None) => Space::new(Length::Shrink, Length::Shrink).into(),
                    (SlotLayer::Frame, _) => slot_frame(metrics),
                    (SlotLayer::Spinner, _) => {
                        LoadingSpinner::new(self.motion.spinner_phase, metrics.spinner_size)
                            .into_element()
                    }
                };
                container(element).center(Length::Fill).into()
            });

        container(Stack::with_children(layers))
            .width(Length::Fixed(page_width))
            .height(Length::Fill)
            .into()
    }
}

/// Visual parts of a slot, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotLayer {
    Image,
    Frame,
    Spinner,
}

/// Draw order for one slot. The frame sits above the image so the border
/// stays visible over opaque pixels.
fn slot_layers(phase: Option<LoadPhase>, has_image: bool) -> Vec<SlotLayer> {
    let mut layers = Vec::with_capacity(3);
    if has_image {
        layers.push(SlotLayer::Image);
    }
    layers.push(SlotLayer::Frame);
    if phase == Some(LoadPhase::Loading) {
        layers.push(SlotLayer::Spinner);
    }
    layers
}

/// Logical sizes of one slot at parallax `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SlotMetrics {
    side: f32,
    radius: f32,
    border_width: f32,
    spinner_size: f32,
}

impl SlotMetrics {
    fn new(base_side: f32, scale: f32, config: &AppConfig) -> Self {
        let side = base_side * scale;
        let radius = if config.slot_size > 0.0 {
            side * config.corner_radius / config.slot_size
        } else {
            0.0
        };
        Self {
            side,
            radius,
            border_width: config.border_width * scale,
            spinner_size: SPINNER_SIZE_PX * scale,
        }
    }
}

/// Transparent square carrying only the slot border.
fn slot_frame<'a>(metrics: SlotMetrics) -> Element<'a, Message> {
    container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fixed(metrics.side))
        .height(Length::Fixed(metrics.side))
        .style(move |_theme| container::Style {
            border: Border {
                color: SLOT_BORDER,
                width: metrics.border_width,
                radius: metrics.radius.into(),
            },
            ..container::Style::default()
        })
        .into()
}
