use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, stack, text, Column};
use iced::{Alignment, ContentFit, Element, Length, Subscription, Task, Theme};

// Declare the application modules
mod config;
mod net;
mod state;
mod ui;

use net::FetchError;
use state::{Generation, LoadState};
use ui::spinner::SPINNER_SPEED;

/// Main application state
struct ImageLoader {
    /// The load-attempt state machine
    state: LoadState,
    /// Handle currently shown in the image area
    displayed: Handle,
    /// Decoded bundled default image
    fallback: Handle,
    /// Spinner rotation angle in radians
    spinner_rotation: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Toggle Image URL" button
    ToggleImageUrl,
    /// The fetch dispatched for a load attempt completed
    ImageFetched {
        generation: Generation,
        result: Result<Handle, FetchError>,
    },
    /// The delayed spinner hold for a load attempt elapsed
    SpinnerReleased(Generation),
    /// Advance the spinner animation one frame
    SpinnerTick,
}

impl ImageLoader {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // Decode the bundled default image
        // If this fails, we panic because the build shipped without its asset
        let fallback = net::fetch::decode_fallback(config::FALLBACK_IMAGE_BYTES)
            .expect("Failed to decode the bundled default image.");

        // The first load attempt is already underway at mount
        let state = LoadState::new();

        log::info!("starting initial load of {}", state.image_uri());

        let fetch = Task::perform(
            fetch_attempt(state.generation(), state.image_uri().to_owned()),
            |(generation, result)| Message::ImageFetched { generation, result },
        );

        (
            ImageLoader {
                state,
                displayed: fallback.clone(),
                fallback,
                spinner_rotation: 0.0,
            },
            fetch,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleImageUrl => {
                let generation = self.state.start_attempt(config::TOGGLED_IMAGE_URL);

                log::info!("toggled image source to {}", self.state.image_uri());

                Task::perform(
                    fetch_attempt(generation, self.state.image_uri().to_owned()),
                    |(generation, result)| Message::ImageFetched { generation, result },
                )
            }
            Message::ImageFetched { generation, result } => {
                // A newer attempt may have started while this fetch was in
                // flight; its result no longer matters
                if !self.state.is_current(generation) {
                    log::debug!("dropping result of superseded load attempt {generation}");
                    return Task::none();
                }

                let generation = match result {
                    Ok(handle) => {
                        self.displayed = handle;
                        self.state.finish_attempt()
                    }
                    Err(err) => {
                        log::warn!("image load failed: {err}");
                        self.displayed = self.fallback.clone();
                        self.state.fail_attempt()
                    }
                };

                // The spinner is dismissed later, as a separate event
                Task::perform(state::load::spinner_hold(generation), Message::SpinnerReleased)
            }
            Message::SpinnerReleased(generation) => {
                if self.state.dismiss_spinner(generation) {
                    self.spinner_rotation = 0.0;
                    if self.state.error() {
                        log::info!("load attempt {generation} failed, showing default image");
                    } else {
                        log::info!("load attempt {generation} finished");
                    }
                }
                Task::none()
            }
            Message::SpinnerTick => {
                self.spinner_rotation =
                    (self.spinner_rotation + SPINNER_SPEED) % std::f32::consts::TAU;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let picture = image(self.displayed.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover);

        // Spinner overlay covers the image area while a load is outstanding
        let mut image_area = stack![picture]
            .width(Length::Fill)
            .height(Length::Fill);
        if self.state.is_loading() {
            image_area = image_area.push(
                container(ui::Spinner::new(self.spinner_rotation).into_element())
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .style(|_theme| container::Style {
                        background: Some(iced::Color::WHITE.into()),
                        ..container::Style::default()
                    }),
            );
        }

        let content: Column<'_, Message> = column![
            container(image_area)
                .width(Length::Fixed(config::IMAGE_AREA_WIDTH))
                .height(Length::Fixed(config::IMAGE_AREA_HEIGHT)),
            text(self.state.status_text()).size(16),
            button("Toggle Image URL")
                .on_press(Message::ToggleImageUrl)
                .padding(10),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Animate the spinner while a load is outstanding
    fn subscription(&self) -> Subscription<Message> {
        if self.state.is_loading() {
            iced::time::every(config::SPINNER_FRAME_INTERVAL).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("Image Loader", ImageLoader::update, ImageLoader::view)
        .subscription(ImageLoader::subscription)
        .theme(ImageLoader::theme)
        .window_size(iced::Size::new(config::WINDOW_WIDTH, config::WINDOW_HEIGHT))
        .centered()
        .run_with(ImageLoader::new)
}

/// Fetch the image for one load attempt.
///
/// The result is tagged with the attempt's generation so that a
/// completion arriving after a newer attempt has started can be
/// recognized and dropped.
async fn fetch_attempt(
    generation: Generation,
    uri: String,
) -> (Generation, Result<Handle, FetchError>) {
    (generation, net::fetch_image(&uri).await)
}
