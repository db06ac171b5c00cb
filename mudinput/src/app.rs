use std::time::Duration;

use log::info;
use mudinput_lib::{
    event::Platform,
    poller::{InputPoller, PollOutcome},
    worldlist::{worldlist_handle_mouse, worldlist_new},
};

use crate::client::LoggingClient;

#[derive(Debug)]
pub struct App<P> {
    platform: P,
    poller: InputPoller,
    client: LoggingClient,
}

impl<P> App<P> {
    /// Client frame time, 50 frames per second.
    const FRAME_TIME: Duration = Duration::from_millis(20);

    pub fn new(platform: P, client: LoggingClient) -> Self {
        Self {
            platform,
            poller: InputPoller::new(),
            client,
        }
    }

    pub fn client(&self) -> &LoggingClient {
        &self.client
    }

    pub fn poller(&self) -> &InputPoller {
        &self.poller
    }
}

impl<P> App<P>
where
    P: Platform,
{
    /// Runs one frame of input. Returns `false` once the platform asked to quit.
    pub fn frame(&mut self) -> bool {
        let display_fps = self.client.options.display_fps;
        let outcome = self.poller.poll(&mut self.platform, &mut self.client);

        if self.client.options.display_fps != display_fps {
            info!("FPS display: {}", self.client.options.display_fps);
        }
        match self.client.take_scroll_delta() {
            0 => {}
            delta => info!("Scroll {delta}"),
        }

        outcome == PollOutcome::Continue
    }

    pub async fn run_event_loop(&mut self) -> anyhow::Result<()> {
        worldlist_new(&mut self.client);
        info!(
            "Logging in to {}:{}",
            self.client.server.server, self.client.server.port
        );

        let mut interval = tokio::time::interval(Self::FRAME_TIME);
        'main_loop: loop {
            interval.tick().await;
            worldlist_handle_mouse(&mut self.client);
            if !self.frame() {
                break 'main_loop;
            }
        }

        info!("Typed: {:?}", self.poller.keyboard().as_str());
        Ok(())
    }
}
