use log::info;
use mudinput::{app::App, client::LoggingClient, parse_args, platform::SdlPlatform, BinaryConfig};

const HELP_STR: &str = "
RSC client input simulator

Drive the pointer with a game controller: the D-pad moves it, A and B click,
the triggers scroll. F2 toggles the FPS display. Close the window to quit.

Usage: simulator [OPTIONS]

Options:
    --server HOST\tServer to use instead of the default world.
    --port PORT\tPort to use with --server.
    -h, --help\tPrint this help.
";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    simple_logger::init_with_env()?;

    let args = parse_args(BinaryConfig {
        help: HELP_STR.trim(),
    });
    let client = LoggingClient::new().with_server(args.server, args.port);
    let platform =
        SdlPlatform::start_application("mudinput", client.game_width, client.game_height)?;
    let mut app = App::new(platform, client);

    info!("Running mudinput");
    app.run_event_loop().await?;
    info!("Goodbye!");

    Ok(())
}
