pub mod client;

#[cfg(feature = "async")]
pub mod app;

#[cfg(feature = "gui")]
pub mod platform;

#[derive(Debug)]
pub struct BinaryConfig {
    pub help: &'static str,
}

impl BinaryConfig {
    fn bail(&self, exit_code: i32) -> ! {
        if exit_code == 0 {
            println!("{}", self.help);
        } else {
            eprintln!("{}", self.help);
        }
        std::process::exit(exit_code)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub shift: bool,
    pub server: Option<String>,
    pub port: Option<u16>,
    pub keys: Vec<String>,
}

pub fn parse_args(config: BinaryConfig) -> Args {
    match try_parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => config.bail(0),
        Err(e) => {
            eprintln!("error: {e}");
            config.bail(1)
        }
    }
}

/// Parses the arguments after the program name. `Ok(None)` means help was requested.
pub fn try_parse_args<I>(args: I) -> anyhow::Result<Option<Args>>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-s" | "--shift" => parsed.shift = true,
            "--server" => {
                let server = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--server expects a host name"))?;
                parsed.server = Some(server);
            }
            "--port" => {
                let port = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--port expects a number"))?;
                parsed.port = Some(port.parse()?);
            }
            // A lone "-" is the minus key.
            "-" => parsed.keys.push(arg),
            _ if arg.starts_with('-') => anyhow::bail!("unknown option {arg}"),
            _ => parsed.keys.push(arg),
        }
    }

    Ok(Some(parsed))
}
