use anyhow::Result;
use mudinput::{client::LoggingClient, parse_args, BinaryConfig};
use mudinput_lib::{
    keys::{self, KeySym, Modifiers},
    worldlist::worldlist_new,
};

const HELP_STR: &str = "
Input layer inspector for the RSC client

Usage: cli [OPTIONS] [KEY]...

Arguments:
    KEY\tKey to translate: a character, a name (tab, f2, up...) or an SDL 1.2 key number.

Options:
    -s, --shift\tTranslate with shift held.
    --server HOST\tServer to use instead of the default world.
    --port PORT\tPort to use with --server.
    -h, --help\tPrint this help.
";

fn main() -> Result<()> {
    simple_logger::init_with_env()?;

    let args = parse_args(BinaryConfig {
        help: HELP_STR.trim(),
    });

    let mut client = LoggingClient::new().with_server(args.server, args.port);
    worldlist_new(&mut client);
    println!("Server: {}:{}", client.server.server, client.server.port);
    println!("RSA exponent: {}", client.server.rsa_exponent);
    println!("RSA modulus: {}", client.server.rsa_modulus);

    let modifiers = if args.shift {
        Modifiers::LSHIFT
    } else {
        Modifiers::empty()
    };
    for name in &args.keys {
        let keysym = KeySym::new(keys::parse_key_name(name)?).with_modifiers(modifiers);
        match keys::translate(&keysym) {
            Some(key) => println!("{name}: code {} character {:?}", key.code, key.character),
            None => println!("{name}: ignored"),
        }
    }
    Ok(())
}
