//! Read the text block of the card on the reader, then overwrite it.
//!
//! cargo run --example read_write --features serial -- /dev/ttyUSB0 "new text"

use anyhow::{Context, bail};
use libsl500::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let port = args.next().context("usage: read_write <port> [text]")?;
    let text = args.next().unwrap_or_else(|| "hello sl500".to_string());

    let transport = SerialTransport::open(&port)
        .with_context(|| format!("failed to open {}", port))?;
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(transport))
        .build()?;

    println!("model: {}", reader.get_model()?);
    reader.init_type()?;
    reader.antenna_state(true)?;

    let mut session = CardSession::new();
    match session.read_text(&mut reader) {
        Ok(old) => println!("current text: {:?}", old),
        Err(e) if e.is_card_not_found() => bail!("no card on the reader"),
        Err(e) => return Err(e.into()),
    }
    if let Some(serial) = session.serial_number() {
        println!("card: {}", serial.to_hex());
    }

    session.write_text(&mut reader, &text)?;
    reader.beep()?;
    println!("wrote {:?}", text);

    session.halt(&mut reader)?;
    Ok(())
}
