// libsl500-rs/libsl500/src/transport/serial.rs
//! Serial port transport using the serialport crate

use std::io::{Read, Write};
use std::time::Duration;

use crate::constants::DEFAULT_BAUD_RATE;
use crate::transport::traits::Transport;
use crate::utils::ms;
use crate::{Error, Result};

/// Reader attached to a (USB-)serial port, 8N1.
pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
    timeout: Duration,
}

impl SerialTransport {
    /// Open `port_name` at the reader's factory default speed.
    pub fn open(port_name: &str) -> Result<Self> {
        Self::open_with_baud(port_name, DEFAULT_BAUD_RATE)
    }

    pub fn open_with_baud(port_name: &str, baud_rate: u32) -> Result<Self> {
        let timeout = crate::utils::default_read_timeout();
        let port = serialport::new(port_name, baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .timeout(timeout)
            .open()?;
        // the reader needs a moment after the port opens before it answers
        std::thread::sleep(ms(1));
        port.clear(serialport::ClearBuffer::Input)?;
        log::debug!("opened {} at {} baud", port_name, baud_rate);

        Ok(Self { port, timeout })
    }

    fn set_timeout_ms(&mut self, timeout_ms: u64) -> Result<()> {
        let wanted = ms(timeout_ms);
        if wanted != self.timeout {
            self.port.set_timeout(wanted)?;
            self.timeout = wanted;
        }
        Ok(())
    }
}

fn map_read_error(e: std::io::Error) -> Error {
    match e.kind() {
        std::io::ErrorKind::TimedOut | std::io::ErrorKind::UnexpectedEof => Error::ReadTimeout,
        _ => Error::Io(e),
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn receive_byte(&mut self, timeout_ms: u64) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.receive_exact(&mut buf, timeout_ms)?;
        Ok(buf[0])
    }

    fn bytes_available(&mut self) -> Result<usize> {
        Ok(self.port.bytes_to_read()? as usize)
    }

    fn receive_exact(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<()> {
        self.set_timeout_ms(timeout_ms)?;
        self.port.read_exact(buf).map_err(map_read_error)
    }

    fn reset(&mut self) -> Result<()> {
        self.port.clear(serialport::ClearBuffer::Input)?;
        Ok(())
    }

    fn set_baud_rate(&mut self, bits_per_second: u32) -> Result<()> {
        self.port.set_baud_rate(bits_per_second)?;
        Ok(())
    }
}
