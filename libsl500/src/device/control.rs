// libsl500-rs/libsl500/src/device/control.rs
//! One-shot reader commands. None of them touches card session state.

use log::info;

use crate::constants::DEFAULT_BEEP_DURATION;
use crate::device::handle::Reader;
use crate::protocol::Command;
use crate::types::{BaudRate, CardType, DeviceId, LedColor};
use crate::Result;

impl Reader {
    /// Check that the reader answers.
    pub fn ping(&mut self) -> Result<()> {
        self.execute_status(&Command::Ping)
    }

    /// Read the reader's model string.
    pub fn get_model(&mut self) -> Result<String> {
        let reply = self.execute_checked(&Command::GetModel)?;
        let text = String::from_utf8_lossy(&reply.data);
        Ok(text.trim_end_matches('\0').to_string())
    }

    pub fn beep(&mut self) -> Result<()> {
        self.beep_for(DEFAULT_BEEP_DURATION)
    }

    pub fn beep_for(&mut self, duration: u8) -> Result<()> {
        self.execute_status(&Command::Beep { duration })
    }

    pub fn light(&mut self, color: LedColor) -> Result<()> {
        self.execute_status(&Command::Light { color })
    }

    /// Configure the RF front end for ISO14443 type A (MIFARE) cards.
    pub fn init_type(&mut self) -> Result<()> {
        self.init_type_with(CardType::TypeA)
    }

    pub fn init_type_with(&mut self, card_type: CardType) -> Result<()> {
        self.execute_status(&Command::InitType { card_type })
    }

    pub fn antenna_state(&mut self, on: bool) -> Result<()> {
        self.execute_status(&Command::Antenna { on })
    }

    /// Change the reader's line speed. The reader acknowledges at the old
    /// speed, after which the transport is switched over.
    pub fn set_baud_rate(&mut self, baud: BaudRate) -> Result<()> {
        self.execute_status(&Command::InitCom { baud })?;
        self.transport_mut().set_baud_rate(baud.bits_per_second())?;
        info!("line speed changed to {} baud", baud.bits_per_second());
        Ok(())
    }

    /// Store a new device id in the reader. Frames keep using the configured
    /// `device_id` until the caller updates it.
    pub fn set_device_id(&mut self, id: DeviceId) -> Result<()> {
        self.execute_status(&Command::SetDeviceId { id })?;
        info!("reader device id set to {:#06x}", id.as_u16());
        Ok(())
    }
}
