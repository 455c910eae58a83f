// pn533-phy/pn533phy/src/transport/traits.rs

//! The `Bus` trait.

use crate::Result;

/// Bus abstracts the physical serial link (I2C client, SPI device) away
/// from framing and interrupt handling.
///
/// Both calls block for one bounded bus transaction. Implementations report
/// a chip that did not answer (NACK on I2C, no response on SPI) as
/// `Error::RemoteIo`.
pub trait Bus: Send {
    /// Write `data` in one transaction, returning the number of bytes the
    /// bus accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Fill `buf` in one transaction, returning the number of bytes read.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

impl<B: Bus + ?Sized> Bus for Box<B> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }
}
