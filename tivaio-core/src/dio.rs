//! Dio driver
//!
//! Reads and writes configured channels, whole ports and channel groups.
//! A [`Dio`] is a cheap view borrowed from an initialized [`PortDriver`];
//! every service validates its arguments and the driver state first and
//! degrades to a no-op (writes) or `Low`/`0` (reads) on failure.
//!
//! Single-channel access goes through the bit-aliased data view, so writing
//! one channel never disturbs the other pins of its port. Group writes are
//! a read-modify-write of the full data register and must not race with
//! other writers of the same port.

use core::convert::Infallible;

#[cfg(feature = "version-info-api")]
use tivaio_hal::diag::ModuleId;
use tivaio_hal::diag::{DiagnosticSink, ErrorKind, ServiceId};
use tivaio_hal::registers::{GpioBank, PortRegisters, Register, PORT_MASK};
use tivaio_hal::{InputPin, Level, OutputPin};

use crate::config::{ChannelGroup, PinConfig, PinIndex, PortIndex, PortLevel};
use crate::det::Guard;
use crate::port::PortDriver;
#[cfg(feature = "version-info-api")]
use crate::version::VersionInfo;

/// Channel access view of a [`PortDriver`]
pub struct Dio<'d, 'a, B: GpioBank, S: DiagnosticSink> {
    port: &'d PortDriver<'a, B, S>,
}

impl<B: GpioBank, S: DiagnosticSink> Clone for Dio<'_, '_, B, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: GpioBank, S: DiagnosticSink> Copy for Dio<'_, '_, B, S> {}

impl<'d, 'a, B: GpioBank, S: DiagnosticSink> Dio<'d, 'a, B, S> {
    pub(crate) fn new(port: &'d PortDriver<'a, B, S>) -> Self {
        Self { port }
    }

    fn guard(&self, service: ServiceId) -> Guard<'d, S> {
        let driver: &'d PortDriver<'a, B, S> = self.port;
        Guard::new(driver.sink(), service)
    }

    /// Resolve a channel id to its configuration and register block
    fn channel_regs(
        &self,
        guard: &mut Guard<'_, S>,
        channel: PinIndex,
    ) -> Option<(&'a PinConfig, &'d B::Port)> {
        let record = self.port.checked_pin(guard, channel);
        if !guard.passed() {
            return None;
        }
        let port: &'d PortDriver<'a, B, S> = self.port;
        record.and_then(|r| port.writable(r))
    }

    /// Resolve a port index to its register block
    fn port_regs(&self, guard: &mut Guard<'_, S>, port: PortIndex) -> Option<&'d B::Port> {
        guard.require(self.port.state().is_initialized(), ErrorKind::Uninitialized);
        guard.require(port < B::PORT_COUNT, ErrorKind::InvalidPort);
        if !guard.passed() {
            return None;
        }
        let driver: &'d PortDriver<'a, B, S> = self.port;
        driver.bank().port(port)
    }

    /// Resolve a channel group to its register block
    fn group_regs(
        &self,
        guard: &mut Guard<'_, S>,
        group: Option<&ChannelGroup>,
    ) -> Option<(ChannelGroup, &'d B::Port)> {
        guard.require(self.port.state().is_initialized(), ErrorKind::Uninitialized);
        guard.require(group.is_some(), ErrorKind::InvalidPointer);
        if let Some(group) = group {
            guard.require(group.port < B::PORT_COUNT, ErrorKind::InvalidPort);
            guard.require_with(|| group.check().is_ok(), ErrorKind::InvalidGroup);
        }
        if !guard.passed() {
            return None;
        }
        let group = *group?;
        // Without checks an invalid group is still never applied
        group.check().ok()?;
        let driver: &'d PortDriver<'a, B, S> = self.port;
        driver.bank().port(group.port).map(|regs| (group, regs))
    }

    /// Read the level of a configured channel
    pub fn read_channel(&self, channel: PinIndex) -> Level {
        let mut guard = self.guard(ServiceId::DioReadChannel);
        match self.channel_regs(&mut guard, channel) {
            Some((record, regs)) => Level::from(regs.read_masked(record.mask()) != 0),
            None => Level::Low,
        }
    }

    /// Drive a configured channel
    ///
    /// Writing an input channel only updates the output latch.
    pub fn write_channel(&self, channel: PinIndex, level: Level) {
        let mut guard = self.guard(ServiceId::DioWriteChannel);
        if let Some((record, regs)) = self.channel_regs(&mut guard, channel) {
            let value = if level.is_high() { record.mask() } else { 0 };
            regs.write_masked(record.mask(), value);
        }
    }

    /// Read all eight data bits of a port
    pub fn read_port(&self, port: PortIndex) -> PortLevel {
        let mut guard = self.guard(ServiceId::DioReadPort);
        self.port_regs(&mut guard, port)
            .map_or(0, |regs| (regs.read(Register::Data) & PORT_MASK) as PortLevel)
    }

    /// Write all eight data bits of a port
    pub fn write_port(&self, port: PortIndex, level: PortLevel) {
        let mut guard = self.guard(ServiceId::DioWritePort);
        if let Some(regs) = self.port_regs(&mut guard, port) {
            regs.write(Register::Data, u32::from(level));
        }
    }

    /// Read a channel group, right-aligned
    pub fn read_channel_group(&self, group: Option<&ChannelGroup>) -> PortLevel {
        let mut guard = self.guard(ServiceId::DioReadChannelGroup);
        self.group_regs(&mut guard, group).map_or(0, |(group, regs)| {
            let data = regs.read(Register::Data) & PORT_MASK;
            ((data >> group.offset) & u32::from(group.mask)) as PortLevel
        })
    }

    /// Write a channel group
    ///
    /// Bits of `level` outside the group mask are ignored; bits of the port
    /// outside the group keep their value.
    pub fn write_channel_group(&self, group: Option<&ChannelGroup>, level: PortLevel) {
        let mut guard = self.guard(ServiceId::DioWriteChannelGroup);
        if let Some((group, regs)) = self.group_regs(&mut guard, group) {
            let mask = u32::from(group.port_mask());
            let bits = (u32::from(level) << group.offset) & mask;
            regs.modify(Register::Data, |v| (v & !mask) | bits);
        }
    }

    /// Invert a configured channel and return its new level
    #[cfg(feature = "flip-channel-api")]
    pub fn flip_channel(&self, channel: PinIndex) -> Level {
        let mut guard = self.guard(ServiceId::DioFlipChannel);
        match self.channel_regs(&mut guard, channel) {
            Some((record, regs)) => {
                let mask = record.mask();
                let current = regs.read_masked(mask);
                regs.write_masked(mask, !current);
                Level::from(regs.read_masked(mask) != 0)
            }
            None => Level::Low,
        }
    }

    /// Get the Dio module version
    #[cfg(feature = "version-info-api")]
    pub fn version_info(&self) -> VersionInfo {
        VersionInfo::new(ModuleId::Dio)
    }

    /// Get a pin handle bound to one channel
    pub fn channel(&self, channel: PinIndex) -> Channel<'d, 'a, B, S> {
        Channel { dio: *self, channel }
    }
}

/// Pin handle for one configured channel
///
/// Every access goes through the validated [`Dio`] services, so an invalid
/// channel id behaves like an unconnected pin and is reported on use.
pub struct Channel<'d, 'a, B: GpioBank, S: DiagnosticSink> {
    dio: Dio<'d, 'a, B, S>,
    channel: PinIndex,
}

impl<B: GpioBank, S: DiagnosticSink> Channel<'_, '_, B, S> {
    /// Channel id of this handle
    pub fn id(&self) -> PinIndex {
        self.channel
    }

    #[cfg(feature = "flip-channel-api")]
    fn invert(&self) {
        self.dio.flip_channel(self.channel);
    }

    #[cfg(not(feature = "flip-channel-api"))]
    fn invert(&self) {
        let level = self.dio.read_channel(self.channel);
        self.dio.write_channel(self.channel, !level);
    }
}

impl<B: GpioBank, S: DiagnosticSink> OutputPin for Channel<'_, '_, B, S> {
    fn set_high(&mut self) {
        self.dio.write_channel(self.channel, Level::High);
    }

    fn set_low(&mut self) {
        self.dio.write_channel(self.channel, Level::Low);
    }

    fn toggle(&mut self) {
        self.invert();
    }

    fn is_set_high(&self) -> bool {
        self.dio.read_channel(self.channel).is_high()
    }
}

impl<B: GpioBank, S: DiagnosticSink> InputPin for Channel<'_, '_, B, S> {
    fn is_high(&self) -> bool {
        self.dio.read_channel(self.channel).is_high()
    }
}

impl<B: GpioBank, S: DiagnosticSink> embedded_hal::digital::ErrorType for Channel<'_, '_, B, S> {
    type Error = Infallible;
}

impl<B: GpioBank, S: DiagnosticSink> embedded_hal::digital::OutputPin
    for Channel<'_, '_, B, S>
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.dio.write_channel(self.channel, Level::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.dio.write_channel(self.channel, Level::High);
        Ok(())
    }
}

impl<B: GpioBank, S: DiagnosticSink> embedded_hal::digital::StatefulOutputPin
    for Channel<'_, '_, B, S>
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.dio.read_channel(self.channel).is_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.dio.read_channel(self.channel).is_low())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.invert();
        Ok(())
    }
}

impl<B: GpioBank, S: DiagnosticSink> embedded_hal::digital::InputPin for Channel<'_, '_, B, S> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.dio.read_channel(self.channel).is_high())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.dio.read_channel(self.channel).is_low())
    }
}
