//! The reporting side of the host channel.
//!
//! A [`HostChannel`] carries the control's value and rendered height back to
//! the embedding host. Configuration flows the other way, as the argument of
//! the controller's render-pass handlers.

use crate::error::ChannelError;

/// Messages the control sends to its host.
///
/// Implementations should not block. The controller calls them after its
/// state lock is released, so an implementation may call back into the
/// controller; output from such a call is sent once the current report
/// returns. A returned error is logged and otherwise ignored.
pub trait HostChannel: Send {
    /// Publish the control's current value (the click count).
    fn report_value(&mut self, value: u64) -> Result<(), ChannelError>;

    /// Tell the host how tall the rendered control is, in pixels.
    fn report_frame_height(&mut self, height: f32) -> Result<(), ChannelError>;
}

/// A channel with no host behind it.
///
/// Every report fails with [`ChannelError::Disconnected`], which leaves the
/// control fully interactive but silent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disconnected;

impl HostChannel for Disconnected {
    fn report_value(&mut self, _value: u64) -> Result<(), ChannelError> {
        Err(ChannelError::Disconnected)
    }

    fn report_frame_height(&mut self, _height: f32) -> Result<(), ChannelError> {
        Err(ChannelError::Disconnected)
    }
}

impl<C: HostChannel + ?Sized> HostChannel for Box<C> {
    fn report_value(&mut self, value: u64) -> Result<(), ChannelError> {
        (**self).report_value(value)
    }

    fn report_frame_height(&mut self, height: f32) -> Result<(), ChannelError> {
        (**self).report_frame_height(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disconnected_reports_fail() {
        let mut channel = Disconnected;
        assert_eq!(channel.report_value(1), Err(ChannelError::Disconnected));
        assert_eq!(
            channel.report_frame_height(40.0),
            Err(ChannelError::Disconnected)
        );
    }

    #[test]
    fn boxed_channels_forward() {
        let mut channel: Box<dyn HostChannel> = Box::new(Disconnected);
        assert!(channel.report_value(3).is_err());
    }
}
