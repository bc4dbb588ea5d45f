use super::{EventSink, latch};
use crate::hal::{Channel, PinMode, Pins};
use crate::message::{Kind, Message};

/// Samples an ADC channel every iteration and reports any change in the raw reading.
pub struct AnalogRead {
    id: i32,
    channel: Channel,
    value: u16,
}

impl AnalogRead {
    pub const fn new(id: i32, channel: Channel) -> Self {
        Self {
            id,
            channel,
            value: 0,
        }
    }

    pub fn setup(&self, pins: &mut impl Pins) {
        pins.configure(self.channel, PinMode::Input);
    }

    /// Posts `(AnalogRead, id, value)` and returns true when the reading changed.
    pub fn execute(&mut self, pins: &mut impl Pins, mq: &mut impl EventSink) -> bool {
        let sample = pins.read_analog(self.channel);
        if !latch(&mut self.value, sample) {
            return false;
        }
        mq.emit(Message::new(Kind::AnalogRead, self.id, u32::from(sample)));
        true
    }

    #[inline]
    pub const fn id(&self) -> i32 {
        self.id
    }

    #[inline]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    #[inline]
    pub const fn value(&self) -> u16 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::AnalogRead;
    use crate::message::{Kind, Message};
    use crate::queue::MessageQueue;
    use crate::testing::FakePins;

    #[test]
    fn reports_each_distinct_reading() {
        let mut pins = FakePins::default();
        let mut q = MessageQueue::<8>::new();
        let mut adc = AnalogRead::new(9, 4);

        assert!(!adc.execute(&mut pins, &mut q));
        for reading in [512, 512, 513, 513, 0] {
            pins.analog[4] = reading;
            adc.execute(&mut pins, &mut q);
        }

        assert_eq!(q.len(), 3);
        assert_eq!(q.get_message(), Message::new(Kind::AnalogRead, 9, 512));
        assert_eq!(q.get_message(), Message::new(Kind::AnalogRead, 9, 513));
        assert_eq!(q.get_message(), Message::new(Kind::AnalogRead, 9, 0));
        assert_eq!(adc.value(), 0);
    }
}
