//=========================================================================
// Input Collector
//=========================================================================
//
// Receives host input events and hands them to the active action's
// handler once per tick.
//
// Architecture:
//   Sender<InputEvent> (host) → Receiver → collect_frame() → pending
//                                                  ↓
//                       subscribed? → dispatch to handler : drop
//
// Bounded polling prevents a flooded channel from starving a frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::event::InputEvent;
use crate::core::interface::TickControl;

//=== InputCollector ======================================================

/// Drains the input channel and tracks handler subscription.
pub struct InputCollector {
    receiver: Receiver<InputEvent>,
    pending: Vec<InputEvent>,
    subscribed: bool,
}

impl InputCollector {
    /// Upper bound of events drained in a single tick.
    pub const MAX_EVENTS_PER_FRAME: usize = 100;

    pub fn new(receiver: Receiver<InputEvent>) -> Self {
        Self {
            receiver,
            pending: Vec::with_capacity(16),
            subscribed: false,
        }
    }

    //--- Subscription -----------------------------------------------------

    /// Routes subsequent events to the active handler.
    pub fn subscribe(&mut self) {
        trace!(target: "stage::input", "Handler subscribed");
        self.subscribed = true;
    }

    /// Stops routing events; undelivered events are dropped.
    pub fn unsubscribe(&mut self) {
        trace!(target: "stage::input", "Handler unsubscribed");
        self.subscribed = false;
        self.pending.clear();
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    //--- Frame Collection -------------------------------------------------

    /// Pulls pending events from the channel.
    ///
    /// Returns `Exit` once the host has dropped every sender and nothing
    /// is left to deliver.
    pub fn collect_frame(&mut self) -> TickControl {
        self.pending.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.subscribed {
                        self.pending.push(event);
                    }
                    drained += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!(
                target: "stage::input",
                "Input backlog: drained {} events this frame",
                drained
            );
        }

        TickControl::Continue
    }

    /// Takes the events collected for this frame, leaving none behind.
    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn empty_channel_continues_with_no_events() {
        let (_tx, rx) = unbounded();
        let mut collector = InputCollector::new(rx);
        collector.subscribe();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.take_events().is_empty());
    }

    #[test]
    fn subscribed_collector_keeps_events_in_order() {
        let (tx, rx) = unbounded();
        let mut collector = InputCollector::new(rx);
        collector.subscribe();

        tx.send(InputEvent::key_down(34)).unwrap();
        tx.send(InputEvent::key_up(34)).unwrap();

        collector.collect_frame();
        assert_eq!(
            collector.take_events(),
            vec![InputEvent::key_down(34), InputEvent::key_up(34)]
        );
    }

    #[test]
    fn unsubscribed_collector_drops_events() {
        let (tx, rx) = unbounded();
        let mut collector = InputCollector::new(rx);

        tx.send(InputEvent::key_up(34)).unwrap();
        collector.collect_frame();

        assert!(collector.take_events().is_empty());

        // Dropped events do not resurface after subscribing
        collector.subscribe();
        collector.collect_frame();
        assert!(collector.take_events().is_empty());
    }

    #[test]
    fn drain_is_bounded_per_frame() {
        let (tx, rx) = unbounded();
        let mut collector = InputCollector::new(rx);
        collector.subscribe();

        for _ in 0..(InputCollector::MAX_EVENTS_PER_FRAME + 5) {
            tx.send(InputEvent::key_down(32)).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.take_events().len(), InputCollector::MAX_EVENTS_PER_FRAME);

        collector.collect_frame();
        assert_eq!(collector.take_events().len(), 5);
    }

    #[test]
    fn disconnected_channel_requests_exit() {
        let (tx, rx) = unbounded::<InputEvent>();
        let mut collector = InputCollector::new(rx);
        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }
}
