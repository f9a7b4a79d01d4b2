//! Recording build context and element type for delegate tests.
//!
//! [`Probe`] stands in for the host's build context and records every
//! producer call it sees; [`ProbeElement`] is the element the producers
//! return. Together they let a test assert exactly which producer ran, with
//! which logical index, in which order.

use interlace_foundation::SeparatedBuilderDelegate;

/// What a probed producer call built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeElement {
    /// The item producer ran with this logical item index.
    Item(usize),
    /// The separator producer ran with this logical separator index.
    Separator(usize),
}

/// A build context that records every producer call.
#[derive(Debug, Default)]
pub struct Probe {
    calls: Vec<ProbeElement>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an item build and returns the element for it.
    pub fn record_item(&mut self, index: usize) -> ProbeElement {
        let element = ProbeElement::Item(index);
        self.calls.push(element);
        element
    }

    /// Records a separator build and returns the element for it.
    pub fn record_separator(&mut self, index: usize) -> ProbeElement {
        let element = ProbeElement::Separator(index);
        self.calls.push(element);
        element
    }

    /// Every producer call recorded so far, in call order.
    pub fn calls(&self) -> &[ProbeElement] {
        &self.calls
    }

    /// Forgets recorded calls without resetting anything else.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

/// A separated delegate whose producers report into a [`Probe`] context.
///
/// The returned delegate is otherwise unconfigured; chain `with_*` setters
/// on it as the test requires.
pub fn probed_delegate(item_count: usize) -> SeparatedBuilderDelegate<Probe, ProbeElement> {
    SeparatedBuilderDelegate::new(
        item_count,
        |probe: &mut Probe, index| probe.record_item(index),
        |probe: &mut Probe, index| probe.record_separator(index),
    )
}
