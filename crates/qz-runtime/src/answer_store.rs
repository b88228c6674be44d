use qz_core::{AnswerValue, SlotIndex};

/// One slot per question, in question creation order. `None` is the unset
/// sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    slots: Vec<Option<AnswerValue>>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reserve_slot(&mut self) -> SlotIndex {
        self.slots.push(None);
        self.slots.len() - 1
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Out-of-range and unset slots both read as `None`.
    pub fn get(&self, slot: SlotIndex) -> Option<&AnswerValue> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn is_set(&self, slot: SlotIndex) -> bool {
        self.get(slot).is_some()
    }

    /// Overwrites the slot. Returns false when the slot was never reserved.
    pub fn record(&mut self, slot: SlotIndex, value: AnswerValue) -> bool {
        match self.slots.get_mut(slot) {
            Some(entry) => {
                *entry = Some(value);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    pub fn slots(&self) -> &[Option<AnswerValue>] {
        &self.slots
    }
}
