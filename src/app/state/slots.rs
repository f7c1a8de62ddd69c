//! Per-slot load state.
//!
//! A slot is composed when it enters the render window and dropped when it
//! leaves. Each composition gets a fresh generation and starts in `Loading`;
//! the first completion for that generation moves it to `Settled`, which is
//! terminal until the slot is composed again. A slot's in-flight fetch is
//! aborted when the slot is dropped.

use crate::loader::SlotImage;
use iced::task;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Settled,
}

#[derive(Debug)]
pub struct SlotState {
    generation: u64,
    phase: LoadPhase,
    image: Option<SlotImage>,
    /// Abort-on-drop handle of the running fetch.
    fetch: Option<task::Handle>,
}

impl SlotState {
    pub(in crate::app) fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub(in crate::app) fn image(&self) -> Option<&SlotImage> {
        self.image.as_ref()
    }

    pub(in crate::app) fn generation(&self) -> u64 {
        self.generation
    }

    pub(in crate::app) fn is_fetching(&self) -> bool {
        self.fetch.is_some()
    }
}

/// A slot that was just composed and needs its image fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composed {
    pub slot: usize,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct SlotTable {
    composed: BTreeMap<usize, SlotState>,
    next_generation: u64,
}

impl SlotTable {
    /// Keep exactly the slots in `window` composed. Returns the slots that
    /// were newly composed, in ascending order.
    pub(in crate::app) fn compose(&mut self, window: Option<RangeInclusive<usize>>) -> Vec<Composed> {
        let Some(window) = window else {
            self.composed.clear();
            return Vec::new();
        };

        let before = self.composed.len();
        self.composed.retain(|slot, _| window.contains(slot));
        let dropped = before - self.composed.len();
        if dropped > 0 {
            tracing::trace!(dropped, "Released slots outside the render window");
        }

        let mut fresh = Vec::new();
        for slot in window {
            if self.composed.contains_key(&slot) {
                continue;
            }
            self.next_generation = self.next_generation.wrapping_add(1);
            let generation = self.next_generation;
            self.composed.insert(
                slot,
                SlotState {
                    generation,
                    phase: LoadPhase::Loading,
                    image: None,
                    fetch: None,
                },
            );
            fresh.push(Composed { slot, generation });
        }
        fresh
    }

    /// Apply a fetch completion. Returns false when it no longer applies.
    pub(in crate::app) fn settle(
        &mut self,
        slot: usize,
        generation: u64,
        image: Option<SlotImage>,
    ) -> bool {
        match self.composed.get_mut(&slot) {
            Some(state) if state.generation == generation && state.phase == LoadPhase::Loading => {
                state.phase = LoadPhase::Settled;
                state.image = image;
                state.fetch = None;
                true
            }
            _ => false,
        }
    }

    /// Tie a running fetch to the composition it was issued for. Returns
    /// false, aborting the fetch, when that composition is gone.
    pub(in crate::app) fn attach_fetch(
        &mut self,
        slot: usize,
        generation: u64,
        handle: task::Handle,
    ) -> bool {
        let handle = handle.abort_on_drop();
        match self.composed.get_mut(&slot) {
            Some(state) if state.generation == generation && state.phase == LoadPhase::Loading => {
                state.fetch = Some(handle);
                true
            }
            _ => false,
        }
    }

    pub(in crate::app) fn get(&self, slot: usize) -> Option<&SlotState> {
        self.composed.get(&slot)
    }

    pub(in crate::app) fn any_loading(&self) -> bool {
        self.composed
            .values()
            .any(|state| state.phase == LoadPhase::Loading)
    }
}
