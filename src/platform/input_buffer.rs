//=========================================================================
// Input Buffer
//
// Collects the key events received from Winit between two frames.
// Acts as a transient event aggregator between the Platform and the
// InputSystem.
//
// Responsibilities:
// - Store incoming key events in arrival order
// - Drop consecutive duplicates (e.g. a KeyDown reported twice)
// - Hand the whole frame over via `drain()`
//
// Notes:
// The buffer is drained once per frame, right before the engine tick,
// and keeps its allocation for the next frame.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for a typical frame to avoid reallocations.
    //
    pub fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Appends an event. Duplicate consecutive events are ignored to
    // prevent flooding.
    //
    pub fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns the frame's events in order and empties the buffer.
    //
    pub fn drain(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }

    //--- Utilities --------------------------------------------------------
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
