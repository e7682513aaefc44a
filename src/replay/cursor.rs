//! Replay cursor: the number of moves applied so far.

/// Position in a move log of fixed length, always in `0..=len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayCursor {
    step: usize,
    len: usize,
}

impl ReplayCursor {
    /// A cursor at step 0 over a log of `len` moves.
    pub fn new(len: usize) -> Self {
        ReplayCursor { step: 0, len }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn at_end(&self) -> bool {
        self.step == self.len
    }

    pub fn step_forward(&mut self) -> usize {
        self.step = (self.step + 1).min(self.len);
        self.step
    }

    pub fn step_backward(&mut self) -> usize {
        self.step = self.step.saturating_sub(1);
        self.step
    }

    /// Moves to `step`. Returns false and leaves the cursor alone if `step > len`.
    pub fn seek(&mut self, step: usize) -> bool {
        if step > self.len {
            return false;
        }
        self.step = step;
        true
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }
}
