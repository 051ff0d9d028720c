/// On/off switch consulted before any classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchGate {
    active: bool,
}

impl Default for DispatchGate {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DispatchGate {
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns false if the gate was already open.
    pub fn enable(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }

    /// Returns false if the gate was already closed.
    pub fn disable(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }
}
