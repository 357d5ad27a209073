pub mod csv;

use crate::dynamics::state::StepRecord;

/// Consumer of per-step emission records. The simulation loop hands every
/// record (initial state included) to exactly one reporter; reporter
/// behavior cannot affect simulation state.
pub trait Reporter {
    fn record(&mut self, rec: &StepRecord);
}

/// Collecting reporter: the whole trajectory in memory.
impl Reporter for Vec<StepRecord> {
    fn record(&mut self, rec: &StepRecord) {
        self.push(*rec);
    }
}
