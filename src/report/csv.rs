use crate::train::TrainingRun;

/// Serializes the per-epoch traces as CSV: `epoch,total_error,o1,o2`.
///
/// Epochs are 1-based and dense; values are written at full precision.
pub fn traces_to_csv(run: &TrainingRun) -> String {
    let mut out = String::from("epoch,total_error,o1,o2\n");
    let rows = run.error_trace.iter()
        .zip(run.o1_trace.iter())
        .zip(run.o2_trace.iter());
    for (i, ((e, o1), o2)) in rows.enumerate() {
        out.push_str(&format!("{},{},{},{}\n", i + 1, e, o1, o2));
    }
    out
}
