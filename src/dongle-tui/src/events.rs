//! Background-task events delivered into the render loop.

use dongle_search::CandidateEntry;

/// Messages background tasks send to the picker loop.
///
/// The channel is the only path into render state: the scan and the update
/// check never touch the session directly.
#[derive(Debug)]
pub enum PickerEvent {
    /// The background scan finished; carries the full candidate snapshot.
    ScanComplete(Vec<CandidateEntry>),

    /// A newer release exists; carries its version string.
    UpdateAvailable(String),
}
